/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use approx::assert_relative_eq;
use serde_json::{json, Value};
use uom::si::length::{foot, meter};
use glide_airspace::*;

fn fmt (v: Value)->String { format_raw_limit( Some(&v)) }

#[test]
fn test_reference_renderings() {
    assert_eq!( fmt( json!({"value": 3500, "unit": 1, "reference": 2})), "3500 ft AGL");
    assert_eq!( fmt( json!({"value": 65, "unit": 6})), "FL065");
    assert_eq!( fmt( json!({"value": 0, "reference": 0})), "GND");
}

#[test]
fn test_absent_and_ground() {
    assert_eq!( format_raw_limit(None), "Unknown");
    assert_eq!( format_raw_limit( Some(&Value::Null)), "Unknown");
    assert_eq!( format_limit(None), "Unknown");

    assert_eq!( fmt( json!({"value": "gnd", "unit": 1, "reference": 1})), "GND");
    assert_eq!( fmt( json!({"value": 9500, "unit": 1, "reference": "GND"})), "GND");
}

#[test]
fn test_numeric_units() {
    assert_eq!( fmt( json!({"value": 2499.6, "unit": 2, "reference": 1})), "2500 m");
    assert_eq!( fmt( json!({"value": 1000, "unit": 2, "reference": 2})), "1000 m AGL");
    assert_eq!( fmt( json!({"value": 4500, "unit": 1})), "4500 ft");
    assert_eq!( fmt( json!({"value": 95.4, "unit": 6, "reference": 1})), "FL095");
}

#[test]
fn test_string_unit_fallback() {
    assert_eq!( fmt( json!({"value": 125, "unit": "FL"})), "FL125");
    assert_eq!( fmt( json!({"value": 6000, "unit": "ft", "reference": 2})), "6000 ft"); // no AGL in legacy encoding
    assert_eq!( fmt( json!({"value": 300, "unit": "M"})), "300 m");
}

#[test]
fn test_total_on_garbage() {
    assert_eq!( fmt( json!({"value": 3500, "unit": 99, "reference": 1})), "3500");
    assert_eq!( fmt( json!({"value": "unlimited", "unit": 1})), "unlimited");
    assert_eq!( fmt( json!({"value": 12.5, "unit": "nm"})), "12.5");
    assert_eq!( fmt( json!({"unit": 1})), "Unknown");
    assert_eq!( fmt( json!("FL 100")), "FL 100");
    assert_eq!( fmt( json!([1,2])), "[1,2]");
}

#[test]
fn test_typed_deserialization() {
    let input = r#"{
        "name": "CTR Bern",
        "lowerLimit": { "value": 0, "unit": 1, "reference": 0 },
        "upperLimit": { "value": 65, "unit": 6, "reference": 2 }
    }"#;
    let airspace: Airspace = serde_json::from_str(input).unwrap();
    println!("{airspace:?}");

    assert_eq!( airspace.lower_limit, Some(AltitudeLimit::Ground));
    assert_eq!( airspace.upper_limit, Some(AltitudeLimit::FlightLevel(65.0)));
    assert_eq!( airspace.vertical_extent(), "GND - FL065");

    let partial: Airspace = serde_json::from_str(r#"{ "name": "TMA", "upperLimit": null }"#).unwrap();
    assert_eq!( partial.vertical_extent(), "Unknown - Unknown");

    // non-record limits degrade instead of failing the whole airspace
    let loose: Airspace = serde_json::from_str(r#"{ "name": "X", "lowerLimit": "GND", "upperLimit": 0 }"#).unwrap();
    assert_eq!( loose.lower_limit, Some(AltitudeLimit::Ground));
    assert_eq!( loose.upper_limit, Some(AltitudeLimit::Unparsed("0".to_string())));
    assert_eq!( loose.vertical_extent(), "GND - 0");

    let odd: Airspace = serde_json::from_str(r#"{ "name": "Y", "lowerLimit": [1,2], "upperLimit": { "value": 1e3, "unit": "m" } }"#).unwrap();
    assert_eq!( odd.vertical_extent(), "[1,2] - 1000 m");
}

#[test]
fn test_altitude_lengths() {
    let fl = AltitudeLimit::FlightLevel(65.0);
    assert_relative_eq!( fl.altitude().unwrap().get::<foot>(), 6500.0, epsilon = 1e-6);

    let agl = AltitudeLimit::from_json( &json!({"value": 1000, "unit": 2, "reference": "agl"}));
    assert_eq!( agl.reference(), Some(AltitudeReference::Agl));
    assert_relative_eq!( agl.altitude().unwrap().get::<meter>(), 1000.0);

    assert!( AltitudeLimit::Unparsed("?".to_string()).altitude().is_none());
}
