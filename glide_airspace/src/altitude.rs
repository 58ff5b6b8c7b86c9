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

//! airspace altitude limits. Upstream airspace sources deliver these as loosely typed `{value, unit, reference}`
//! records with either integer or string codes. We turn them into a closed [`AltitudeLimit`] at the ingestion
//! boundary so that display formatting is a simple match. Ingestion never fails - whatever we cannot interpret
//! ends up as [`AltitudeLimit::Unparsed`] with a verbatim rendering of the raw value

use std::fmt;
use serde::{Serialize,Deserialize};
use serde_json::Value;
use uom::si::f64::Length;
use tracing::debug;

use glide_common::uom::{feet, meters, flight_level, round_to_i64};

pub const UNKNOWN_LIMIT: &str = "Unknown";
pub const GROUND_LIMIT: &str = "GND";

// integer unit codes
pub const UNIT_FEET: i64 = 1;
pub const UNIT_METER: i64 = 2;
pub const UNIT_FLIGHT_LEVEL: i64 = 6;

// integer reference codes
pub const REF_GND: i64 = 0;
pub const REF_AMSL: i64 = 1;
pub const REF_AGL: i64 = 2;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum AltitudeReference {
    Amsl,
    Agl
}

#[derive(Debug,Clone,PartialEq,Deserialize)]
#[serde(from="Value")]
pub enum AltitudeLimit {
    Ground,
    Feet { value: f64, reference: AltitudeReference },
    Meters { value: f64, reference: AltitudeReference },
    FlightLevel(f64),
    Unparsed(String)
}

/// the record as it comes from the airspace source. All fields are optional and untyped
#[derive(Debug,Clone,Default,Serialize,Deserialize)]
pub struct RawAltitudeLimit {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub unit: Value,
    #[serde(default)]
    pub reference: Value,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
enum ReferenceCode { Gnd, Amsl, Agl }

impl ReferenceCode {
    fn from_value (v: &Value)->Option<Self> {
        match v {
            Value::Number(n) => match n.as_i64()? {
                REF_GND => Some(ReferenceCode::Gnd),
                REF_AMSL => Some(ReferenceCode::Amsl),
                REF_AGL => Some(ReferenceCode::Agl),
                _ => None
            }
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "gnd" | "sfc" => Some(ReferenceCode::Gnd),
                "amsl" | "msl" => Some(ReferenceCode::Amsl),
                "agl" => Some(ReferenceCode::Agl),
                _ => None
            }
            _ => None
        }
    }
}

fn is_ground_sentinel (v: &Value)->bool {
    matches!( v, Value::String(s) if s.trim().eq_ignore_ascii_case(GROUND_LIMIT))
}

fn numeric_value (v: &Value)->Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None
    }
}

fn verbatim (v: &Value)->String {
    match v {
        Value::Null => UNKNOWN_LIMIT.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string()
    }
}

impl From<RawAltitudeLimit> for AltitudeLimit {
    fn from (raw: RawAltitudeLimit)->Self {
        let reference = ReferenceCode::from_value(&raw.reference);

        // ground overrides whatever numeric value we got
        if reference == Some(ReferenceCode::Gnd) || is_ground_sentinel(&raw.value) {
            return AltitudeLimit::Ground
        }

        let Some(value) = numeric_value(&raw.value) else {
            debug!("non-numeric altitude limit value {:?}", raw.value);
            return AltitudeLimit::Unparsed( verbatim(&raw.value))
        };

        let limit = match &raw.unit {
            Value::Number(n) => {
                let reference = if reference == Some(ReferenceCode::Agl) { AltitudeReference::Agl } else { AltitudeReference::Amsl };
                match n.as_i64() {
                    Some(UNIT_FEET) => Some( AltitudeLimit::Feet { value, reference }),
                    Some(UNIT_METER) => Some( AltitudeLimit::Meters { value, reference }),
                    Some(UNIT_FLIGHT_LEVEL) => Some( AltitudeLimit::FlightLevel(value)),
                    _ => None
                }
            }
            // legacy string encoding, this one does not carry AGL annotations
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "fl" => Some( AltitudeLimit::FlightLevel(value)),
                "ft" => Some( AltitudeLimit::Feet { value, reference: AltitudeReference::Amsl }),
                "m" => Some( AltitudeLimit::Meters { value, reference: AltitudeReference::Amsl }),
                _ => None
            }
            _ => None
        };

        limit.unwrap_or_else( || {
            debug!("unknown altitude unit {:?} (reference {:?})", raw.unit, raw.reference);
            AltitudeLimit::Unparsed( verbatim(&raw.value))
        })
    }
}

/// typed deserialization goes through the same path as [`AltitudeLimit::from_json`], so it never fails
impl From<Value> for AltitudeLimit {
    fn from (v: Value)->Self {
        AltitudeLimit::from_json(&v)
    }
}

impl AltitudeLimit {
    /// ingest an arbitrary JSON value. Anything that is not a record (or a bare "GND") is kept as its verbatim rendering
    pub fn from_json (v: &Value)->Self {
        match v {
            Value::Object(_) => match serde_json::from_value::<RawAltitudeLimit>( v.clone()) {
                Ok(raw) => raw.into(),
                Err(_) => AltitudeLimit::Unparsed( verbatim(v))
            }
            other if is_ground_sentinel(other) => AltitudeLimit::Ground,
            other => AltitudeLimit::Unparsed( verbatim(other))
        }
    }

    /// the altitude as a length. Flight levels are 100ft steps of pressure altitude, ground is 0 AGL
    pub fn altitude (&self)->Option<Length> {
        match self {
            AltitudeLimit::Ground => Some( meters(0.0)),
            AltitudeLimit::Feet { value, .. } => Some( feet(*value)),
            AltitudeLimit::Meters { value, .. } => Some( meters(*value)),
            AltitudeLimit::FlightLevel(fl) => Some( flight_level(*fl)),
            AltitudeLimit::Unparsed(_) => None
        }
    }

    pub fn reference (&self)->Option<AltitudeReference> {
        match self {
            AltitudeLimit::Ground => Some(AltitudeReference::Agl),
            AltitudeLimit::Feet { reference, .. } | AltitudeLimit::Meters { reference, .. } => Some(*reference),
            AltitudeLimit::FlightLevel(_) | AltitudeLimit::Unparsed(_) => None
        }
    }
}

impl fmt::Display for AltitudeLimit {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let agl = |reference: &AltitudeReference| if *reference == AltitudeReference::Agl { " AGL" } else { "" };

        match self {
            AltitudeLimit::Ground => write!(f, "{GROUND_LIMIT}"),
            AltitudeLimit::FlightLevel(fl) => write!(f, "FL{:03}", round_to_i64(*fl)),
            AltitudeLimit::Feet { value, reference } => write!(f, "{} ft{}", round_to_i64(*value), agl(reference)),
            AltitudeLimit::Meters { value, reference } => write!(f, "{} m{}", round_to_i64(*value), agl(reference)),
            AltitudeLimit::Unparsed(raw) => write!(f, "{raw}")
        }
    }
}

/// display string for an optional limit
pub fn format_limit (limit: Option<&AltitudeLimit>)->String {
    match limit {
        Some(limit) => limit.to_string(),
        None => UNKNOWN_LIMIT.to_string()
    }
}

/// display string for an optional raw record, `null` counts as absent
pub fn format_raw_limit (raw: Option<&Value>)->String {
    match raw {
        None | Some(Value::Null) => UNKNOWN_LIMIT.to_string(),
        Some(v) => AltitudeLimit::from_json(v).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_codes() {
        assert_eq!( ReferenceCode::from_value( &json!(2)), Some(ReferenceCode::Agl));
        assert_eq!( ReferenceCode::from_value( &json!("MSL")), Some(ReferenceCode::Amsl));
        assert_eq!( ReferenceCode::from_value( &json!(7)), None);
        assert_eq!( ReferenceCode::from_value( &Value::Null), None);
    }

    #[test]
    fn test_verbatim() {
        assert_eq!( verbatim( &json!("unlimited")), "unlimited");
        assert_eq!( verbatim( &json!(12.5)), "12.5");
        assert_eq!( verbatim( &Value::Null), UNKNOWN_LIMIT);
    }
}
