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

use uom::si::{
    f64::{Length,Velocity},
    length::{meter,foot},
    velocity::{kilometer_per_hour,meter_per_second}
};
use serde::{Deserialize,ser::Serializer,de::Deserializer};

/// one flight level is 100ft of standard pressure altitude
pub const FEET_PER_FLIGHT_LEVEL: f64 = 100.0;

#[inline]
pub fn meters (len: f64)-> Length { Length::new::<meter>(len) }

#[inline]
pub fn feet (len: f64)-> Length { Length::new::<foot>(len) }

#[inline]
pub fn flight_level (fl: f64)-> Length { Length::new::<foot>(fl * FEET_PER_FLIGHT_LEVEL) }

#[inline]
pub fn kilometers_per_hour (v: f64)-> Velocity { Velocity::new::<kilometer_per_hour>(v) }

#[inline]
pub fn meters_per_second (v: f64)-> Velocity { Velocity::new::<meter_per_second>(v) }

/// round half away from zero. Display values are never fractional
#[inline]
pub fn round_to_i64 (v: f64)->i64 { v.round() as i64 }

//--- serialization support

pub fn ser_velocity_as_kmh<S: Serializer> (v: &Velocity, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( v.get::<kilometer_per_hour>())
}

pub fn de_velocity_from_kmh <'a,D>(deserializer: D) -> Result<Velocity,D::Error> where D: Deserializer<'a> {
    let v: f64 = f64::deserialize(deserializer)?;
    Ok( kilometers_per_hour(v))
}
