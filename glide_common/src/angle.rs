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

use std::{fmt, ops, cmp};
use serde::{Serialize,Deserialize,Serializer,Deserializer};

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x <= -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// map degrees into [0,360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    let x = if x < 0.0 { 360.0 + x } else { x };
    if x >= 360.0 { 0.0 } else { x } // tiny negative remainders can round up to 360
}

/// a full circle angle (e.g. a compass bearing) that is always normalized to [0,360) degrees
#[derive(Copy,Clone,Default)]
pub struct Angle360(f64);

impl Angle360 {
    pub const NORTH: Angle360 = Angle360(0.0);

    #[inline]
    pub fn from_degrees (deg: f64)->Self { Angle360( normalize_360(deg)) }

    pub fn from_radians (rad: f64)->Self { Angle360( normalize_360( rad.to_degrees())) }

    #[inline] pub fn degrees (&self)->f64 { self.0 }
    #[inline] pub fn radians (&self)->f64 { self.0.to_radians() }

    /// bearings are clockwise from north (up) but screen angles are measured from the positive x-axis (right),
    /// hence we have to rotate by -90deg before converting to radians
    #[inline] pub fn screen_radians (&self)->f64 { (self.0 - 90.0).to_radians() }

    /// the reciprocal bearing
    pub fn opposite (&self)->Self { Angle360::from_degrees( self.0 + 180.0) }

    /// signed shortest rotation from self to other in (-180,180]
    pub fn delta_to (&self, other: &Angle360)->f64 { normalize_180( other.0 - self.0) }

    #[inline] pub fn sin (&self)->f64 { self.radians().sin() }
    #[inline] pub fn cos (&self)->f64 { self.radians().cos() }
}

impl From<Angle360> for f64 {
    fn from (a: Angle360)->Self { a.0 }
}

impl fmt::Display for Angle360 {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", self.0) }
}

impl fmt::Debug for Angle360 {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Angle360({})", self.0) }
}

impl cmp::PartialEq for Angle360 {
    fn eq (&self, other: &Self) -> bool { self.0 == other.0 }
}

impl cmp::PartialOrd for Angle360 {
    fn partial_cmp (&self, other: &Self) -> Option<cmp::Ordering> { self.0.partial_cmp(&other.0) }
}

//--- allowed num ops (results are re-normalized)

impl ops::Add<f64> for Angle360 {
    type Output = Self;
    fn add (self, rhs: f64) -> Self::Output { Angle360::from_degrees( self.0 + rhs) }
}

impl ops::Sub<f64> for Angle360 {
    type Output = Self;
    fn sub (self, rhs: f64) -> Self::Output { Angle360::from_degrees( self.0 - rhs) }
}

//--- serde support

impl Serialize for Angle360 {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64(self.0)
    }
}

/// we accept any finite degree value and normalize it. Upstream weather sources occasionally report 360 or negative bearings
impl<'de> Deserialize<'de> for Angle360 {
    fn deserialize<D> (deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let deg = f64::deserialize(deserializer)?;
        if deg.is_finite() {
            Ok( Angle360::from_degrees(deg))
        } else {
            Err( serde::de::Error::custom( format!("not a finite angle: {deg}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!( normalize_360( 370.0), 10.0);
        assert_eq!( normalize_360( -90.0), 270.0);
        assert_eq!( normalize_360( 360.0), 0.0);
        assert!( normalize_360( -1e-15) < 360.0);

        assert_eq!( normalize_180( 270.0), -90.0);
        assert_eq!( normalize_180( -180.0), 180.0);
    }

    #[test]
    fn test_delta() {
        let a = Angle360::from_degrees( 350.0);
        let b = Angle360::from_degrees( 10.0);
        assert_eq!( a.delta_to(&b), 20.0);
        assert_eq!( b.delta_to(&a), -20.0);
        assert_eq!( a.opposite().degrees(), 170.0);
    }
}
