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

use std::collections::HashSet;
use serde::{Serialize,Deserialize};
use strum::{EnumIter, EnumString, Display, AsRefStr, IntoEnumIterator};
use tracing::debug;

use glide_common::angle::{Angle360, normalize_360};

pub const SECTOR_WIDTH: f64 = 45.0;
pub const HALF_SECTOR_WIDTH: f64 = SECTOR_WIDTH / 2.0;

/// the eight compass directions in clockwise order. Discriminants are sector indices
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,EnumIter,EnumString,Display,AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum CompassDirection {
    N = 0, NE, E, SE, S, SW, W, NW
}

impl CompassDirection {
    pub fn index (&self)->usize { *self as usize }

    /// canonical bearing of this direction (0, 45, .. 315)
    pub fn bearing (&self)->Angle360 {
        Angle360::from_degrees( self.index() as f64 * SECTOR_WIDTH)
    }

    /// the 45deg wide sector that is centered on our bearing
    pub fn sector (&self)->Sector {
        Sector { start: self.bearing() - HALF_SECTOR_WIDTH, sweep: SECTOR_WIDTH }
    }

    /// classify an arbitrary bearing into the direction whose sector contains it
    pub fn from_bearing (bearing: Angle360)->Self {
        let idx = ((bearing.degrees() + HALF_SECTOR_WIDTH) / SECTOR_WIDTH).floor() as usize % 8;
        CompassDirection::iter().nth(idx).unwrap_or(CompassDirection::N)
    }
}

/// a half open angular span `[start, start+sweep)`, sweeping clockwise
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct Sector {
    pub start: Angle360,
    pub sweep: f64
}

impl Sector {
    pub fn end (&self)->Angle360 { self.start + self.sweep }

    pub fn contains (&self, bearing: Angle360)->bool {
        normalize_360( bearing.degrees() - self.start.degrees()) < self.sweep
    }
}

/// parse externally supplied direction labels (case insensitive). Unknown labels are skipped
pub fn parse_directions<I,S> (labels: I)->HashSet<CompassDirection> where I: IntoIterator<Item=S>, S: AsRef<str> {
    labels.into_iter().filter_map( |label| {
        let label = label.as_ref().trim();
        match label.parse::<CompassDirection>() {
            Ok(dir) => Some(dir),
            Err(_) => { debug!("ignoring unknown direction label {label:?}"); None }
        }
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_bounds() {
        let n = CompassDirection::N.sector();
        assert_eq!( n.start.degrees(), 337.5);
        assert_eq!( n.end().degrees(), 22.5);
        assert!( n.contains( Angle360::from_degrees( 0.0)));
        assert!( n.contains( Angle360::from_degrees( 337.5)));
        assert!( !n.contains( Angle360::from_degrees( 22.5)));
    }

    #[test]
    fn test_parse_labels() {
        let dirs = parse_directions( ["n", " SW", "nne", "W"]);
        assert_eq!( dirs.len(), 3);
        assert!( dirs.contains( &CompassDirection::SW));
    }
}
