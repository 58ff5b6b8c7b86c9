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
use strum::IntoEnumIterator;
use uom::si::{f64::Velocity, velocity::kilometer_per_hour};

use glide_common::{angle::Angle360, uom::{round_to_i64, ser_velocity_as_kmh, de_velocity_from_kmh}};

pub mod sector;
pub mod geometry;

pub use sector::{CompassDirection, Sector, parse_directions};
pub use geometry::{ScreenPoint, RingLayout, PathCommand, SectorPath, LineSegment, WindArrow, build_sector_path, build_direction_arrow, polar_to_screen};

/// a wind observation as reported by weather stations. `direction` is where the wind comes *from*
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct WindObservation {
    #[serde(serialize_with="ser_opt_kmh", deserialize_with="de_opt_kmh", default)]
    pub speed: Option<Velocity>,

    #[serde(default)]
    pub direction: Option<Angle360>,
}

fn ser_opt_kmh<S: serde::Serializer> (v: &Option<Velocity>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(v) => ser_velocity_as_kmh(v, s),
        None => s.serialize_none()
    }
}

fn de_opt_kmh<'a,D: serde::Deserializer<'a>> (deserializer: D) -> Result<Option<Velocity>, D::Error> {
    #[derive(Deserialize)]
    struct Kmh( #[serde(deserialize_with="de_velocity_from_kmh")] Velocity);
    Ok( Option::<Kmh>::deserialize(deserializer)?.map(|k| k.0))
}

/// only the fill/stroke selection depends on this, never the geometry
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize)]
pub enum SectorFill {
    Launchable,
    NotLaunchable
}

#[derive(Debug,Clone,Serialize)]
pub struct SectorShape {
    pub direction: CompassDirection,
    pub fill: SectorFill,
    pub path: SectorPath
}

#[derive(Debug,Clone,Serialize)]
pub struct DirectionLabel {
    pub direction: CompassDirection,
    pub text: String,
    pub anchor: ScreenPoint
}

/// everything a painter needs to draw one wind rose
#[derive(Debug,Clone,Serialize)]
pub struct WindRoseScene {
    pub center: ScreenPoint,
    pub ring_radius: f64,
    pub center_dot_radius: f64,
    pub sectors: Vec<SectorShape>,
    pub labels: Vec<DirectionLabel>,
    pub arrow: Option<WindArrow>,
    pub speed_label: Option<String>,
}

/// launch site wind rose: eight sectors flagged launchable or not, plus an optional current wind
#[derive(Debug,Clone,Default)]
pub struct WindRose {
    pub layout: RingLayout,
    launchable: HashSet<CompassDirection>,
    wind: Option<WindObservation>,
}

impl WindRose {
    pub fn new (layout: RingLayout)->Self {
        WindRose { layout, launchable: HashSet::new(), wind: None }
    }

    pub fn with_launchable_labels<I,S> (mut self, labels: I)->Self where I: IntoIterator<Item=S>, S: AsRef<str> {
        self.launchable = parse_directions(labels);
        self
    }

    pub fn with_wind (mut self, wind: WindObservation)->Self {
        self.wind = Some(wind);
        self
    }

    pub fn is_launchable (&self, dir: CompassDirection)->bool {
        self.launchable.contains(&dir)
    }

    pub fn scene (&self, center: ScreenPoint)->WindRoseScene {
        let outer = self.layout.outer_radius();
        let inner = self.layout.inner_radius();
        let label_radius = self.layout.ring_radius + self.layout.label_offset;

        let sectors = CompassDirection::iter().map( |direction| {
            let fill = if self.is_launchable(direction) { SectorFill::Launchable } else { SectorFill::NotLaunchable };
            SectorShape { direction, fill, path: build_sector_path( direction, center, outer, inner) }
        }).collect();

        let labels = CompassDirection::iter().map( |direction| {
            DirectionLabel {
                direction,
                text: direction.to_string(),
                anchor: polar_to_screen( center, label_radius, direction.bearing())
            }
        }).collect();

        let arrow = self.wind.as_ref().and_then(|w| w.direction).map( |bearing| {
            build_direction_arrow( bearing, center, outer, inner, self.layout.arrow_head_length, self.layout.arrow_head_angle)
        });

        let speed_label = self.wind.as_ref().and_then(|w| w.speed).map( |v| {
            format!("{} km/h", round_to_i64( v.get::<kilometer_per_hour>()))
        });

        WindRoseScene {
            center,
            ring_radius: self.layout.ring_radius,
            center_dot_radius: self.layout.center_dot_radius,
            sectors, labels, arrow, speed_label
        }
    }
}
