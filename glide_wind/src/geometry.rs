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

//! screen geometry for polar charts. Screen coordinates have their origin top left with y pointing down,
//! which makes increasing screen angles turn clockwise - the same way compass bearings do

use std::fmt::Write;
use serde::{Serialize,Deserialize};

use glide_common::{angle::Angle360, cos, sin};
use crate::sector::CompassDirection;

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64
}

impl ScreenPoint {
    pub fn new (x: f64, y: f64)->Self { ScreenPoint{x,y} }

    pub fn distance_to (&self, other: &ScreenPoint)->f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    fn offset (&self, len: f64, screen_angle: f64)->ScreenPoint {
        ScreenPoint { x: self.x + len * cos(screen_angle), y: self.y + len * sin(screen_angle) }
    }
}

/// the point at `radius` from `center` in the direction of `bearing` (north is up)
pub fn polar_to_screen (center: ScreenPoint, radius: f64, bearing: Angle360)->ScreenPoint {
    center.offset( radius, bearing.screen_radians())
}

/// sizing of the sector ring. Wedges keep `gap` distance from both the center dot and the outer ring
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct RingLayout {
    pub ring_radius: f64,
    pub center_dot_radius: f64,
    pub gap: f64,
    pub arrow_head_length: f64,
    pub arrow_head_angle: f64, // degrees between shaft and each barb
    pub label_offset: f64,     // label anchors are this far outside of the ring
}

impl Default for RingLayout {
    fn default()->Self {
        RingLayout {
            ring_radius: 100.0,
            center_dot_radius: 15.0,
            gap: 5.0,
            arrow_head_length: 10.0,
            arrow_head_angle: 25.0,
            label_offset: 12.0,
        }
    }
}

impl RingLayout {
    pub fn outer_radius (&self)->f64 { self.ring_radius - self.gap }
    pub fn inner_radius (&self)->f64 { self.center_dot_radius + self.gap }
}

/* #region paths **************************************************************************************************/

#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(tag="cmd")]
pub enum PathCommand {
    MoveTo { to: ScreenPoint },
    LineTo { to: ScreenPoint },
    /// circular arc around `center`. Angles are screen radians, a positive sweep turns clockwise on screen
    Arc { center: ScreenPoint, radius: f64, start_angle: f64, sweep_angle: f64, to: ScreenPoint },
    Close
}

#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct SectorPath {
    pub commands: Vec<PathCommand>
}

impl SectorPath {
    /// SVG path data. Our wedges never sweep more than 180deg so the large-arc flag is always 0
    pub fn to_svg (&self)->String {
        let mut s = String::with_capacity(128);
        for cmd in &self.commands {
            if !s.is_empty() { s.push(' ') }
            let _ = match cmd {
                PathCommand::MoveTo{to} => write!(s, "M {:.2} {:.2}", to.x, to.y),
                PathCommand::LineTo{to} => write!(s, "L {:.2} {:.2}", to.x, to.y),
                PathCommand::Arc{radius, sweep_angle, to, ..} => {
                    let sweep_flag = if *sweep_angle >= 0.0 { 1 } else { 0 };
                    write!(s, "A {:.2} {:.2} 0 0 {} {:.2} {:.2}", radius, radius, sweep_flag, to.x, to.y)
                }
                PathCommand::Close => write!(s, "Z")
            };
        }
        s
    }

    /// all explicit points of the path (arc end points included)
    pub fn points (&self)->Vec<ScreenPoint> {
        self.commands.iter().filter_map( |cmd| match cmd {
            PathCommand::MoveTo{to} | PathCommand::LineTo{to} | PathCommand::Arc{to,..} => Some(*to),
            PathCommand::Close => None
        }).collect()
    }
}

/// closed donut wedge for `direction`: outer arc forward across the sector, then the inner arc back
pub fn build_sector_path (direction: CompassDirection, center: ScreenPoint, outer_radius: f64, inner_radius: f64)->SectorPath {
    let sector = direction.sector();
    let start = sector.start;
    let end = sector.end();
    let sweep = sector.sweep.to_radians();

    let commands = vec![
        PathCommand::MoveTo { to: polar_to_screen( center, outer_radius, start) },
        PathCommand::Arc {
            center, radius: outer_radius,
            start_angle: start.screen_radians(), sweep_angle: sweep,
            to: polar_to_screen( center, outer_radius, end)
        },
        PathCommand::LineTo { to: polar_to_screen( center, inner_radius, end) },
        PathCommand::Arc {
            center, radius: inner_radius,
            start_angle: end.screen_radians(), sweep_angle: -sweep,
            to: polar_to_screen( center, inner_radius, start)
        },
        PathCommand::Close
    ];

    SectorPath { commands }
}

/* #endregion paths */

/* #region wind arrow *********************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct LineSegment {
    pub from: ScreenPoint,
    pub to: ScreenPoint
}

/// shaft runs from the outer ring towards the center, the head sits at the inner end
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct WindArrow {
    pub shaft: LineSegment,
    pub head: [LineSegment;2]
}

/// arrow for wind coming *from* `bearing` (meteorological convention). The head is two barbs
/// splayed `head_angle` degrees to either side of the shaft, pointing back outwards from the tip
pub fn build_direction_arrow (bearing: Angle360, center: ScreenPoint, outer_radius: f64, inner_radius: f64,
                              head_length: f64, head_angle: f64)->WindArrow {
    let tail = polar_to_screen( center, outer_radius, bearing);
    let tip = polar_to_screen( center, inner_radius, bearing);

    let back = bearing.screen_radians(); // tip -> tail points away from the center
    let splay = head_angle.to_radians();
    let barb = |a: f64| LineSegment { from: tip, to: tip.offset( head_length, a) };

    WindArrow {
        shaft: LineSegment { from: tail, to: tip },
        head: [ barb( back + splay), barb( back - splay) ]
    }
}

/* #endregion wind arrow */
