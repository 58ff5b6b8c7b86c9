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

//! initial camera placement for a 3D track replay. The camera looks at the track bounding box and, in full screen
//! mode, backs off far enough to show the whole track plus some room for the stats overlay at the bottom

use serde::{Serialize,Deserialize};
use tracing::debug;

use glide_common::{BoundingBox, cos, rad, sqrt, pow2};
use crate::track::{TrackPoint, bounding_box};

/// the framing heuristics. These are empirical values, not geometry
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct FramingPolicy {
    pub altitude_factor: f64,     // camera altitude = track diagonal * factor
    pub min_altitude: f64,
    pub max_altitude: f64,
    pub lat_shift: f64,           // fraction of lat span from the south edge where the camera looks at
    pub meters_per_degree: f64,   // equirectangular approximation of one latitude degree

    // used if there are no points at all
    pub fallback_lat: f64,
    pub fallback_lon: f64,
    pub fallback_altitude: f64,
}

impl Default for FramingPolicy {
    fn default()->Self {
        FramingPolicy {
            altitude_factor: 4.0,
            min_altitude: 8000.0,
            max_altitude: 60000.0,
            lat_shift: 0.45,
            meters_per_degree: 111_000.0,
            fallback_lat: 46.8182,
            fallback_lon: 8.2275,
            fallback_altitude: 10000.0,
        }
    }
}

/// what the caller asks for
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum FramingMode {
    /// small in-page globe. The camera altitude is not derived from the track but supplied by the caller
    Embedded { altitude: f64 },
    FullScreen
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum CameraMode {
    Embedded,
    FullScreen
}

impl From<FramingMode> for CameraMode {
    fn from (mode: FramingMode)->Self {
        match mode {
            FramingMode::Embedded{..} => CameraMode::Embedded,
            FramingMode::FullScreen => CameraMode::FullScreen
        }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all="camelCase")]
pub struct CameraFrame {
    pub look_at_lat: f64,
    pub look_at_lon: f64,
    pub altitude_meters: f64,
    pub mode: CameraMode,
}

#[derive(Debug,Clone,Default)]
pub struct TrackFramer {
    pub policy: FramingPolicy
}

impl TrackFramer {
    pub fn new (policy: FramingPolicy)->Self { TrackFramer { policy } }

    /// never fails. Empty tracks get the fallback frame
    pub fn compute_frame (&self, points: &[TrackPoint], mode: FramingMode)->CameraFrame {
        let Some(bbox) = bounding_box(points) else {
            debug!("no track points, using fallback camera frame");
            return self.fallback_frame(mode)
        };

        let (center_lat, center_lon) = bbox.center();

        match mode {
            FramingMode::Embedded { altitude } => CameraFrame {
                look_at_lat: center_lat,
                look_at_lon: center_lon,
                altitude_meters: altitude,
                mode: CameraMode::Embedded
            },
            FramingMode::FullScreen => {
                let look_at_lat = bbox.min_lat + self.policy.lat_shift * bbox.lat_span();
                CameraFrame {
                    look_at_lat,
                    look_at_lon: center_lon,
                    altitude_meters: self.full_screen_altitude( &bbox, look_at_lat),
                    mode: CameraMode::FullScreen
                }
            }
        }
    }

    pub fn fallback_frame (&self, mode: FramingMode)->CameraFrame {
        CameraFrame {
            look_at_lat: self.policy.fallback_lat,
            look_at_lon: self.policy.fallback_lon,
            altitude_meters: self.policy.fallback_altitude,
            mode: mode.into()
        }
    }

    /// planar diagonal of the box (equirectangular, longitudes scaled at the look-at latitude) times the
    /// altitude factor, clamped to [min_altitude,max_altitude]
    pub fn full_screen_altitude (&self, bbox: &BoundingBox, look_at_lat: f64)->f64 {
        let p = &self.policy;
        let dy = bbox.lat_span() * p.meters_per_degree;
        let dx = bbox.lon_span() * p.meters_per_degree * cos( rad(look_at_lat));
        let diagonal = sqrt( pow2(dx) + pow2(dy));

        (diagonal * p.altitude_factor).max(p.min_altitude).min(p.max_altitude)
    }
}
