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

use chrono::NaiveDateTime;
use serde::{Serialize,Deserialize};
use geo::{Distance, Haversine, Point};
use uom::si::velocity::kilometer_per_hour;

use glide_common::{BoundingBox, uom::meters_per_second};

/// a recorded fix. Timestamps are local wall clock times of the recording device
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub gps_altitude: f64,       // meters
    pub pressure_altitude: f64,  // meters
    pub timestamp: NaiveDateTime,

    #[serde(default)]
    pub climb_rate: f64,         // m/s
    #[serde(default)]
    pub ground_speed: f64,       // km/h
}

/// what a track provider returns for a track id
#[derive(Serialize,Deserialize,Debug,Clone,Default)]
#[serde(rename_all="camelCase")]
pub struct TrackData {
    pub points: Vec<TrackPoint>,

    /// e.g. "+02:00". None if the log did not carry offset metadata
    #[serde(default)]
    pub utc_offset: Option<String>,
}

impl TrackData {
    pub fn bounding_box (&self)->Option<BoundingBox> {
        bounding_box(&self.points)
    }
}

pub fn bounding_box (points: &[TrackPoint])->Option<BoundingBox> {
    BoundingBox::from_lat_lon( points.iter().map(|p| (p.latitude, p.longitude)))
}

/// fill in climb rate and ground speed from consecutive fixes. The first fix and fixes without a positive
/// time delta to their predecessor get zero rates
pub fn derive_rates (mut points: Vec<TrackPoint>)->Vec<TrackPoint> {
    let mut prev: Option<(Point,f64,NaiveDateTime)> = None;

    for p in points.iter_mut() {
        let pos = Point::new( p.longitude, p.latitude);

        (p.climb_rate, p.ground_speed) = match prev {
            Some((prev_pos, prev_alt, prev_ts)) => {
                let dt = (p.timestamp - prev_ts).num_milliseconds() as f64 / 1000.0;
                if dt > 0.0 {
                    let dist = Haversine.distance( prev_pos, pos); // meters
                    ( (p.gps_altitude - prev_alt) / dt, meters_per_second( dist / dt).get::<kilometer_per_hour>() )
                } else {
                    (0.0, 0.0)
                }
            }
            None => (0.0, 0.0)
        };

        prev = Some( (pos, p.gps_altitude, p.timestamp) );
    }

    points
}
