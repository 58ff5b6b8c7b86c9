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

use serde::Serialize;
use glide_common::datetime::{encode_timestamp, normalize_utc_offset};

use crate::{
    errors::Result,
    framing::CameraFrame,
    track::{TrackData, TrackPoint}
};

/// one point as the renderer gets it. `altitude` is what the renderer positions the point with (GPS altitude)
#[derive(Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct PayloadPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub gps_altitude: f64,
    pub pressure_altitude: f64,
    pub timestamp: String,
    pub climb_rate: f64,
    pub ground_speed: f64,
    pub timezone: Option<String>,
}

/// the offset the renderer gets: normalized "±HH:MM" (or the verbatim fallback), None if absent or blank
pub fn payload_timezone (utc_offset: Option<&str>)->Option<String> {
    utc_offset.map(str::trim).filter(|s| !s.is_empty()).map(normalize_utc_offset)
}

impl PayloadPoint {
    /// `timezone` is expected to be normalized already (see [`payload_timezone`])
    pub fn new (p: &TrackPoint, timezone: Option<&str>)->Self {
        PayloadPoint {
            latitude: p.latitude,
            longitude: p.longitude,
            altitude: p.gps_altitude,
            gps_altitude: p.gps_altitude,
            pressure_altitude: p.pressure_altitude,
            timestamp: encode_timestamp( &p.timestamp, timezone),
            climb_rate: p.climb_rate,
            ground_speed: p.ground_speed,
            timezone: timezone.map(String::from)
        }
    }
}

#[derive(Serialize,Debug,Clone,Copy,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct InitialCamera {
    pub lat: f64,
    pub lon: f64,
    pub altitude_meters: f64,
}

impl From<&CameraFrame> for InitialCamera {
    fn from (frame: &CameraFrame)->Self {
        InitialCamera { lat: frame.look_at_lat, lon: frame.look_at_lon, altitude_meters: frame.altitude_meters }
    }
}

/// everything the renderer needs to replay one track
#[derive(Serialize,Debug,Clone)]
pub struct ReplayPayload {
    pub points: Vec<PayloadPoint>,
    pub camera: InitialCamera,
}

impl ReplayPayload {
    pub fn build (track: &TrackData, frame: &CameraFrame)->Self {
        let timezone = payload_timezone( track.utc_offset.as_deref());
        ReplayPayload {
            points: track.points.iter().map(|p| PayloadPoint::new( p, timezone.as_deref())).collect(),
            camera: frame.into()
        }
    }

    pub fn to_json (&self)->Result<String> {
        Ok( serde_json::to_string(self)?)
    }

    pub fn to_json_pretty (&self)->Result<String> {
        Ok( serde_json::to_string_pretty(self)?)
    }
}
