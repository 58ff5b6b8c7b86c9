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

//! 3D flight track replay support: initial camera framing, the renderer payload and the playback
//! controller that mirrors the renderer's state

use std::{path::Path, time::Duration};
use serde::{Serialize,Deserialize};

use glide_common::{config::load_ron_config_or_default, datetime::{deserialize_duration, serialize_duration, millis, secs}};

pub mod errors;
pub mod track;
pub mod framing;
pub mod payload;
pub mod provider;
pub mod bridge;
pub mod playback;
pub mod sim_renderer;

pub use errors::{ReplayError, Result};
pub use track::{TrackPoint, TrackData, derive_rates};
pub use framing::{FramingPolicy, FramingMode, CameraMode, CameraFrame, TrackFramer};
pub use payload::{PayloadPoint, InitialCamera, ReplayPayload, payload_timezone};
pub use provider::{TrackProvider, JsonFileTrackProvider, load_replay_payload};
pub use bridge::{RendererBridge, RendererCommand, RendererPlaybackState};
pub use playback::{PlaybackSyncController, PlaybackPhase, PlaybackState, PlaybackMirror, MirrorWatch, clamp_speed, MIN_SPEED, MAX_SPEED};
pub use sim_renderer::SimRenderer;

#[derive(Serialize,Deserialize,Debug,Clone)]
#[serde(default)]
pub struct ReplayConfig {
    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub poll_interval: Duration,

    /// a poll round trip exceeding this counts as failed
    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub poll_timeout: Duration,

    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub command_timeout: Duration,

    pub framing: FramingPolicy,

    /// camera altitude for embedded views (meters)
    pub default_embedded_altitude: f64,
}

impl Default for ReplayConfig {
    fn default()->Self {
        ReplayConfig {
            poll_interval: millis(100),
            poll_timeout: secs(2),
            command_timeout: secs(2),
            framing: FramingPolicy::default(),
            default_embedded_altitude: 10000.0
        }
    }
}

impl ReplayConfig {
    /// RON config file if given, defaults otherwise
    pub fn load<P: AsRef<Path>> (path: Option<P>)->Result<Self> {
        Ok( load_ron_config_or_default(path)?)
    }

    pub fn framer (&self)->TrackFramer {
        TrackFramer::new( self.framing.clone())
    }

    pub fn embedded_mode (&self)->FramingMode {
        FramingMode::Embedded { altitude: self.default_embedded_altitude }
    }
}
