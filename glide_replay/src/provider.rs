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

use std::{io::ErrorKind, path::{Path,PathBuf}};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    errors::{Result, ReplayError, op_failed},
    framing::{FramingMode, TrackFramer},
    payload::ReplayPayload,
    track::TrackData
};

/// where tracks come from (a flight log database, files, ..). `Ok(None)` means there is no such track
#[async_trait]
pub trait TrackProvider: Send + Sync {
    async fn load_track (&self, track_id: &str)->Result<Option<TrackData>>;
}

/// tracks stored as `<dir>/<track_id>.json` (serialized [`TrackData`])
#[derive(Debug,Clone)]
pub struct JsonFileTrackProvider {
    dir: PathBuf
}

impl JsonFileTrackProvider {
    pub fn new (dir: impl AsRef<Path>)->Self {
        JsonFileTrackProvider { dir: dir.as_ref().to_path_buf() }
    }

    fn track_path (&self, track_id: &str)->Result<PathBuf> {
        if track_id.is_empty() || track_id.contains(['/','\\']) || track_id.contains("..") {
            return Err( op_failed( format!("invalid track id {track_id:?}")))
        }
        Ok( self.dir.join( format!("{track_id}.json")))
    }
}

#[async_trait]
impl TrackProvider for JsonFileTrackProvider {
    async fn load_track (&self, track_id: &str)->Result<Option<TrackData>> {
        let path = self.track_path(track_id)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(s) => Ok( Some( serde_json::from_str(&s)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no track file {path:?}");
                Ok(None)
            }
            Err(e) => Err(e.into())
        }
    }
}

/// load a track, frame it and encode it for the renderer. Missing tracks are reported as `TrackUnavailable`
pub async fn load_replay_payload (provider: &dyn TrackProvider, track_id: &str, mode: FramingMode, framer: &TrackFramer)->Result<ReplayPayload> {
    let track = provider.load_track(track_id).await?
        .ok_or_else(|| ReplayError::TrackUnavailable( track_id.to_string()))?;

    let frame = framer.compute_frame( &track.points, mode);
    info!("loaded track {track_id} with {} points, camera at {:.4},{:.4} alt {:.0}m",
          track.points.len(), frame.look_at_lat, frame.look_at_lon, frame.altitude_meters);

    Ok( ReplayPayload::build( &track, &frame))
}
