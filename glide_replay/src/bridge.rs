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

//! the seam between the playback controller and whatever renders the 3D replay (a web view, or
//! the in-process [`crate::SimRenderer`]). The renderer owns the authoritative playback state

use std::fmt;
use async_trait::async_trait;
use serde::{Serialize,Deserialize};

use crate::errors::Result;

/// the renderer's authoritative playback state as reported by `get_playback_state`
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct RendererPlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub playback_speed: f64,
    pub follow_mode: bool,
}

/// all calls are round trips to the renderer. Everything but `get_playback_state` is fire-and-forget,
/// i.e. callers only learn about the effect through a subsequent state query
#[async_trait]
pub trait RendererBridge: Send + Sync + 'static {
    async fn get_playback_state (&self)->Result<RendererPlaybackState>;

    async fn seek_to_position (&self, index: usize)->Result<()>;
    async fn start_playback (&self)->Result<()>;
    async fn pause_playback (&self)->Result<()>;
    async fn stop_playback (&self)->Result<()>;
    async fn step_forward (&self)->Result<()>;
    async fn step_backward (&self)->Result<()>;
    async fn set_playback_speed (&self, speed: f64)->Result<()>;
    async fn set_follow_mode (&self, follow: bool)->Result<()>;
}

/// a renderer command as issued by the playback controller
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum RendererCommand {
    Seek(usize),
    Start,
    Pause,
    Stop,
    StepForward,
    StepBackward,
    SetSpeed(f64),
    SetFollow(bool),
}

impl RendererCommand {
    pub async fn send_to (&self, bridge: &dyn RendererBridge)->Result<()> {
        match *self {
            RendererCommand::Seek(index) => bridge.seek_to_position(index).await,
            RendererCommand::Start => bridge.start_playback().await,
            RendererCommand::Pause => bridge.pause_playback().await,
            RendererCommand::Stop => bridge.stop_playback().await,
            RendererCommand::StepForward => bridge.step_forward().await,
            RendererCommand::StepBackward => bridge.step_backward().await,
            RendererCommand::SetSpeed(speed) => bridge.set_playback_speed(speed).await,
            RendererCommand::SetFollow(follow) => bridge.set_follow_mode(follow).await,
        }
    }
}

impl fmt::Display for RendererCommand {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            RendererCommand::Seek(index) => write!(f, "seek({index})"),
            RendererCommand::Start => write!(f, "start"),
            RendererCommand::Pause => write!(f, "pause"),
            RendererCommand::Stop => write!(f, "stop"),
            RendererCommand::StepForward => write!(f, "step-forward"),
            RendererCommand::StepBackward => write!(f, "step-backward"),
            RendererCommand::SetSpeed(speed) => write!(f, "set-speed({speed})"),
            RendererCommand::SetFollow(follow) => write!(f, "set-follow({follow})"),
        }
    }
}
