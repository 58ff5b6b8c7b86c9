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

use std::{sync::Arc, time::Duration};
use async_trait::async_trait;
use tokio::{runtime::Handle, sync::Mutex, task::AbortHandle, time::{self, sleep}};
use tracing::debug;

use crate::{
    bridge::{RendererBridge, RendererPlaybackState},
    errors::{Result, ReplayError},
    playback::clamp_speed
};

#[derive(Debug)]
struct SimState {
    position: f64,   // fractional track index
    is_playing: bool,
    speed: f64,
    follow: bool,
}

impl SimState {
    fn index (&self)->usize { self.position as usize }
}

/// an in-process renderer that owns the authoritative playback state. The clock advances the position by
/// `speed` points per tick and stops at the last point
#[derive(Debug)]
pub struct SimRenderer {
    track_len: usize,
    latency: Duration,
    state: Mutex<SimState>,
}

impl SimRenderer {
    pub fn new (track_len: usize)->Self {
        SimRenderer {
            track_len,
            latency: Duration::ZERO,
            state: Mutex::new( SimState { position: 0.0, is_playing: false, speed: 1.0, follow: true })
        }
    }

    /// delay every state query by `latency` to simulate a remote renderer
    pub fn with_latency (mut self, latency: Duration)->Self {
        self.latency = latency;
        self
    }

    fn last_index (&self)->usize { self.track_len.saturating_sub(1) }

    pub async fn advance (&self, ticks: f64) {
        let mut s = self.state.lock().await;
        if s.is_playing {
            let last = self.last_index() as f64;
            s.position = (s.position + s.speed * ticks).min(last);
            if s.position >= last {
                s.is_playing = false;
                debug!("sim renderer reached end of track");
            }
        }
    }

    /// drive `advance(1.0)` from a repeat timer. Dropping the sim does not stop the clock, abort the returned handle
    pub fn spawn_clock (self: &Arc<Self>, tick: Duration)->Result<AbortHandle> {
        let rt = Handle::try_current().map_err(|_| ReplayError::NoRuntime)?;
        let sim = self.clone();

        let jh = rt.spawn( async move {
            let mut interval = time::interval(tick);
            interval.tick().await; // first one is instant
            loop {
                interval.tick().await;
                sim.advance(1.0).await;
            }
        });
        Ok(jh.abort_handle())
    }
}

#[async_trait]
impl RendererBridge for SimRenderer {
    async fn get_playback_state (&self)->Result<RendererPlaybackState> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        let s = self.state.lock().await;
        Ok( RendererPlaybackState {
            current_index: s.index(),
            is_playing: s.is_playing,
            playback_speed: s.speed,
            follow_mode: s.follow
        })
    }

    async fn seek_to_position (&self, index: usize)->Result<()> {
        self.state.lock().await.position = index.min( self.last_index()) as f64;
        Ok(())
    }

    async fn start_playback (&self)->Result<()> {
        let mut s = self.state.lock().await;
        if s.index() < self.last_index() {
            s.is_playing = true;
        }
        Ok(())
    }

    async fn pause_playback (&self)->Result<()> {
        self.state.lock().await.is_playing = false;
        Ok(())
    }

    async fn stop_playback (&self)->Result<()> {
        let mut s = self.state.lock().await;
        s.is_playing = false;
        s.position = 0.0;
        Ok(())
    }

    async fn step_forward (&self)->Result<()> {
        let mut s = self.state.lock().await;
        s.position = (s.index() + 1).min( self.last_index()) as f64;
        Ok(())
    }

    async fn step_backward (&self)->Result<()> {
        let mut s = self.state.lock().await;
        s.position = s.index().saturating_sub(1) as f64;
        Ok(())
    }

    async fn set_playback_speed (&self, speed: f64)->Result<()> {
        self.state.lock().await.speed = clamp_speed(speed);
        Ok(())
    }

    async fn set_follow_mode (&self, follow: bool)->Result<()> {
        self.state.lock().await.follow = follow;
        Ok(())
    }
}
