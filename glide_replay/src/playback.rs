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

//! keeping a local mirror of the renderer's playback state.
//!
//! The renderer is authoritative. User commands are applied optimistically to the mirror before they are sent,
//! and a poll task periodically replaces the whole mirror with the renderer's snapshot while playing (or once
//! after a step command). Failed or timed out round trips leave the mirror as it was.
//!
//! Both the mirror and the poll bookkeeping live inside one `watch` channel value, which serializes all writes.
//! A poll snapshot is only applied if no local command was issued while it was in flight (`revision`) and if
//! the poll task that requested it has not been cancelled in the meantime (`generation`)

use std::{sync::Arc, time::Duration};
use serde::Serialize;
use tokio::{runtime::Handle, sync::watch, task::AbortHandle, time::{self, MissedTickBehavior, timeout}};
use tracing::{debug, info, warn};

use crate::{
    ReplayConfig, op_failed,
    bridge::{RendererBridge, RendererCommand, RendererPlaybackState},
    errors::{Result, ReplayError, op_failed}
};

pub const MIN_SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 8.0;

/// NaN clamps to MIN_SPEED
pub fn clamp_speed (multiplier: f64)->f64 {
    multiplier.max(MIN_SPEED).min(MAX_SPEED)
}

#[derive(Serialize,Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum PlaybackPhase {
    #[default]
    Stopped,
    Playing,
    Paused
}

#[derive(Serialize,Debug,Clone,PartialEq)]
#[serde(rename_all="camelCase")]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub speed_multiplier: f64,
    pub follow_mode: bool,
}

impl Default for PlaybackState {
    fn default()->Self {
        PlaybackState { current_index: 0, is_playing: false, speed_multiplier: 1.0, follow_mode: true }
    }
}

/// what the UI shows. Never assume this is fresh
#[derive(Serialize,Debug,Clone,PartialEq,Default)]
pub struct PlaybackMirror {
    pub phase: PlaybackPhase,
    pub state: PlaybackState,
}

/* #region sync state *********************************************************************************************/

#[derive(Debug,Clone,Default)]
struct SyncState {
    mirror: PlaybackMirror,
    refresh_pending: bool, // poll once even if not playing
    revision: u64,         // bumped by every local command
    generation: u64,       // bumped whenever a poll task is cancelled
}

impl SyncState {
    fn needs_poll (&self)->bool {
        self.mirror.state.is_playing || self.refresh_pending
    }

    /// replace the mirror wholesale. Returns true if that changed anything observable
    fn apply_snapshot (&mut self, generation: u64, revision: u64, snapshot: &RendererPlaybackState)->bool {
        if self.generation != generation || self.revision != revision {
            return false
        }
        self.refresh_pending = false;

        let phase = if snapshot.is_playing {
            PlaybackPhase::Playing
        } else if self.mirror.phase == PlaybackPhase::Stopped {
            PlaybackPhase::Stopped
        } else {
            PlaybackPhase::Paused
        };

        let mirror = PlaybackMirror {
            phase,
            state: PlaybackState {
                current_index: snapshot.current_index,
                is_playing: snapshot.is_playing,
                speed_multiplier: snapshot.playback_speed,
                follow_mode: snapshot.follow_mode,
            }
        };

        if mirror != self.mirror {
            self.mirror = mirror;
            true
        } else {
            false
        }
    }
}

/// receiving end for mirror changes
pub struct MirrorWatch {
    rx: watch::Receiver<SyncState>
}

impl MirrorWatch {
    pub fn current (&self)->PlaybackMirror {
        self.rx.borrow().mirror.clone()
    }

    /// wait for the next mirror change. Fails if the controller was dropped
    pub async fn changed (&mut self)->Result<PlaybackMirror> {
        self.rx.changed().await.map_err(|_| op_failed("playback controller dropped"))?;
        Ok( self.rx.borrow_and_update().mirror.clone())
    }
}

/* #endregion sync state */

/* #region poll task **********************************************************************************************/

/// owner of a running poll loop. Dropping it cancels the loop, and no snapshot requested by that loop
/// can be applied afterwards, even if its round trip is still in flight
struct PollTask {
    abort_handle: AbortHandle,
    state: Arc<watch::Sender<SyncState>>,
}

impl Drop for PollTask {
    fn drop (&mut self) {
        self.state.send_if_modified( |s| { s.generation += 1; false });
        self.abort_handle.abort();
    }
}

/// polls are sequential so they can't overlap. A round trip that takes longer than the interval just
/// skips the ticks it missed
async fn poll_loop (bridge: Arc<dyn RendererBridge>, state: Arc<watch::Sender<SyncState>>, generation: u64,
                    poll_interval: Duration, poll_timeout: Duration)
{
    let mut interval = time::interval(poll_interval);
    interval.set_missed_tick_behavior( MissedTickBehavior::Skip);

    loop {
        interval.tick().await;

        let revision = {
            let s = state.borrow();
            if s.generation != generation { break }
            if !s.needs_poll() { continue }
            s.revision
        };

        match timeout( poll_timeout, bridge.get_playback_state()).await {
            Ok(Ok(snapshot)) => {
                if state.send_if_modified( |s| s.apply_snapshot( generation, revision, &snapshot)) {
                    debug!("playback mirror updated from renderer: {:?}", snapshot);
                }
            }
            Ok(Err(e)) => debug!("playback poll failed: {e}"),
            Err(_) => debug!("playback poll timed out after {:?}", poll_timeout)
        }
    }
}

/* #endregion poll task */

/// translates user intents into renderer commands and keeps the mirror of the renderer state
pub struct PlaybackSyncController {
    bridge: Arc<dyn RendererBridge>,
    track_len: usize,
    poll_interval: Duration,
    poll_timeout: Duration,
    command_timeout: Duration,
    state: Arc<watch::Sender<SyncState>>,
    poll_task: Option<PollTask>,
}

impl PlaybackSyncController {
    pub fn new (bridge: Arc<dyn RendererBridge>, track_len: usize, config: &ReplayConfig)->Self {
        let (tx,_) = watch::channel( SyncState::default());

        PlaybackSyncController {
            bridge,
            track_len,
            poll_interval: config.poll_interval,
            poll_timeout: config.poll_timeout,
            command_timeout: config.command_timeout,
            state: Arc::new(tx),
            poll_task: None
        }
    }

    pub fn track_len (&self)->usize { self.track_len }

    pub fn snapshot (&self)->PlaybackMirror {
        self.state.borrow().mirror.clone()
    }

    pub fn phase (&self)->PlaybackPhase {
        self.state.borrow().mirror.phase
    }

    pub fn subscribe (&self)->MirrorWatch {
        MirrorWatch { rx: self.state.subscribe() }
    }

    //--- poll task lifetime

    /// this has to be called from within a tokio runtime. Calling it while already polling is a no-op
    pub fn start_polling (&mut self)->Result<()> {
        if self.poll_task.is_some() {
            return Ok(())
        }
        if self.poll_interval.is_zero() {
            return Err( op_failed!("invalid playback poll interval {:?}", self.poll_interval))
        }
        let rt = Handle::try_current().map_err(|_| ReplayError::NoRuntime)?;

        let generation = self.state.borrow().generation;
        let join_handle = rt.spawn( poll_loop( self.bridge.clone(), self.state.clone(), generation, self.poll_interval, self.poll_timeout));

        self.poll_task = Some( PollTask { abort_handle: join_handle.abort_handle(), state: self.state.clone() });
        info!("started playback polling every {:?}", self.poll_interval);
        Ok(())
    }

    /// synchronous. Once this returns the mirror is not touched by any pending poll anymore
    pub fn stop_polling (&mut self) {
        if self.poll_task.take().is_some() {
            info!("stopped playback polling");
        }
    }

    pub fn is_polling (&self)->bool {
        self.poll_task.is_some()
    }

    //--- user commands

    pub async fn play (&self) {
        self.update( |m| {
            m.phase = PlaybackPhase::Playing;
            m.state.is_playing = true;
        });
        self.dispatch( RendererCommand::Start).await
    }

    pub async fn pause (&self) {
        self.update( |m| {
            if m.phase != PlaybackPhase::Stopped { m.phase = PlaybackPhase::Paused }
            m.state.is_playing = false;
        });
        self.dispatch( RendererCommand::Pause).await
    }

    pub async fn toggle_play_pause (&self) {
        if self.snapshot().state.is_playing {
            self.pause().await
        } else {
            self.play().await
        }
    }

    /// the mirror is reset right away, whatever the renderer responds
    pub async fn stop (&self) {
        self.update( |m| {
            m.phase = PlaybackPhase::Stopped;
            m.state.is_playing = false;
            m.state.current_index = 0;
        });
        self.dispatch( RendererCommand::Stop).await
    }

    /// does not wait for the renderer to confirm the new position
    pub async fn scrub (&self, index: usize) {
        let index = index.min( self.track_len.saturating_sub(1));
        self.update( |m| m.state.current_index = index);
        self.dispatch( RendererCommand::Seek(index)).await
    }

    // step commands do not touch the local index. The renderer clamps at the track ends and we learn the
    // outcome with the next poll

    pub async fn step_forward (&self) {
        self.step( RendererCommand::StepForward).await
    }

    pub async fn step_backward (&self) {
        self.step( RendererCommand::StepBackward).await
    }

    pub async fn set_speed (&self, multiplier: f64) {
        let speed = clamp_speed(multiplier);
        self.update( |m| m.state.speed_multiplier = speed);
        self.dispatch( RendererCommand::SetSpeed(speed)).await
    }

    pub async fn set_follow (&self, follow: bool) {
        self.update( |m| m.state.follow_mode = follow);
        self.dispatch( RendererCommand::SetFollow(follow)).await
    }

    //--- internals

    fn update<F> (&self, f: F) where F: FnOnce(&mut PlaybackMirror) {
        self.state.send_if_modified( |s| {
            s.revision += 1;
            let before = s.mirror.clone();
            f(&mut s.mirror);
            s.mirror != before
        });
    }

    async fn step (&self, cmd: RendererCommand) {
        self.dispatch(cmd).await;
        self.state.send_if_modified( |s| {
            s.revision += 1;
            s.refresh_pending = true;
            false
        });
    }

    /// bridge failures never reach the caller
    async fn dispatch (&self, cmd: RendererCommand) {
        match timeout( self.command_timeout, cmd.send_to( self.bridge.as_ref())).await {
            Ok(Ok(())) => debug!("renderer accepted {cmd}"),
            Ok(Err(e)) => warn!("renderer command {cmd} failed: {e}"),
            Err(_) => warn!("renderer command {cmd} timed out after {:?}", self.command_timeout)
        }
    }
}
