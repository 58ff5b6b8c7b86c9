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

//! run the playback controller against the simulated renderer and log how the mirror follows it

use std::sync::Arc;
use anyhow::Result;
use clap::Parser;
use tokio::time::sleep;
use tracing::info;

use glide_common::datetime::millis;
use glide_replay::{ReplayConfig, PlaybackSyncController, SimRenderer};

#[derive(Parser,Debug)]
#[command(version, about, long_about = "simulated track replay")]
struct Args {
    /// RON replay config (defaults are used if not set)
    #[arg(short,long)]
    config: Option<String>,

    /// number of track points
    #[arg(short,long, default_value_t = 120)]
    n_points: usize,

    /// renderer clock tick in milliseconds
    #[arg(short,long, default_value_t = 50)]
    tick: u64,

    /// simulated renderer round trip latency in milliseconds
    #[arg(short,long, default_value_t = 20)]
    latency: u64,
}

#[tokio::main]
async fn main ()->Result<()> {
    glide_common::init_tracing();
    let args = Args::parse();

    let config = ReplayConfig::load( args.config.as_ref())?;
    let sim = Arc::new( SimRenderer::new( args.n_points).with_latency( millis(args.latency)));
    let clock = sim.spawn_clock( millis(args.tick))?;

    let mut ctrl = PlaybackSyncController::new( sim.clone(), args.n_points, &config);
    ctrl.start_polling()?;

    let mut watch = ctrl.subscribe();
    let watcher = tokio::spawn( async move {
        while let Ok(mirror) = watch.changed().await {
            info!("{:?} index={} speed={} follow={}", mirror.phase, mirror.state.current_index,
                  mirror.state.speed_multiplier, mirror.state.follow_mode);
        }
    });

    ctrl.play().await;
    sleep( millis(1000)).await;

    ctrl.set_speed(4.0).await;
    sleep( millis(500)).await;

    ctrl.pause().await;
    ctrl.step_backward().await;
    sleep( millis(300)).await;

    ctrl.scrub( args.n_points / 2).await;
    ctrl.set_follow(false).await;
    ctrl.play().await;

    // until the renderer stops at the end of the track
    while ctrl.snapshot().state.is_playing {
        sleep( config.poll_interval).await;
    }
    info!("replay finished at index {}", ctrl.snapshot().state.current_index);

    ctrl.stop().await;
    ctrl.stop_polling();
    clock.abort();

    drop(ctrl);
    watcher.await?;
    Ok(())
}
