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

//! compute the initial camera frame and the renderer payload for a stored track

#[macro_use]
extern crate lazy_static;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use glide_replay::{
    ReplayConfig, ReplayError, FramingMode, JsonFileTrackProvider, TrackProvider, ReplayPayload, derive_rates
};

#[derive(ValueEnum,Debug,Clone,Copy)]
enum Mode {
    Embedded,
    Full
}

#[derive(Parser,Debug)]
#[command(version, about, long_about = "compute camera frame and renderer payload for a <track_id>.json track file")]
struct Args {
    /// RON replay config (defaults are used if not set)
    #[arg(short,long)]
    config: Option<String>,

    #[arg(short,long, value_enum, default_value_t = Mode::Full)]
    mode: Mode,

    /// camera altitude for embedded mode, overrides config
    #[arg(short,long)]
    altitude: Option<f64>,

    /// compute climb rate and ground speed from consecutive fixes
    #[arg(long)]
    derive_rates: bool,

    /// print the full payload, not only the camera frame
    #[arg(short,long)]
    payload: bool,

    /// directory with track files
    track_dir: String,

    track_id: String,
}

lazy_static! {
    static ref ARGS: Args = Args::parse();
}

#[tokio::main]
async fn main ()->Result<()> {
    glide_common::init_tracing();

    let config = ReplayConfig::load( ARGS.config.as_ref())?;
    let framer = config.framer();
    let mode = match ARGS.mode {
        Mode::Full => FramingMode::FullScreen,
        Mode::Embedded => FramingMode::Embedded { altitude: ARGS.altitude.unwrap_or( config.default_embedded_altitude) }
    };

    let provider = JsonFileTrackProvider::new( &ARGS.track_dir);
    let mut track = provider.load_track( &ARGS.track_id).await?
        .ok_or_else(|| ReplayError::TrackUnavailable( ARGS.track_id.clone()))?;

    if ARGS.derive_rates {
        track.points = derive_rates( std::mem::take(&mut track.points));
    }

    let frame = framer.compute_frame( &track.points, mode);
    println!("{}", serde_json::to_string_pretty(&frame)?);

    if ARGS.payload {
        let payload = ReplayPayload::build( &track, &frame);
        println!("{}", payload.to_json_pretty()?);
    }

    Ok(())
}
