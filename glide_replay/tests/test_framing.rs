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

use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use glide_replay::*;

fn pt (lat: f64, lon: f64, alt: f64, secs: u32)->TrackPoint {
    let timestamp = NaiveDate::from_ymd_opt( 2025, 7, 12).unwrap().and_hms_opt( 13, 0, 0).unwrap() + chrono::Duration::seconds(secs as i64);
    TrackPoint { latitude: lat, longitude: lon, gps_altitude: alt, pressure_altitude: alt - 20.0, timestamp, climb_rate: 0.0, ground_speed: 0.0 }
}

fn sample_track ()->Vec<TrackPoint> {
    vec![
        pt( 46.68, 7.86, 1400.0, 0),
        pt( 46.72, 7.91, 1800.0, 60),
        pt( 46.70, 7.98, 2100.0, 120),
        pt( 46.66, 7.95, 1500.0, 180),
    ]
}

#[test]
fn test_look_at_inside_bbox() {
    let framer = TrackFramer::default();
    let tracks = vec![
        sample_track(),
        vec![ pt( -33.9, 18.4, 300.0, 0), pt( -34.1, 18.6, 900.0, 10)],
        vec![ pt( 0.0, -0.5, 10.0, 0), pt( 0.2, 0.5, 10.0, 10), pt( -0.1, 0.1, 10.0, 20)],
    ];

    for points in &tracks {
        let bbox = track::bounding_box(points).unwrap();
        for mode in [FramingMode::FullScreen, FramingMode::Embedded{altitude: 5000.0}] {
            let frame = framer.compute_frame( points, mode);
            println!("{mode:?} -> {frame:?}");
            assert!( bbox.contains( frame.look_at_lat, frame.look_at_lon));
        }
    }
}

#[test]
fn test_full_screen_shifts_south() {
    let framer = TrackFramer::default();
    let points = sample_track();
    let frame = framer.compute_frame( &points, FramingMode::FullScreen);

    assert_eq!( frame.mode, CameraMode::FullScreen);
    assert_abs_diff_eq!( frame.look_at_lat, 46.66 + 0.45 * 0.06, epsilon = 1e-9);
    assert_abs_diff_eq!( frame.look_at_lon, (7.86 + 7.98) / 2.0, epsilon = 1e-9);
}

#[test]
fn test_altitude_clamp() {
    let framer = TrackFramer::default();

    // degenerate: zero diagonal
    let frame = framer.compute_frame( &[pt( 46.7, 7.9, 1000.0, 0)], FramingMode::FullScreen);
    assert_eq!( frame.altitude_meters, 8000.0);
    assert_eq!( frame.look_at_lat, 46.7);

    // continental
    let frame = framer.compute_frame( &[pt( 36.0, -120.0, 0.0, 0), pt( 48.0, -75.0, 0.0, 10)], FramingMode::FullScreen);
    assert_eq!( frame.altitude_meters, 60000.0);

    // a ~10km track lands in between
    let frame = framer.compute_frame( &sample_track(), FramingMode::FullScreen);
    assert!( frame.altitude_meters > 8000.0 && frame.altitude_meters < 60000.0, "altitude {}", frame.altitude_meters);
}

#[test]
fn test_empty_track_fallback() {
    let framer = TrackFramer::default();
    let policy = FramingPolicy::default();

    let frame = framer.compute_frame( &[], FramingMode::FullScreen);
    assert_eq!( frame.look_at_lat, policy.fallback_lat);
    assert_eq!( frame.look_at_lon, policy.fallback_lon);
    assert_eq!( frame.altitude_meters, 10000.0);

    let frame = framer.compute_frame( &[], FramingMode::Embedded{ altitude: 3000.0});
    assert_eq!( frame.altitude_meters, 10000.0);
    assert_eq!( frame.mode, CameraMode::Embedded);
}

#[test]
fn test_embedded_uses_caller_altitude() {
    let framer = TrackFramer::default();
    let frame = framer.compute_frame( &sample_track(), FramingMode::Embedded{ altitude: 4200.0});
    assert_eq!( frame.altitude_meters, 4200.0);
    assert_abs_diff_eq!( frame.look_at_lat, 46.69, epsilon = 1e-9);
}

#[test]
fn test_derive_rates() {
    let points = derive_rates( vec![
        pt( 46.0, 8.0, 1000.0, 0),
        pt( 46.001, 8.0, 1010.0, 10), // ~111m north in 10s
        pt( 46.002, 8.0, 1000.0, 10), // no time delta
    ]);

    assert_eq!( points[0].climb_rate, 0.0);
    assert_eq!( points[0].ground_speed, 0.0);

    assert_abs_diff_eq!( points[1].climb_rate, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!( points[1].ground_speed, 40.0, epsilon = 0.5); // 11.1 m/s

    assert_eq!( points[2].climb_rate, 0.0);
    assert_eq!( points[2].ground_speed, 0.0);
}

#[test]
fn test_replay_config() {
    let config = ReplayConfig::load( Some("config/replay.ron")).unwrap();
    assert_eq!( config.poll_interval, std::time::Duration::from_millis(100));
    assert_eq!( config.framing, FramingPolicy::default());

    let config = ReplayConfig::load::<&str>( None).unwrap();
    assert_eq!( config.default_embedded_altitude, 10000.0);
    assert!( matches!( config.embedded_mode(), FramingMode::Embedded{ altitude } if altitude == 10000.0));
}
