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

use chrono::{NaiveDate, NaiveDateTime, DateTime, Utc, Datelike, Timelike};
use glide_common::datetime::*;

// run with "cargo test -p glide_common --test test_datetime -- --nocapture"

fn recorded_time()->NaiveDateTime {
    NaiveDate::from_ymd_opt( 2024, 7, 14).unwrap().and_hms_opt( 13, 42, 7).unwrap()
}

fn assert_same_wall_clock (encoded: &str, ts: &NaiveDateTime) {
    let decoded = decode_timestamp(encoded).expect("encoded timestamp does not parse");
    let wall = decoded.naive_local();
    assert_eq!( (wall.year(), wall.month(), wall.day()), (ts.year(), ts.month(), ts.day()));
    assert_eq!( (wall.hour(), wall.minute(), wall.second()), (ts.hour(), ts.minute(), ts.second()));
}

#[test]
fn test_utc_without_offset() {
    let ts = recorded_time();

    for offset in [None, Some(""), Some("  ")] {
        let s = encode_timestamp( &ts, offset);
        println!("{offset:?} -> {s}");
        assert!( s.ends_with(UTC_MARKER));
        assert_eq!( s, "2024-07-14T13:42:07.000Z");
        assert_same_wall_clock( &s, &ts);
    }
}

#[test]
fn test_offset_is_not_converted() {
    let ts = recorded_time();
    let s = encode_timestamp( &ts, Some("+02:00"));
    assert_eq!( s, "2024-07-14T13:42:07.000+02:00");
    assert_same_wall_clock( &s, &ts);

    let decoded = decode_timestamp(&s).unwrap();
    assert_eq!( decoded.offset().local_minus_utc(), 7200);
    assert_eq!( decoded.with_timezone(&Utc).hour(), 11);
}

#[test]
fn test_sign_defaulting_is_idempotent() {
    let ts = recorded_time();
    assert_eq!( encode_timestamp( &ts, Some("02:00")), encode_timestamp( &ts, Some("+02:00")));
    assert_eq!( encode_timestamp( &ts, Some("-07:00")), "2024-07-14T13:42:07.000-07:00");
}

#[test]
fn test_existing_marker_is_stripped() {
    let utc: DateTime<Utc> = recorded_time().and_utc();
    let s = encode_timestamp( &utc, Some("1"));
    assert_eq!( s, "2024-07-14T13:42:07.000+01:00");
    assert_eq!( s.matches(UTC_MARKER).count(), 0);
}

#[test]
fn test_millis_survive() {
    let ts = NaiveDate::from_ymd_opt( 2023, 12, 31).unwrap().and_hms_milli_opt( 23, 59, 59, 250).unwrap();
    let s = encode_timestamp( &ts, Some("-0330"));
    assert_eq!( s, "2023-12-31T23:59:59.250-03:30");
    assert_eq!( decode_timestamp(&s).unwrap().naive_local(), ts);
}

#[test]
fn test_non_ascii_offset_is_appended_verbatim() {
    let ts = recorded_time();
    assert_eq!( encode_timestamp( &ts, Some("+1é2")), "2024-07-14T13:42:07.000+1é2");
    assert!( parse_utc_offset("1é2").is_none());
}
