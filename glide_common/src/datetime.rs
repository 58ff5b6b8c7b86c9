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

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::{Deserialize,Serializer,Deserializer};
use std::time::Duration;
use parse_duration::parse;
use tracing::warn;

#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }

/* #region wire timestamps ***************************************************************************************/

/// the suffix that marks a wire timestamp as UTC
pub const UTC_MARKER: char = 'Z';

/// extended ISO-8601 without offset. Renderers (JS Date) only keep millisecond precision
const NAIVE_ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// something that has local wall clock fields. Implementations drop whatever zone or UTC marker the
/// value carries, which is how a pre-existing marker gets stripped before an offset is appended
pub trait WallClock {
    fn wall_clock (&self)->NaiveDateTime;
}

impl WallClock for NaiveDateTime {
    fn wall_clock (&self)->NaiveDateTime { *self }
}

impl<Tz:TimeZone> WallClock for DateTime<Tz> {
    fn wall_clock (&self)->NaiveDateTime { self.naive_local() }
}

/// encode a recorded wall clock time so that a renderer can interpret it unambiguously.
///
/// Without (or with an empty) `utc_offset` the time is taken to be UTC already and gets a 'Z' suffix. Track logs
/// without offset metadata are assumed to be recorded in UTC - callers have to provide the offset otherwise.
///
/// With `utc_offset` the result is the same wall clock time qualified by the normalized `±HH:MM` offset, i.e.
/// this does *not* convert to UTC
pub fn encode_timestamp<T> (ts: &T, utc_offset: Option<&str>)->String where T: WallClock {
    let naive = ts.wall_clock().format(NAIVE_ISO_FORMAT);

    match utc_offset.map(str::trim).filter(|s| !s.is_empty()) {
        None => format!("{naive}{UTC_MARKER}"),
        Some(offset) => format!("{naive}{}", normalize_utc_offset(offset))
    }
}

/// parse an encoded wire timestamp back into its wall clock fields and offset
pub fn decode_timestamp (s: &str)->Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

/// parse offset specs such as "+02:00", "02:00", "-0530", "+2" or "Z"/"UTC". A missing sign defaults to '+'
pub fn parse_utc_offset (spec: &str)->Option<FixedOffset> {
    let s = spec.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("gmt") {
        return FixedOffset::east_opt(0)
    }

    // everything below slices by byte position
    if !s.is_ascii() { return None }

    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => (1, s)
    };

    let (hh, mm) = if let Some((h,m)) = rest.split_once(':') {
        (h,m)
    } else if rest.len() == 4 {
        rest.split_at(2)
    } else {
        (rest, "00")
    };

    let is_digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
    if hh.is_empty() || hh.len() > 2 || mm.len() != 2 || !is_digits(hh) || !is_digits(mm) {
        return None
    }

    let h: i32 = hh.parse().ok()?;
    let m: i32 = mm.parse().ok()?;
    if h > 14 || m > 59 { return None }

    FixedOffset::east_opt( sign * (h*3600 + m*60))
}

/// turn an offset spec into sign-prefixed "±HH:MM". Unparseable specs are passed through verbatim (with a
/// default '+' sign) so that we still produce a best-effort rendering
pub fn normalize_utc_offset (spec: &str)->String {
    match parse_utc_offset(spec) {
        Some(offset) => offset.to_string(), // FixedOffset displays as ±HH:MM
        None => {
            let s = spec.trim();
            warn!("unrecognized UTC offset {s:?}, appending verbatim");
            if s.starts_with(['+','-']) { s.to_string() } else { format!("+{s}") }
        }
    }
}

/* #endregion wire timestamps */

//--- support for serde

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}
