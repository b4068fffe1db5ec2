// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Timestamp rendering.
//!
//! Timestamps look like `2024-08-11T22:44:57.172+08:00`: millisecond precision, followed by
//! the **standard** UTC offset of the time zone. While daylight saving time is in effect the
//! rendered offset stays at the zone's standard offset, and the wall clock is shifted to
//! match it.

use jiff::SignedDuration;
use jiff::Timestamp;
use jiff::tz::Offset;
use jiff::tz::TimeZone;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3f%:z";

// Far enough from any instant to land outside its daylight saving period.
const PROBE_HOURS: [i64; 4] = [182 * 24, -182 * 24, 91 * 24, -91 * 24];

/// Render the current instant in the system time zone.
pub fn now() -> String {
    format_timestamp(Timestamp::now(), &TimeZone::system())
}

/// Render `ts` using the standard offset of `tz`.
pub fn format_timestamp(ts: Timestamp, tz: &TimeZone) -> String {
    format_with_offset(ts, standard_offset(tz, ts))
}

/// Render `ts` at a fixed `offset`.
pub fn format_with_offset(ts: Timestamp, offset: Offset) -> String {
    ts.to_zoned(TimeZone::fixed(offset))
        .strftime(TIMESTAMP_FORMAT)
        .to_string()
}

/// The standard (non-DST) offset of `tz` around the instant `ts`.
///
/// If `ts` falls in daylight saving time, nearby instants are probed until one in standard
/// time is found. Zones with no standard period in reach keep the offset at `ts`.
pub fn standard_offset(tz: &TimeZone, ts: Timestamp) -> Offset {
    let info = tz.to_offset_info(ts);
    if !info.dst().is_dst() {
        return info.offset();
    }

    PROBE_HOURS
        .into_iter()
        .filter_map(|hours| ts.checked_add(SignedDuration::from_hours(hours)).ok())
        .map(|probe| tz.to_offset_info(probe))
        .find(|probe| !probe.dst().is_dst())
        .map(|probe| probe.offset())
        .unwrap_or_else(|| info.offset())
}
