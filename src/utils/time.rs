//! Time utilities: reference-zone conversion, swipe timestamps and
//! section labels.
//!
//! Every instant is captured once in UTC and converted once to the
//! fixed reference zone, regardless of where the terminal runs.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

/// All timestamps and section labels use this zone.
pub const REFERENCE_ZONE: Tz = New_York;

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

fn to_reference(utc: DateTime<Utc>) -> DateTime<Tz> {
    utc.with_timezone(&REFERENCE_ZONE)
}

/// Human-readable swipe timestamp, e.g. "Sat, 20 Dec 25, 01:07 PM".
pub fn format_swipe_timestamp(utc: DateTime<Utc>) -> String {
    to_reference(utc).format("%a, %d %b %y, %I:%M %p").to_string()
}

/// Section label from a sign-in instant: weekday abbreviation plus
/// "AM" before noon reference time, "PM" after, e.g. "Mon AM".
pub fn section_label(utc: DateTime<Utc>) -> String {
    let local = to_reference(utc);
    let half = if local.hour() < 12 { "AM" } else { "PM" };
    format!("{} {}", local.format("%a"), half)
}
