//! Date/time helpers shared by the shift engine, the CLI and exports.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike};

/// Accepted shapes for shift boundaries without an explicit offset.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a persisted ISO datetime into local wall-clock time.
///
/// RFC 3339 strings (with `Z` or an offset) are converted to the local zone;
/// strings without an offset are taken as local already. Returns `None` for
/// anything else so callers can leave the record out instead of failing.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// en-US style `toLocaleString`, e.g. `10/16/2026, 2:05:00 PM`.
pub fn to_locale_string(dt: &NaiveDateTime) -> String {
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Short human form of an epoch-ms timestamp, e.g. `Fri, Oct 16, 2:05 PM`.
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%a, %b %-d, %-I:%M %p").to_string(),
        None => "-".to_string(),
    }
}

/// Local hour of day (0-23) of an epoch-ms timestamp.
pub fn hour_of_day(millis: i64) -> Option<u32> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.hour())
}
