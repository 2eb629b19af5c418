use crate::clock::{SystemClock, TimeSource, Timezone};

use chrono::{DateTime, Utc};

/// 24-hour, zero-padded `HH:MM:SS`.
const TIME_FORMAT: &str = "%H:%M:%S";

/// Current wall-clock time in the given timezone as `HH:MM:SS`.
///
/// Unknown identifiers are logged and formatted in UTC.
pub fn format_time(timezone_id: &str) -> String {
    format_time_at(&Timezone::resolve_or_utc(timezone_id), SystemClock.now())
}

/// Format `instant` in `timezone` as `HH:MM:SS`.
pub fn format_time_at(timezone: &Timezone, instant: DateTime<Utc>) -> String {
    match timezone {
        Timezone::Local => instant
            .with_timezone(&chrono::Local)
            .format(TIME_FORMAT)
            .to_string(),
        Timezone::Zone(tz) => instant.with_timezone(tz).format(TIME_FORMAT).to_string(),
    }
}
