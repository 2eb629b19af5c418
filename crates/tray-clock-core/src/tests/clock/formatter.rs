use crate::{SystemClock, TimeSource, Timezone, format_time, format_time_at};

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

// 2024-01-15 02:30:45 UTC
const WINTER_INSTANT_SECS: i64 = 1_705_285_845;
// 2024-07-15 02:30:45 UTC
const SUMMER_INSTANT_SECS: i64 = 1_721_010_645;

fn instant(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH)
}

fn assert_clock_shape(text: &str) {
    let parts: Vec<&str> = text.split(':').collect();
    assert_eq!(parts.len(), 3, "Expected HH:MM:SS, got {}", text);
    for part in &parts {
        assert_eq!(part.len(), 2, "Expected two digits in {}", text);
        assert!(part.chars().all(|c| c.is_ascii_digit()), "Non-digit in {}", text);
    }

    let hours: u32 = parts[0].parse().unwrap_or(u32::MAX);
    let minutes: u32 = parts[1].parse().unwrap_or(u32::MAX);
    let seconds: u32 = parts[2].parse().unwrap_or(u32::MAX);
    assert!(hours <= 23, "Hours out of range in {}", text);
    assert!(minutes <= 59, "Minutes out of range in {}", text);
    assert!(seconds <= 59, "Seconds out of range in {}", text);
}

/// WHAT: Wall-clock formatting yields HH:MM:SS for every supported zone
/// WHY: The tray title must always be a well-formed 24-hour time
#[test]
fn given_valid_timezones_when_formatting_now_then_zero_padded_24_hour_time() {
    for id in [
        "Local",
        "Asia/Ho_Chi_Minh",
        "Australia/Sydney",
        "America/Mexico_City",
        "America/Los_Angeles",
        "UTC",
    ] {
        // Given/When: Formatting the current instant
        let text = format_time(id);

        // Then: The shape is HH:MM:SS with in-range fields
        assert_clock_shape(&text);
    }
}

/// WHAT: Fixed instants format into the expected local wall time
/// WHY: Verifies offset conversion including daylight saving
#[test]
fn given_fixed_instant_when_formatting_in_zones_then_offsets_applied() {
    // Given: A January and a July instant
    let winter = instant(WINTER_INSTANT_SECS);
    let summer = instant(SUMMER_INSTANT_SECS);

    // When/Then: Ho Chi Minh is UTC+7 all year
    let hcm = Timezone::Zone(Tz::Asia__Ho_Chi_Minh);
    assert_eq!(format_time_at(&hcm, winter), "09:30:45");
    assert_eq!(format_time_at(&hcm, summer), "09:30:45");

    // When/Then: Sydney is UTC+11 in January (DST) and UTC+10 in July
    let sydney = Timezone::Zone(Tz::Australia__Sydney);
    assert_eq!(format_time_at(&sydney, winter), "13:30:45");
    assert_eq!(format_time_at(&sydney, summer), "12:30:45");

    // When/Then: Los Angeles is UTC-8 in January and UTC-7 in July
    let la = Timezone::Zone(Tz::America__Los_Angeles);
    assert_eq!(format_time_at(&la, winter), "18:30:45");
    assert_eq!(format_time_at(&la, summer), "19:30:45");

    // When/Then: Mexico City has no DST, UTC-6
    let mexico = Timezone::Zone(Tz::America__Mexico_City);
    assert_eq!(format_time_at(&mexico, summer), "20:30:45");
}

/// WHAT: Same instant formats identically; one second later advances by one second
/// WHY: Title updates must be stable within a tick and step exactly per tick
#[test]
#[allow(clippy::unwrap_used)]
fn given_consecutive_seconds_when_formatting_then_exactly_one_second_apart() {
    // Given: An instant and the instant one second later
    let sydney = Timezone::Zone(Tz::Australia__Sydney);
    let t0 = instant(WINTER_INSTANT_SECS);
    let t1 = t0 + Duration::seconds(1);

    // When: Formatting both, the first twice
    let first = format_time_at(&sydney, t0);
    let again = format_time_at(&sydney, t0);
    let next = format_time_at(&sydney, t1);

    // Then: Idempotent within the second and +1s afterwards
    assert_eq!(first, again);
    let a = NaiveTime::parse_from_str(&first, "%H:%M:%S").unwrap();
    let b = NaiveTime::parse_from_str(&next, "%H:%M:%S").unwrap();
    assert_eq!(b - a, Duration::seconds(1));
}

/// WHAT: 23:59:59 rolls over to 00:00:00
/// WHY: Day rollover wraps the clock rather than producing 24:00:00
#[test]
fn given_last_second_of_day_when_advancing_then_midnight() {
    // Given: 23:59:59 UTC
    let utc = Timezone::Zone(Tz::UTC);
    let before = instant(86_400 * 19_737 - 1);

    // When: Formatting it and the next second
    let last = format_time_at(&utc, before);
    let midnight = format_time_at(&utc, before + Duration::seconds(1));

    // Then: The day wraps
    assert_eq!(last, "23:59:59");
    assert_eq!(midnight, "00:00:00");
}

/// WHAT: Unknown identifiers format in UTC
/// WHY: Resolution failure degrades to a documented fallback instead of aborting
#[test]
fn given_unknown_identifier_when_formatting_then_matches_utc() {
    // Given: An unknown identifier and UTC, sampled around the same second
    let before = format_time("UTC");
    let fallback = format_time("Nowhere/Special");
    let after = format_time("UTC");

    // Then: The fallback equals one of the UTC samples
    assert!(
        fallback == before || fallback == after,
        "Expected {} or {}, got {}",
        before,
        after,
        fallback
    );
}

/// WHAT: Local sentinel formats with the operating system zone
/// WHY: "Local time" must follow the machine's own timezone
#[test]
fn given_local_sentinel_when_formatting_then_matches_chrono_local() {
    // Given: A fixed instant
    let now = SystemClock.now();

    // When: Formatting with the Local variant
    let text = format_time_at(&Timezone::Local, now);

    // Then: It equals chrono's local conversion
    let expected = now.with_timezone(&chrono::Local).format("%H:%M:%S").to_string();
    assert_eq!(text, expected);
}
