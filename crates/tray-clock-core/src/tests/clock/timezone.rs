use crate::{ClockError, LOCAL_TIMEZONE_ID, Timezone};

use chrono_tz::Tz;

const MENU_TIMEZONE_IDS: [&str; 5] = [
    LOCAL_TIMEZONE_ID,
    "Asia/Ho_Chi_Minh",
    "Australia/Sydney",
    "America/Mexico_City",
    "America/Los_Angeles",
];

/// WHAT: Every identifier offered by the tray menu resolves
/// WHY: Selection must never produce an unresolvable timezone
#[test]
#[allow(clippy::unwrap_used)]
fn given_menu_identifiers_when_resolving_then_all_succeed_and_round_trip() {
    for id in MENU_TIMEZONE_IDS {
        // Given: An identifier from the menu

        // When: Resolving it strictly
        let timezone = Timezone::resolve(id).unwrap();

        // Then: The canonical identifier matches the input
        assert_eq!(timezone.id(), id);
        assert_eq!(timezone.to_string(), id);
    }
}

/// WHAT: The local sentinel maps to the Local variant
/// WHY: Local time uses the operating system zone, not a database key
#[test]
#[allow(clippy::unwrap_used)]
fn given_local_sentinel_when_resolving_then_local_variant() {
    // Given/When: Resolving the sentinel
    let timezone = Timezone::resolve(LOCAL_TIMEZONE_ID).unwrap();

    // Then: It is the Local variant, which is also the default
    assert_eq!(timezone, Timezone::Local);
    assert_eq!(Timezone::default(), Timezone::Local);
}

/// WHAT: Unknown identifiers are rejected by strict resolution
/// WHY: Bad keys must surface as errors rather than an undefined zone
#[test]
fn given_unknown_identifier_when_resolving_then_unknown_timezone_error() {
    // Given: A key that is not in the timezone database
    let id = "Mars/Olympus_Mons";

    // When: Resolving strictly
    let result = Timezone::resolve(id);

    // Then: UnknownTimezone carries the offending id
    assert!(matches!(
        result,
        Err(ClockError::UnknownTimezone { ref id, .. }) if id == "Mars/Olympus_Mons"
    ));
}

/// WHAT: Lenient resolution falls back to UTC
/// WHY: The formatter must degrade deterministically instead of aborting
#[test]
fn given_unknown_identifier_when_resolving_leniently_then_utc() {
    // Given: Keys the database does not know, including the lowercase sentinel
    for id in ["Mars/Olympus_Mons", "", "local"] {
        // When: Resolving with fallback
        let timezone = Timezone::resolve_or_utc(id);

        // Then: UTC is used
        assert_eq!(timezone, Timezone::Zone(Tz::UTC));
    }
}
