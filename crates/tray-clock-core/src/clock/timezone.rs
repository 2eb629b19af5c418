//! Timezone selection: the local-time sentinel or a timezone database zone.

use crate::{ClockError, CoreResult};

use std::{fmt, panic::Location};

use chrono_tz::Tz;
use error_location::ErrorLocation;
use tracing::warn;

/// Identifier that selects the system's local timezone.
pub const LOCAL_TIMEZONE_ID: &str = "Local";

/// A resolved timezone selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timezone {
    /// The operating system's local timezone.
    #[default]
    Local,
    /// A zone from the IANA timezone database.
    Zone(Tz),
}

impl Timezone {
    /// Resolve an identifier against the timezone database.
    ///
    /// Accepts [`LOCAL_TIMEZONE_ID`] or an IANA key such as `Australia/Sydney`.
    #[track_caller]
    pub fn resolve(id: &str) -> CoreResult<Self> {
        if id == LOCAL_TIMEZONE_ID {
            return Ok(Self::Local);
        }

        id.parse::<Tz>()
            .map(Self::Zone)
            .map_err(|_| ClockError::UnknownTimezone {
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Resolve an identifier, falling back to UTC when it is unknown.
    pub fn resolve_or_utc(id: &str) -> Self {
        match Self::resolve(id) {
            Ok(timezone) => timezone,
            Err(e) => {
                warn!(timezone = id, error = %e, "Unresolved timezone, using UTC");
                Self::Zone(Tz::UTC)
            }
        }
    }

    /// Canonical identifier: `Local` or the IANA key.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Local => LOCAL_TIMEZONE_ID,
            Self::Zone(tz) => tz.name(),
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
