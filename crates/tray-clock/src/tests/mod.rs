
use chrono::{DateTime, TimeZone, Utc};
use tray_clock_core::TimeSource;

/// 2024-01-15 02:30:45 UTC.
pub(crate) const FIXED_INSTANT_SECS: i64 = 1_705_285_845;

/// Time source frozen at a single instant.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_secs(secs: i64) -> Self {
        Self(
            Utc.timestamp_opt(secs, 0)
                .single()
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        )
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
