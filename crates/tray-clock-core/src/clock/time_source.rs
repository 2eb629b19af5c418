use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// The ticker reads time through this trait so a fixed instant can be
/// substituted in tests.
pub trait TimeSource {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock [`TimeSource`] backed by the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
