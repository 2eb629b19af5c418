/// Ticks in one revolution of the progress ring.
pub(crate) const SECONDS_PER_MINUTE: u8 = 60;

/// Seconds elapsed in the current minute, owned by the ticker.
///
/// Always in `[0, 60)`: the tick that would reach 60 wraps to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondsCounter {
    value: u8,
}

impl SecondsCounter {
    /// Current count.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Progress through the minute in `[0, 1)`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.value) / f64::from(SECONDS_PER_MINUTE)
    }

    /// Advance by one tick, wrapping at a full minute.
    pub fn advance(&mut self) {
        self.value = (self.value + 1) % SECONDS_PER_MINUTE;
    }
}
