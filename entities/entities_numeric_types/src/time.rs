//! Time Interval Module
//!
//! Provides the coarse time-interval record (whole seconds plus
//! microseconds) used where the runtime needs a portable interval value.

use std::time::Duration;

/// Microseconds in one second
pub const MICROS_PER_SECOND: i64 = 1_000_000;

/// Whole seconds plus microseconds
///
/// `0 <= microseconds < 1_000_000` by convention; nothing enforces it until
/// [`TimeInterval::normalized`] is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeInterval {
    pub seconds: i64,
    pub microseconds: i64,
}

impl TimeInterval {
    pub const ZERO: TimeInterval = TimeInterval { seconds: 0, microseconds: 0 };

    pub const fn new(seconds: i64, microseconds: i64) -> Self {
        Self { seconds, microseconds }
    }

    /// Convert from a `Duration`, truncating to microseconds
    ///
    /// Returns `None` if the seconds do not fit in an `i64`.
    pub fn from_duration(duration: Duration) -> Option<Self> {
        let seconds = i64::try_from(duration.as_secs()).ok()?;
        Some(Self::new(seconds, duration.subsec_micros() as i64))
    }

    /// Convert to a `Duration`
    ///
    /// Returns `None` for negative intervals.
    pub fn to_duration(self) -> Option<Duration> {
        let n = self.normalized();
        if n.seconds < 0 {
            return None;
        }
        Some(Duration::from_secs(n.seconds as u64) + Duration::from_micros(n.microseconds as u64))
    }

    /// Carry whole seconds out of the microseconds field so that
    /// `0 <= microseconds < 1_000_000`
    pub fn normalized(self) -> Self {
        let carry = self.microseconds.div_euclid(MICROS_PER_SECOND);
        Self {
            seconds: self.seconds.saturating_add(carry),
            microseconds: self.microseconds.rem_euclid(MICROS_PER_SECOND),
        }
    }

    /// Total length in microseconds
    pub fn as_micros(self) -> i128 {
        self.seconds as i128 * MICROS_PER_SECOND as i128 + self.microseconds as i128
    }
}
