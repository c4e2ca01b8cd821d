//! Time Shim Module
//!
//! Provides the portable time-interval record and the width of its seconds
//! field. On Unix the host's `timeval` is the native record and its
//! `time_t` decides the width; elsewhere the fallback record is used with a
//! fixed 64-bit seconds field, which does not overflow in 2038.

use entities_numeric_types::{BitWidth, BoundsPair, IntegerTypeDescriptor, NumericError, TimeInterval};
use infrastructure_bounds_calculator::BoundsCalculator;
use malachite::Integer;

/// Seconds-field width of the fallback record
pub const FALLBACK_SECONDS_WIDTH: BitWidth = BitWidth::W64;

/// Which record supplies time intervals on this host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// The host's own `timeval`
    Native,
    /// The fallback record
    Fallback,
}

/// Record in use on this host
pub fn time_source() -> TimeSource {
    if cfg!(unix) {
        TimeSource::Native
    } else {
        TimeSource::Fallback
    }
}

/// A zero interval
pub fn default_time_interval() -> TimeInterval {
    TimeInterval::default()
}

/// Bits occupied by the seconds component of the record in use
pub fn seconds_field_width() -> BitWidth {
    match time_source() {
        TimeSource::Native => native_seconds_width(),
        TimeSource::Fallback => FALLBACK_SECONDS_WIDTH,
    }
}

#[cfg(unix)]
fn native_seconds_width() -> BitWidth {
    BitWidth::of::<libc::time_t>()
}

#[cfg(not(unix))]
fn native_seconds_width() -> BitWidth {
    FALLBACK_SECONDS_WIDTH
}

/// Range of whole seconds the record in use can hold
pub fn seconds_bounds() -> Result<BoundsPair, NumericError> {
    let descriptor = IntegerTypeDescriptor::new(seconds_field_width(), true);
    BoundsCalculator::default().bounds_of(&descriptor)
}

/// Whether an interval's seconds fit the record in use
pub fn fits_seconds_field(interval: &TimeInterval) -> Result<bool, NumericError> {
    Ok(seconds_bounds()?.contains(&Integer::from(interval.normalized().seconds)))
}

/// Convert from the host's `timeval`
#[cfg(unix)]
pub fn from_timeval(tv: &libc::timeval) -> TimeInterval {
    TimeInterval::new(tv.tv_sec as i64, tv.tv_usec as i64)
}

/// Convert to the host's `timeval`
///
/// The interval is normalized first. Returns `None` if the seconds do not fit
/// the host's `time_t`.
#[cfg(unix)]
pub fn to_timeval(interval: &TimeInterval) -> Option<libc::timeval> {
    let n = interval.normalized();
    Some(libc::timeval {
        tv_sec: libc::time_t::try_from(n.seconds).ok()?,
        tv_usec: libc::suseconds_t::try_from(n.microseconds).ok()?,
    })
}
