//! Bounds Pair Module
//!
//! Provides the minimum/maximum pair produced by the bounds calculator.
//!
//! Bounds are held as malachite `Integer` values so that the extremes of any
//! width, including widths wider than the host's own integers, are exact.

use std::fmt;

use malachite::Integer;

/// Minimum and maximum representable value of an integer category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundsPair {
    min: Integer,
    max: Integer,
}

impl BoundsPair {
    pub fn new(min: Integer, max: Integer) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> &Integer {
        &self.min
    }

    pub fn max(&self) -> &Integer {
        &self.max
    }

    /// Whether `value` lies within `[min, max]`
    pub fn contains(&self, value: &Integer) -> bool {
        *value >= self.min && *value <= self.max
    }

    /// Whether an `i128` lies within `[min, max]`
    pub fn contains_i128(&self, value: i128) -> bool {
        self.contains(&Integer::from(value))
    }

    /// Both bounds as `i128`, if they fit
    pub fn to_i128(&self) -> Option<(i128, i128)> {
        let min = i128::try_from(&self.min).ok()?;
        let max = i128::try_from(&self.max).ok()?;
        Some((min, max))
    }

    /// Consume the pair, returning `(min, max)`
    pub fn into_parts(self) -> (Integer, Integer) {
        (self.min, self.max)
    }
}

impl fmt::Display for BoundsPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
