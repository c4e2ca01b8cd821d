//! Bit Pattern Module
//!
//! Provides the two bit patterns every bound is derived from, for any width.
//! Patterns are unsigned; signedness is applied when a pattern is read back
//! as a value.

use malachite::base::num::logic::traits::LowMask;
use malachite::Natural;

use entities_numeric_types::{BitWidth, NumericError};

/// Every bit of `width` set
pub fn all_ones_pattern(width: BitWidth) -> Result<Natural, NumericError> {
    let bits = width.require_bits()?;
    Ok(Natural::low_mask(u64::from(bits)))
}

/// Only the most significant bit of `width` set
///
/// Derived as `all_ones ^ (all_ones >> 1)`.
pub fn msb_pattern(width: BitWidth) -> Result<Natural, NumericError> {
    let all_ones = all_ones_pattern(width)?;
    let shifted = &all_ones >> 1u64;
    Ok(&all_ones ^ &shifted)
}
