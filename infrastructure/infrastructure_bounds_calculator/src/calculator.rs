//! Bounds Calculator Module
//!
//! Provides min/max derivation for an integer category from its bit width
//! and signedness alone.
//!
//! ## Algorithm
//!
//! 1. `all_ones`: every bit of the width set
//! 2. `msb`: `all_ones ^ (all_ones >> 1)`
//! 3. unsigned: `min = 0`, `max = all_ones`
//! 4. signed: `min` is the `msb` pattern read as a signed value and `max` is
//!    the pattern `all_ones - msb`
//!
//! The patterns are the same under two's and one's complement. Only the
//! reading of the `msb` pattern differs (`-2^(w-1)` against
//! `-(2^(w-1) - 1)`), so the calculator is bound to one representation at
//! construction and never mixes them.
//!
//! All arithmetic is on malachite naturals, so the widest negative bound
//! cannot overflow.

use malachite::{Integer, Natural};

use entities_numeric_types::{
    BoundsPair, IntegerTypeDescriptor, NumericError, SignedRepresentation,
};

use crate::patterns::{all_ones_pattern, msb_pattern};

/// Derives bounds under one signed representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsCalculator {
    representation: SignedRepresentation,
}

impl Default for BoundsCalculator {
    fn default() -> Self {
        Self::new(SignedRepresentation::TwosComplement)
    }
}

impl BoundsCalculator {
    pub fn new(representation: SignedRepresentation) -> Self {
        Self { representation }
    }

    pub fn representation(&self) -> SignedRepresentation {
        self.representation
    }

    /// Minimum and maximum representable value of a descriptor
    ///
    /// # Returns
    /// * `Ok(BoundsPair)` - the bounds
    /// * `Err(NumericError::UnavailableWidth)` - the descriptor carries the
    ///   "not available on this host" sentinel
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numeric_types::IntegerTypeDescriptor;
    /// use infrastructure_bounds_calculator::BoundsCalculator;
    ///
    /// let i8_desc = IntegerTypeDescriptor::signed(8).unwrap();
    /// let bounds = BoundsCalculator::default().bounds_of(&i8_desc).unwrap();
    /// assert_eq!(bounds.to_i128(), Some((-128, 127)));
    /// ```
    pub fn bounds_of(&self, descriptor: &IntegerTypeDescriptor) -> Result<BoundsPair, NumericError> {
        let width = descriptor.bit_width();
        tracing::trace!(descriptor = %descriptor, representation = %self.representation, "deriving bounds");
        let all_ones = all_ones_pattern(width)?;

        if !descriptor.is_signed() {
            return Ok(BoundsPair::new(Integer::from(0u32), Integer::from(all_ones)));
        }

        let msb = msb_pattern(width)?;
        let max_pattern = &all_ones - &msb;
        let min = self.read_signed(&msb, &all_ones, &msb);
        let max = self.read_signed(&max_pattern, &all_ones, &msb);
        Ok(BoundsPair::new(min, max))
    }

    /// Read a bit pattern of the width `all_ones` spans as a signed value
    fn read_signed(&self, pattern: &Natural, all_ones: &Natural, msb: &Natural) -> Integer {
        // Sign bit clear: every pattern below msb
        if pattern < msb {
            return Integer::from(pattern.clone());
        }
        match self.representation {
            // pattern - 2^w
            SignedRepresentation::TwosComplement => {
                Integer::from(pattern.clone()) - Integer::from(all_ones.clone()) - Integer::from(1u32)
            }
            // -(!pattern)
            SignedRepresentation::OnesComplement => -Integer::from(all_ones - pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(bits: u32, signed: bool, calc: BoundsCalculator) -> (Integer, Integer) {
        let desc = if signed {
            IntegerTypeDescriptor::signed(bits).unwrap()
        } else {
            IntegerTypeDescriptor::unsigned(bits).unwrap()
        };
        calc.bounds_of(&desc).unwrap().into_parts()
    }

    #[test]
    fn test_unsigned_bounds() {
        let calc = BoundsCalculator::default();
        assert_eq!(bounds(8, false, calc), (Integer::from(0), Integer::from(255)));
        assert_eq!(bounds(16, false, calc), (Integer::from(0), Integer::from(65535)));
    }

    #[test]
    fn test_twos_complement_bounds() {
        let calc = BoundsCalculator::default();
        assert_eq!(bounds(8, true, calc), (Integer::from(-128), Integer::from(127)));
        assert_eq!(bounds(16, true, calc), (Integer::from(-32768), Integer::from(32767)));
        assert_eq!(
            bounds(64, true, calc),
            (Integer::from(i64::MIN), Integer::from(i64::MAX))
        );
    }

    #[test]
    fn test_ones_complement_bounds_are_symmetric() {
        let calc = BoundsCalculator::new(SignedRepresentation::OnesComplement);
        assert_eq!(bounds(8, true, calc), (Integer::from(-127), Integer::from(127)));
        assert_eq!(
            bounds(64, true, calc),
            (Integer::from(-i64::MAX), Integer::from(i64::MAX))
        );
        // Unsigned bounds do not depend on the representation
        assert_eq!(bounds(8, false, calc), (Integer::from(0), Integer::from(255)));
    }

    #[test]
    fn test_sentinel_descriptor_rejected() {
        let desc = IntegerTypeDescriptor::new(entities_numeric_types::BitWidth::UNSUPPORTED, true);
        assert_eq!(
            BoundsCalculator::default().bounds_of(&desc),
            Err(NumericError::UnavailableWidth)
        );
    }
}
