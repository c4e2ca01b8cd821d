//! Numeric Error Module
//!
//! Errors reported to callers that hand the numeric layer an input it cannot
//! work with. These are recoverable: nothing in this layer panics on bad input.

use crate::width::BitWidth;

/// Invalid-input errors for bounds computation and canonical encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// The descriptor carries the "not available on this host" sentinel
    UnavailableWidth,
    /// A width that is zero, negative (other than the sentinel) or not a
    /// multiple of the 8-bit byte
    InvalidWidth(i64),
    /// A valid width the codec has no transform for (only 16, 32 and 64 exist)
    UnsupportedCodecWidth(BitWidth),
    /// The value does not fit in the requested width
    ValueOutOfRange {
        /// Value as supplied by the caller, signed or not
        value: i128,
        /// Width the value was supposed to fit in
        width: BitWidth,
    },
    /// A value handed to a decoder was not in canonical order
    NotCanonical,
    /// A byte sequence of the wrong length for the requested width
    ByteCountMismatch {
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for NumericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericError::UnavailableWidth => {
                write!(f, "Integer category is not available on this host")
            }
            NumericError::InvalidWidth(bits) => {
                write!(f, "Invalid bit width: {} (must be a positive multiple of 8)", bits)
            }
            NumericError::UnsupportedCodecWidth(width) => {
                write!(f, "No canonical transform for {}-bit values", width)
            }
            NumericError::ValueOutOfRange { value, width } => {
                write!(f, "Value {} does not fit in {} bits", value, width)
            }
            NumericError::NotCanonical => write!(f, "Value is not in canonical order"),
            NumericError::ByteCountMismatch { expected, actual } => {
                write!(f, "Expected {} canonical bytes, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for NumericError {}
