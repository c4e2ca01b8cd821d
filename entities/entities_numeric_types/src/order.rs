//! Byte Order Module
//!
//! Provides the host facts the codec and calculator are parameterized by
//! (byte order, signed-integer representation) and the tagged fixed-width
//! value that crosses the serialization boundary.

use std::fmt;

use crate::error::NumericError;
use crate::width::{BitWidth, BYTE_BITS};

/// Byte order of a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first. This is also the canonical order.
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the host this code was compiled for
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    /// Whether values in this order are already canonical
    pub fn is_canonical(self) -> bool {
        self == ByteOrder::BigEndian
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::BigEndian => f.write_str("big-endian"),
            ByteOrder::LittleEndian => f.write_str("little-endian"),
        }
    }
}

/// Encoding of negative numbers on a host
///
/// The two encodings give the same bit patterns for the extremes of a width
/// but read the sign-bit-only pattern differently, so bounds derived under
/// one must never be used under the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignedRepresentation {
    /// Sign-bit-only pattern is `-2^(w-1)`
    TwosComplement,
    /// Sign-bit-only pattern is `-(2^(w-1) - 1)`; negative zero exists
    OnesComplement,
}

impl fmt::Display for SignedRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignedRepresentation::TwosComplement => f.write_str("two's complement"),
            SignedRepresentation::OnesComplement => f.write_str("one's complement"),
        }
    }
}

/// Which order an [`EndianValue`] is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueOrder {
    Native,
    Canonical,
}

/// A 16, 32 or 64 bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordBits {
    Bits16(u16),
    Bits32(u32),
    Bits64(u64),
}

impl WordBits {
    /// Build a pattern of the given width from a zero-extended value
    ///
    /// # Returns
    /// * `Err(NumericError::UnavailableWidth)` - width is the sentinel
    /// * `Err(NumericError::UnsupportedCodecWidth)` - width is not 16, 32 or 64
    /// * `Err(NumericError::ValueOutOfRange)` - value has bits above the width
    pub fn from_u64(value: u64, width: BitWidth) -> Result<Self, NumericError> {
        let out_of_range = || NumericError::ValueOutOfRange { value: i128::from(value), width };
        match width.require_bits()? {
            16 => u16::try_from(value).map(WordBits::Bits16).map_err(|_| out_of_range()),
            32 => u32::try_from(value).map(WordBits::Bits32).map_err(|_| out_of_range()),
            64 => Ok(WordBits::Bits64(value)),
            _ => Err(NumericError::UnsupportedCodecWidth(width)),
        }
    }

    pub fn width(self) -> BitWidth {
        match self {
            WordBits::Bits16(_) => BitWidth::W16,
            WordBits::Bits32(_) => BitWidth::W32,
            WordBits::Bits64(_) => BitWidth::W64,
        }
    }

    /// Zero-extended value
    pub fn to_u64(self) -> u64 {
        match self {
            WordBits::Bits16(v) => v as u64,
            WordBits::Bits32(v) => v as u64,
            WordBits::Bits64(v) => v,
        }
    }

    /// Bytes of this pattern as stored by a host of the given order
    pub fn layout(self, order: ByteOrder) -> Vec<u8> {
        match (self, order) {
            (WordBits::Bits16(v), ByteOrder::BigEndian) => v.to_be_bytes().to_vec(),
            (WordBits::Bits16(v), ByteOrder::LittleEndian) => v.to_le_bytes().to_vec(),
            (WordBits::Bits32(v), ByteOrder::BigEndian) => v.to_be_bytes().to_vec(),
            (WordBits::Bits32(v), ByteOrder::LittleEndian) => v.to_le_bytes().to_vec(),
            (WordBits::Bits64(v), ByteOrder::BigEndian) => v.to_be_bytes().to_vec(),
            (WordBits::Bits64(v), ByteOrder::LittleEndian) => v.to_le_bytes().to_vec(),
        }
    }

    /// Read a pattern of `width` bits from bytes as stored by a host of the
    /// given order
    ///
    /// # Returns
    /// * `Err(NumericError::UnavailableWidth)` - width is the sentinel
    /// * `Err(NumericError::UnsupportedCodecWidth)` - width is not 16, 32 or 64
    /// * `Err(NumericError::ByteCountMismatch)` - `bytes` is not `width` long
    pub fn from_layout(bytes: &[u8], order: ByteOrder, width: BitWidth) -> Result<Self, NumericError> {
        let bits = width.require_bits()?;
        if !matches!(bits, 16 | 32 | 64) {
            return Err(NumericError::UnsupportedCodecWidth(width));
        }
        let expected = (bits / BYTE_BITS) as usize;
        if bytes.len() != expected {
            return Err(NumericError::ByteCountMismatch { expected, actual: bytes.len() });
        }
        let mut buf = [0u8; 8];
        let value = match order {
            ByteOrder::BigEndian => {
                buf[8 - expected..].copy_from_slice(bytes);
                u64::from_be_bytes(buf)
            }
            ByteOrder::LittleEndian => {
                buf[..expected].copy_from_slice(bytes);
                u64::from_le_bytes(buf)
            }
        };
        Self::from_u64(value, width)
    }
}

/// Fixed-width bit pattern tagged with its current order
///
/// Created at the serialization boundary and consumed immediately by the
/// codec. Copied by value. The pattern is held the way a host of
/// `host_order` keeps it in memory, so the value knows its own wire bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndianValue {
    bits: WordBits,
    order: ValueOrder,
    host_order: ByteOrder,
}

impl EndianValue {
    pub fn native(bits: WordBits, host_order: ByteOrder) -> Self {
        Self { bits, order: ValueOrder::Native, host_order }
    }

    pub fn canonical(bits: WordBits, host_order: ByteOrder) -> Self {
        Self { bits, order: ValueOrder::Canonical, host_order }
    }

    pub fn bits(&self) -> WordBits {
        self.bits
    }

    pub fn order(&self) -> ValueOrder {
        self.order
    }

    /// Byte order of the host whose memory layout `bits` follows
    pub fn host_order(&self) -> ByteOrder {
        self.host_order
    }

    pub fn width(&self) -> BitWidth {
        self.bits.width()
    }

    pub fn is_canonical(&self) -> bool {
        self.order == ValueOrder::Canonical
    }

    /// Bytes that leave the process when this canonical value is written
    /// out of memory as-is
    ///
    /// Most significant byte first whichever host produced the value.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, NumericError> {
        if !self.is_canonical() {
            return Err(NumericError::NotCanonical);
        }
        Ok(self.bits.layout(self.host_order))
    }
}
