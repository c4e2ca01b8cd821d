//! Endian Codec Module
//!
//! Provides conversion of 16, 32 and 64-bit values between host order and the
//! canonical big-endian layout used for saved images and network messages.
//!
//! The strategy is fixed when the codec is built from the host byte order:
//! identity on big-endian hosts, full byte reversal on little-endian hosts.
//! Reversal is its own inverse, so both directions use the same transform.
//! Widths are never mixed.
//!
//! Every canonical value remembers the host order of the codec that made it,
//! so its wire bytes are the same whichever host wrote them, and bytes read
//! off the wire are turned back into a canonical value by `read_canonical`.

use std::fmt;

use entities_numeric_types::{
    BitWidth, ByteOrder, EndianValue, IntegerCategory, IntegerTypeDescriptor, NumericError,
    WordBits,
};
use infrastructure_host_probe::WordWidthTable;

use crate::swap::*;

/// How a codec moves between host order and canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapStrategy {
    /// Host is big-endian; nothing to do
    Identity,
    /// Byte reversal by shift-and-mask composition
    ShiftMask,
    /// Byte reversal by the `swap_bytes` intrinsic
    Intrinsic,
}

impl fmt::Display for SwapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapStrategy::Identity => f.write_str("identity"),
            SwapStrategy::ShiftMask => f.write_str("shift-mask"),
            SwapStrategy::Intrinsic => f.write_str("intrinsic"),
        }
    }
}

/// Converts between host order and canonical big-endian order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndianCodec {
    order: ByteOrder,
    strategy: SwapStrategy,
}

impl EndianCodec {
    /// Codec for a host of the given byte order, using the fast reversal path
    pub fn for_order(order: ByteOrder) -> Self {
        let strategy = match order {
            ByteOrder::BigEndian => SwapStrategy::Identity,
            ByteOrder::LittleEndian => SwapStrategy::Intrinsic,
        };
        tracing::trace!(byte_order = %order, strategy = %strategy, "endian codec strategy");
        Self { order, strategy }
    }

    /// Codec for the host this code was compiled for
    pub fn native() -> Self {
        Self::for_order(ByteOrder::native())
    }

    /// Codec with an explicit strategy
    ///
    /// `Identity` serves a big-endian host; either reversal serves a
    /// little-endian one.
    pub fn with_strategy(strategy: SwapStrategy) -> Self {
        let order = match strategy {
            SwapStrategy::Identity => ByteOrder::BigEndian,
            SwapStrategy::ShiftMask | SwapStrategy::Intrinsic => ByteOrder::LittleEndian,
        };
        Self { order, strategy }
    }

    pub fn strategy(&self) -> SwapStrategy {
        self.strategy
    }

    /// Byte order of the host this codec serves
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Apply this codec's transform to a pattern, keeping its width
    pub fn transform(&self, bits: WordBits) -> WordBits {
        match (self.strategy, bits) {
            (SwapStrategy::Identity, bits) => bits,
            (SwapStrategy::ShiftMask, WordBits::Bits16(v)) => WordBits::Bits16(swap16_shift_mask(v)),
            (SwapStrategy::ShiftMask, WordBits::Bits32(v)) => WordBits::Bits32(swap32_shift_mask(v)),
            (SwapStrategy::ShiftMask, WordBits::Bits64(v)) => WordBits::Bits64(swap64_shift_mask(v)),
            (SwapStrategy::Intrinsic, WordBits::Bits16(v)) => WordBits::Bits16(swap16_intrinsic(v)),
            (SwapStrategy::Intrinsic, WordBits::Bits32(v)) => WordBits::Bits32(swap32_intrinsic(v)),
            (SwapStrategy::Intrinsic, WordBits::Bits64(v)) => WordBits::Bits64(swap64_intrinsic(v)),
        }
    }

    /// Convert a host-order value of `width` bits to canonical order
    ///
    /// # Returns
    /// * `Ok(EndianValue)` - canonical value
    /// * `Err(NumericError::UnavailableWidth)` - `width` is the sentinel
    /// * `Err(NumericError::UnsupportedCodecWidth)` - `width` is not 16, 32 or 64
    /// * `Err(NumericError::ValueOutOfRange)` - `value` does not fit in `width`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numeric_types::{BitWidth, ByteOrder};
    /// use infrastructure_endian_codec::EndianCodec;
    ///
    /// let codec = EndianCodec::for_order(ByteOrder::LittleEndian);
    /// let canonical = codec.to_canonical(0x0102_0304, BitWidth::W32).unwrap();
    /// assert_eq!(canonical.bits().to_u64(), 0x0403_0201);
    /// assert_eq!(canonical.canonical_bytes().unwrap(), vec![1, 2, 3, 4]);
    /// assert_eq!(codec.from_canonical(canonical).unwrap(), 0x0102_0304);
    /// ```
    pub fn to_canonical(&self, value: u64, width: BitWidth) -> Result<EndianValue, NumericError> {
        let bits = WordBits::from_u64(value, width)?;
        Ok(self.encode(bits))
    }

    /// Convert a host-order pattern to canonical order
    pub fn encode(&self, bits: WordBits) -> EndianValue {
        EndianValue::canonical(self.transform(bits), self.order)
    }

    /// Convert a canonical value back to host order
    ///
    /// Returns the zero-extended host value, or `NumericError::NotCanonical`
    /// if the value is tagged as already native.
    pub fn from_canonical(&self, value: EndianValue) -> Result<u64, NumericError> {
        Ok(self.decode(value)?.to_u64())
    }

    /// Convert a canonical value back to a host-order pattern
    ///
    /// A value produced for a host of the other byte order is first re-read
    /// from its canonical bytes.
    pub fn decode(&self, value: EndianValue) -> Result<WordBits, NumericError> {
        if !value.is_canonical() {
            return Err(NumericError::NotCanonical);
        }
        if value.host_order() == self.order {
            return Ok(self.transform(value.bits()));
        }
        let bits = WordBits::from_layout(&value.canonical_bytes()?, self.order, value.width())?;
        Ok(self.transform(bits))
    }

    /// Convert a host-order value straight to its canonical byte sequence
    pub fn to_canonical_bytes(&self, value: u64, width: BitWidth) -> Result<Vec<u8>, NumericError> {
        self.to_canonical(value, width)?.canonical_bytes()
    }

    /// Take bytes received from any host as a canonical value of `width` bits
    ///
    /// # Returns
    /// * `Ok(EndianValue)` - canonical value laid out for this codec's host
    /// * `Err(NumericError::UnavailableWidth)` - `width` is the sentinel
    /// * `Err(NumericError::UnsupportedCodecWidth)` - `width` is not 16, 32 or 64
    /// * `Err(NumericError::ByteCountMismatch)` - `bytes` is not `width` long
    pub fn read_canonical(&self, bytes: &[u8], width: BitWidth) -> Result<EndianValue, NumericError> {
        let bits = WordBits::from_layout(bytes, self.order, width)?;
        Ok(EndianValue::canonical(bits, self.order))
    }

    /// Decode a canonical byte sequence of `width` bits to a host value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_numeric_types::{BitWidth, ByteOrder};
    /// use infrastructure_endian_codec::EndianCodec;
    ///
    /// let codec = EndianCodec::for_order(ByteOrder::LittleEndian);
    /// assert_eq!(codec.from_canonical_bytes(&[1, 2, 3, 4], BitWidth::W32).unwrap(), 0x0102_0304);
    /// ```
    pub fn from_canonical_bytes(&self, bytes: &[u8], width: BitWidth) -> Result<u64, NumericError> {
        self.from_canonical(self.read_canonical(bytes, width)?)
    }

    /// Convert a signed host value of `width` bits to canonical order
    ///
    /// The two's complement pattern of `value`, truncated to `width`, is
    /// encoded; `value` must lie within the signed range of `width`.
    pub fn to_canonical_signed(&self, value: i64, width: BitWidth) -> Result<EndianValue, NumericError> {
        let out_of_range = || NumericError::ValueOutOfRange { value: i128::from(value), width };
        let pattern = match width.require_bits()? {
            16 => i16::try_from(value).map_err(|_| out_of_range())? as u16 as u64,
            32 => i32::try_from(value).map_err(|_| out_of_range())? as u32 as u64,
            64 => value as u64,
            _ => return Err(NumericError::UnsupportedCodecWidth(width)),
        };
        self.to_canonical(pattern, width)
    }

    /// Convert a canonical value back to a sign-extended host value
    pub fn from_canonical_signed(&self, value: EndianValue) -> Result<i64, NumericError> {
        Ok(match self.decode(value)? {
            WordBits::Bits16(v) => v as i16 as i64,
            WordBits::Bits32(v) => v as i32 as i64,
            WordBits::Bits64(v) => v as i64,
        })
    }

    /// Convert a value of a described category to canonical order
    ///
    /// Signed descriptors encode the two's complement pattern of `value`, as
    /// [`to_canonical_signed`](Self::to_canonical_signed) does; unsigned ones
    /// reject negative values.
    pub fn to_canonical_descriptor(
        &self,
        value: i128,
        descriptor: &IntegerTypeDescriptor,
    ) -> Result<EndianValue, NumericError> {
        let width = descriptor.bit_width();
        width.require_bits()?;
        let out_of_range = || NumericError::ValueOutOfRange { value, width };
        if descriptor.is_signed() {
            let value = i64::try_from(value).map_err(|_| out_of_range())?;
            self.to_canonical_signed(value, width)
        } else {
            let value = u64::try_from(value).map_err(|_| out_of_range())?;
            self.to_canonical(value, width)
        }
    }

    /// Convert a value of a host category to canonical order, with the width
    /// resolved through the host's width table
    ///
    /// A category the host lacks yields `NumericError::UnavailableWidth`.
    pub fn to_canonical_category(
        &self,
        widths: &WordWidthTable,
        category: IntegerCategory,
        value: u64,
    ) -> Result<EndianValue, NumericError> {
        self.to_canonical(value, widths.width_of(category))
    }

    /// Convert a double to canonical order through its 64-bit holder
    pub fn double_to_canonical(&self, value: f64) -> EndianValue {
        self.encode(WordBits::Bits64(value.to_bits()))
    }

    /// Convert a canonical 64-bit value back to a double
    pub fn double_from_canonical(&self, value: EndianValue) -> Result<f64, NumericError> {
        match self.decode(value)? {
            WordBits::Bits64(bits) => Ok(f64::from_bits(bits)),
            other => Err(NumericError::UnsupportedCodecWidth(other.width())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection() {
        assert_eq!(EndianCodec::for_order(ByteOrder::BigEndian).strategy(), SwapStrategy::Identity);
        assert_eq!(
            EndianCodec::for_order(ByteOrder::LittleEndian).strategy(),
            SwapStrategy::Intrinsic
        );
    }

    #[test]
    fn test_big_endian_is_identity() {
        let codec = EndianCodec::for_order(ByteOrder::BigEndian);
        for width in [BitWidth::W16, BitWidth::W32, BitWidth::W64] {
            let v = codec.to_canonical(0x1234, width).unwrap();
            assert_eq!(v.bits().to_u64(), 0x1234);
            assert_eq!(v.width(), width);
        }
    }

    #[test]
    fn test_little_endian_reverses() {
        let codec = EndianCodec::for_order(ByteOrder::LittleEndian);
        assert_eq!(codec.to_canonical(0x0102, BitWidth::W16).unwrap().bits(), WordBits::Bits16(0x0201));
        assert_eq!(
            codec.to_canonical(0x0102_0304_0506_0708, BitWidth::W64).unwrap().bits(),
            WordBits::Bits64(0x0807_0605_0403_0201)
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        let codec = EndianCodec::native();
        assert_eq!(codec.to_canonical(1, BitWidth::UNSUPPORTED), Err(NumericError::UnavailableWidth));
        assert_eq!(
            codec.to_canonical(1, BitWidth::W8),
            Err(NumericError::UnsupportedCodecWidth(BitWidth::W8))
        );
        let native = EndianValue::native(WordBits::Bits16(1), ByteOrder::native());
        assert_eq!(codec.from_canonical(native), Err(NumericError::NotCanonical));
    }

    #[test]
    fn test_signed_round_trip() {
        let codec = EndianCodec::for_order(ByteOrder::LittleEndian);
        for (value, width) in [(-1i64, BitWidth::W16), (i32::MIN as i64, BitWidth::W32), (i64::MIN, BitWidth::W64)] {
            let canonical = codec.to_canonical_signed(value, width).unwrap();
            assert_eq!(codec.from_canonical_signed(canonical).unwrap(), value);
        }
        assert!(codec.to_canonical_signed(40_000, BitWidth::W16).is_err());
    }

    #[test]
    fn test_signed_out_of_range_reports_the_value() {
        let codec = EndianCodec::for_order(ByteOrder::LittleEndian);
        let err = codec.to_canonical_signed(-40_000, BitWidth::W16).unwrap_err();
        assert_eq!(err, NumericError::ValueOutOfRange { value: -40_000, width: BitWidth::W16 });
        assert_eq!(err.to_string(), "Value -40000 does not fit in 16 bits");
    }

    #[test]
    fn test_descriptor_follows_signedness() {
        let codec = EndianCodec::for_order(ByteOrder::BigEndian);
        let signed = IntegerTypeDescriptor::signed(16).unwrap();
        let unsigned = IntegerTypeDescriptor::unsigned(16).unwrap();

        let minus_one = codec.to_canonical_descriptor(-1, &signed).unwrap();
        assert_eq!(minus_one.bits(), WordBits::Bits16(0xFFFF));
        assert_eq!(codec.from_canonical_signed(minus_one).unwrap(), -1);
        assert_eq!(
            codec.to_canonical_descriptor(40_000, &signed),
            Err(NumericError::ValueOutOfRange { value: 40_000, width: BitWidth::W16 })
        );

        assert_eq!(codec.to_canonical_descriptor(40_000, &unsigned).unwrap().bits(), WordBits::Bits16(40_000));
        assert_eq!(
            codec.to_canonical_descriptor(-1, &unsigned),
            Err(NumericError::ValueOutOfRange { value: -1, width: BitWidth::W16 })
        );
        let absent = IntegerTypeDescriptor::new(BitWidth::UNSUPPORTED, true);
        assert_eq!(codec.to_canonical_descriptor(i128::MAX, &absent), Err(NumericError::UnavailableWidth));
    }

    #[test]
    fn test_with_strategy_implies_byte_order() {
        assert_eq!(EndianCodec::with_strategy(SwapStrategy::Identity).byte_order(), ByteOrder::BigEndian);
        assert_eq!(EndianCodec::with_strategy(SwapStrategy::ShiftMask).byte_order(), ByteOrder::LittleEndian);
        assert_eq!(EndianCodec::with_strategy(SwapStrategy::Intrinsic).byte_order(), ByteOrder::LittleEndian);
    }

    #[test]
    fn test_big_endian_codec_bytes_on_any_machine() {
        let codec = EndianCodec::for_order(ByteOrder::BigEndian);
        let canonical = codec.to_canonical(0x0102_0304, BitWidth::W32).unwrap();
        assert_eq!(canonical.canonical_bytes().unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(codec.to_canonical_bytes(0x0102_0304, BitWidth::W32).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_read_canonical_bytes() {
        let codec = EndianCodec::for_order(ByteOrder::LittleEndian);
        assert_eq!(codec.from_canonical_bytes(&[0x12, 0x34], BitWidth::W16), Ok(0x1234));
        assert_eq!(
            codec.from_canonical_bytes(&[0x12, 0x34, 0x56], BitWidth::W16),
            Err(NumericError::ByteCountMismatch { expected: 2, actual: 3 })
        );
        assert_eq!(codec.from_canonical_bytes(&[], BitWidth::UNSUPPORTED), Err(NumericError::UnavailableWidth));
    }

    #[test]
    fn test_decode_value_from_other_host() {
        let big = EndianCodec::for_order(ByteOrder::BigEndian);
        let little = EndianCodec::for_order(ByteOrder::LittleEndian);
        let value = 0x0102_0304_0506_0708u64;
        assert_eq!(little.from_canonical(big.to_canonical(value, BitWidth::W64).unwrap()), Ok(value));
        assert_eq!(big.from_canonical(little.to_canonical(value, BitWidth::W64).unwrap()), Ok(value));
    }

    #[test]
    fn test_double_round_trip() {
        let codec = EndianCodec::for_order(ByteOrder::LittleEndian);
        let canonical = codec.double_to_canonical(1.5);
        assert_eq!(canonical.bits(), WordBits::Bits64(1.5f64.to_bits().swap_bytes()));
        assert_eq!(codec.double_from_canonical(canonical).unwrap(), 1.5);
    }
}
