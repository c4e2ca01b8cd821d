//! Host Facts Module
//!
//! Provides the raw facts a host reports about itself: bits per byte, byte
//! order, signed-integer representation and the byte size of each integer
//! category. Everything else in the numeric layer is derived from these.
//!
//! `HostFacts::detect()` reads the host this code runs on. Tests and
//! cross-target reasoning build a `HostFacts` by hand to simulate another
//! host, e.g. a big-endian machine or one without `long long`.

use std::ffi::{c_int, c_long, c_longlong, c_short};
use std::mem::size_of;

use entities_numeric_types::{ByteOrder, IntegerCategory, SignedRepresentation};

/// Byte size reported for an integer category the host does not have
pub const ABSENT_TYPE_SIZE: isize = -1;

/// Facts reported by a host, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFacts {
    /// Bits per byte
    pub byte_bits: u32,
    /// Native byte order
    pub byte_order: ByteOrder,
    /// Encoding of negative integers
    pub signed_representation: SignedRepresentation,
    /// Byte size of `short`
    pub short_size: isize,
    /// Byte size of `int`
    pub int_size: isize,
    /// Byte size of `long`
    pub long_size: isize,
    /// Byte size of `long long`, or [`ABSENT_TYPE_SIZE`]
    pub extended_size: isize,
    /// Byte size of `size_t`
    pub size_class_size: isize,
    /// Refuse to start on a host that is not two's complement instead of
    /// switching the bounds formula
    pub require_twos_complement: bool,
}

impl HostFacts {
    /// Read the facts of the running host
    pub fn detect() -> Self {
        Self {
            byte_bits: u8::BITS,
            byte_order: ByteOrder::native(),
            signed_representation: detect_signed_representation(),
            short_size: size_of::<c_short>() as isize,
            int_size: size_of::<c_int>() as isize,
            long_size: size_of::<c_long>() as isize,
            extended_size: size_of::<c_longlong>() as isize,
            size_class_size: size_of::<usize>() as isize,
            require_twos_complement: false,
        }
    }

    /// Byte size reported for a category
    pub fn size_of(&self, category: IntegerCategory) -> isize {
        match category {
            IntegerCategory::Short => self.short_size,
            IntegerCategory::NativeInt => self.int_size,
            IntegerCategory::NativeLong => self.long_size,
            IntegerCategory::Extended => self.extended_size,
            IntegerCategory::SizeClass => self.size_class_size,
        }
    }

    /// Same facts with a different byte order
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Same facts with a different signed representation
    pub fn with_signed_representation(mut self, repr: SignedRepresentation) -> Self {
        self.signed_representation = repr;
        self
    }

    /// Same facts with one category's byte size replaced
    pub fn with_size(mut self, category: IntegerCategory, size: isize) -> Self {
        match category {
            IntegerCategory::Short => self.short_size = size,
            IntegerCategory::NativeInt => self.int_size = size,
            IntegerCategory::NativeLong => self.long_size = size,
            IntegerCategory::Extended => self.extended_size = size,
            IntegerCategory::SizeClass => self.size_class_size = size,
        }
        self
    }
}

/// Inspect the bit pattern of `-1`
///
/// All ones is two's complement; all ones but the lowest bit is one's
/// complement.
fn detect_signed_representation() -> SignedRepresentation {
    let minus_one = (-1i8).to_ne_bytes()[0];
    if minus_one == 0xFF {
        SignedRepresentation::TwosComplement
    } else {
        SignedRepresentation::OnesComplement
    }
}
