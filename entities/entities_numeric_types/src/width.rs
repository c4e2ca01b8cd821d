//! Bit Width Module
//!
//! Provides the width and descriptor types shared by the width probe, the
//! bounds calculator and the endian codec.
//!
//! A width is either a positive multiple of the 8-bit byte or the
//! [`BitWidth::UNSUPPORTED`] sentinel, which marks an integer category that
//! does not exist on the host. The sentinel is the "no such type" byte size
//! (`-1`) scaled by the byte width, so it stays negative through the same
//! arithmetic that produces real widths.

use std::fmt;

use crate::error::NumericError;

/// Number of bits in a byte. All width arithmetic assumes this value.
pub const BYTE_BITS: u32 = 8;

/// Bit width of an integer category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitWidth(i32);

impl BitWidth {
    /// Sentinel meaning "this category does not exist on this host"
    pub const UNSUPPORTED: BitWidth = BitWidth(-(BYTE_BITS as i32));

    pub const W8: BitWidth = BitWidth(8);
    pub const W16: BitWidth = BitWidth(16);
    pub const W32: BitWidth = BitWidth(32);
    pub const W64: BitWidth = BitWidth(64);

    /// Create a width from a bit count
    ///
    /// # Returns
    /// * `Ok(BitWidth)` - `bits` is a positive multiple of 8
    /// * `Err(NumericError::InvalidWidth)` - zero, not byte-aligned or too large
    pub fn from_bits(bits: u32) -> Result<Self, NumericError> {
        let invalid = || NumericError::InvalidWidth(i64::from(bits));
        if bits == 0 || bits % BYTE_BITS != 0 {
            return Err(invalid());
        }
        i32::try_from(bits).map(Self).map_err(|_| invalid())
    }

    /// Create a width from a raw value that may be the sentinel
    pub fn from_raw(raw: i32) -> Result<Self, NumericError> {
        if raw == Self::UNSUPPORTED.0 {
            return Ok(Self::UNSUPPORTED);
        }
        if raw < 0 {
            return Err(NumericError::InvalidWidth(i64::from(raw)));
        }
        Self::from_bits(raw as u32)
    }

    /// Derive a width from a host-reported byte size
    ///
    /// A size of zero or less (a host reports `-1` for a type it lacks) and
    /// sizes too large to express in bits resolve to the sentinel. Never fails.
    pub fn from_byte_size(bytes: isize) -> Self {
        if bytes <= 0 {
            return Self::UNSUPPORTED;
        }
        i32::try_from(bytes)
            .ok()
            .and_then(|b| b.checked_mul(BYTE_BITS as i32))
            .map(Self)
            .unwrap_or(Self::UNSUPPORTED)
    }

    /// Width of a Rust type, in bits
    pub fn of<T>() -> Self {
        Self::from_byte_size(std::mem::size_of::<T>() as isize)
    }

    /// Whether this width names a real integer category
    pub fn is_supported(self) -> bool {
        self.0 > 0
    }

    /// Bit count, or `None` for the sentinel
    pub fn bits(self) -> Option<u32> {
        if self.is_supported() {
            Some(self.0 as u32)
        } else {
            None
        }
    }

    /// Bit count, refusing the sentinel
    pub fn require_bits(self) -> Result<u32, NumericError> {
        self.bits().ok_or(NumericError::UnavailableWidth)
    }

    /// Byte count, or `None` for the sentinel
    pub fn bytes(self) -> Option<usize> {
        self.bits().map(|bits| (bits / BYTE_BITS) as usize)
    }

    /// Raw value, negative for the sentinel
    pub fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer categories understood by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerCategory {
    /// Short word (`short`)
    Short,
    /// Native word (`int`)
    NativeInt,
    /// Native long word (`long`)
    NativeLong,
    /// Extended word (`long long`), optional on some hosts
    Extended,
    /// Size-class word (`size_t`)
    SizeClass,
}

impl IntegerCategory {
    /// Number of categories
    pub const COUNT: usize = 5;

    /// Every category, in table order
    pub const ALL: [IntegerCategory; Self::COUNT] = [
        IntegerCategory::Short,
        IntegerCategory::NativeInt,
        IntegerCategory::NativeLong,
        IntegerCategory::Extended,
        IntegerCategory::SizeClass,
    ];

    /// Position of this category in a width table
    pub fn index(self) -> usize {
        match self {
            IntegerCategory::Short => 0,
            IntegerCategory::NativeInt => 1,
            IntegerCategory::NativeLong => 2,
            IntegerCategory::Extended => 3,
            IntegerCategory::SizeClass => 4,
        }
    }

    /// Human-readable name used in logs
    pub fn name(self) -> &'static str {
        match self {
            IntegerCategory::Short => "short",
            IntegerCategory::NativeInt => "int",
            IntegerCategory::NativeLong => "long",
            IntegerCategory::Extended => "long long",
            IntegerCategory::SizeClass => "size",
        }
    }
}

impl fmt::Display for IntegerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width and signedness of one integer category
///
/// Immutable once constructed. A descriptor may carry the sentinel width;
/// consumers must check [`IntegerTypeDescriptor::is_available`] or handle
/// [`NumericError::UnavailableWidth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerTypeDescriptor {
    bit_width: BitWidth,
    is_signed: bool,
}

impl IntegerTypeDescriptor {
    pub const fn new(bit_width: BitWidth, is_signed: bool) -> Self {
        Self { bit_width, is_signed }
    }

    /// Signed descriptor of `bits` bits
    pub fn signed(bits: u32) -> Result<Self, NumericError> {
        Ok(Self::new(BitWidth::from_bits(bits)?, true))
    }

    /// Unsigned descriptor of `bits` bits
    pub fn unsigned(bits: u32) -> Result<Self, NumericError> {
        Ok(Self::new(BitWidth::from_bits(bits)?, false))
    }

    pub fn bit_width(&self) -> BitWidth {
        self.bit_width
    }

    pub fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// Whether the category exists on the host this descriptor came from
    pub fn is_available(&self) -> bool {
        self.bit_width.is_supported()
    }
}

impl fmt::Display for IntegerTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_signed { 'i' } else { 'u' };
        if self.is_available() {
            write!(f, "{}{}", prefix, self.bit_width)
        } else {
            write!(f, "{}<unavailable>", prefix)
        }
    }
}
