//! Native Integer Module
//!
//! Provides descriptors for Rust's primitive integer types, so the bounds
//! calculator serves them through the same descriptor path as host
//! categories, plus the size-word high bit.

use entities_numeric_types::{BitWidth, IntegerTypeDescriptor};

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type
pub trait NativeInteger: sealed::Sealed + Copy {
    /// `(T)-1 < (T)1`
    const IS_SIGNED: bool;

    /// Descriptor with this type's width and signedness
    fn descriptor() -> IntegerTypeDescriptor {
        IntegerTypeDescriptor::new(BitWidth::of::<Self>(), Self::IS_SIGNED)
    }
}

macro_rules! impl_native_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl NativeInteger for $t {
                const IS_SIGNED: bool = (0 as $t).wrapping_sub(1) < (1 as $t);
            }
        )*
    };
}

impl_native_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Whether `T` is signed
pub fn is_signed<T: NativeInteger>() -> bool {
    T::IS_SIGNED
}

/// Descriptor of `T`
pub fn descriptor_of<T: NativeInteger>() -> IntegerTypeDescriptor {
    T::descriptor()
}

/// A size word with only the high-order bit set
pub const SIZE_HIGH_BIT: usize = !0usize ^ (!0usize >> 1);
