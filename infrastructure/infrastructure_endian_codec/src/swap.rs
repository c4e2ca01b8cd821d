//! Byte Swap Module
//!
//! Full byte-order reversal for each codec width, twice over: a branch-free
//! shift-and-mask composition and the hardware/intrinsic `swap_bytes`. The
//! two are interchangeable; the tests hold them equal.

/// Reverse the bytes of a 16-bit value by shift and mask
pub const fn swap16_shift_mask(x: u16) -> u16 {
    (x << 8) | (x >> 8)
}

/// Reverse the bytes of a 32-bit value by shift and mask
pub const fn swap32_shift_mask(x: u32) -> u32 {
    ((x & 0x0000_00FF) << 24)
        | ((x & 0x0000_FF00) << 8)
        | ((x & 0x00FF_0000) >> 8)
        | ((x & 0xFF00_0000) >> 24)
}

/// Reverse the bytes of a 64-bit value by shift and mask
pub const fn swap64_shift_mask(x: u64) -> u64 {
    ((x & 0x0000_0000_0000_00FF) << 56)
        | ((x & 0x0000_0000_0000_FF00) << 40)
        | ((x & 0x0000_0000_00FF_0000) << 24)
        | ((x & 0x0000_0000_FF00_0000) << 8)
        | ((x & 0x0000_00FF_0000_0000) >> 8)
        | ((x & 0x0000_FF00_0000_0000) >> 24)
        | ((x & 0x00FF_0000_0000_0000) >> 40)
        | ((x & 0xFF00_0000_0000_0000) >> 56)
}

pub const fn swap16_intrinsic(x: u16) -> u16 {
    x.swap_bytes()
}

pub const fn swap32_intrinsic(x: u32) -> u32 {
    x.swap_bytes()
}

pub const fn swap64_intrinsic(x: u64) -> u64 {
    x.swap_bytes()
}
