// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Conversion of a fill value into the byte that is actually written.
///
/// Fill values are conceptually 8-bit, but callers coming from C habitually
/// pass an `int`. Every integer type is accepted and truncated to its low
/// 8 bits, the same way `memset` treats its `c` argument.
///
/// ```rust
/// use scour_erase::FillByte;
///
/// assert_eq!(0xAAu8.fill_byte(), 0xAA);
/// assert_eq!(0x1FFi32.fill_byte(), 0xFF);
/// assert_eq!((-1i32).fill_byte(), 0xFF);
/// assert_eq!(256u32.fill_byte(), 0x00);
/// ```
pub trait FillByte: Copy {
    /// Returns the low 8 bits of the value.
    fn fill_byte(self) -> u8;
}

macro_rules! impl_fill_byte {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FillByte for $ty {
                #[inline(always)]
                fn fill_byte(self) -> u8 {
                    self as u8
                }
            }
        )*
    };
}

impl_fill_byte!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);
