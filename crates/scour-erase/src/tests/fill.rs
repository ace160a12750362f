// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::FillByte;

#[test]
fn test_fill_byte_identity_for_u8() {
    for b in 0..=u8::MAX {
        assert_eq!(b.fill_byte(), b);
    }
}

#[test]
fn test_fill_byte_truncates_wide_values() {
    assert_eq!(0x1FFi32.fill_byte(), 0xFF);
    assert_eq!(0x100u16.fill_byte(), 0x00);
    assert_eq!(0xDEAD_BEEFu32.fill_byte(), 0xEF);
    assert_eq!(0x0123_4567_89AB_CDEFu64.fill_byte(), 0xEF);
    assert_eq!(usize::MAX.fill_byte(), 0xFF);
    assert_eq!((1u128 << 100 | 0x5A).fill_byte(), 0x5A);
}

#[test]
fn test_fill_byte_negative_values() {
    assert_eq!((-1i32).fill_byte(), 0xFF);
    assert_eq!((-2i8).fill_byte(), 0xFE);
    assert_eq!((-256i64).fill_byte(), 0x00);
    assert_eq!(isize::MIN.fill_byte(), 0x00);
}
