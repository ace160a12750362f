// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use scour::util::{is_slice_filled_with, is_slice_zeroized, is_vec_fully_zeroized};
use scour::{
    ClearProbe, ClearingGuard, SecureErase, secure_clear, secure_clear_and_release,
    secure_clear_raw, secure_fill,
};

#[test]
fn test_fill_sixteen_aa_bytes_with_zero() {
    let mut buffer = [0xAAu8; 16];
    secure_fill(&mut buffer, 0x00);
    assert_eq!(buffer, [0x00u8; 16]);
}

#[test]
fn test_clear_and_release_thirty_two_ff_bytes() {
    let mut buffer = vec![0xFFu8; 32];

    // Same steps as secure_clear_and_release, observed before the release.
    buffer.erase();
    assert!(is_vec_fully_zeroized(&buffer));

    secure_clear_and_release(buffer);
}

#[test]
fn test_clear_null_with_length() {
    unsafe { secure_clear_raw(core::ptr::null_mut(), 100) };
}

#[test]
fn test_clear_and_release_null() {
    secure_clear_and_release(None::<Box<[u8]>>);
    secure_clear_and_release(None::<Vec<u8>>);
}

#[test]
fn test_guarded_key_lifecycle() {
    let mut key = ClearingGuard::new(vec![0u8; 32].into_boxed_slice());
    key.copy_from_slice(&[0x5A; 32]);
    assert!(!key.is_cleared());

    key.clear();
    assert!(key.is_cleared());
}

proptest! {
    #[test]
    fn fill_leaves_only_the_fill_byte(len in 0..2048usize, fill in any::<u32>()) {
        let mut buffer = vec![0x3Cu8; len];
        secure_fill(&mut buffer, fill);
        prop_assert!(is_slice_filled_with(&buffer, (fill % 256) as u8));
    }

    #[test]
    fn clear_leaves_only_zeros(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let mut buffer = data;
        secure_clear(&mut buffer);
        prop_assert!(is_slice_zeroized(&buffer));
    }
}
