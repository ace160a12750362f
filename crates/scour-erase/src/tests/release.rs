// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{SecureRelease, secure_clear_and_release};

// Release is verified byte-for-byte in tests/release_probe.rs, which installs
// an instrumented global allocator. These cover the null and type surface.

#[test]
fn test_release_none_box() {
    secure_clear_and_release(None::<Box<[u8]>>);
}

#[test]
fn test_release_none_repeated() {
    for _ in 0..3 {
        secure_clear_and_release(None::<Vec<u8>>);
    }
}

#[test]
fn test_release_boxed_slice() {
    let key: Box<[u8]> = vec![0xFFu8; 32].into_boxed_slice();
    secure_clear_and_release(key);
}

#[test]
fn test_release_boxed_array() {
    let key = Box::new([0x11u8; 64]);
    secure_clear_and_release(key);
}

#[test]
fn test_release_vec_with_spare_capacity() {
    let mut wrapped = Vec::with_capacity(128);
    wrapped.extend_from_slice(&[0xEEu8; 100]);
    wrapped.truncate(4);
    secure_clear_and_release(wrapped);
}

#[test]
fn test_release_empty_storage() {
    secure_clear_and_release(Vec::<u8>::new());
    secure_clear_and_release(Box::<[u8]>::default());
}

#[test]
fn test_release_via_trait_method() {
    Some(vec![1u8, 2, 3]).clear_and_release();
}
