// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Slice-based erase operations.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::fill::FillByte;
use crate::volatile::volatile_fill;

/// Overwrites every byte of `buf` with the low 8 bits of `fill`.
///
/// The stores are volatile: they are performed even if `buf` is never read
/// again. Returns `buf` so the call can be chained.
///
/// # Example
///
/// ```rust
/// use scour_erase::secure_fill;
///
/// let mut buf = [0xAAu8; 16];
/// let filled = secure_fill(&mut buf, 0x1FFi32);
/// assert!(filled.iter().all(|&b| b == 0xFF));
/// ```
#[inline]
pub fn secure_fill<F: FillByte>(buf: &mut [u8], fill: F) -> &mut [u8] {
    if !buf.is_empty() {
        // SAFETY: a slice is valid for writes of its own length.
        unsafe { volatile_fill(buf.as_mut_ptr(), buf.len(), fill.fill_byte()) };
    }
    buf
}

/// Zero-fills `buf` with [`secure_fill`].
///
/// This is the scrub to run on sensitive data before its storage is reused.
///
/// # Example
///
/// ```rust
/// use scour_erase::secure_clear;
///
/// let mut key = [0x42u8; 32];
/// secure_clear(&mut key);
/// assert_eq!(key, [0u8; 32]);
/// ```
#[inline]
pub fn secure_clear(buf: &mut [u8]) {
    secure_fill(buf, 0u8);
}

/// Erasable byte storage.
///
/// Implemented for byte slices, byte arrays and boxed slices, for
/// `Vec<u8>`, where the whole allocation including spare capacity is
/// erased, and for `Option<T>`, where `None` is the null reference and
/// erasing it does nothing.
///
/// The trait is dyn-compatible.
///
/// # Example
///
/// ```rust
/// use scour_erase::SecureErase;
///
/// let mut secret = vec![0xFFu8; 64];
/// secret.truncate(8);
/// secret.erase();
///
/// let mut missing: Option<Vec<u8>> = None;
/// missing.erase(); // no-op
/// ```
pub trait SecureErase {
    /// Overwrites the storage with `pattern`.
    fn erase_with(&mut self, pattern: u8);

    /// Overwrites the storage with zeros.
    #[inline]
    fn erase(&mut self) {
        self.erase_with(0);
    }
}

impl SecureErase for [u8] {
    #[inline]
    fn erase_with(&mut self, pattern: u8) {
        secure_fill(self, pattern);
    }
}

impl<const N: usize> SecureErase for [u8; N] {
    #[inline]
    fn erase_with(&mut self, pattern: u8) {
        secure_fill(self, pattern);
    }
}

impl SecureErase for &mut [u8] {
    #[inline]
    fn erase_with(&mut self, pattern: u8) {
        secure_fill(self, pattern);
    }
}

impl SecureErase for Box<[u8]> {
    #[inline]
    fn erase_with(&mut self, pattern: u8) {
        secure_fill(self, pattern);
    }
}

impl SecureErase for Vec<u8> {
    fn erase_with(&mut self, pattern: u8) {
        let cap = self.capacity();
        if cap == 0 {
            return;
        }

        // SAFETY: `Vec` guarantees its allocation is valid for `capacity`
        // bytes. Writing initialized bytes into spare capacity is allowed.
        unsafe { volatile_fill(self.as_mut_ptr(), cap, pattern) };
    }
}

impl<T: SecureErase> SecureErase for Option<T> {
    #[inline]
    fn erase_with(&mut self, pattern: u8) {
        if let Some(inner) = self {
            inner.erase_with(pattern);
        }
    }
}
