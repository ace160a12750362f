// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Clear-then-release of owned storage.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::erase::{SecureErase, secure_clear};

/// Owned byte storage that can be cleared and handed back to its allocator.
///
/// Releasing consumes `self`, so the handle cannot be used, or released a
/// second time, once the call returns.
pub trait SecureRelease {
    /// Zero-fills the whole allocation, then releases it.
    fn clear_and_release(self);
}

impl SecureRelease for Box<[u8]> {
    fn clear_and_release(mut self) {
        secure_clear(&mut self);
        log::trace!("releasing {} cleared bytes", self.len());
        drop(self);
    }
}

impl<const N: usize> SecureRelease for Box<[u8; N]> {
    fn clear_and_release(mut self) {
        secure_clear(&mut *self);
        log::trace!("releasing {} cleared bytes", N);
        drop(self);
    }
}

impl SecureRelease for Vec<u8> {
    fn clear_and_release(mut self) {
        // Spare capacity may still hold bytes from before a truncate.
        self.erase();
        log::trace!("releasing {} cleared bytes", self.capacity());
        drop(self);
    }
}

impl<S: SecureRelease> SecureRelease for Option<S> {
    #[inline]
    fn clear_and_release(self) {
        if let Some(storage) = self {
            storage.clear_and_release();
        }
    }
}

/// Zero-fills `storage` and releases it to the allocator.
///
/// Pass `None` for the null case; it does nothing. Ownership moves into the
/// call, which rules out use-after-release and double release in safe code.
///
/// # Example
///
/// ```rust
/// use scour_erase::secure_clear_and_release;
///
/// let key: Box<[u8]> = vec![0xFFu8; 32].into_boxed_slice();
/// secure_clear_and_release(key);
///
/// let nothing: Option<Vec<u8>> = None;
/// secure_clear_and_release(nothing);
/// ```
#[inline]
pub fn secure_clear_and_release<S: SecureRelease>(storage: S) {
    storage.clear_and_release();
}
