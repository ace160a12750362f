// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Verification traits for cleared storage.

use alloc::boxed::Box;
use alloc::vec::Vec;

use scour_util::{is_slice_zeroized, is_vec_fully_zeroized};

use super::sentinel::ClearSentinel;

/// Runtime check that storage holds only zeros.
///
/// ```rust
/// use scour_guard::ClearProbe;
///
/// let mut key = [0x42u8; 8];
/// assert!(!key.is_cleared());
///
/// scour_erase::secure_clear(&mut key);
/// assert!(key.is_cleared());
/// ```
pub trait ClearProbe {
    /// Returns `true` if every byte of the storage is zero.
    fn is_cleared(&self) -> bool;
}

impl ClearProbe for [u8] {
    fn is_cleared(&self) -> bool {
        is_slice_zeroized(self)
    }
}

impl<const N: usize> ClearProbe for [u8; N] {
    fn is_cleared(&self) -> bool {
        is_slice_zeroized(self)
    }
}

impl ClearProbe for Box<[u8]> {
    fn is_cleared(&self) -> bool {
        is_slice_zeroized(self)
    }
}

/// Checks the whole allocation, spare capacity included.
impl ClearProbe for Vec<u8> {
    fn is_cleared(&self) -> bool {
        is_vec_fully_zeroized(self)
    }
}

/// Types whose drop is expected to clear, with a sentinel to prove it.
pub trait AssertClearOnDrop {
    /// Clones the internal [`ClearSentinel`] for verification.
    fn clone_sentinel(&self) -> ClearSentinel;

    /// Drops `self` and asserts that the clear ran.
    ///
    /// # Panics
    ///
    /// Panics if dropping did not mark the sentinel.
    fn assert_clears_on_drop(self);
}
