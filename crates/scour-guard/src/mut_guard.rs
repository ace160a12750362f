// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard for borrowed buffers that clears on drop.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use scour_erase::secure_clear;

use super::assert::assert_clears_on_drop;
use super::sentinel::ClearSentinel;
use super::traits::{AssertClearOnDrop, ClearProbe};

/// RAII guard over `&mut [u8]` that runs [`secure_clear`] on drop.
///
/// The caller keeps ownership of the storage; the guard only guarantees that
/// its contents are zero by the time the borrow ends, whichever way the scope
/// is left.
///
/// ```rust
/// use scour_guard::{ClearProbe, ClearingMutGuard};
///
/// let mut session_key = [0u8; 32];
///
/// {
///     let mut guard = ClearingMutGuard::from(&mut session_key[..]);
///     guard.copy_from_slice(&[0x5A; 32]);
///     assert_eq!(guard[0], 0x5A);
/// } // guard drops here, session_key is cleared
///
/// assert!(session_key.is_cleared());
/// ```
pub struct ClearingMutGuard<'a> {
    inner: &'a mut [u8],
    __sentinel: ClearSentinel,
}

impl fmt::Debug for ClearingMutGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ClearingMutGuard]")
    }
}

impl<'a> ClearingMutGuard<'a> {
    /// Creates a guard over `inner`.
    pub fn from(inner: &'a mut [u8]) -> Self {
        Self {
            inner,
            __sentinel: ClearSentinel::default(),
        }
    }

    /// Clears the guarded bytes now. Drop clears them again.
    pub fn clear(&mut self) {
        secure_clear(self.inner);
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.mark_cleared();
        compiler_fence(Ordering::SeqCst);
    }
}

impl Deref for ClearingMutGuard<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl DerefMut for ClearingMutGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner
    }
}

impl ClearProbe for ClearingMutGuard<'_> {
    fn is_cleared(&self) -> bool {
        self.inner.is_cleared()
    }
}

impl AssertClearOnDrop for ClearingMutGuard<'_> {
    fn clone_sentinel(&self) -> ClearSentinel {
        self.__sentinel.clone()
    }

    fn assert_clears_on_drop(self) {
        assert_clears_on_drop(self);
    }
}

impl Drop for ClearingMutGuard<'_> {
    fn drop(&mut self) {
        self.clear();
    }
}
