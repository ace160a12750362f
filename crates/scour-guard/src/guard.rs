// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard for owned storage that clears and releases on drop.

use core::fmt;
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

use scour_erase::{SecureRelease, secure_clear, secure_clear_and_release};

use super::assert::assert_clears_on_drop;
use super::sentinel::ClearSentinel;
use super::traits::{AssertClearOnDrop, ClearProbe};

/// RAII guard owning byte storage, cleared and released on drop.
///
/// Dropping the guard runs [`secure_clear_and_release`] on the storage, so
/// the allocator never gets back memory that still holds the secret.
/// [`into_inner`](ClearingGuard::into_inner) hands the storage back instead
/// and makes the caller responsible for it again.
///
/// ```rust
/// use scour_guard::ClearingGuard;
///
/// fn load_key() -> ClearingGuard<Box<[u8]>> {
///     ClearingGuard::new(vec![0x42u8; 32].into_boxed_slice())
/// }
///
/// let key = load_key();
/// assert_eq!(key.len(), 32);
/// drop(key); // cleared, then released
/// ```
pub struct ClearingGuard<S>
where
    S: SecureRelease + DerefMut<Target = [u8]>,
{
    inner: ManuallyDrop<S>,
    __sentinel: ClearSentinel,
}

impl<S> fmt::Debug for ClearingGuard<S>
where
    S: SecureRelease + DerefMut<Target = [u8]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ClearingGuard]")
    }
}

impl<S> ClearingGuard<S>
where
    S: SecureRelease + DerefMut<Target = [u8]>,
{
    /// Takes ownership of `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            inner: ManuallyDrop::new(storage),
            __sentinel: ClearSentinel::default(),
        }
    }

    /// Clears the bytes in place without releasing the storage.
    /// Drop still clears and releases.
    pub fn clear(&mut self) {
        secure_clear(&mut self.inner);
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.mark_cleared();
        compiler_fence(Ordering::SeqCst);
    }

    /// Returns the storage without clearing it.
    ///
    /// The caller becomes responsible for clearing and releasing it.
    pub fn into_inner(self) -> S {
        let mut this = ManuallyDrop::new(self);
        log::trace!("clearing guard disarmed, {} bytes handed back", this.inner.len());

        // SAFETY: `this` is never dropped, so `inner` is moved out exactly
        // once and the sentinel is dropped exactly once.
        unsafe {
            ptr::drop_in_place(&mut this.__sentinel);
            ManuallyDrop::take(&mut this.inner)
        }
    }
}

impl<S> Deref for ClearingGuard<S>
where
    S: SecureRelease + DerefMut<Target = [u8]>,
{
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<S> DerefMut for ClearingGuard<S>
where
    S: SecureRelease + DerefMut<Target = [u8]>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<S> ClearProbe for ClearingGuard<S>
where
    S: SecureRelease + DerefMut<Target = [u8]>,
{
    fn is_cleared(&self) -> bool {
        (**self).is_cleared()
    }
}

impl<S> AssertClearOnDrop for ClearingGuard<S>
where
    S: SecureRelease + DerefMut<Target = [u8]>,
{
    fn clone_sentinel(&self) -> ClearSentinel {
        self.__sentinel.clone()
    }

    fn assert_clears_on_drop(self) {
        assert_clears_on_drop(self);
    }
}

impl<S> Drop for ClearingGuard<S>
where
    S: SecureRelease + DerefMut<Target = [u8]>,
{
    fn drop(&mut self) {
        // SAFETY: `inner` is not touched again after drop.
        let storage = unsafe { ManuallyDrop::take(&mut self.inner) };

        secure_clear_and_release(storage);
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.mark_cleared();
        compiler_fence(Ordering::SeqCst);
    }
}
