// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering, compiler_fence};

/// Runtime record that a guard's clear actually ran.
///
/// Wraps a shared flag that starts out "pristine". [`mark_cleared`] flips it
/// with a `SeqCst` store. Clones share the flag, so a test can keep a clone,
/// drop the guard, and then ask whether the clear happened.
///
/// ```rust
/// use scour_guard::ClearSentinel;
///
/// let mut sentinel = ClearSentinel::default();
/// let observer = sentinel.clone();
///
/// assert!(!observer.is_cleared());
/// sentinel.mark_cleared();
/// assert!(observer.is_cleared());
/// ```
///
/// [`mark_cleared`]: ClearSentinel::mark_cleared
#[derive(Clone, Debug)]
pub struct ClearSentinel(Arc<AtomicBool>);

impl PartialEq for ClearSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.0.load(Ordering::Relaxed) == other.0.load(Ordering::Relaxed)
    }
}

impl Eq for ClearSentinel {}

impl ClearSentinel {
    /// Records that the guarded bytes were cleared.
    pub fn mark_cleared(&mut self) {
        self.0.store(false, Ordering::SeqCst);
        compiler_fence(Ordering::SeqCst);
    }

    /// Resets the sentinel to the pristine state.
    ///
    /// ```rust
    /// use scour_guard::ClearSentinel;
    ///
    /// let mut sentinel = ClearSentinel::default();
    /// sentinel.mark_cleared();
    /// sentinel.reset();
    /// assert!(!sentinel.is_cleared());
    /// ```
    pub fn reset(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once [`mark_cleared`](ClearSentinel::mark_cleared) ran.
    pub fn is_cleared(&self) -> bool {
        !self.0.load(Ordering::SeqCst)
    }
}

impl Default for ClearSentinel {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}
