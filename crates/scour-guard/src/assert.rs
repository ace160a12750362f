// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::traits::AssertClearOnDrop;

/// Drops `guard` and panics unless the drop marked its [`ClearSentinel`].
///
/// The sentinel is rearmed first, so a guard that was already cleared by
/// hand still has to clear again on drop to pass.
///
/// ```rust
/// use scour_guard::{ClearingMutGuard, assert_clears_on_drop};
///
/// let mut wrapping_key = [0x5Cu8; 16];
/// assert_clears_on_drop(ClearingMutGuard::from(&mut wrapping_key));
/// assert_eq!(wrapping_key, [0u8; 16]);
/// ```
///
/// [`ClearSentinel`]: crate::ClearSentinel
pub fn assert_clears_on_drop<T: AssertClearOnDrop>(guard: T) {
    let mut observer = guard.clone_sentinel();
    observer.reset();

    drop(guard);

    assert!(
        observer.is_cleared(),
        "dropping the guard left its bytes uncleared"
    );
}
