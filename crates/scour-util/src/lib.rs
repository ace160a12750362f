// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Probes for verifying erased memory.
//!
//! These helpers only read. They are used by tests and by the clearing
//! guards to confirm that a region holds the pattern it was erased with.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;

/// Verifies that a slice is zeroized.
///
/// # Example
///
/// ```
/// use scour_util::is_slice_zeroized;
///
/// let zeroed = [0u8; 10];
/// assert!(is_slice_zeroized(&zeroed));
///
/// let not_zeroed = [0u8, 1, 0, 0];
/// assert!(!is_slice_zeroized(&not_zeroed));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    is_slice_filled_with(slice, 0)
}

/// Verifies that every byte of a slice equals `pattern`.
///
/// An empty slice is trivially filled with any pattern.
///
/// # Example
///
/// ```
/// use scour_util::is_slice_filled_with;
///
/// assert!(is_slice_filled_with(&[0xAA; 16], 0xAA));
/// assert!(!is_slice_filled_with(&[0xAA, 0xAB], 0xAA));
/// assert!(is_slice_filled_with(&[], 0x42));
/// ```
#[inline(always)]
pub fn is_slice_filled_with(slice: &[u8], pattern: u8) -> bool {
    slice.iter().all(|&b| b == pattern)
}

/// Returns `true` when the whole allocation behind `vec` reads as zero.
///
/// Scans `0..capacity`, not `0..len`. A `Vec` that was truncated or
/// cleared keeps its old contents in spare capacity, and erasing a `Vec`
/// before release only counts if that tail is scrubbed as well.
///
/// Bytes are read with `read_volatile` so the scan is not folded into an
/// earlier store of the same value.
///
/// # Example
///
/// ```
/// use scour_util::is_vec_fully_zeroized;
///
/// let mut wrapped = vec![0xC3u8; 12];
/// wrapped.truncate(4);
/// wrapped.fill(0);
///
/// // Bytes 4..12 still hold 0xC3.
/// assert!(!is_vec_fully_zeroized(&wrapped));
/// ```
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let base = vec.as_ptr();

    // SAFETY: a `Vec` allocation spans `capacity` bytes and is only read here.
    (0..vec.capacity()).all(|offset| unsafe { core::ptr::read_volatile(base.add(offset)) } == 0)
}

/// Counts the bytes of `slice` that differ from `pattern`.
///
/// Useful in assertion messages when a region is only partially erased.
///
/// # Example
///
/// ```
/// use scour_util::count_mismatched;
///
/// assert_eq!(count_mismatched(&[0, 1, 0, 2], 0), 2);
/// ```
#[inline]
pub fn count_mismatched(slice: &[u8], pattern: u8) -> usize {
    slice.iter().filter(|&&b| b != pattern).count()
}
