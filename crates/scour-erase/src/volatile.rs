// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Volatile fill primitive.

use core::mem::size_of;
use core::ptr;
use core::sync::atomic::{Ordering, compiler_fence};

const WORD: usize = size_of::<usize>();

/// Overwrites `len` bytes starting at `dst` with `pattern`.
///
/// Unaligned head and tail bytes are written one at a time; the aligned body
/// is written a machine word at a time. Every store is volatile, so none of
/// them can be elided, and the trailing fence keeps later code from being
/// reordered in front of the erase.
///
/// # Safety
///
/// `dst` must be valid for writes of `len` bytes. The write is not atomic.
#[inline(never)]
pub(crate) unsafe fn volatile_fill(dst: *mut u8, len: usize, pattern: u8) {
    let mut cursor = dst;
    let mut remaining = len;

    let head = cursor.align_offset(WORD).min(remaining);
    for _ in 0..head {
        // SAFETY: `head <= len`, so `cursor` is still inside the region.
        unsafe {
            ptr::write_volatile(cursor, pattern);
            cursor = cursor.add(1);
        }
    }
    remaining -= head;

    let word = usize::from_ne_bytes([pattern; WORD]);
    while remaining >= WORD {
        // SAFETY: `cursor` is word aligned after the head loop and at least
        // `WORD` bytes of the region are left.
        unsafe {
            ptr::write_volatile(cursor.cast::<usize>(), word);
            cursor = cursor.add(WORD);
        }
        remaining -= WORD;
    }

    for _ in 0..remaining {
        // SAFETY: fewer than `WORD` bytes are left and all are in the region.
        unsafe {
            ptr::write_volatile(cursor, pattern);
            cursor = cursor.add(1);
        }
    }

    compiler_fence(Ordering::SeqCst);
}
