// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! C ABI for callers that hold sensitive material behind raw pointers.
//!
//! | Function | Arguments | Effect |
//! |---|---|---|
//! | [`scour_secure_memset`] | `(v, c, n)` | fill `n` bytes with `c & 0xFF`, return `v` |
//! | [`scour_clear`] | `(v, size)` | zero-fill `size` bytes |
//! | [`scour_clear_and_free`] | `(v, size)` | zero-fill, then `free(v)` |
//!
//! Every function treats a null `v` as a no-op. Lengths are trusted.

use libc::{c_int, c_void, size_t};

use crate::raw::{secure_clear_raw, secure_fill_raw};

/// Fills `n` bytes at `v` with the low 8 bits of `c` and returns `v`.
///
/// # Safety
///
/// A non-null `v` must be valid for writes of `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn scour_secure_memset(v: *mut c_void, c: c_int, n: size_t) -> *mut c_void {
    // SAFETY: forwarded caller contract.
    unsafe { secure_fill_raw(v.cast::<u8>(), c, n) }.cast::<c_void>()
}

/// Zero-fills `size` bytes at `v`.
///
/// # Safety
///
/// A non-null `v` must be valid for writes of `size` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn scour_clear(v: *mut c_void, size: size_t) {
    // SAFETY: forwarded caller contract.
    unsafe { secure_clear_raw(v.cast::<u8>(), size) };
}

/// Zero-fills `size` bytes at `v`, then releases `v` with `free`.
///
/// `v` is dangling once this returns; the caller must discard it.
///
/// # Safety
///
/// A non-null `v` must come from `malloc`, `calloc` or `realloc`, must be
/// valid for writes of `size` bytes, and must not have been freed already.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn scour_clear_and_free(v: *mut c_void, size: size_t) {
    // SAFETY: forwarded caller contract; `v` is released exactly once here.
    unsafe {
        clear_then_release(v, size, |cleared| libc::free(cleared));
    }
}

/// Zero-fills `size` bytes at `v`, then hands `v` to `release`.
///
/// `release` is not called for a null `v`.
///
/// # Safety
///
/// A non-null `v` must be valid for writes of `size` bytes.
pub(crate) unsafe fn clear_then_release<R>(v: *mut c_void, size: size_t, release: R)
where
    R: FnOnce(*mut c_void),
{
    if v.is_null() {
        return;
    }

    // SAFETY: forwarded caller contract.
    unsafe { secure_clear_raw(v.cast::<u8>(), size) };
    release(v);
    log::trace!("released {} cleared bytes", size);
}
