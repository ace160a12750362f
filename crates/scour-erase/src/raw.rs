// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Nullable raw-pointer erase operations.

use core::ptr::NonNull;
use core::slice;

use crate::error::EraseError;
use crate::fill::FillByte;
use crate::volatile::volatile_fill;

/// Overwrites `len` bytes at `ptr` with the low 8 bits of `fill`.
///
/// A null `ptr` is a no-op whatever `len` says. Returns `ptr` unchanged.
///
/// # Safety
///
/// If `ptr` is non-null it must be valid for writes of `len` bytes. The
/// length is trusted; nothing is validated.
///
/// # Example
///
/// ```rust
/// use scour_erase::secure_fill_raw;
///
/// let mut buf = [0xAAu8; 16];
/// let ptr = unsafe { secure_fill_raw(buf.as_mut_ptr(), 0x00, buf.len()) };
/// assert_eq!(ptr, buf.as_mut_ptr());
/// assert_eq!(buf, [0u8; 16]);
///
/// // Null with a nonzero length does nothing.
/// let null = unsafe { secure_fill_raw(core::ptr::null_mut(), 0xFF, 100) };
/// assert!(null.is_null());
/// ```
#[inline]
pub unsafe fn secure_fill_raw<F: FillByte>(ptr: *mut u8, fill: F, len: usize) -> *mut u8 {
    if ptr.is_null() {
        return ptr;
    }

    // SAFETY: non-null, and the caller guarantees `len` writable bytes.
    unsafe { volatile_fill(ptr, len, fill.fill_byte()) };
    ptr
}

/// Zero-fills `len` bytes at `ptr`. A null `ptr` is a no-op.
///
/// # Safety
///
/// Same contract as [`secure_fill_raw`].
#[inline]
pub unsafe fn secure_clear_raw(ptr: *mut u8, len: usize) {
    // SAFETY: forwarded caller contract.
    unsafe { secure_fill_raw(ptr, 0u8, len) };
}

/// A non-null `(ptr, len)` pair whose arithmetic has been checked.
///
/// [`RawRegion::new`] rejects lengths no allocation can have and extents
/// that wrap the address space. Whether the memory is actually mapped and
/// writable cannot be checked; that stays with the caller.
#[derive(Debug, PartialEq, Eq)]
pub struct RawRegion {
    ptr: NonNull<u8>,
    len: usize,
}

impl RawRegion {
    /// Validates a raw pair.
    ///
    /// Returns `Ok(None)` for a null pointer, which callers treat as the
    /// no-op case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use scour_erase::{EraseError, RawRegion};
    ///
    /// assert_eq!(RawRegion::new(core::ptr::null_mut(), 100), Ok(None));
    ///
    /// let mut buf = [0u8; 4];
    /// assert!(matches!(
    ///     RawRegion::new(buf.as_mut_ptr(), usize::MAX),
    ///     Err(EraseError::LengthTooLarge { .. })
    /// ));
    /// ```
    pub fn new(ptr: *mut u8, len: usize) -> Result<Option<Self>, EraseError> {
        let Some(ptr) = NonNull::new(ptr) else {
            return Ok(None);
        };

        if len > isize::MAX as usize {
            return Err(EraseError::LengthTooLarge { len });
        }

        let addr = ptr.as_ptr() as usize;
        if addr.checked_add(len).is_none() {
            return Err(EraseError::AddressOverflow { addr, len });
        }

        Ok(Some(Self { ptr, len }))
    }

    /// Length of the region in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the region spans no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start of the region.
    #[inline]
    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// Views the region as a mutable slice.
    ///
    /// # Safety
    ///
    /// The region must be valid for reads and writes of `len` bytes for the
    /// lifetime of the returned slice, and nothing else may access it
    /// meanwhile.
    #[inline]
    pub unsafe fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: non-null, `len <= isize::MAX`, validity is the caller's.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Overwrites the region with the low 8 bits of `fill`.
    ///
    /// # Safety
    ///
    /// The region must be valid for writes of `len` bytes.
    #[inline]
    pub unsafe fn fill<F: FillByte>(&mut self, fill: F) {
        // SAFETY: forwarded caller contract.
        unsafe { volatile_fill(self.ptr.as_ptr(), self.len, fill.fill_byte()) };
    }

    /// Zero-fills the region.
    ///
    /// # Safety
    ///
    /// The region must be valid for writes of `len` bytes.
    #[inline]
    pub unsafe fn clear(&mut self) {
        // SAFETY: forwarded caller contract.
        unsafe { self.fill(0u8) };
    }
}
