// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for scour-erase.
use thiserror::Error;

/// Extents rejected by [`RawRegion::new`](crate::RawRegion::new).
///
/// The erase operations themselves never fail. These errors only describe
/// raw `(ptr, len)` pairs that cannot possibly denote a valid region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EraseError {
    /// The length exceeds `isize::MAX`, which no allocation can span.
    #[error("region length {len} exceeds isize::MAX")]
    LengthTooLarge {
        /// Requested length in bytes.
        len: usize,
    },

    /// `addr + len` wraps around the address space.
    #[error("region at {addr:#x} with length {len} overflows the address space")]
    AddressOverflow {
        /// Start address of the region.
        addr: usize,
        /// Requested length in bytes.
        len: usize,
    },
}
