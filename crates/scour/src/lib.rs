// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # Scour
//!
//! Optimizer-resistant scrubbing of keys and other sensitive buffers.
//!
//! This is a re-export crate that combines [`scour-erase`], [`scour-guard`]
//! and [`scour-util`] for convenience.
//!
//! ## Quick Start
//!
//! ```rust
//! use scour::{ClearProbe, ClearingGuard, secure_clear, secure_clear_and_release, secure_fill};
//!
//! let mut key = [0xAAu8; 16];
//! secure_fill(&mut key, 0x00);
//! assert!(key.is_cleared());
//!
//! let mut wrapped = vec![0xFFu8; 32];
//! secure_clear(&mut wrapped);
//! secure_clear_and_release(wrapped);
//!
//! let guarded = ClearingGuard::new(vec![0x42u8; 32].into_boxed_slice());
//! drop(guarded); // cleared, then released
//! ```
//!
//! ## What's Included
//!
//! - **Erase operations**: [`secure_fill`], [`secure_clear`], [`secure_clear_and_release`]
//! - **Raw pointers**: [`secure_fill_raw`], [`secure_clear_raw`], [`RawRegion`]
//! - **Traits**: [`FillByte`], [`SecureErase`], [`SecureRelease`], [`ClearProbe`], [`AssertClearOnDrop`]
//! - **Guards**: [`ClearingMutGuard`], [`ClearingGuard`], [`ClearSentinel`]
//! - **Probes**: [`util`]
//! - **C ABI**: `ffi` (with the `ffi` feature)
//!
//! [`scour-erase`]: https://docs.rs/scour-erase
//! [`scour-guard`]: https://docs.rs/scour-guard
//! [`scour-util`]: https://docs.rs/scour-util

#![cfg_attr(not(test), no_std)]

pub use scour_erase::*;
pub use scour_guard::*;

/// Verification probes for erased memory.
pub mod util {
    pub use scour_util::*;
}
