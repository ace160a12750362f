// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Optimizer-resistant erasure of sensitive buffers.
//!
//! Keys and key-wrapping material must be overwritten before their memory is
//! reused or handed back to the allocator. An ordinary `fill(0)` on a buffer
//! that is never read again is a dead store, and the optimizer is allowed to
//! delete it. Every erase in this crate goes through volatile stores followed
//! by a compiler fence, so the writes happen regardless of what follows.
//!
//! # Operations
//!
//! - [`secure_fill`]: overwrite every byte with a pattern (wide integers are
//!   truncated to their low 8 bits, see [`FillByte`]).
//! - [`secure_clear`]: [`secure_fill`] with `0`.
//! - [`secure_clear_and_release`]: clear, then hand the storage back to the
//!   allocator. The handle is consumed, so it cannot be used afterwards.
//!
//! # Example
//!
//! ```rust
//! use scour_erase::{secure_clear, secure_clear_and_release, secure_fill};
//!
//! let mut key = [0xAAu8; 16];
//! secure_fill(&mut key, 0x00);
//! assert!(key.iter().all(|&b| b == 0));
//!
//! let mut wrapped = vec![0xFFu8; 32];
//! secure_clear(&mut wrapped);
//! assert!(wrapped.iter().all(|&b| b == 0));
//!
//! // Ownership moves in: `wrapped` is unusable after this line.
//! secure_clear_and_release(wrapped);
//!
//! // A null reference is a no-op.
//! secure_clear_and_release(None::<Box<[u8]>>);
//! ```
//!
//! # Raw pointers
//!
//! [`secure_fill_raw`] and [`secure_clear_raw`] accept a nullable
//! `(ptr, len)` pair and trust the caller on length. [`RawRegion`] checks the
//! arithmetic that can be checked before handing out a slice. With the `ffi`
//! feature the same operations are exported with a C calling convention.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod erase;
mod error;
mod fill;
mod raw;
mod release;
mod volatile;

#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(test)]
mod tests;

pub use erase::{SecureErase, secure_clear, secure_fill};
pub use error::EraseError;
pub use fill::FillByte;
pub use raw::{RawRegion, secure_clear_raw, secure_fill_raw};
pub use release::{SecureRelease, secure_clear_and_release};
