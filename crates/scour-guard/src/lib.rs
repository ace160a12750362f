// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guards that clear sensitive buffers on every exit path.
//!
//! Code that holds unwrapped key material must scrub it before returning,
//! including on `?` early returns and unwinding panics. Calling
//! [`secure_clear`](scour_erase::secure_clear) by hand on each path is easy
//! to get wrong; these guards make it structural.
//!
//! - [`ClearingMutGuard`]: borrows `&mut [u8]`, clears it on drop.
//! - [`ClearingGuard`]: owns the storage, clears and releases it on drop.
//!
//! Both carry a [`ClearSentinel`] so tests can check that dropping actually
//! ran the clear (see [`assert_clears_on_drop`]).
//!
//! ```rust
//! use scour_guard::{ClearProbe, ClearingMutGuard};
//!
//! fn unwrap_key(wrapped: &[u8], out: &mut [u8]) -> Result<usize, &'static str> {
//!     let mut scratch = [0u8; 32];
//!     let mut scratch = ClearingMutGuard::from(&mut scratch[..]);
//!
//!     scratch[..wrapped.len()].copy_from_slice(wrapped);
//!     if wrapped.is_empty() {
//!         return Err("empty"); // scratch is cleared here
//!     }
//!     out[..wrapped.len()].copy_from_slice(&scratch[..wrapped.len()]);
//!     Ok(wrapped.len())
//! } // and here
//!
//! let mut out = [0u8; 32];
//! assert_eq!(unwrap_key(&[7; 16], &mut out), Ok(16));
//! assert!(unwrap_key(&[], &mut out).is_err());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod assert;
mod guard;
mod mut_guard;
mod sentinel;
mod traits;

#[cfg(test)]
mod tests;

pub use assert::assert_clears_on_drop;
pub use guard::ClearingGuard;
pub use mut_guard::ClearingMutGuard;
pub use sentinel::ClearSentinel;
pub use traits::{AssertClearOnDrop, ClearProbe};
