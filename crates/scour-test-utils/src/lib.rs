// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for scour crates.
//!
//! [`ReleaseProbe`] is a global allocator that inspects a watched allocation
//! at the moment it is handed back, which is the only point where "was it
//! erased before release?" can be observed without reading freed memory.
//!
//! ## License
//!
//! GPL-3.0-only

mod release_probe;

pub use release_probe::{ReleaseProbe, ReleaseRecord};
