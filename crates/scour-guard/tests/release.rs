// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use scour_guard::{ClearingGuard, ClearingMutGuard};
use scour_test_utils::{ReleaseProbe, ReleaseRecord};
use serial_test::serial;

#[global_allocator]
static PROBE: ReleaseProbe = ReleaseProbe;

#[test]
#[serial(release_probe)]
fn test_clearing_guard_releases_zeroed_storage() {
    let guard = ClearingGuard::new(vec![0xFFu8; 32].into_boxed_slice());
    ReleaseProbe::watch(guard.as_ptr(), guard.len());

    drop(guard);

    assert_eq!(
        ReleaseProbe::take(),
        Some(ReleaseRecord {
            len: 32,
            zeroed: true
        })
    );
}

#[test]
#[serial(release_probe)]
fn test_clearing_guard_releases_on_error_path() {
    fn unseal(blob: &[u8]) -> Result<ClearingGuard<Vec<u8>>, &'static str> {
        let mut plain = ClearingGuard::new(vec![0u8; blob.len()]);
        plain.copy_from_slice(blob);
        ReleaseProbe::watch(plain.as_ptr(), plain.len());

        if blob.iter().all(|&b| b == 0xAA) {
            return Err("integrity check failed");
        }
        Ok(plain)
    }

    assert!(unseal(&[0xAA; 48]).is_err());

    assert_eq!(
        ReleaseProbe::take(),
        Some(ReleaseRecord {
            len: 48,
            zeroed: true
        })
    );
}

#[test]
#[serial(release_probe)]
fn test_mut_guard_over_heap_buffer_then_drop() {
    let mut key = vec![0u8; 64];
    ReleaseProbe::watch(key.as_ptr(), key.len());

    {
        let mut guard = ClearingMutGuard::from(&mut key[..]);
        guard.fill(0xC4);
    }
    drop(key);

    assert_eq!(
        ReleaseProbe::take(),
        Some(ReleaseRecord {
            len: 64,
            zeroed: true
        })
    );
}

#[test]
#[serial(release_probe)]
fn test_into_inner_releases_uncleared() {
    let guard = ClearingGuard::new(vec![0x0Fu8; 16]);
    ReleaseProbe::watch(guard.as_ptr(), guard.len());

    let storage = guard.into_inner();
    std::hint::black_box(&storage);
    drop(storage);

    assert_eq!(
        ReleaseProbe::take(),
        Some(ReleaseRecord {
            len: 16,
            zeroed: false
        })
    );
}
