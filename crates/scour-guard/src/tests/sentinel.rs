// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::ClearSentinel;

#[test]
fn test_sentinel_starts_pristine() {
    let sentinel = ClearSentinel::default();
    assert!(!sentinel.is_cleared());
}

#[test]
fn test_sentinel_clone_observes_mark() {
    let mut sentinel = ClearSentinel::default();
    let observer = sentinel.clone();

    sentinel.mark_cleared();
    assert!(observer.is_cleared());
    assert_eq!(sentinel, observer);
}

#[test]
fn test_sentinel_reset() {
    let mut sentinel = ClearSentinel::default();
    sentinel.mark_cleared();
    sentinel.reset();

    assert!(!sentinel.is_cleared());
}

#[test]
fn test_sentinel_independent_instances() {
    let mut a = ClearSentinel::default();
    let b = ClearSentinel::default();

    a.mark_cleared();
    assert!(!b.is_cleared());
    assert_ne!(a, b);
}

#[test]
fn test_sentinel_mark_seen_from_other_thread() {
    let mut sentinel = ClearSentinel::default();
    let observer = sentinel.clone();

    let handle = std::thread::spawn(move || {
        while !observer.is_cleared() {
            std::hint::spin_loop();
        }
        observer
    });

    sentinel.mark_cleared();
    let observer = handle.join().expect("observer thread panicked");
    assert!(observer.is_cleared());
}
