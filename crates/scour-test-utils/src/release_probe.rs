// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::alloc::{GlobalAlloc, Layout, System};
use std::hint::black_box;
use std::ptr;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

/// No release observed for the watched address
const STATE_PENDING: u8 = 0;
/// Released with every watched byte equal to zero
const STATE_RELEASED_ZEROED: u8 = 1;
/// Released with at least one non-zero byte
const STATE_RELEASED_DIRTY: u8 = 2;

static WATCHED_ADDR: AtomicUsize = AtomicUsize::new(0);
static WATCHED_LEN: AtomicUsize = AtomicUsize::new(0);
static RELEASE_STATE: AtomicU8 = AtomicU8::new(STATE_PENDING);
static RELEASED_LEN: AtomicUsize = AtomicUsize::new(0);

/// What [`ReleaseProbe`] saw when the watched allocation was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseRecord {
    /// Number of bytes inspected (the watched length, capped at the layout size).
    pub len: usize,
    /// Whether every inspected byte was zero at release time.
    pub zeroed: bool,
}

/// Global allocator wrapping [`System`] that records the contents of one
/// watched allocation when it is released.
///
/// Install it in an integration test binary and serialize the tests that use
/// it, since the watch slot is process-wide:
///
/// ```rust,ignore
/// use scour_test_utils::ReleaseProbe;
///
/// #[global_allocator]
/// static PROBE: ReleaseProbe = ReleaseProbe;
///
/// #[test]
/// #[serial_test::serial(release_probe)]
/// fn test_cleared_before_release() {
///     let buf = vec![0u8; 32].into_boxed_slice();
///     ReleaseProbe::watch(buf.as_ptr(), buf.len());
///     drop(buf);
///     assert_eq!(ReleaseProbe::take(), Some(ReleaseRecord { len: 32, zeroed: true }));
/// }
/// ```
///
/// `dealloc` never allocates; it only scans and stores atomics. The scan sits
/// behind an opaque function pointer so callers are compiled against a plain
/// release and cannot see that the bytes are read afterwards.
///
/// `realloc` on the watched block always moves it, and the old block is
/// inspected as a release once its contents are copied.
pub struct ReleaseProbe;

impl ReleaseProbe {
    /// Starts watching the allocation that begins at `ptr`.
    ///
    /// Any previous watch and unread record are discarded.
    pub fn watch(ptr: *const u8, len: usize) {
        RELEASE_STATE.store(STATE_PENDING, Ordering::SeqCst);
        RELEASED_LEN.store(0, Ordering::SeqCst);
        WATCHED_LEN.store(len, Ordering::SeqCst);
        WATCHED_ADDR.store(ptr as usize, Ordering::SeqCst);
    }

    /// Returns the record for the last watched release, clearing it.
    ///
    /// `None` means the watched allocation has not been released yet.
    pub fn take() -> Option<ReleaseRecord> {
        let record = match RELEASE_STATE.swap(STATE_PENDING, Ordering::SeqCst) {
            STATE_RELEASED_ZEROED => ReleaseRecord {
                len: RELEASED_LEN.load(Ordering::SeqCst),
                zeroed: true,
            },
            STATE_RELEASED_DIRTY => ReleaseRecord {
                len: RELEASED_LEN.load(Ordering::SeqCst),
                zeroed: false,
            },
            _ => return None,
        };

        Some(record)
    }

    /// Stops watching without producing a record.
    pub fn reset() {
        WATCHED_ADDR.store(0, Ordering::SeqCst);
        WATCHED_LEN.store(0, Ordering::SeqCst);
        RELEASE_STATE.store(STATE_PENDING, Ordering::SeqCst);
        RELEASED_LEN.store(0, Ordering::SeqCst);
    }

    #[inline(never)]
    fn inspect(ptr: *mut u8, layout: Layout) {
        let watched = WATCHED_ADDR.load(Ordering::SeqCst);
        if watched == 0 || ptr as usize != watched {
            return;
        }

        // Claim the watch so a concurrent release of a recycled address is ignored.
        if WATCHED_ADDR
            .compare_exchange(watched, 0, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let len = WATCHED_LEN.load(Ordering::SeqCst).min(layout.size());
        let zeroed = (0..len).all(|i| unsafe { ptr::read_volatile(ptr.add(i)) } == 0);

        RELEASED_LEN.store(len, Ordering::SeqCst);
        RELEASE_STATE.store(
            if zeroed {
                STATE_RELEASED_ZEROED
            } else {
                STATE_RELEASED_DIRTY
            },
            Ordering::SeqCst,
        );
    }
}

unsafe impl GlobalAlloc for ReleaseProbe {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        let inspect = black_box(Self::inspect as fn(*mut u8, Layout));
        inspect(ptr, layout);
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if ptr as usize != WATCHED_ADDR.load(Ordering::SeqCst) {
            return unsafe { System.realloc(ptr, layout, new_size) };
        }

        // Move the watched block by hand so the old one can be inspected.
        // SAFETY: `new_size` is non-zero and fits `layout.align()` per the
        // `GlobalAlloc::realloc` contract.
        let new_layout = unsafe { Layout::from_size_align_unchecked(new_size, layout.align()) };
        let new_ptr = unsafe { System.alloc(new_layout) };
        if !new_ptr.is_null() {
            // SAFETY: both blocks are live and span at least the copied length.
            unsafe {
                ptr::copy_nonoverlapping(ptr, new_ptr, layout.size().min(new_size));
                self.dealloc(ptr, layout);
            }
        }
        new_ptr
    }
}
