// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod is_slice_filled_with_tests {
    use proptest::prelude::*;
    use scour_util::{count_mismatched, is_slice_filled_with, is_slice_zeroized};

    #[test]
    fn test_is_slice_filled_with_empty() {
        assert!(is_slice_filled_with(&[], 0xFF));
        assert!(is_slice_zeroized(&[]));
    }

    #[test]
    fn test_is_slice_filled_with_uniform() {
        assert!(is_slice_filled_with(&[0xAA; 16], 0xAA));
        assert!(!is_slice_filled_with(&[0xAA; 16], 0x00));
    }

    #[test]
    fn test_is_slice_filled_with_single_outlier() {
        let mut data = [0x5Au8; 64];
        data[63] = 0x5B;

        assert!(!is_slice_filled_with(&data, 0x5A));
        assert_eq!(count_mismatched(&data, 0x5A), 1);
    }

    #[test]
    fn test_is_slice_zeroized_detects_nonzero() {
        assert!(is_slice_zeroized(&[0u8; 8]));
        assert!(!is_slice_zeroized(&[0, 0, 0, 1]));
    }

    proptest! {
        #[test]
        fn filled_slice_has_no_mismatches(len in 0..512usize, pattern in any::<u8>()) {
            let data = vec![pattern; len];

            prop_assert!(is_slice_filled_with(&data, pattern));
            prop_assert_eq!(count_mismatched(&data, pattern), 0);
        }
    }
}
