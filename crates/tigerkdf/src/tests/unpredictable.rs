// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the cubed distance distribution

use proptest::prelude::*;

use crate::unpredictable::cubed_fraction;

#[test]
fn test_cubed_fraction_endpoints() {
    assert_eq!(cubed_fraction(0), 0);
    assert_eq!(cubed_fraction(1), 0);
    assert_eq!(cubed_fraction(u32::MAX), 0xffff_fffd);
}

#[test]
fn test_cubed_fraction_halves() {
    // (1/2)^3 = 1/8, (1/4)^3 = 1/64 in fixed point
    assert_eq!(cubed_fraction(0x8000_0000), 0x2000_0000);
    assert_eq!(cubed_fraction(0x4000_0000), 0x0400_0000);
}

proptest! {
    #[test]
    fn test_distance_stays_behind_the_cursor(i in 1u64..(1 << 20), v in any::<u32>()) {
        let distance = ((i - 1) * u64::from(cubed_fraction(v))) >> 32;
        prop_assert!(distance <= i - 1);
        let source = i - 1 - distance;
        prop_assert!(source < i);
    }
}
