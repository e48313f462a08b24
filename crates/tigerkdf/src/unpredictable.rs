// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The unpredictable phase: data-dependent addressing.
//!
//! Source distances follow an approximately cubed-uniform distribution
//! drawn from the worker state, concentrating reads on recent blocks.
//! Recomputing a pruned block therefore tends to recurse into more pruned
//! blocks, which is what makes time-memory trade-offs expensive here.

use crate::arena::RegionView;
use crate::block::hash_block;
use crate::params::{Params, SLICES};

/// Fixed-point cube of `v / 2^32`, as a fraction of 2^32.
pub(crate) fn cubed_fraction(v: u32) -> u32 {
    let v2 = ((u64::from(v) * u64::from(v)) >> 32) as u32;
    ((u64::from(v) * u64::from(v2)) >> 32) as u32
}

/// Fill one unpredictable slice of worker `p`'s region.
///
/// Foreign reads land in a password-dependent region here, unlike the
/// round-robin of the resistant phase; they still touch only blocks
/// completed before the slice barrier.
pub(crate) fn unpredictable_slice(
    state: &mut [u32; 8],
    mem: &mut RegionView,
    params: &Params,
    p: u32,
    bpt: u64,
    completed: u64,
) {
    let blocklen = u64::from(params.blocklen());
    let start = blocklen * bpt * u64::from(p);

    for i in completed..completed + bpt / u64::from(SLICES) {
        let distance = ((i - 1) * u64::from(cubed_fraction(state[0]))) >> 32;
        let mut from_addr = (i - 1 - distance) * blocklen;
        if from_addr < completed * blocklen {
            from_addr += blocklen * bpt * u64::from(state[1] % params.parallelism());
        } else {
            from_addr += start;
        }
        let to_addr = start + i * blocklen;
        hash_block(state, mem, params, from_addr, to_addr);
    }
}
