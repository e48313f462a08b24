// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The resistant phase: data-independent addressing.
//!
//! Source addresses are a function of public parameters and the block index
//! alone, so an adversary watching cache lines during this phase learns
//! nothing about the password. The schedule is bit-reversal over a sliding
//! power-of-two window: within each doubling of the block index, the
//! reflected positions visit every window offset exactly once.

use crate::arena::RegionView;
use crate::block::hash_block;
use crate::params::{Params, SLICES};
use crate::prf::salt_state;

/// Source position read while filling block `i`: the reflection of `i`
/// inside the largest power-of-two window below it, slid forward by one
/// window when the reflected position has already fallen too far behind.
pub(crate) fn reverse_position(i: u64) -> u64 {
    debug_assert!(i >= 1);
    let window_bits = 63 - i.leading_zeros();
    if window_bits == 0 {
        return 0;
    }
    let window = 1u64 << window_bits;
    let mut rev = (i & (window - 1)).reverse_bits() >> (64 - window_bits);
    if rev + window < i {
        rev += window;
    }
    rev
}

/// Fill one resistant slice of worker `p`'s region.
///
/// `completed` is the number of blocks every worker had finished when the
/// slice barrier was crossed; sources below that boundary may be read from
/// any region, round-robin by block index.
pub(crate) fn resistant_slice(
    state: &mut [u32; 8],
    mem: &mut RegionView,
    params: &Params,
    p: u32,
    bpt: u64,
    completed: u64,
) {
    let blocklen = u64::from(params.blocklen());
    let start = blocklen * bpt * u64::from(p);

    let mut first = completed;
    if completed == 0 {
        // Seed the very first block by repeatedly re-sealing the state.
        for i in 0..params.blocklen() / 8 {
            salt_state(state, i);
            for (k, &word) in state.iter().enumerate() {
                mem.store(start + u64::from(8 * i) + k as u64, word);
            }
        }
        first = 1;
    }

    for i in first..completed + bpt / u64::from(SLICES) {
        let mut from_addr = blocklen * reverse_position(i);
        if from_addr < completed * blocklen {
            from_addr += blocklen * bpt * (i % u64::from(params.parallelism()));
        } else {
            from_addr += start;
        }
        let to_addr = start + i * blocklen;
        hash_block(state, mem, params, from_addr, to_addr);
    }
}
