// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The block hasher: fills one destination block from the previous block,
//! a remote block, and the worker's running 256-bit state.
//!
//! The eight-lane add/xor/rotate loop keeps memory bandwidth saturated,
//! while the serial multiplication chain caps how far an attacker can
//! shorten the critical path with custom hardware. All word arithmetic
//! wraps mod 2^32; the rotate distance of 8 keeps the inner loop cheap on
//! byte-permuting SIMD units.

use crate::arena::RegionView;
use crate::params::Params;
use crate::prf::salt_state;

/// Hash the block at `to_addr` from the block at `from_addr`, mutating the
/// worker state.
///
/// The previous block (`to_addr - blocklen`) must be fully written, as must
/// the source block. Each sub-block of the source selects a random window
/// into the previous block from its leading word.
pub(crate) fn hash_block(
    state: &mut [u32; 8],
    mem: &mut RegionView,
    params: &Params,
    from_addr: u64,
    to_addr: u64,
) {
    let blocklen = u64::from(params.blocklen());
    let sub_blocklen = params.sub_blocklen();
    let num_sub_blocks = params.blocklen() / sub_blocklen;
    let multiplies = params.multiplies() as usize;
    let prev_addr = to_addr - blocklen;

    let mut odd_state = [0u32; 8];
    for (odd, word) in odd_state.iter_mut().zip(state.iter()) {
        *odd = *word | 1;
    }

    let mut v: u32 = 1;
    for _ in 0..params.repetitions() {
        let mut f = from_addr;
        let mut t = to_addr;
        for _ in 0..num_sub_blocks {
            let rand_val = mem.load(f);
            let mut p =
                prev_addr + u64::from(sub_blocklen) * u64::from(rand_val & (num_sub_blocks - 1));
            for _ in 0..sub_blocklen / 8 {
                // Serial chain: each product depends on the last, and the
                // odd factors keep the multiplication invertible.
                for &odd in &odd_state[..multiplies] {
                    v = v.wrapping_mul(odd);
                    v ^= rand_val;
                }
                for word in state.iter_mut() {
                    let mixed = (word.wrapping_add(mem.load(p)) ^ mem.load(f)).rotate_left(8);
                    *word = mixed;
                    mem.store(t, mixed);
                    p += 1;
                    f += 1;
                    t += 1;
                }
            }
        }
    }
    salt_state(state, v);
}
