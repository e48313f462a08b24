// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The slice scheduler: one mixing pass over the arena at a single
//! memory-cost level.
//!
//! Every worker state is stamped from the common 256-bit seed, then all
//! workers walk the sixteen slices in lockstep: eight resistant, eight
//! unpredictable. The join at the end of each slice is the only
//! synchronization point; it is what makes foreign reads in the next slice
//! race-free.

use alloc::vec::Vec;
use zeroize::Zeroize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::arena::RegionView;
use crate::params::{Params, SLICES};
use crate::prf::salt_state;
use crate::resistant::resistant_slice;
use crate::unpredictable::unpredictable_slice;

/// Run one full mixing pass, folding each worker's tail block back into
/// `hash256` afterwards.
pub(crate) fn mix_level(mem: &mut [u32], hash256: &mut [u32; 8], params: &Params, bpt: u64) {
    let blocklen = u64::from(params.blocklen());
    let region_len = (blocklen * bpt) as usize;

    let mut states: Vec<[u32; 8]> = (0..params.parallelism())
        .map(|p| {
            let mut state = *hash256;
            salt_state(&mut state, p);
            state
        })
        .collect();

    // Pointer types are not Send + Sync; workers rebuild their view from
    // the address inside the closure.
    let mem_ptr = mem.as_mut_ptr() as usize;
    let arena_len = mem.len();

    for slice in 0..SLICES {
        let completed = u64::from(slice) * bpt / u64::from(SLICES);

        let run_slice = |(p, state): (usize, &mut [u32; 8])| {
            // SAFETY: the arena outlives this call; worker regions are
            // disjoint, so nobody else writes `[region_len * p,
            // region_len * (p + 1))` while this view exists; and both
            // phases only load foreign addresses below `completed *
            // blocklen`, which were written before the previous join.
            let mut view = unsafe {
                RegionView::new(mem_ptr as *mut u32, arena_len, region_len * p, region_len)
            };
            if slice < SLICES / 2 {
                resistant_slice(state, &mut view, params, p as u32, bpt, completed);
            } else {
                unpredictable_slice(state, &mut view, params, p as u32, bpt, completed);
            }
        };

        #[cfg(feature = "parallel")]
        states.par_iter_mut().enumerate().for_each(run_slice);
        #[cfg(not(feature = "parallel"))]
        states.iter_mut().enumerate().for_each(run_slice);
    }

    add_into_hash(hash256, mem, params.parallelism(), region_len);
    states.zeroize();
}

/// Fold the last 8 words of every worker region into the 256-bit hash,
/// word-wise wrapping.
fn add_into_hash(hash256: &mut [u32; 8], mem: &[u32], parallelism: u32, region_len: usize) {
    for p in 0..parallelism as usize {
        let tail = &mem[(p + 1) * region_len - 8..(p + 1) * region_len];
        for (word, &t) in hash256.iter_mut().zip(tail.iter()) {
            *word = word.wrapping_add(t);
        }
    }
}
