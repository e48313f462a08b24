// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The word arena and the per-worker views through which it is mixed.
//!
//! One contiguous allocation holds `parallelism * blocks_per_thread *
//! blocklen` 32-bit words, partitioned by ownership into one region per
//! worker. Workers write only their own region; they read other regions
//! only at addresses completed before the current slice barrier.

use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::error::Error;

/// The shared mixing arena. Zeroized on drop.
pub(crate) struct Arena {
    words: Vec<u32>,
}

impl Arena {
    /// Allocate a zero-filled arena of `len` words.
    ///
    /// Allocation is fallible; on failure no partial state exists.
    pub fn new(len: usize) -> Result<Self, Error> {
        let mut words = Vec::new();
        words.try_reserve_exact(len).map_err(|_| Error::Allocation)?;
        words.resize(len, 0);
        Ok(Self { words })
    }

    pub fn words_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.words.zeroize();
    }
}

/// One worker's window onto the arena for the duration of a single slice.
///
/// Stores go only to the owning worker's region; loads may touch any
/// address the slice schedule proves stable (the worker's own region, or a
/// foreign block completed before the slice barrier).
pub(crate) struct RegionView {
    base: *mut u32,
    arena_len: usize,
    region_start: usize,
    region_end: usize,
}

impl RegionView {
    /// # Safety
    ///
    /// `base` must point to an arena of `arena_len` words that outlives the
    /// view. For the view's lifetime no other thread may write inside
    /// `[region_start, region_start + region_len)`, and every address this
    /// worker loads outside that range must have been written before the
    /// current slice began. The slice scheduler upholds both: regions are
    /// disjoint per worker, and the barrier between slices orders foreign
    /// writes before foreign reads.
    pub unsafe fn new(
        base: *mut u32,
        arena_len: usize,
        region_start: usize,
        region_len: usize,
    ) -> Self {
        debug_assert!(region_start + region_len <= arena_len);
        Self {
            base,
            arena_len,
            region_start,
            region_end: region_start + region_len,
        }
    }

    #[inline(always)]
    pub fn load(&self, addr: u64) -> u32 {
        let addr = addr as usize;
        debug_assert!(addr < self.arena_len);
        unsafe { self.base.add(addr).read() }
    }

    #[inline(always)]
    pub fn store(&mut self, addr: u64, value: u32) {
        let addr = addr as usize;
        debug_assert!(self.region_start <= addr && addr < self.region_end);
        unsafe { self.base.add(addr).write(value) }
    }
}
