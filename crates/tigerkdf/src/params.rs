// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cost parameters and entry-boundary validation.

use crate::error::Error;

/// Slices per garlic level: the first half uses data-independent
/// addressing, the second half data-dependent addressing.
///
/// The slice count is part of the output definition; changing it changes
/// every derived hash.
pub const SLICES: u32 = 16;

/// Largest supported memory-cost level (log2 of the total block count).
pub const MAX_MEM_COST: u8 = 30;

/// Largest supported time cost; values above 8 encode repetitions as
/// `1 << (time_cost - 8)`, which must fit a 32-bit count.
pub const MAX_TIME_COST: u8 = 38;

const DEFAULT_HASH_SIZE: u32 = 32;
const DEFAULT_MEM_COST: u8 = 15;
const DEFAULT_TIME_COST: u8 = 0;
const DEFAULT_BLOCK_SIZE: u32 = 4096;
const DEFAULT_SUB_BLOCK_SIZE: u32 = 64;
const DEFAULT_PARALLELISM: u32 = 2;

/// Cost parameters, immutable for the duration of a call.
///
/// Memory cost is logarithmic: level `m` fills roughly `2^m` blocks of
/// `block_size` bytes, split evenly across `parallelism` workers. Time cost
/// `t` encodes ALU work: `t <= 8` selects `t` serial multiplications per
/// 8-word chunk with one repetition; larger values pin the multiplication
/// count at 8 and repeat each block hash `2^(t - 8)` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    hash_size: u32,
    start_mem_cost: u8,
    stop_mem_cost: u8,
    time_cost: u8,
    block_size: u32,
    sub_block_size: u32,
    parallelism: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            hash_size: DEFAULT_HASH_SIZE,
            start_mem_cost: DEFAULT_MEM_COST,
            stop_mem_cost: DEFAULT_MEM_COST,
            time_cost: DEFAULT_TIME_COST,
            block_size: DEFAULT_BLOCK_SIZE,
            sub_block_size: DEFAULT_SUB_BLOCK_SIZE,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

impl Params {
    /// Validate and construct a parameter set.
    ///
    /// `sub_block_size` of 0 selects whole-block addressing
    /// (`sub_block_size = block_size`).
    pub fn new(
        hash_size: u32,
        start_mem_cost: u8,
        stop_mem_cost: u8,
        time_cost: u8,
        block_size: u32,
        sub_block_size: u32,
        parallelism: u32,
    ) -> Result<Self, Error> {
        if hash_size < 4 || hash_size % 4 != 0 {
            return Err(Error::HashSize);
        }
        if block_size < 32 || !block_size.is_power_of_two() {
            return Err(Error::BlockSize);
        }
        let sub_block_size = if sub_block_size == 0 {
            block_size
        } else {
            sub_block_size
        };
        if sub_block_size % 32 != 0 || block_size % sub_block_size != 0 {
            return Err(Error::SubBlockSize);
        }
        if start_mem_cost > stop_mem_cost || stop_mem_cost > MAX_MEM_COST {
            return Err(Error::MemCost);
        }
        if time_cost > MAX_TIME_COST {
            return Err(Error::TimeCost);
        }
        if parallelism == 0 {
            return Err(Error::Parallelism);
        }
        Ok(Self {
            hash_size,
            start_mem_cost,
            stop_mem_cost,
            time_cost,
            block_size,
            sub_block_size,
            parallelism,
        })
    }

    /// Library defaults with the whole ladder pinned at `mem_cost`; used by
    /// the simple entry point.
    pub(crate) fn simple(hash_size: u32, mem_cost: u8) -> Result<Self, Error> {
        Self::new(
            hash_size,
            mem_cost,
            mem_cost,
            DEFAULT_TIME_COST,
            DEFAULT_BLOCK_SIZE,
            DEFAULT_SUB_BLOCK_SIZE,
            DEFAULT_PARALLELISM,
        )
    }

    /// Output length in bytes.
    pub fn hash_size(&self) -> u32 {
        self.hash_size
    }

    /// First memory-cost level whose output is chained into the hash.
    pub fn start_mem_cost(&self) -> u8 {
        self.start_mem_cost
    }

    /// Final memory-cost level.
    pub fn stop_mem_cost(&self) -> u8 {
        self.stop_mem_cost
    }

    /// Encoded ALU work knob.
    pub fn time_cost(&self) -> u8 {
        self.time_cost
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Inner addressing granularity in bytes.
    pub fn sub_block_size(&self) -> u32 {
        self.sub_block_size
    }

    /// Number of worker threads.
    pub fn parallelism(&self) -> u32 {
        self.parallelism
    }

    /// Block length in 32-bit words.
    pub(crate) fn blocklen(&self) -> u32 {
        self.block_size / 4
    }

    /// Sub-block length in 32-bit words.
    pub(crate) fn sub_blocklen(&self) -> u32 {
        self.sub_block_size / 4
    }

    /// Serial multiplications per 8-word chunk.
    pub(crate) fn multiplies(&self) -> u32 {
        if self.time_cost <= 8 {
            u32::from(self.time_cost)
        } else {
            8
        }
    }

    /// Repetitions of each block hash.
    pub(crate) fn repetitions(&self) -> u32 {
        if self.time_cost <= 8 {
            1
        } else {
            1u32 << (self.time_cost - 8)
        }
    }

    /// Blocks each worker fills at the given memory-cost level.
    ///
    /// Always a multiple of [`SLICES`]; a level whose share rounds below one
    /// block per slice yields 0 and is skipped by the garlic loop.
    pub(crate) fn blocks_per_thread(&self, level: u8) -> u64 {
        let slices = u64::from(SLICES);
        slices * ((1u64 << level) / (slices * u64::from(self.parallelism)))
    }
}
