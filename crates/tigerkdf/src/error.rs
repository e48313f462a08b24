// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// TigerKDF error
///
/// Every variant is detected at the entry boundary, before the arena is
/// touched; no partial output is ever produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Hash size must be at least 4 bytes and a multiple of 4
    #[error("hash size must be at least 4 bytes and a multiple of 4")]
    HashSize,

    /// Block size must be a power-of-two number of bytes, at least 32
    #[error("block size must be a power-of-two number of bytes, at least 32")]
    BlockSize,

    /// Sub-block size must divide the block size and be a multiple of 32 bytes
    #[error("sub-block size must divide the block size and be a multiple of 32 bytes")]
    SubBlockSize,

    /// Memory-cost ladder must satisfy start <= stop <= 30
    #[error("memory-cost ladder must satisfy start <= stop <= 30")]
    MemCost,

    /// Time cost is too large to encode a 32-bit repetition count
    #[error("time cost must not exceed 38")]
    TimeCost,

    /// At least one worker thread is required
    #[error("parallelism must be nonzero")]
    Parallelism,

    /// A supplied hash does not have the configured hash size
    #[error("hash length does not match the configured hash size")]
    HashLength,

    /// The memory cost is too small for any mixing to happen
    #[error("memory cost admits no mixing at the requested parallelism")]
    MemTooSmall,

    /// Arena allocation failed
    #[error("arena allocation failed")]
    Allocation,
}
