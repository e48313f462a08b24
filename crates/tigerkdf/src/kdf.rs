// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The garlic loop and the public entry points.
//!
//! Memory cost escalates one level at a time, doubling the arena prefix in
//! use. Each kept level expands the running hash into a 256-bit seed,
//! mixes, folds the worker tails back in, and whitens the result; early
//! levels below the start of the ladder are mixed and discarded so that a
//! cold arena never holds an intermediate-cost hash.

use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::arena::Arena;
use crate::codec::words_to_be_bytes;
use crate::error::Error;
use crate::mix::mix_level;
use crate::params::{MAX_MEM_COST, Params, SLICES};
use crate::prf::{expand_hash, pbkdf2_hash};

/// Hash a password into `hash_size` bytes at the configured cost.
///
/// When `data` is supplied it is bound into the hash through a derived
/// salt, so two calls differing only in associated data diverge completely.
pub fn hash_password(
    params: &Params,
    password: &[u8],
    salt: &[u8],
    data: Option<&[u8]>,
) -> Result<Vec<u8>, Error> {
    let hash = initial_hash(params, password, salt, data);
    garlic_ladder(
        hash,
        params,
        params.start_mem_cost(),
        params.stop_mem_cost(),
        false,
        false,
    )
}

/// Hash a password with library defaults for everything but the memory cost.
pub fn simple_hash_password(
    hash_size: u32,
    password: &[u8],
    salt: &[u8],
    mem_cost: u8,
) -> Result<Vec<u8>, Error> {
    let params = Params::simple(hash_size, mem_cost)?;
    hash_password(&params, password, salt, None)
}

/// Raise the memory cost of a stored hash without knowing the password.
///
/// Runs the kept levels `old_mem_cost + 1 ..= new_mem_cost` seeded from the
/// stored hash, so updating composes: hashing straight to `new_mem_cost`
/// and updating a hash produced at `old_mem_cost` yield the same bytes.
pub fn update_password_hash(
    params: &Params,
    hash: &[u8],
    old_mem_cost: u8,
    new_mem_cost: u8,
) -> Result<Vec<u8>, Error> {
    if hash.len() != params.hash_size() as usize {
        return Err(Error::HashLength);
    }
    if old_mem_cost >= new_mem_cost || new_mem_cost > MAX_MEM_COST {
        return Err(Error::MemCost);
    }
    garlic_ladder(
        hash.to_vec(),
        params,
        old_mem_cost + 1,
        new_mem_cost,
        true,
        false,
    )
}

/// Client half of server relief: all the memory-hard work, with the final
/// whitening left out. Returns the 32-byte pre-whitening serialization.
pub fn client_hash_password(
    params: &Params,
    password: &[u8],
    salt: &[u8],
    data: Option<&[u8]>,
) -> Result<Vec<u8>, Error> {
    if params.blocks_per_thread(params.stop_mem_cost()) < u64::from(SLICES) {
        return Err(Error::MemTooSmall);
    }
    let hash = initial_hash(params, password, salt, data);
    garlic_ladder(
        hash,
        params,
        params.start_mem_cost(),
        params.stop_mem_cost(),
        false,
        true,
    )
}

/// Server half of server relief: one whitening of the client's output
/// reproduces the stored hash.
pub fn server_relief_finish(hash_size: u32, client_hash: &[u8]) -> Result<Vec<u8>, Error> {
    if hash_size < 4 || hash_size % 4 != 0 {
        return Err(Error::HashSize);
    }
    if client_hash.len() != 32 {
        return Err(Error::HashLength);
    }
    let mut hash = vec![0u8; hash_size as usize];
    pbkdf2_hash(&mut hash, client_hash, b"");
    Ok(hash)
}

/// Seed hash from the password, salt, and optional associated data.
fn initial_hash(params: &Params, password: &[u8], salt: &[u8], data: Option<&[u8]>) -> Vec<u8> {
    let mut hash = vec![0u8; params.hash_size() as usize];
    match data {
        Some(data) => {
            let mut derived_salt = vec![0u8; params.hash_size() as usize];
            pbkdf2_hash(&mut derived_salt, data, salt);
            pbkdf2_hash(&mut hash, password, &derived_salt);
            derived_salt.zeroize();
        }
        None => pbkdf2_hash(&mut hash, password, salt),
    }
    hash
}

/// Walk the memory-cost ladder, chaining the hash through every kept level.
fn garlic_ladder(
    mut hash: Vec<u8>,
    params: &Params,
    start_mem_cost: u8,
    stop_mem_cost: u8,
    update_mem_cost: bool,
    skip_last_hash: bool,
) -> Result<Vec<u8>, Error> {
    let blocklen = u64::from(params.blocklen());
    let parallelism = u64::from(params.parallelism());

    // One allocation sized for the final level; smaller levels use a prefix.
    let arena_words = params.blocks_per_thread(stop_mem_cost) * blocklen * parallelism;
    let arena_words = usize::try_from(arena_words).map_err(|_| Error::Allocation)?;
    let mut arena = Arena::new(arena_words)?;

    for level in 0..=stop_mem_cost {
        let kept = level >= start_mem_cost;
        let burned = !update_mem_cost && u32::from(level) + 6 < u32::from(start_mem_cost);
        if !kept && !burned {
            continue;
        }
        let bpt = params.blocks_per_thread(level);
        if bpt < u64::from(SLICES) {
            continue;
        }

        let mut hash256 = [0u32; 8];
        expand_hash(&mut hash256, &hash);
        let level_words = (bpt * blocklen * parallelism) as usize;
        mix_level(&mut arena.words_mut()[..level_words], &mut hash256, params, bpt);

        if kept {
            let mut folded = [0u8; 32];
            words_to_be_bytes(&mut folded, &hash256);
            hash256.zeroize();
            if skip_last_hash && level == stop_mem_cost {
                let out = folded.to_vec();
                folded.zeroize();
                hash.zeroize();
                return Ok(out);
            }
            pbkdf2_hash(&mut hash, &folded, b"");
            folded.zeroize();
        } else {
            hash256.zeroize();
        }
    }
    Ok(hash)
}
