// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! End-to-end tests for password hashing, cost updates, and server relief.
//!
//! Cost parameters are kept deliberately tiny (64-byte blocks, a few
//! hundred blocks of arena) so the whole file runs in milliseconds.

use tigerkdf::{
    Error, Params, client_hash_password, hash_password, server_relief_finish,
    simple_hash_password, update_password_hash,
};

fn tiny(stop_mem_cost: u8, time_cost: u8, parallelism: u32) -> Params {
    Params::new(32, 0, stop_mem_cost, time_cost, 64, 32, parallelism)
        .expect("Failed to Params::new(..)")
}

#[test]
fn test_deterministic() {
    let params = tiny(8, 2, 2);
    let a = hash_password(&params, b"password", b"salt", None).expect("Failed to hash_password(..)");
    let b = hash_password(&params, b"password", b"salt", None).expect("Failed to hash_password(..)");
    assert_eq!(a, b);
}

#[test]
fn test_output_length_matches_hash_size() {
    for hash_size in [4u32, 32, 64, 256] {
        let params = Params::new(hash_size, 0, 6, 0, 64, 32, 1).expect("Failed to Params::new(..)");
        let hash =
            hash_password(&params, b"password", b"salt", None).expect("Failed to hash_password(..)");
        assert_eq!(hash.len(), hash_size as usize);
    }
}

#[test]
fn test_password_and_salt_sensitivity() {
    let params = tiny(8, 0, 1);
    let base = hash_password(&params, b"password", b"salt", None).expect("Failed to hash_password(..)");
    let flipped =
        hash_password(&params, b"passwore", b"salt", None).expect("Failed to hash_password(..)");
    let salted =
        hash_password(&params, b"password", b"selt", None).expect("Failed to hash_password(..)");
    assert_ne!(base, flipped);
    assert_ne!(base, salted);
}

#[test]
fn test_associated_data_binds() {
    let params = tiny(8, 0, 1);
    let none = hash_password(&params, b"password", b"salt", None).expect("Failed to hash_password(..)");
    let some = hash_password(&params, b"password", b"salt", Some(b"user-id"))
        .expect("Failed to hash_password(..)");
    let other = hash_password(&params, b"password", b"salt", Some(b"user-ie"))
        .expect("Failed to hash_password(..)");
    assert_ne!(none, some);
    assert_ne!(some, other);
}

#[test]
fn test_cost_knobs_change_the_hash() {
    let base = hash_password(&tiny(8, 0, 1), b"password", b"salt", None)
        .expect("Failed to hash_password(..)");

    // More multiplications
    let multiplied = hash_password(&tiny(8, 4, 1), b"password", b"salt", None)
        .expect("Failed to hash_password(..)");
    assert_ne!(base, multiplied);

    // Repetitions instead of multiplications
    let repeated = hash_password(&tiny(8, 10, 1), b"password", b"salt", None)
        .expect("Failed to hash_password(..)");
    assert_ne!(base, repeated);
    assert_ne!(multiplied, repeated);

    // More workers
    let wider = hash_password(&tiny(8, 0, 2), b"password", b"salt", None)
        .expect("Failed to hash_password(..)");
    assert_ne!(base, wider);

    // Bigger blocks
    let params = Params::new(32, 0, 8, 0, 128, 32, 1).expect("Failed to Params::new(..)");
    let blocky = hash_password(&params, b"password", b"salt", None)
        .expect("Failed to hash_password(..)");
    assert_ne!(base, blocky);
}

#[test]
fn test_garlic_ladder_start_changes_chaining() {
    let early = Params::new(32, 5, 8, 0, 64, 32, 1).expect("Failed to Params::new(..)");
    let late = Params::new(32, 7, 8, 0, 64, 32, 1).expect("Failed to Params::new(..)");
    let a = hash_password(&early, b"password", b"salt", None).expect("Failed to hash_password(..)");
    let b = hash_password(&late, b"password", b"salt", None).expect("Failed to hash_password(..)");
    assert_ne!(a, b);
}

#[test]
fn test_update_composes_with_direct_hashing() {
    let stored = hash_password(&tiny(6, 2, 1), b"password", b"salt", None)
        .expect("Failed to hash_password(..)");
    let updated = update_password_hash(&tiny(8, 2, 1), &stored, 6, 8)
        .expect("Failed to update_password_hash(..)");
    let direct = hash_password(&tiny(8, 2, 1), b"password", b"salt", None)
        .expect("Failed to hash_password(..)");
    assert_eq!(updated, direct);
}

#[test]
fn test_update_rejects_bad_inputs() {
    let params = tiny(8, 0, 1);
    let stored =
        hash_password(&params, b"password", b"salt", None).expect("Failed to hash_password(..)");
    assert_eq!(
        update_password_hash(&params, &stored, 8, 8),
        Err(Error::MemCost)
    );
    assert_eq!(
        update_password_hash(&params, &stored[..16], 6, 8),
        Err(Error::HashLength)
    );
}

#[test]
fn test_server_relief_reproduces_the_full_hash() {
    let params = tiny(8, 2, 2);
    let client = client_hash_password(&params, b"password", b"salt", None)
        .expect("Failed to client_hash_password(..)");
    assert_eq!(client.len(), 32);

    let server = server_relief_finish(32, &client).expect("Failed to server_relief_finish(..)");
    let full =
        hash_password(&params, b"password", b"salt", None).expect("Failed to hash_password(..)");
    assert_eq!(server, full);
    // The client never holds the stored hash
    assert_ne!(client, full);
}

#[test]
fn test_server_relief_rejects_bad_inputs() {
    assert_eq!(
        client_hash_password(&tiny(0, 0, 1), b"password", b"salt", None),
        Err(Error::MemTooSmall)
    );
    assert_eq!(server_relief_finish(32, &[0u8; 16]), Err(Error::HashLength));
    assert_eq!(server_relief_finish(7, &[0u8; 32]), Err(Error::HashSize));
}

#[test]
fn test_degenerate_memory_passes_the_seed_through() {
    // A ladder too small to fill a single slice never mixes; the call still
    // succeeds, deterministically.
    let params = tiny(0, 0, 1);
    let a = hash_password(&params, b"password", b"salt", None).expect("Failed to hash_password(..)");
    let b = hash_password(&params, b"password", b"salt", None).expect("Failed to hash_password(..)");
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);
}

#[test]
fn test_burn_levels_do_not_feed_the_hash() {
    // With the ladder starting high, early levels are mixed and discarded;
    // the kept levels alone define the output, so an update seeded at the
    // same point agrees.
    let burned = Params::new(32, 11, 11, 0, 64, 32, 1).expect("Failed to Params::new(..)");
    let hash =
        hash_password(&burned, b"password", b"salt", None).expect("Failed to hash_password(..)");
    assert_eq!(hash.len(), 32);
    let again =
        hash_password(&burned, b"password", b"salt", None).expect("Failed to hash_password(..)");
    assert_eq!(hash, again);
}

#[test]
fn test_simple_hash_password() {
    let a = simple_hash_password(32, b"password", b"salt", 7)
        .expect("Failed to simple_hash_password(..)");
    let b = simple_hash_password(32, b"password", b"salt", 7)
        .expect("Failed to simple_hash_password(..)");
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);

    let costlier = simple_hash_password(32, b"password", b"salt", 8)
        .expect("Failed to simple_hash_password(..)");
    assert_ne!(a, costlier);
}
