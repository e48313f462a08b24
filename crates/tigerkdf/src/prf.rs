// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The cryptographic seal: BLAKE2s, its keyed form, and the one-iteration
//! PBKDF2 wrapper used for seeding and whitening.
//!
//! The mixing engine only ever needs 32-byte seals; variable-length output
//! goes through PBKDF2 with HMAC-BLAKE2s-256 as the PRF (hLen = 32).

use blake2::digest::{KeyInit, Mac};
use blake2::{Blake2s256, Blake2sMac256, Digest};
use hmac::SimpleHmac;
use zeroize::Zeroize;

use crate::codec::{words_from_be_bytes, words_to_be_bytes};

/// Unkeyed 32-byte BLAKE2s seal.
pub(crate) fn hash32(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Blake2s256::digest(data));
    out
}

/// Keyed 32-byte BLAKE2s seal.
pub(crate) fn keyed_hash32(data: &[u8], key: &[u8; 4]) -> [u8; 32] {
    let Ok(mut mac) = <Blake2sMac256 as KeyInit>::new_from_slice(key) else {
        unreachable!("4-byte keys are always within the BLAKE2s key bound");
    };
    mac.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

/// PBKDF2 with exactly one iteration, filling all of `out`.
pub(crate) fn pbkdf2_hash(out: &mut [u8], password: &[u8], salt: &[u8]) {
    if pbkdf2::pbkdf2::<SimpleHmac<Blake2s256>>(password, salt, 1, out).is_err() {
        unreachable!("HMAC-BLAKE2s accepts keys of any length");
    }
}

/// Re-seal a 256-bit state with a 32-bit integer salt, in place.
///
/// Serializes the state big-endian, seals it keyed with the big-endian salt
/// word, and deserializes the result back into the state.
pub(crate) fn salt_state(state: &mut [u32; 8], salt: u32) {
    let mut bytes = [0u8; 32];
    words_to_be_bytes(&mut bytes, state);
    let mut sealed = keyed_hash32(&bytes, &salt.to_be_bytes());
    words_from_be_bytes(state, &sealed);
    bytes.zeroize();
    sealed.zeroize();
}

/// Expand a variable-length hash into a 256-bit state with one seal call.
pub(crate) fn expand_hash(state: &mut [u32; 8], hash: &[u8]) {
    let mut digest = hash32(hash);
    words_from_be_bytes(state, &digest);
    digest.zeroize();
}
