// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TigerKDF - memory-hard password hashing and key derivation
//!
//! Derives a pseudorandom key from a password and salt while forcing an
//! attacker to spend large amounts of RAM bandwidth and a configurable
//! amount of sequential multiplication work, in the same family as scrypt
//! and Catena. Memory cost escalates in garlic levels (each level doubles
//! the arena), and every level is filled in sixteen slices: the first eight
//! use cache-timing-resistant bit-reversal addressing, the second eight use
//! password-dependent addressing that penalizes time-memory trade-offs.
//!
//! The BLAKE2s seal and the one-iteration PBKDF2 wrapper around it come
//! from the `blake2`, `hmac`, and `pbkdf2` crates; everything password-
//! derived is wiped with `zeroize` on the way out.
//!
//! References:
//! - Forler, Lucks, Wenzel: "Catena: A Memory-Consuming Password Scrambler"
//!   <https://eprint.iacr.org/2013/525>
//! - Percival: "Stronger Key Derivation via Sequential Memory-Hard
//!   Functions" <https://www.tarsnap.com/scrypt/scrypt.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod arena;
mod block;
mod codec;
mod error;
mod kdf;
mod mix;
mod params;
mod prf;
mod resistant;
mod unpredictable;

pub use error::Error;
pub use kdf::{
    client_hash_password, hash_password, server_relief_finish, simple_hash_password,
    update_password_hash,
};
pub use params::{Params, SLICES};
