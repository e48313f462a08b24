// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Big-endian packing between byte strings and 32-bit word arrays.

/// Unpack big-endian bytes into words. `bytes` must be exactly four times
/// as long as `words`.
pub(crate) fn words_from_be_bytes(words: &mut [u32], bytes: &[u8]) {
    debug_assert_eq!(bytes.len(), words.len() * 4);
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Pack words into big-endian bytes. `bytes` must be exactly four times as
/// long as `words`.
pub(crate) fn words_to_be_bytes(bytes: &mut [u8], words: &[u32]) {
    debug_assert_eq!(bytes.len(), words.len() * 4);
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}
