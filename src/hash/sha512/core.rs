//! SHA-512 compression function
//!
//! Same shape as [`crate::hash::sha256::core`] at the 64-bit/128-byte width.

use super::computations::all_rounds;

/// Compresses a single 1024-bit message block, updating `state` in place.
pub(crate) fn compress(block: &[u8; 128], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_be_bytes(chunk.try_into().expect("8-byte chunk"));
    }

    all_rounds(state, w);
}
