//! SHA-256 compression function
//!
//! This module implements the SHA-256 compression step as defined in
//! FIPS 180-4, operating on a single 512-bit block at a time. The streaming
//! state machine in [`super::Sha256`] drives this function over the padded
//! message.

use super::computations::all_rounds;

/// Compresses a single 512-bit message block, updating `state` in place.
///
/// Input words are interpreted as big-endian, as required by SHA-256. The
/// message schedule's first 16 words are loaded here; the remaining 48 are
/// expanded on the fly by [`all_rounds`].
pub(crate) fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().expect("4-byte chunk"));
    }

    all_rounds(state, w);
}
