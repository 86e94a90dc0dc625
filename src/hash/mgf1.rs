//! MGF1 — Mask Generation Function #1 (PKCS#1)
//!
//! Builds an arbitrarily long, deterministic byte stream out of a hash
//! function by concatenating `hash(seed ∥ be32(counter))` for increasing
//! counter values. Used exclusively by RSAES-OAEP in this crate; exposed
//! publicly since it's a useful primitive in its own right.

use crate::hash::Sha256;

/// `mgf1_sha256(seed, out_len)`: the MGF1 mask of length `out_len` bytes,
/// built from SHA-256.
///
/// For counter `i = 0, 1, 2, ...`, concatenates `SHA256(seed ∥ be32(i))`
/// until `out_len` bytes have been produced, then truncates to exactly
/// that length.
pub fn mgf1_sha256(seed: &[u8], out_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(out_len + 32);
    let mut counter: u32 = 0;

    while out.len() < out_len {
        let mut hasher = Sha256::new();
        hasher.update(seed).expect("fresh hasher accepts update");
        hasher
            .update(&counter.to_be_bytes())
            .expect("hasher not yet finalized");
        let block = hasher.finalize().expect("hasher finalized exactly once");
        out.extend_from_slice(&block);
        counter = counter.wrapping_add(1);
    }

    out.truncate(out_len);
    out
}
