//! SHA-512 streaming hasher
//!
//! Identical shape to [`super::sha256`] at double the width: 64-bit words,
//! 128-byte blocks, 80 rounds, a 128-bit bit-length suffix. Used directly by
//! Ed25519 for scalar derivation and deterministic nonce generation.

pub(crate) mod computations;
pub mod core;

use crate::error::{Error, Result};

/// Round constants `K`, the fractional parts of the cube roots of the first
/// 80 primes.
pub(crate) const K512: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// Initial hash value `H(0)`, the fractional parts of the square roots of
/// the first 8 primes.
pub(crate) const H512_INIT: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

/// Streaming SHA-512 hasher.
pub struct Sha512 {
    state: [u64; 8],
    buffer: [u8; 128],
    buffered: usize,
    total_len: u128,
    finalized: bool,
}

impl Sha512 {
    /// Creates a fresh hasher with no input consumed yet.
    pub fn new() -> Self {
        Self {
            state: H512_INIT,
            buffer: [0u8; 128],
            buffered: 0,
            total_len: 0,
            finalized: false,
        }
    }

    /// Feeds `data` into the hasher. May be called any number of times,
    /// including with an empty slice.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::HashStateMisuse);
        }

        self.total_len = self.total_len.wrapping_add(data.len() as u128);
        let mut input = data;

        if self.buffered > 0 {
            let needed = 128 - self.buffered;
            let take = needed.min(input.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];

            if self.buffered == 128 {
                let block = self.buffer;
                core::compress(&block, &mut self.state);
                self.buffered = 0;
            }
        }

        while input.len() >= 128 {
            let block: &[u8; 128] = input[..128].try_into().expect("128-byte chunk");
            core::compress(block, &mut self.state);
            input = &input[128..];
        }

        if !input.is_empty() {
            self.buffer[..input.len()].copy_from_slice(input);
            self.buffered = input.len();
        }

        Ok(())
    }

    /// Pads and compresses any remaining buffered input, producing the
    /// 64-byte digest and consuming the hasher.
    pub fn finalize(mut self) -> Result<[u8; 64]> {
        if self.finalized {
            return Err(Error::HashStateMisuse);
        }
        self.finalized = true;

        let rem = self.buffered;
        let mut block = self.buffer;
        block[rem] = 0x80;
        for byte in block.iter_mut().skip(rem + 1) {
            *byte = 0;
        }

        if rem > 111 {
            core::compress(&block, &mut self.state);
            block = [0u8; 128];
        }

        let bit_len = self.total_len << 3;
        block[112..128].copy_from_slice(&bit_len.to_be_bytes());
        core::compress(&block, &mut self.state);

        let mut out = [0u8; 64];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Ok(out)
    }

    /// Computes the SHA-512 digest of `data` in one call.
    pub fn digest(data: &[u8]) -> [u8; 64] {
        let mut hasher = Self::new();
        hasher.update(data).expect("fresh hasher accepts update");
        hasher.finalize().expect("hasher finalized exactly once")
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}
