//! The bare RSA transform: modular exponentiation with no padding.
//!
//! Never expose these directly to untrusted plaintext or ciphertext — they
//! have no semantic security on their own. [`super::oaep`] is the safe
//! encryption layer built on top.

use crate::primitives::BigInt2048;
use crate::rsa::key::{PrivateKey, PublicKey};

/// `m^e mod n`. Precondition: `0 <= m < n`.
pub fn raw_encrypt(m: &BigInt2048, pk: &PublicKey) -> BigInt2048 {
    m.exp_mod(&pk.e, &pk.n)
}

/// `c^d mod n`. Precondition: `0 <= c < n`.
pub fn raw_decrypt(c: &BigInt2048, pk: &PublicKey, sk: &PrivateKey) -> BigInt2048 {
    c.exp_mod(&sk.d, &pk.n)
}
