//! RSAES-OAEP: the randomized, semantically secure encryption layer over
//! raw RSA, built from SHA-256 and MGF1-SHA-256.
//!
//! The encoded message `EM` is built byte-by-byte exactly as laid out below
//! (`0x00 ∥ maskedSeed ∥ maskedDB`, most-significant byte first — the same
//! convention PKCS#1's OS2IP uses), then converted to the little-endian
//! `BigInt2048` this crate's raw RSA transform expects by reversing that
//! byte order. This is what guarantees `EM`'s integer value stays below `n`:
//! with the leading byte pinned to `0x00`, the value is bounded by
//! `2^(8*(k-1))`, safely under any modulus that actually uses its full
//! `k`-byte width. Reading the same bytes as little-endian directly (where
//! the forced zero byte would land on the *least* significant end) would
//! give no such bound.

use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::hash::mgf1::mgf1_sha256;
use crate::hash::Sha256;
use crate::primitives::BigInt2048;
use crate::rsa::key::{PrivateKey, PublicKey, KEY_SIZE_BYTES};
use crate::rsa::raw::{raw_decrypt, raw_encrypt};

const H_LEN: usize = 32;

fn xor_into(a: &mut [u8], b: &[u8]) {
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x ^= y;
    }
}

/// `RSAES-OAEP-ENCRYPT(M, pk, label)`. Fails with [`Error::MessageTooLong`]
/// if `M` doesn't fit the padding scheme at this key size. The random seed
/// is drawn from `entropy`.
pub fn oaep_encrypt(
    message: &[u8],
    pk: &PublicKey,
    label: &[u8],
    entropy: &mut impl Entropy,
) -> Result<[u8; KEY_SIZE_BYTES]> {
    let k = KEY_SIZE_BYTES;
    if message.len() > k - 2 * H_LEN - 2 {
        return Err(Error::MessageTooLong);
    }

    let l_hash = Sha256::digest(label);

    let db_len = k - H_LEN - 1;
    let mut db = vec![0u8; db_len];
    db[..H_LEN].copy_from_slice(&l_hash);
    let ps_len = db_len - H_LEN - 1 - message.len();
    db[H_LEN + ps_len] = 0x01;
    db[H_LEN + ps_len + 1..].copy_from_slice(message);

    let mut seed = [0u8; H_LEN];
    entropy.fill(&mut seed)?;

    let db_mask = mgf1_sha256(&seed, db_len);
    let mut masked_db = db;
    xor_into(&mut masked_db, &db_mask);

    let seed_mask = mgf1_sha256(&masked_db, H_LEN);
    let mut masked_seed = seed;
    xor_into(&mut masked_seed, &seed_mask);

    let mut em_be = vec![0u8; k];
    em_be[0] = 0x00;
    em_be[1..1 + H_LEN].copy_from_slice(&masked_seed);
    em_be[1 + H_LEN..].copy_from_slice(&masked_db);
    em_be.reverse();

    let m = BigInt2048::from_le_bytes(em_be.as_slice().try_into().expect("k-byte buffer"));
    let c = raw_encrypt(&m, pk);
    Ok(c.to_le_bytes())
}

/// `RSAES-OAEP-DECRYPT(C, pk, sk, label)`. Every failure path returns the
/// same opaque [`Error::DecryptionError`] and runs the same steps — no
/// early return on the first mismatch — so that padding, label-hash, and
/// length failures are indistinguishable to a caller (and to a timing
/// observer, to the extent integer operations allow).
pub fn oaep_decrypt(
    ciphertext: &[u8; KEY_SIZE_BYTES],
    pk: &PublicKey,
    sk: &PrivateKey,
    label: &[u8],
) -> Result<Vec<u8>> {
    let k = KEY_SIZE_BYTES;
    let c = BigInt2048::from_le_bytes(ciphertext);
    let m = raw_decrypt(&c, pk, sk);

    let mut em_be = m.to_le_bytes();
    em_be.reverse();

    let leading_zero_ok = em_be[0] == 0x00;

    let masked_seed = &em_be[1..1 + H_LEN];
    let masked_db = &em_be[1 + H_LEN..];

    let seed_mask = mgf1_sha256(masked_db, H_LEN);
    let mut seed = masked_seed.to_vec();
    xor_into(&mut seed, &seed_mask);

    let db_mask = mgf1_sha256(&seed, k - H_LEN - 1);
    let mut db = masked_db.to_vec();
    xor_into(&mut db, &db_mask);

    let l_hash = Sha256::digest(label);
    let label_ok = db[..H_LEN] == l_hash[..];

    let mut separator_index = None;
    for (i, &byte) in db[H_LEN..].iter().enumerate() {
        if byte != 0 {
            if separator_index.is_none() && byte == 0x01 {
                separator_index = Some(i);
            }
            break;
        }
    }

    match (leading_zero_ok, label_ok, separator_index) {
        (true, true, Some(idx)) => Ok(db[H_LEN + idx + 1..].to_vec()),
        _ => Err(Error::DecryptionError),
    }
}
