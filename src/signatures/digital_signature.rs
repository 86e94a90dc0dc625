//! The SHA-256 + RSA composite digital signature scheme (spec §4.6).
//!
//! This is *not* RSASSA-PSS or RSASSA-PKCS1-v1_5. It zero-pads the SHA-256
//! digest into the low bytes of a modulus-width block and applies the raw
//! RSA transform directly — signing is the private-key transform
//! (`raw_decrypt`), verification is the public-key transform
//! (`raw_encrypt`). It exists for interoperability with on-disk signatures
//! produced by that scheme; new applications should prefer OAEP-wrapped
//! encryption or Ed25519 for authentication.

use crate::error::{Error, Result};
use crate::hash::Sha256;
use crate::primitives::BigInt2048;
use crate::rsa::key::{PrivateKey, PublicKey, KEY_SIZE_BYTES};
use crate::rsa::raw::{raw_decrypt, raw_encrypt};

/// Builds the k-byte little-endian block whose low 32 bytes are `hash` and
/// whose remaining bytes are zero.
fn padded_block(hash: &[u8; 32]) -> [u8; KEY_SIZE_BYTES] {
    let mut block = [0u8; KEY_SIZE_BYTES];
    block[..32].copy_from_slice(hash);
    block
}

/// Signs `message` under `sk`: `raw_decrypt(zero_pad(SHA256(message)))`.
pub fn sign(pk: &PublicKey, sk: &PrivateKey, message: &[u8]) -> [u8; KEY_SIZE_BYTES] {
    let hash = Sha256::digest(message);
    let block = BigInt2048::from_le_bytes(&padded_block(&hash));
    raw_decrypt(&block, pk, sk).to_le_bytes()
}

/// Verifies `signature` over `message` under `pk`. Recovers
/// `raw_encrypt(signature)` and accepts iff it equals the zero-padded
/// digest block byte-for-byte; any mismatch is the single opaque
/// [`Error::InvalidSignature`].
pub fn verify(
    pk: &PublicKey,
    message: &[u8],
    signature: &[u8; KEY_SIZE_BYTES],
) -> Result<()> {
    let recovered = raw_encrypt(&BigInt2048::from_le_bytes(signature), pk).to_le_bytes();
    let hash = Sha256::digest(message);
    let expected = padded_block(&hash);

    if recovered == expected {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}
