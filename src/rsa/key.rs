//! RSA key types and wire serialization.
//!
//! Wire layout (spec'd, bit-exact): public key is `n ∥ e`, 256 little-endian
//! bytes each, 512 bytes total. Private key is `p ∥ q ∥ d`, 256 bytes each,
//! 768 bytes total. Parsers reject anything of the wrong length or an
//! obviously-degenerate modulus.

use crate::error::{Error, Result};
use crate::primitives::BigInt2048;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Modulus bit width this crate's RSA implementation is fixed to.
pub const KEY_SIZE_BITS: usize = 2048;

/// `KEY_SIZE_BITS / 8`.
pub const KEY_SIZE_BYTES: usize = KEY_SIZE_BITS / 8;

const PUBLIC_KEY_BYTES: usize = KEY_SIZE_BYTES * 2;
const PRIVATE_KEY_BYTES: usize = KEY_SIZE_BYTES * 3;

/// An RSA public key: modulus and public exponent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub n: BigInt2048,
    pub e: BigInt2048,
}

impl PublicKey {
    /// Serializes to the 512-byte `n ∥ e` wire layout.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_BYTES] {
        let mut out = [0u8; PUBLIC_KEY_BYTES];
        out[..KEY_SIZE_BYTES].copy_from_slice(&self.n.to_le_bytes());
        out[KEY_SIZE_BYTES..].copy_from_slice(&self.e.to_le_bytes());
        out
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_BYTES {
            return Err(Error::InvalidKey);
        }

        let n = BigInt2048::from_le_bytes(
            bytes[..KEY_SIZE_BYTES].try_into().expect("checked length"),
        );
        let e = BigInt2048::from_le_bytes(
            bytes[KEY_SIZE_BYTES..].try_into().expect("checked length"),
        );

        if n.is_zero() {
            return Err(Error::InvalidKey);
        }

        Ok(Self { n, e })
    }
}

/// An RSA private key: the two prime factors and the private exponent.
///
/// The modulus `n = p * q` is not stored redundantly here; callers that need
/// it derive it from the matching [`PublicKey`] (spec.md's `raw_decrypt`
/// takes both).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    pub p: BigInt2048,
    pub q: BigInt2048,
    pub d: BigInt2048,
}

impl PrivateKey {
    /// Serializes to the 768-byte `p ∥ q ∥ d` wire layout.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_BYTES] {
        let mut out = [0u8; PRIVATE_KEY_BYTES];
        out[..KEY_SIZE_BYTES].copy_from_slice(&self.p.to_le_bytes());
        out[KEY_SIZE_BYTES..2 * KEY_SIZE_BYTES].copy_from_slice(&self.q.to_le_bytes());
        out[2 * KEY_SIZE_BYTES..].copy_from_slice(&self.d.to_le_bytes());
        out
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_BYTES {
            return Err(Error::InvalidKey);
        }

        let p = BigInt2048::from_le_bytes(
            bytes[..KEY_SIZE_BYTES].try_into().expect("checked length"),
        );
        let q = BigInt2048::from_le_bytes(
            bytes[KEY_SIZE_BYTES..2 * KEY_SIZE_BYTES]
                .try_into()
                .expect("checked length"),
        );
        let d = BigInt2048::from_le_bytes(
            bytes[2 * KEY_SIZE_BYTES..].try_into().expect("checked length"),
        );

        if p.is_zero() || q.is_zero() {
            return Err(Error::InvalidKey);
        }

        Ok(Self { p, q, d })
    }
}
