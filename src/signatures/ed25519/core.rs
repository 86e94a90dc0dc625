//! Ed25519 key derivation, signing, and verification (spec §4.5.4).
//!
//! Keys are derived from an explicit 32-byte seed rather than generated
//! internally — this mirrors the rest of the crate's entropy-injection
//! discipline (§6.1): whatever produces the seed (an [`Entropy`] source, a
//! stored key file, a test vector) is the caller's concern, not this
//! module's.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::group::Point;
use super::scalar::Scalar;
use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::hash::Sha512;

/// A 32-byte Ed25519 seed. Zeroized on drop; this is the only secret a
/// caller needs to store to reconstruct a keypair.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Wraps a 32-byte value as a seed. No validation: any 32 bytes are a
    /// valid Ed25519 seed.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from an injected entropy source.
    pub fn generate(entropy: &mut impl Entropy) -> Result<Self> {
        let mut bytes = [0u8; 32];
        entropy.fill(&mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// The expanded secret derived from a [`Seed`]: the clamped scalar `a` and
/// the nonce prefix, both zeroized on drop. Recomputed from the seed by
/// [`expand`] rather than stored alongside it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct Expanded {
    scalar: Scalar,
    prefix: [u8; 32],
}

fn expand(seed: &Seed) -> Expanded {
    let h = Sha512::digest(&seed.to_bytes());

    let mut a_bytes = [0u8; 32];
    a_bytes.copy_from_slice(&h[..32]);
    a_bytes[0] &= 0b1111_1000;
    a_bytes[31] &= 0b0111_1111;
    a_bytes[31] |= 0b0100_0000;

    let mut prefix = [0u8; 32];
    prefix.copy_from_slice(&h[32..]);

    Expanded {
        scalar: Scalar::from_bytes(&a_bytes),
        prefix,
    }
}

/// An Ed25519 public key: the 32-byte compressed encoding of `A = [a]B`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// An Ed25519 signature: `R ∥ S`, 64 bytes.
#[derive(Clone, Copy)]
pub struct Signature([u8; 64]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }
}

/// Derives the public key `A = [a]B` for a given seed (spec §4.5.4 step 3).
pub fn derive_public_key(seed: &Seed) -> PublicKey {
    let expanded = expand(seed);
    PublicKey(Point::base().scalar_mul(&expanded.scalar.to_bytes()).encode())
}

/// Signs `message` under `seed`, per spec §4.5.4.
pub fn sign(seed: &Seed, message: &[u8]) -> Signature {
    let expanded = expand(seed);
    let public = derive_public_key(seed);

    let mut r_input = Vec::with_capacity(32 + message.len());
    r_input.extend_from_slice(&expanded.prefix);
    r_input.extend_from_slice(message);
    let r_digest = Sha512::digest(&r_input);
    let r = Scalar::reduce(r_digest);

    let r_point = Point::base().scalar_mul(&r.to_bytes());
    let r_bytes = r_point.encode();

    let mut k_input = Vec::with_capacity(64 + message.len());
    k_input.extend_from_slice(&r_bytes);
    k_input.extend_from_slice(&public.to_bytes());
    k_input.extend_from_slice(message);
    let k_digest = Sha512::digest(&k_input);
    let k = Scalar::reduce(k_digest);

    let s = Scalar::from_mul_sum(k, expanded.scalar, r);

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r_bytes);
    signature[32..].copy_from_slice(&s.to_bytes());
    Signature(signature)
}

/// Verifies `signature` over `message` under `public`, per spec §4.5.4.
/// Any decoding or equality failure collapses to the single opaque
/// [`Error::InvalidSignature`] — the whole transform runs to completion
/// before a verdict is produced, rather than short-circuiting on the first
/// bad field.
pub fn verify(signature: &Signature, message: &[u8], public: &PublicKey) -> Result<()> {
    let s_bytes: [u8; 32] = signature.0[32..].try_into().expect("32-byte S component");
    let s_canonical = Scalar::is_canonical(&s_bytes);

    let r_bytes: [u8; 32] = signature.0[..32].try_into().expect("32-byte R component");
    let r_decoded = Point::decode(&r_bytes);
    let a_decoded = Point::decode(&public.0);

    let r_ok = r_decoded.is_ok();
    let a_ok = a_decoded.is_ok();
    // A decode failure substitutes the identity point rather than
    // returning early, so the scalar multiplications and comparison below
    // always run — the same width regardless of which field was bad.
    let r_point = r_decoded.unwrap_or(Point::IDENTITY);
    let a_point = a_decoded.unwrap_or(Point::IDENTITY);

    let s = Scalar::from_bytes(&s_bytes);

    let mut k_input = Vec::with_capacity(64 + message.len());
    k_input.extend_from_slice(&signature.0[..32]);
    k_input.extend_from_slice(&public.0);
    k_input.extend_from_slice(message);
    let k_digest = Sha512::digest(&k_input);
    let k = Scalar::reduce(k_digest);

    let lhs = Point::base().scalar_mul(&s.to_bytes());
    let rhs = r_point.add(&a_point.scalar_mul(&k.to_bytes()));
    let equation_ok = lhs.encode() == rhs.encode();

    if s_canonical && r_ok && a_ok && equation_ok {
        Ok(())
    } else {
        Err(Error::InvalidSignature)
    }
}
