//! Ed25519: field and curve arithmetic modulo `q = 2^255 - 19`, twisted
//! Edwards point addition and scalar multiplication, and the signature
//! scheme itself (key derivation, signing, verification) per spec §4.5.

mod field;
mod group;
mod scalar;

mod core;

pub use self::core::{derive_public_key, sign, verify, PublicKey, Seed, Signature};
