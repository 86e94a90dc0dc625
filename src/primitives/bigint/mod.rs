//! Fixed-width unsigned integer primitive
//!
//! This module defines [`BigInt`], a const-generic fixed-width unsigned
//! integer used throughout the cryptographic core — by RSA for its 2048-bit
//! modulus and key material, and by Ed25519's field arithmetic at the
//! 256-bit width (`mul_mod`'s widening multiply is the 512-bit
//! intermediate). Ed25519's scalar arithmetic mod the group order ℓ is a
//! separate, purpose-built representation (`signatures::ed25519::scalar`).
//!
//! Unlike the byte-array value types elsewhere in this crate's ancestry,
//! `BigInt` is a small arithmetic library on purpose: RSA needs modular
//! exponentiation over an arbitrary runtime modulus, which a fixed-modulus
//! type cannot provide. The representation is little-endian 64-bit limbs
//! (limb `0` holds the least significant 64 bits), matching the wire
//! convention used for key and block serialization.

mod conv;
mod core;
mod modexp;
mod ops;

pub use self::core::BigInt;

/// 256-bit width: Ed25519 field elements, as a `BigInt`.
pub type BigInt256 = BigInt<4>;

/// 512-bit width: Ed25519's widening-multiplication intermediate.
pub type BigInt512 = BigInt<8>;

/// 2048-bit width: RSA moduli and key components.
pub type BigInt2048 = BigInt<32>;
