//! Fixed-width unsigned integer primitives.
//!
//! The cryptographic core works exclusively with [`bigint::BigInt`], a
//! const-generic fixed-width unsigned integer parameterized over the number
//! of 64-bit limbs it carries. RSA uses the 2048-bit width; Ed25519's field
//! arithmetic (`signatures::ed25519::field`) is built on the 256-bit width,
//! with `mul_mod`'s widening multiply producing the 512-bit intermediate
//! spec.md §4.5.1 calls for. Ed25519's scalar arithmetic (mod the group
//! order ℓ) uses its own radix-2^21 representation instead — spec.md does
//! not require `BigInt` there, only for field elements.

pub mod bigint;

pub use bigint::{BigInt, BigInt256, BigInt512, BigInt2048};
