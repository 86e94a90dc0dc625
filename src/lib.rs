//! Cryptographic core for Nebula.
//!
//! This crate provides low-level cryptographic building blocks used
//! throughout the Nebula ecosystem.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Components are
//! explicit in their semantics and favor auditable textbook constructions
//! over the kind of defense-in-depth a general-purpose library would add.
//!
//! # Module overview
//!
//! - `error`
//!   The crate-wide `Error` enum and `Result` alias every fallible operation
//!   returns.
//!
//! - `entropy`
//!   The [`entropy::Entropy`] trait used to inject randomness into key
//!   generation and OAEP/Ed25519 seed derivation, plus the OS-backed,
//!   fixed-vector, and always-failing implementations.
//!
//! - `cancellation`
//!   The [`cancellation::CancellationToken`] trait RSA key generation polls
//!   between candidate primes, so a caller can interrupt an in-progress
//!   search.
//!
//! - `primitives`
//!   Fixed-width big integers (`BigInt<LIMBS>` and its `BigInt256` /
//!   `BigInt512` / `BigInt2048` aliases) and the modular arithmetic they
//!   support: exponentiation, Miller-Rabin primality, and inversion.
//!
//! - `hash`
//!   SHA-256 and SHA-512, plus MGF1 built on top of SHA-256.
//!
//! - `rng`
//!   The ChaCha20-based DRBG backing [`entropy::OsEntropy`].
//!
//! - `os`
//!   Per-platform raw entropy collection feeding `rng`'s initial seed.
//!
//! - `rsa`
//!   RSA key generation, the raw (unpadded) transform, and RSAES-OAEP.
//!
//! - `envelope`
//!   The JSON/base64 key-pair file format read and written by the CLI
//!   binaries.
//!
//! - `signatures`
//!   Ed25519 and the SHA-256 + RSA composite digital signature scheme.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Randomness only through injected [`entropy::Entropy`], never read
//!   directly from the operating system by core algorithms
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal cryptographic needs.

pub mod cancellation;
pub mod entropy;
pub mod envelope;
pub mod error;
pub mod hash;
pub(crate) mod os;
pub mod primitives;
pub mod rng;
pub mod rsa;
pub mod signatures;
