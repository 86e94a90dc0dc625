//! Error kinds surfaced by the cryptographic core.
//!
//! Every fallible operation in this crate returns one of the variants below.
//! No core operation panics on attacker-controlled input or aborts the
//! process; failures are always values, propagated to the caller via `?`.
//!
//! The variant set is deliberately small and closed (spec'd, not ad-hoc):
//! `DecryptionError` and `InvalidSignature` in particular are single opaque
//! variants on purpose, so that a padding or signature oracle can't be built
//! from distinguishable failure reasons.

use thiserror::Error;

/// The result type used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Every way a cryptographic core operation can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The injected entropy source failed to fill a buffer.
    #[error("entropy source failed")]
    Entropy,

    /// An OAEP plaintext exceeded `k - 2*hLen - 2` bytes for the target key size.
    #[error("message too long for OAEP encoding at this key size")]
    MessageTooLong,

    /// RSAES-OAEP decoding failed. Deliberately opaque: the caller cannot tell
    /// whether the leading byte, the label hash, or the `0x01` separator was
    /// the cause, which would otherwise leak a padding oracle.
    #[error("OAEP decryption failed")]
    DecryptionError,

    /// Ed25519 or digital-signature verification failed. Deliberately opaque
    /// for the same reason as `DecryptionError`; an `InvalidPoint` failure
    /// while decoding `R` or the public key is folded into this variant by
    /// `verify`.
    #[error("signature verification failed")]
    InvalidSignature,

    /// An encoded Ed25519 point did not decode to a valid curve point.
    /// Raised by the low-level decode routine; `Ed25519` verification paths
    /// convert this into `InvalidSignature` before it reaches their caller.
    #[error("invalid Ed25519 point encoding")]
    InvalidPoint,

    /// A serialized key had the wrong length or an obviously invalid field
    /// (e.g. a zero modulus).
    #[error("invalid key encoding")]
    InvalidKey,

    /// `update` was called on a hasher after `finalize`, or `finalize` was
    /// called twice.
    #[error("hash state used after finalize")]
    HashStateMisuse,
}
