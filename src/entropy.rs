//! The entropy collaborator.
//!
//! The cryptographic core never reads from `/dev/urandom`, calls `getrandom`,
//! or otherwise touches an OS randomness source directly. Every operation
//! that needs randomness (RSA key generation, OAEP's ephemeral seed, Ed25519
//! seed generation) takes an `&mut impl Entropy` instead. [`OsEntropy`] is the
//! production implementation this crate ships, built on [`crate::rng::Csprng`];
//! callers outside this crate are free to supply their own.

use crate::error::{Error, Result};
use crate::rng::Csprng;

/// A source of cryptographically strong random bytes.
///
/// Implementations must fill the entire buffer with uniformly random bytes
/// or fail — partial fills are not a valid outcome.
pub trait Entropy {
    /// Fills `buf` with cryptographically strong random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// The operating-system-backed entropy source.
///
/// Internally this reseeds a ChaCha20 DRBG ([`Csprng`]) from the kernel's
/// randomness source on construction, and again periodically as the DRBG
/// rekeys itself. This is the collaborator CLI binaries construct and inject
/// into the core; the core itself has no notion of an operating system.
pub struct OsEntropy(Csprng);

impl OsEntropy {
    /// Creates a new OS-backed entropy source, seeding it immediately.
    pub fn new() -> Self {
        Self(Csprng::from_os())
    }
}

impl Default for OsEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Entropy for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.0.fill_bytes(buf);
        Ok(())
    }
}

/// A deterministic entropy source that replays a fixed byte sequence.
///
/// This exists for tests and reproducible vectors only: spec.md §9 calls for
/// "a deterministic source seeded with a fixed vector" so that key generation
/// and OAEP encoding can be exercised against known-answer tests. It is not
/// cryptographically secure and must never back a production `Entropy`.
pub struct FixedEntropy {
    bytes: Vec<u8>,
    pos: usize,
}

impl FixedEntropy {
    /// Creates a source that cycles through `bytes` indefinitely.
    ///
    /// # Panics
    /// Panics if `bytes` is empty; there would be nothing to replay.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        assert!(!bytes.is_empty(), "FixedEntropy requires at least one byte");
        Self { bytes, pos: 0 }
    }

    /// Creates a source that repeats a single byte value.
    pub fn repeating(byte: u8) -> Self {
        Self::new(vec![byte])
    }
}

impl Entropy for FixedEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        for slot in buf.iter_mut() {
            *slot = self.bytes[self.pos];
            self.pos = (self.pos + 1) % self.bytes.len();
        }
        Ok(())
    }
}

/// Never returns randomness; used to test entropy-failure propagation.
pub struct FailingEntropy;

impl Entropy for FailingEntropy {
    fn fill(&mut self, _buf: &mut [u8]) -> Result<()> {
        Err(Error::Entropy)
    }
}
