//! JSON key-pair envelope format (spec §6.3).
//!
//! The on-disk format CLI tooling reads and writes: a small JSON object with
//! `public` and `private` fields, each the standard (`+/`, `=`-padded)
//! base64 encoding of the wire-format key blobs from [`crate::rsa::key`].
//! Decoded lengths are checked against the exact expected size; anything
//! else is an [`Error::InvalidKey`], never a silently truncated or
//! zero-padded key.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rsa::key::{PrivateKey, PublicKey};

const PUBLIC_KEY_BYTES: usize = 512;
const PRIVATE_KEY_BYTES: usize = 768;

#[derive(Serialize, Deserialize)]
struct Raw {
    public: String,
    private: String,
}

/// A serialized RSA key pair, ready to write to or read from a key file.
pub struct Envelope {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl Envelope {
    pub fn new(public: PublicKey, private: PrivateKey) -> Self {
        Self { public, private }
    }

    /// Renders the envelope as a JSON document per spec §6.3.
    pub fn to_json(&self) -> String {
        let raw = Raw {
            public: BASE64.encode(self.public.to_bytes()),
            private: BASE64.encode(self.private.to_bytes()),
        };
        serde_json::to_string_pretty(&raw).expect("envelope serializes")
    }

    /// Parses a JSON document produced by [`Envelope::to_json`].
    ///
    /// Rejects malformed JSON, invalid base64, and any decoded blob whose
    /// length isn't exactly 512 (public) or 768 (private) bytes.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Raw = serde_json::from_str(json).map_err(|_| Error::InvalidKey)?;

        let public_bytes = BASE64.decode(&raw.public).map_err(|_| Error::InvalidKey)?;
        if public_bytes.len() != PUBLIC_KEY_BYTES {
            return Err(Error::InvalidKey);
        }

        let private_bytes = BASE64.decode(&raw.private).map_err(|_| Error::InvalidKey)?;
        if private_bytes.len() != PRIVATE_KEY_BYTES {
            return Err(Error::InvalidKey);
        }

        Ok(Self {
            public: PublicKey::try_from(public_bytes.as_slice())?,
            private: PrivateKey::try_from(private_bytes.as_slice())?,
        })
    }
}
