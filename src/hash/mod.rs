//! Hash algorithms exposed by the crate.
//!
//! SHA-256 and SHA-512 streaming hashers (FIPS 180-4), and MGF1 (PKCS#1)
//! built on top of SHA-256 for use by RSAES-OAEP.

pub mod mgf1;
pub mod sha256;
pub mod sha512;

pub use sha256::Sha256;
pub use sha512::Sha512;
