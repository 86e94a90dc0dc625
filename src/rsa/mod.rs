//! RSA: key generation, the bare transform, and RSAES-OAEP.
//!
//! Fixed to a 2048-bit modulus ([`key::KEY_SIZE_BITS`]). [`raw`] is the
//! unpadded textbook transform and must never touch attacker-controlled
//! data directly; [`oaep`] is the encryption scheme built on top of it.

pub mod key;
pub mod keygen;
pub mod oaep;
pub mod raw;

pub use key::{PrivateKey, PublicKey, KEY_SIZE_BITS, KEY_SIZE_BYTES};
pub use keygen::generate_key_pair;
pub use oaep::{oaep_decrypt, oaep_encrypt};
pub use raw::{raw_decrypt, raw_encrypt};
