//! Little-endian byte (de)serialization.
//!
//! Array lengths must be compile-time literals, so the `LIMBS * 8`-byte
//! conversion can't be written once generically over `LIMBS` on stable Rust;
//! it's instantiated per concrete width instead, the same way the wire
//! layouts it serves (RSA blocks, Ed25519 scalars and field elements) are
//! only ever used at one of the three widths `spec.md` names.

use super::BigInt;

macro_rules! impl_bytes {
    ($limbs:literal, $bytes:literal) => {
        impl BigInt<$limbs> {
            /// Parses a little-endian byte array into a `BigInt`.
            pub fn from_le_bytes(bytes: &[u8; $bytes]) -> Self {
                let mut limbs = [0u64; $limbs];
                for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
                    *limb = u64::from_le_bytes(chunk.try_into().expect("8-byte chunk"));
                }
                Self::from_limbs(limbs)
            }

            /// Serializes this value to a fixed-size little-endian byte array.
            pub fn to_le_bytes(&self) -> [u8; $bytes] {
                let mut out = [0u8; $bytes];
                for (chunk, limb) in out.chunks_exact_mut(8).zip(self.limbs().iter()) {
                    chunk.copy_from_slice(&limb.to_le_bytes());
                }
                out
            }
        }
    };
}

impl_bytes!(4, 32);
impl_bytes!(8, 64);
impl_bytes!(32, 256);

impl<const LIMBS: usize> From<u64> for BigInt<LIMBS> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}
