//! The `BigInt` value type: storage, comparison, and bit inspection.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use zeroize::Zeroize;

/// Fixed-width unsigned integer of `LIMBS * 64` bits.
///
/// The value is stored as `LIMBS` 64-bit limbs in **little-endian** limb
/// order: `self.0[0]` holds bits `0..64`, `self.0[LIMBS - 1]` holds the most
/// significant 64 bits. Every value is implicitly reduced modulo `2^(64 *
/// LIMBS)`; there is no sign and no notion of overflow beyond that modulus.
#[derive(Copy, Clone, Debug)]
pub struct BigInt<const LIMBS: usize>(pub(crate) [u64; LIMBS]);

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// The value zero.
    pub const ZERO: Self = Self([0u64; LIMBS]);

    /// The maximum representable value, `2^(64*LIMBS) - 1`.
    pub const MAX: Self = Self::max_value();

    const fn max_value() -> Self {
        let mut limbs = [0u64; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            limbs[i] = u64::MAX;
            i += 1;
        }
        Self(limbs)
    }

    /// The value one.
    pub const fn one() -> Self {
        let mut limbs = [0u64; LIMBS];
        if LIMBS > 0 {
            limbs[0] = 1;
        }
        Self(limbs)
    }

    /// Builds a `BigInt` directly from little-endian limbs.
    pub(crate) const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    pub(crate) fn limbs(&self) -> &[u64; LIMBS] {
        &self.0
    }

    /// True if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Returns bit `i` (0 = least significant), or `false` if `i` is out of range.
    pub fn bit(&self, i: u32) -> bool {
        let limb = i as usize / 64;
        if limb >= LIMBS {
            return false;
        }
        let offset = i % 64;
        (self.0[limb] >> offset) & 1 == 1
    }

    /// The index, one past the most significant set bit; `0` for the value zero.
    ///
    /// Used by `exp_mod`'s left-to-right scan to find where the exponent's
    /// binary expansion actually starts.
    pub fn bit_length(&self) -> u32 {
        for (idx, &limb) in self.0.iter().enumerate().rev() {
            if limb != 0 {
                return (idx as u32) * 64 + (64 - limb.leading_zeros());
            }
        }
        0
    }

    /// Builds a `BigInt` from a single `u64`, zero-extended.
    pub fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; LIMBS];
        if LIMBS > 0 {
            limbs[0] = value;
        }
        Self(limbs)
    }
}

impl<const LIMBS: usize> Default for BigInt<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> PartialEq for BigInt<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const LIMBS: usize> Eq for BigInt<LIMBS> {}

/// Ordering compares by numeric magnitude, most significant limb first —
/// *not* the lexicographic order of the little-endian limb array.
impl<const LIMBS: usize> PartialOrd for BigInt<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LIMBS: usize> Ord for BigInt<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..LIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

/// Allows `BigInt`-carrying secret types (RSA private keys, Ed25519 scalars)
/// to wipe their limbs on drop via `zeroize::ZeroizeOnDrop`.
impl<const LIMBS: usize> Zeroize for BigInt<LIMBS> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<const LIMBS: usize> Display for BigInt<LIMBS> {
    /// Formats the value as a colon-separated hexadecimal string, most
    /// significant limb first.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, limb) in self.0.iter().enumerate().rev() {
            if i != LIMBS - 1 {
                write!(f, ":")?;
            }
            write!(f, "{limb:016X}")?;
        }
        Ok(())
    }
}
