//! Finite field arithmetic for Ed25519, modulo `q = 2^255 - 19`.
//!
//! Per spec §4.5.1, this is implemented directly over [`BigInt256`], with
//! the widening multiply (`mul_mod`'s schoolbook `mul_wide` step) producing
//! the 512-bit intermediate the spec calls for rather than a dedicated
//! radix representation. Every field operation is therefore a thin wrapper
//! around the same `add_mod`/`sub_mod`/`mul_mod`/`exp_mod`/`inv_mod` surface
//! `primitives::bigint` already exposes for RSA — the field's only job is
//! fixing the modulus to `q` and exposing the two fixed exponent chains
//! (`invert`, `pow22523`) Ed25519's point decompression needs.

use crate::primitives::BigInt256;

/// `q = 2^255 - 19`, the Ed25519 field characteristic.
const Q: BigInt256 = BigInt256::from_limbs([
    0xffff_ffff_ffff_ffed,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x7fff_ffff_ffff_ffff,
]);

/// `(q - 5) / 8 = 2^252 - 3`, the fixed exponent Ed25519's point
/// decompression uses to compute a candidate square root (spec §4.5.3).
const POW22523_EXPONENT: BigInt256 = BigInt256::from_limbs([
    0xffff_ffff_ffff_fffd,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x0fff_ffff_ffff_ffff,
]);

/// An element of `𝔽_q`, `q = 2^255 - 19`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldElement(BigInt256);

impl FieldElement {
    pub(crate) const ZERO: Self = FieldElement(BigInt256::ZERO);
    pub(crate) const ONE: Self = FieldElement(BigInt256::one());

    /// Decodes a little-endian integer (`< 2^256`) as a field element,
    /// reducing it modulo `q` first. Callers that already hold a value
    /// known to be `< q` (e.g. every `FieldElement` produced by this
    /// module's own arithmetic) don't need the reduction, but nothing here
    /// assumes it: point decoding (spec §4.5.3) only masks off the
    /// encoding's sign bit before calling this, leaving values up to
    /// `2^255 - 1` that still exceed `q`.
    pub(crate) fn from_bytes(input: &[u8; 32]) -> Self {
        let value = BigInt256::from_le_bytes(input);
        let (_, remainder) = value.div_rem(&Q);
        FieldElement(remainder)
    }

    /// Encodes this field element as 32 little-endian bytes. The value is
    /// always `< q` by construction, so this is already canonical.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        self.0.to_le_bytes()
    }

    /// `1` if this element is nonzero, `0` otherwise.
    pub(crate) fn is_non_zero(&self) -> i32 {
        (!self.0.is_zero()) as i32
    }

    /// The sign bit Ed25519 point encoding uses: the least-significant bit
    /// of the canonical little-endian encoding (spec §4.5.3).
    pub(crate) fn is_negative(&self) -> i32 {
        (self.to_bytes()[0] & 1) as i32
    }

    /// `self * self mod q`.
    pub(crate) fn square(self) -> FieldElement {
        FieldElement(self.0.mul_mod(&self.0, &Q))
    }

    /// `self^((q-5)/8) mod q`, the exponent used to derive a candidate
    /// square root during point decompression (spec §4.5.3).
    pub(crate) fn pow22523(&self) -> Self {
        FieldElement(self.0.exp_mod(&POW22523_EXPONENT, &Q))
    }

    /// `self^-1 mod q`, via Fermat's little theorem (`q` is prime). Returns
    /// zero when `self` is zero, matching `BigInt::inv_mod`'s and Ed25519's
    /// convention for an undefined inverse.
    pub(crate) fn invert(&self) -> Self {
        FieldElement(self.0.inv_mod(&Q))
    }
}

impl std::ops::Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement(self.0.add_mod(&rhs.0, &Q))
    }
}

impl std::ops::Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement(self.0.sub_mod(&rhs.0, &Q))
    }
}

impl std::ops::Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        FieldElement(self.0.mul_mod(&rhs.0, &Q))
    }
}

impl std::ops::Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldElement(BigInt256::ZERO.sub_mod(&self.0, &Q))
    }
}
