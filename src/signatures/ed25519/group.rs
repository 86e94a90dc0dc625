//! Edwards25519 point arithmetic in affine coordinates.
//!
//! Points are kept as plain `(x, y)` pairs over [`FieldElement`] rather than
//! the extended/cached/precomputed coordinate systems a fully windowed
//! constant-time implementation would use. The curve addition law and the
//! scalar-multiplication strategy (binary left-to-right double-and-add) both
//! follow the twisted-Edwards formulas directly, trading the reference
//! implementation's precomputed tables for a smaller, auditable core —
//! correctness against the RFC 8032 test vectors is what's load-bearing
//! here, not side-channel hardening.
//!
//! The curve constant `d`, the field's principal square root of `-1`
//! (`SQRTM1`, used to select the alternate branch during point decompression)
//! and the base point `B` are all derived at call time from their defining
//! relations rather than hardcoded as byte tables:
//!
//! - `d = -121665/121666`
//! - `SQRTM1 = 2^((q-1)/4) mod q` (valid since `q ≡ 5 (mod 8)`)
//! - `B`'s `y` coordinate is the well-known `4/5 mod q`; `x` is recovered by
//!   the same decompression routine used for any other encoded point.

use super::field::FieldElement;
use crate::error::{Error, Result};
use crate::primitives::BigInt256;

/// A point on the Edwards25519 curve in affine coordinates.
#[derive(Clone, Copy)]
pub(crate) struct Point {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

fn fe_small(v: u64) -> FieldElement {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&v.to_le_bytes());
    FieldElement::from_bytes(&bytes)
}

/// The twisted-Edwards curve constant `d = -121665/121666 mod q`.
pub(crate) fn curve_d() -> FieldElement {
    let num = -fe_small(121_665);
    let den = fe_small(121_666);
    num * den.invert()
}

/// `2^((q-1)/4) mod q`, the field's principal square root of `-1`.
///
/// `(q-1)/4 = 2^253 - 5` in closed form (since `q = 2^255 - 19`), computed
/// here as a [`BigInt256`] exponent and consumed bit-by-bit rather than
/// transcribed as a 32-byte constant.
pub(crate) fn sqrt_m1() -> FieldElement {
    let mut exponent = BigInt256::ZERO;
    for i in 3..253 {
        exponent.set_bit(i);
    }
    exponent.set_bit(1);
    exponent.set_bit(0);

    fe_pow(fe_small(2), &exponent)
}

fn fe_pow(base: FieldElement, exponent: &BigInt256) -> FieldElement {
    let mut result = FieldElement::ONE;
    let bits = exponent.bit_length();
    for i in (0..bits).rev() {
        result = result.square();
        if exponent.bit(i) {
            result = result * base;
        }
    }
    result
}

impl Point {
    /// The neutral element `(0, 1)`.
    pub(crate) const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// The canonical Ed25519 base point, recovered from its defining
    /// `y = 4/5 mod q` relation via decompression with the "positive x"
    /// sign convention.
    pub(crate) fn base() -> Self {
        let y = fe_small(4) * fe_small(5).invert();
        let mut encoded = y.to_bytes();
        encoded[31] &= 0x7f;
        Self::decode(&encoded).expect("base point decompresses")
    }

    /// `x1*y2 + x2*y1`, `1 + d*x1*x2*y1*y2`, `y1*y2 + x1*x2`,
    /// `1 - d*x1*x2*y1*y2` — the twisted-Edwards addition law from spec
    /// §4.5.2, implemented directly (no extended-coordinate shortcuts).
    pub(crate) fn add(&self, other: &Self) -> Self {
        let d = curve_d();
        let x1y2 = self.x * other.y;
        let x2y1 = other.x * self.y;
        let y1y2 = self.y * other.y;
        let x1x2 = self.x * other.x;
        let dxxyy = d * x1x2 * y1y2;

        let x3 = (x1y2 + x2y1) * (FieldElement::ONE + dxxyy).invert();
        let y3 = (y1y2 + x1x2) * (FieldElement::ONE - dxxyy).invert();

        Self { x: x3, y: y3 }
    }

    /// Binary left-to-right double-and-add scalar multiplication, scanning
    /// all 256 bits of `scalar` from most to least significant, starting
    /// from the identity.
    pub(crate) fn scalar_mul(&self, scalar: &[u8; 32]) -> Self {
        let mut result = Self::IDENTITY;
        for byte_index in (0..32).rev() {
            let byte = scalar[byte_index];
            for bit_index in (0..8).rev() {
                result = result.add(&result);
                if (byte >> bit_index) & 1 == 1 {
                    result = result.add(self);
                }
            }
        }
        result
    }

    /// Encodes the point per spec §4.5.3: `y` little-endian in the low 255
    /// bits, the parity of `x` in the top bit of the last byte.
    pub(crate) fn encode(&self) -> [u8; 32] {
        let mut out = self.y.to_bytes();
        let sign_bit = self.x.is_negative() as u8;
        out[31] |= sign_bit << 7;
        out
    }

    /// Decodes a point per spec §4.5.3, including the final on-curve check.
    /// Returns [`Error::InvalidPoint`] if no `x` satisfies the curve
    /// equation for the encoded `y`.
    pub(crate) fn decode(bytes: &[u8; 32]) -> Result<Self> {
        let sign = (bytes[31] >> 7) & 1;
        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;
        let y = FieldElement::from_bytes(&y_bytes);

        let d = curve_d();
        let y2 = y.square();
        let u = y2 - FieldElement::ONE;
        let v = d * y2 + FieldElement::ONE;

        // Candidate x = u * v^3 * (u * v^7)^((q-5)/8), the standard
        // exponent FieldElement exposes directly as `pow22523`.
        let v3 = v.square() * v;
        let mut x = v3.square() * v * u;
        x = x.pow22523();
        x = x * v3 * u;

        let vxx = x.square() * v;
        let mut check = vxx - u;
        if check.is_non_zero() == 1 {
            check = vxx + u;
            if check.is_non_zero() == 1 {
                return Err(Error::InvalidPoint);
            }
            x = x * sqrt_m1();
        }

        if x.is_non_zero() == 0 && sign == 1 {
            return Err(Error::InvalidPoint);
        }

        if x.is_negative() as u8 != sign {
            x = -x;
        }

        Ok(Self { x, y })
    }
}
