//! Raw (non-modular) limb arithmetic underlying the modular operations.
//!
//! Everything here is `pub(crate)`: callers outside this crate only ever see
//! the modular operations in `modexp.rs`, mirroring spec.md's choice to
//! expose `add_mod`/`sub_mod`/`mul_mod`/`exp_mod`/`inv_mod` rather than raw
//! wraparound arithmetic.

use super::BigInt;

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// Adds two values modulo `2^(64*LIMBS)`, returning the wrapped result
    /// and whether the true sum overflowed that width.
    pub(crate) fn carrying_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut carry = 0u64;

        for i in 0..LIMBS {
            let sum = self.0[i] as u128 + rhs.0[i] as u128 + carry as u128;
            out[i] = sum as u64;
            carry = (sum >> 64) as u64;
        }

        (Self(out), carry != 0)
    }

    /// Subtracts `rhs` from `self` modulo `2^(64*LIMBS)`, returning the
    /// wrapped result and whether a borrow was needed (i.e. `self < rhs`).
    pub(crate) fn borrowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; LIMBS];
        let mut borrow = 0i128;

        for i in 0..LIMBS {
            let diff = self.0[i] as i128 - rhs.0[i] as i128 - borrow;
            if diff < 0 {
                out[i] = (diff + (1i128 << 64)) as u64;
                borrow = 1;
            } else {
                out[i] = diff as u64;
                borrow = 0;
            }
        }

        (Self(out), borrow != 0)
    }

    /// Schoolbook widening multiplication: `self * rhs`, full `2*LIMBS`-limb
    /// product, little-endian. Used by `mul_mod` ahead of reduction.
    ///
    /// Carries are propagated immediately within each inner pass rather than
    /// deferred to a final pass: deferring them would let a `LIMBS`-term
    /// accumulation of near-`u128::MAX` partial products overflow `u128`
    /// itself once `LIMBS` grows past a handful (as it does at the 2048-bit
    /// width).
    ///
    /// The inner loop always runs the full `LIMBS` width regardless of `a`'s
    /// value: `mul_mod` feeds RSA's private exponent and primes through this
    /// path via `exp_mod`, so a secret-value-dependent shortcut here (e.g.
    /// skipping the pass when `a == 0`) would leak timing information about
    /// those secrets.
    pub(crate) fn mul_wide(&self, rhs: &Self) -> Vec<u64> {
        let mut out = vec![0u64; 2 * LIMBS];

        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u128;
            for (j, &b) in rhs.0.iter().enumerate() {
                let idx = i + j;
                let total = a as u128 * b as u128 + out[idx] as u128 + carry;
                out[idx] = total as u64;
                carry = total >> 64;
            }

            let mut idx = i + LIMBS;
            while carry != 0 {
                let total = out[idx] as u128 + carry;
                out[idx] = total as u64;
                carry = total >> 64;
                idx += 1;
            }
        }

        out
    }

    /// Logical right shift by one bit.
    pub(crate) fn shr1(&self) -> Self {
        let mut out = [0u64; LIMBS];
        let mut carry = 0u64;

        for i in (0..LIMBS).rev() {
            let next_carry = self.0[i] & 1;
            out[i] = (self.0[i] >> 1) | (carry << 63);
            carry = next_carry;
        }

        Self(out)
    }

    /// Sets bit `i` (0 = least significant) in place. No-op if `i` is out of range.
    pub(crate) fn set_bit(&mut self, i: u32) {
        let limb = i as usize / 64;
        if limb < LIMBS {
            self.0[limb] |= 1u64 << (i % 64);
        }
    }
}
