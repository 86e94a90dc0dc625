//! Modular arithmetic: the public surface of `BigInt`.
//!
//! `add_mod`/`sub_mod`/`mul_mod`/`exp_mod`/`inv_mod` are the only operations
//! RSA and Ed25519's field/scalar arithmetic need; everything in `ops.rs` is
//! a building block reached only from here.

use super::BigInt;

impl<const LIMBS: usize> BigInt<LIMBS> {
    /// `(a + b) mod m`. Assumes `a, b < m`.
    ///
    /// Adds with a carry bit, then conditionally subtracts `m` once: since
    /// `a + b < 2m`, one subtraction always suffices. The carry case folds
    /// into the same subtraction via wraparound — when the true sum
    /// overflows `2^(64*LIMBS)`, the overflow bit already accounts for
    /// exactly one factor of `2^(64*LIMBS)`, so wrapping-subtracting `m`
    /// from the truncated sum yields the correct reduced value either way.
    pub fn add_mod(&self, rhs: &Self, m: &Self) -> Self {
        let (sum, carried) = self.carrying_add(rhs);
        if carried || &sum >= m {
            sum.borrowing_sub(m).0
        } else {
            sum
        }
    }

    /// `(a + m - b) mod m`. Assumes `a, b < m`.
    ///
    /// Subtracts directly when `a >= b`. Otherwise the borrow from
    /// `a - b` wraps to `a - b + 2^(64*LIMBS)`; adding `m` back (with the
    /// addition itself truncated to width, i.e. taken mod `2^(64*LIMBS)`)
    /// lands exactly on `a - b + m`, which is what's wanted.
    pub fn sub_mod(&self, rhs: &Self, m: &Self) -> Self {
        let (diff, borrowed) = self.borrowing_sub(rhs);
        if borrowed {
            diff.carrying_add(m).0
        } else {
            diff
        }
    }

    /// `(a * b) mod m`, via a `2*LIMBS`-limb widening multiply followed by
    /// long division.
    ///
    /// Constant-time with respect to the operand *values* (the schoolbook
    /// multiply and the bit-serial reduction below both take a fixed number
    /// of steps for a given `LIMBS`); not constant-time with respect to `m`,
    /// which spec.md does not require.
    pub fn mul_mod(&self, rhs: &Self, m: &Self) -> Self {
        let wide = self.mul_wide(rhs);
        Self::wide_rem(&wide, m)
    }

    /// `base^exp mod m`, left-to-right square-and-multiply.
    ///
    /// `exp == 0` yields `1 mod m` (so `0` when `m == 1`); the loop below
    /// handles both uniformly since it starts from `result = 1 mod m` and
    /// performs zero iterations when `exp` is zero.
    pub fn exp_mod(&self, exp: &Self, m: &Self) -> Self {
        if m == &Self::one() {
            return Self::ZERO;
        }

        let mut result = Self::one();
        let bits = exp.bit_length();

        for i in (0..bits).rev() {
            result = result.mul_mod(&result, m);
            if exp.bit(i) {
                result = result.mul_mod(self, m);
            }
        }

        result
    }

    /// `x^-1 mod m`, valid only when `m` is prime. Computed via Fermat's
    /// little theorem as `x^(m-2) mod m`; the caller is responsible for
    /// `m`'s primality, per spec.md §4.1.
    pub fn inv_mod(&self, m: &Self) -> Self {
        let two = Self::from_u64(2);
        let (exponent, _) = m.borrowing_sub(&two);
        self.exp_mod(&exponent, m)
    }

    /// Reduces a wide little-endian limb buffer (as produced by
    /// [`Self::mul_wide`]) modulo `m`, via bit-serial long division.
    ///
    /// The remainder is tracked as `LIMBS` limbs plus one carry bit of
    /// headroom rather than truncated in place: a fixed-width shift that
    /// discards the top bit on every step (as a same-width `Div` would)
    /// loses information whenever the remainder's most significant bit is
    /// occupied, which happens routinely for moduli that use most of their
    /// width — exactly RSA's case. The invariant that makes the extra bit
    /// sufficient (rather than needing a second one) is the same one that
    /// makes `add_mod`'s single conditional subtraction correct: the
    /// quantity before each conditional subtraction is always `< 2*m`.
    fn wide_rem(dividend: &[u64], m: &Self) -> Self {
        let total_bits = dividend.len() * 64;

        let mut rem = [0u64; LIMBS];
        let mut rem_overflow = false;

        for bit_idx in (0..total_bits).rev() {
            rem_overflow = Self::shl1_into(&mut rem);

            let limb = bit_idx / 64;
            let offset = bit_idx % 64;
            if (dividend[limb] >> offset) & 1 == 1 {
                rem[0] |= 1;
            }

            if rem_overflow || ge_limbs(&rem, &m.0) {
                rem = sub_limbs(&rem, &m.0);
                rem_overflow = false;
            }
        }

        Self(rem)
    }

    /// `(self / rhs, self % rhs)`, via the same bit-serial long division as
    /// [`Self::wide_rem`], generalized to also record the quotient.
    ///
    /// Not part of spec.md's `BigInt<W>` operation list (only `mul_mod`'s
    /// reduction needs division); kept `pub(crate)` for RSA key generation's
    /// extended-Euclidean inverse, where the modulus isn't prime and
    /// `inv_mod`'s Fermat shortcut doesn't apply. `rhs` must be nonzero.
    pub(crate) fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        let mut quotient = [0u64; LIMBS];
        let mut rem = [0u64; LIMBS];
        let mut rem_overflow = false;

        for bit_idx in (0..LIMBS * 64).rev() {
            rem_overflow = Self::shl1_into(&mut rem);

            if self.bit(bit_idx as u32) {
                rem[0] |= 1;
            }

            if rem_overflow || ge_limbs(&rem, &rhs.0) {
                rem = sub_limbs(&rem, &rhs.0);
                rem_overflow = false;

                let limb = bit_idx / 64;
                let offset = bit_idx % 64;
                quotient[limb] |= 1 << offset;
            }
        }

        (Self(quotient), Self(rem))
    }

    /// Shifts `limbs` left by one bit in place, returning the bit shifted
    /// out of the top.
    fn shl1_into(limbs: &mut [u64; LIMBS]) -> bool {
        let mut carry = 0u64;
        for limb in limbs.iter_mut() {
            let next_carry = *limb >> 63;
            *limb = (*limb << 1) | carry;
            carry = next_carry;
        }
        carry != 0
    }
}

fn ge_limbs<const LIMBS: usize>(a: &[u64; LIMBS], b: &[u64; LIMBS]) -> bool {
    for i in (0..LIMBS).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

fn sub_limbs<const LIMBS: usize>(a: &[u64; LIMBS], b: &[u64; LIMBS]) -> [u64; LIMBS] {
    let mut out = [0u64; LIMBS];
    let mut borrow = 0i128;
    for i in 0..LIMBS {
        let diff = a[i] as i128 - b[i] as i128 - borrow;
        if diff < 0 {
            out[i] = (diff + (1i128 << 64)) as u64;
            borrow = 1;
        } else {
            out[i] = diff as u64;
            borrow = 0;
        }
    }
    out
}
