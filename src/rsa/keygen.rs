//! RSA key pair generation: random prime search and key assembly.
//!
//! 1. Draw 1024-bit candidates from entropy, top and bottom bit forced.
//! 2. Miller–Rabin (≥40 rounds, bases drawn from entropy) until two distinct
//!    primes `p`, `q` are found.
//! 3. `n = p·q`, `φ = (p−1)·(q−1)`.
//! 4. `e = 65537`; restart the whole search if `gcd(e, φ) ≠ 1`.
//! 5. `d = e⁻¹ mod φ` via the extended Euclidean algorithm — `φ` is never
//!    prime, so [`BigInt::inv_mod`]'s Fermat shortcut doesn't apply here.
//!
//! The prime search is the one piece of unbounded work in this crate
//! (spec.md §5): it checks the caller-supplied `CancellationToken` once
//! between each candidate prime it draws, returning `Ok(None)` rather than
//! a key pair if cancellation was requested before the search completed.

use crate::cancellation::CancellationToken;
use crate::entropy::Entropy;
use crate::error::Result;
use crate::primitives::BigInt2048;
use crate::rsa::key::{PrivateKey, PublicKey, KEY_SIZE_BYTES};

const HALF_BYTES: usize = KEY_SIZE_BYTES / 2;
const HALF_BITS: u32 = (HALF_BYTES * 8) as u32;
const MILLER_RABIN_ROUNDS: u32 = 40;
const PUBLIC_EXPONENT: u64 = 65537;

/// Generates an RSA key pair, drawing all randomness from `entropy`.
///
/// Returns `Ok(None)` if `cancel` reports cancellation before two suitable
/// primes are found.
pub fn generate_key_pair(
    entropy: &mut impl Entropy,
    cancel: &impl CancellationToken,
) -> Result<Option<(PublicKey, PrivateKey)>> {
    let e = BigInt2048::from_u64(PUBLIC_EXPONENT);

    'search: loop {
        let p = match generate_prime(entropy, cancel)? {
            Some(p) => p,
            None => return Ok(None),
        };
        let q = loop {
            let candidate = match generate_prime(entropy, cancel)? {
                Some(q) => q,
                None => return Ok(None),
            };
            if candidate != p {
                break candidate;
            }
        };

        let n = plain_mul(&p, &q);
        let (p_minus_one, _) = p.borrowing_sub(&BigInt2048::one());
        let (q_minus_one, _) = q.borrowing_sub(&BigInt2048::one());
        let phi = plain_mul(&p_minus_one, &q_minus_one);

        let d = match mod_inverse(&e, &phi) {
            Some(d) => d,
            None => continue 'search,
        };

        return Ok(Some((PublicKey { n, e }, PrivateKey { p, q, d })));
    }
}

/// Draws 1024-bit prime candidates from `entropy` until Miller–Rabin accepts
/// one, checking `cancel` once before each new candidate. Returns `Ok(None)`
/// if cancellation was requested.
fn generate_prime(
    entropy: &mut impl Entropy,
    cancel: &impl CancellationToken,
) -> Result<Option<BigInt2048>> {
    loop {
        if cancel.is_cancelled() {
            return Ok(None);
        }

        let mut half = [0u8; HALF_BYTES];
        entropy.fill(&mut half)?;

        let mut bytes = [0u8; KEY_SIZE_BYTES];
        bytes[..HALF_BYTES].copy_from_slice(&half);

        let mut candidate = BigInt2048::from_le_bytes(&bytes);
        candidate.set_bit(HALF_BITS - 1);
        candidate.set_bit(0);

        if is_probably_prime(&candidate, entropy)? {
            return Ok(Some(candidate));
        }
    }
}

/// Miller–Rabin primality test with `MILLER_RABIN_ROUNDS` bases drawn from `entropy`.
fn is_probably_prime(n: &BigInt2048, entropy: &mut impl Entropy) -> Result<bool> {
    let one = BigInt2048::one();
    let two = BigInt2048::from_u64(2);

    if n < &two {
        return Ok(false);
    }
    if n == &two {
        return Ok(true);
    }
    if !n.bit(0) {
        return Ok(false);
    }

    let (n_minus_one, _) = n.borrowing_sub(&one);

    let mut d = n_minus_one;
    let mut s = 0u32;
    while !d.bit(0) {
        d = d.shr1();
        s += 1;
    }

    let (bound, _) = n.borrowing_sub(&BigInt2048::from_u64(3));

    'rounds: for _ in 0..MILLER_RABIN_ROUNDS {
        let base = random_below(&bound, entropy)?.add_mod(&two, n);
        let mut x = base.exp_mod(&d, n);

        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.mul_mod(&x, n);
            if x == n_minus_one {
                continue 'rounds;
            }
            if x == one {
                return Ok(false);
            }
        }

        return Ok(false);
    }

    Ok(true)
}

/// Draws a uniformly random value in `[0, bound)` by rejection sampling at
/// `bound`'s own bit length, so the rejection rate stays under one half.
fn random_below(bound: &BigInt2048, entropy: &mut impl Entropy) -> Result<BigInt2048> {
    let bits = bound.bit_length().max(1);
    let bytes_needed = ((bits + 7) / 8) as usize;
    let top_bits = bits % 8;

    loop {
        let mut buf = [0u8; KEY_SIZE_BYTES];
        entropy.fill(&mut buf[..bytes_needed])?;

        if top_bits != 0 {
            buf[bytes_needed - 1] &= (1u8 << top_bits) - 1;
        }

        let candidate = BigInt2048::from_le_bytes(&buf);
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

/// `a * b`, exactly, for factors known to be half-width (so the true
/// product always fits back in a `BigInt2048` with no reduction needed).
fn plain_mul(a: &BigInt2048, b: &BigInt2048) -> BigInt2048 {
    let wide = a.mul_wide(b);
    debug_assert!(wide[32..].iter().all(|&limb| limb == 0));
    let mut limbs = [0u64; 32];
    limbs.copy_from_slice(&wide[..32]);
    BigInt2048::from_limbs(limbs)
}

/// `e^-1 mod phi`, via the extended Euclidean algorithm. Returns `None` if
/// `gcd(e, phi) != 1`.
///
/// The remainder sequence is kept as exact integers (always `< phi`, so it
/// never needs more than `BigInt2048`'s width); the Bezout-coefficient
/// sequence for `e` is instead kept reduced mod `phi` at every step via
/// `mul_mod`/`sub_mod` rather than as an unbounded integer — the recurrence
/// `t[i+1] = t[i-1] - q[i]*t[i]` holds equally well mod `phi`, and the raw
/// integer coefficients can otherwise grow to roughly `phi`'s own width
/// *squared*, which no fixed-width type here can hold.
fn mod_inverse(e: &BigInt2048, phi: &BigInt2048) -> Option<BigInt2048> {
    let mut old_r = *phi;
    let mut r = *e;
    let mut old_t = BigInt2048::ZERO;
    let mut t = BigInt2048::one();

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r);
        old_r = r;
        r = rem;

        let qt = q.mul_mod(&t, phi);
        let new_t = old_t.sub_mod(&qt, phi);
        old_t = t;
        t = new_t;
    }

    if old_r != BigInt2048::one() {
        return None;
    }

    Some(old_t)
}
