use nebula_crypto::primitives::{BigInt256, BigInt512};

#[test]
fn max_const_is_all_ones() {
    assert_eq!(BigInt256::MAX, BigInt256::from_le_bytes(&[0xffu8; 32]));
}

#[test]
fn le_bytes_round_trip() {
    let mut bytes = [0u8; 32];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }

    let value = BigInt256::from_le_bytes(&bytes);
    assert_eq!(value.to_le_bytes(), bytes);
}

#[test]
fn zero_is_zero() {
    assert!(BigInt256::ZERO.is_zero());
    assert!(!BigInt256::one().is_zero());
}

#[test]
fn ordering_matches_byte_value() {
    let small = BigInt256::from_u64(5);
    let large = BigInt256::from_u64(1000);
    assert!(small < large);
    assert!(large > small);
    assert_eq!(small, BigInt256::from_u64(5));
}

#[test]
fn bit_length_and_bit_probe_agree() {
    let value = BigInt256::from_u64(0b1011);
    assert_eq!(value.bit_length(), 4);
    assert!(value.bit(0));
    assert!(value.bit(1));
    assert!(!value.bit(2));
    assert!(value.bit(3));
    assert!(!value.bit(4));
}

#[test]
fn add_mod_wraps_at_modulus() {
    let m = BigInt256::from_u64(17);
    let a = BigInt256::from_u64(15);
    let b = BigInt256::from_u64(5);
    assert_eq!(a.add_mod(&b, &m), BigInt256::from_u64(3));
}

#[test]
fn sub_mod_wraps_below_zero() {
    let m = BigInt256::from_u64(17);
    let a = BigInt256::from_u64(3);
    let b = BigInt256::from_u64(5);
    assert_eq!(a.sub_mod(&b, &m), BigInt256::from_u64(15));
}

#[test]
fn mul_mod_matches_schoolbook() {
    let m = BigInt256::from_u64(1_000_003);
    let a = BigInt256::from_u64(999_983);
    let b = BigInt256::from_u64(12345);
    let expected = BigInt256::from_u64((999_983u64 * 12345) % 1_000_003);
    assert_eq!(a.mul_mod(&b, &m), expected);
}

#[test]
fn exp_mod_fermat_little_theorem() {
    // For prime p and a not divisible by p, a^(p-1) mod p == 1.
    let p = BigInt256::from_u64(1_000_003);
    let a = BigInt256::from_u64(12345);
    let p_minus_one = BigInt256::from_u64(1_000_002);
    assert_eq!(a.exp_mod(&p_minus_one, &p), BigInt256::one());
}

#[test]
fn inv_mod_round_trips_through_multiplication() {
    let m = BigInt256::from_u64(1_000_003);
    let a = BigInt256::from_u64(123_456);
    let inv = a.inv_mod(&m);
    assert_eq!(a.mul_mod(&inv, &m), BigInt256::one());
}

#[test]
fn wide_width_round_trips() {
    let mut bytes = [0u8; 64];
    bytes[0] = 0xAB;
    bytes[63] = 0xCD;
    let value = BigInt512::from_le_bytes(&bytes);
    assert_eq!(value.to_le_bytes(), bytes);
}
