use nebula_crypto::entropy::FixedEntropy;
use nebula_crypto::error::Error;
use nebula_crypto::signatures::ed25519::{
    derive_public_key, sign, verify, PublicKey, Seed, Signature,
};

fn from_hex32(s: &str) -> [u8; 32] {
    hex::decode(s).unwrap().try_into().unwrap()
}

fn from_hex64(s: &str) -> [u8; 64] {
    hex::decode(s).unwrap().try_into().unwrap()
}

/// RFC 8032 §7.1 test vector 1: empty message.
#[test]
fn rfc8032_test_vector_1() {
    let seed = Seed::from_bytes(from_hex32(
        "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f",
    ));
    let expected_public =
        from_hex32("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511");
    let expected_signature = from_hex64(
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100",
    );

    let public = derive_public_key(&seed);
    assert_eq!(public.to_bytes(), expected_public);

    let signature = sign(&seed, &[]);
    assert_eq!(signature.to_bytes(), expected_signature);

    assert!(verify(&signature, &[], &public).is_ok());
}

/// RFC 8032 §7.1 test vector 2: one-byte message.
#[test]
fn rfc8032_test_vector_2() {
    let seed = Seed::from_bytes(from_hex32(
        "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6f",
    ));
    let expected_public =
        from_hex32("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660");
    let message = [0x72u8];
    let expected_signature = from_hex64(
        "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
    );

    let public = derive_public_key(&seed);
    assert_eq!(public.to_bytes(), expected_public);

    let signature = sign(&seed, &message);
    assert_eq!(signature.to_bytes(), expected_signature);

    assert!(verify(&signature, &message, &public).is_ok());
}

#[test]
fn tampered_message_fails_verification() {
    let seed = Seed::from_bytes([7u8; 32]);
    let public = derive_public_key(&seed);
    let signature = sign(&seed, b"attack at dawn");

    let result = verify(&signature, b"attack at dusk", &public);
    assert_eq!(result, Err(Error::InvalidSignature));
}

#[test]
fn tampered_signature_bit_fails_verification() {
    let seed = Seed::from_bytes([11u8; 32]);
    let message = b"the eagle lands at midnight";
    let public = derive_public_key(&seed);
    let signature = sign(&seed, message);

    let mut tampered = signature.to_bytes();
    tampered[0] ^= 0x01;
    let tampered_signature = Signature::from_bytes(tampered);

    assert_eq!(
        verify(&tampered_signature, message, &public),
        Err(Error::InvalidSignature)
    );
}

#[test]
fn wrong_public_key_fails_verification() {
    let seed_a = Seed::from_bytes([1u8; 32]);
    let seed_b = Seed::from_bytes([2u8; 32]);
    let message = b"message signed by a, checked against b's key";

    let signature = sign(&seed_a, message);
    let public_b = derive_public_key(&seed_b);

    assert_eq!(
        verify(&signature, message, &public_b),
        Err(Error::InvalidSignature)
    );
}

#[test]
fn seed_generation_from_entropy_is_deterministic() {
    let mut entropy_a = FixedEntropy::new((0u8..32).collect::<Vec<u8>>());
    let mut entropy_b = FixedEntropy::new((0u8..32).collect::<Vec<u8>>());

    let seed_a = Seed::generate(&mut entropy_a).unwrap();
    let seed_b = Seed::generate(&mut entropy_b).unwrap();

    assert_eq!(
        derive_public_key(&seed_a).to_bytes(),
        derive_public_key(&seed_b).to_bytes()
    );
}

#[test]
fn malformed_public_key_rejected_as_invalid_signature() {
    // All-0xff is not a valid point encoding under the curve equation.
    let bad_public = PublicKey::from_bytes([0xffu8; 32]);
    let seed = Seed::from_bytes([3u8; 32]);
    let signature = sign(&seed, b"whatever");

    assert_eq!(
        verify(&signature, b"whatever", &bad_public),
        Err(Error::InvalidSignature)
    );
}
