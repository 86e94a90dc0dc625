use nebula_crypto::entropy::FixedEntropy;
use nebula_crypto::error::Error;
use nebula_crypto::rsa::generate_key_pair;
use nebula_crypto::signatures::digital_signature::{sign, verify};

fn fixed_entropy() -> FixedEntropy {
    FixedEntropy::new((0u8..=255).collect::<Vec<u8>>())
}

#[test]
fn sign_then_verify_succeeds() {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let message = b"transfer 10 credits to account 42";
    let signature = sign(&public, &private, message);

    assert!(verify(&public, message, &signature).is_ok());
}

#[test]
fn empty_message_round_trips() {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let signature = sign(&public, &private, &[]);
    assert!(verify(&public, &[], &signature).is_ok());
}

#[test]
fn tampered_message_is_rejected() {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let signature = sign(&public, &private, b"original message");

    assert_eq!(
        verify(&public, b"tampered message", &signature),
        Err(Error::InvalidSignature)
    );
}

#[test]
fn tampered_signature_byte_is_rejected() {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let message = b"do not alter";
    let mut signature = sign(&public, &private, message);
    signature[0] ^= 0x01;

    assert_eq!(
        verify(&public, message, &signature),
        Err(Error::InvalidSignature)
    );
}

#[test]
fn wrong_key_is_rejected() {
    let mut entropy = fixed_entropy();
    let (public_a, private_a) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");
    let (public_b, _private_b) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let message = b"signed by a, checked against b";
    let signature = sign(&public_a, &private_a, message);

    assert_eq!(
        verify(&public_b, message, &signature),
        Err(Error::InvalidSignature)
    );
}
