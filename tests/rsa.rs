use nebula_crypto::entropy::FixedEntropy;
use nebula_crypto::error::Error;
use nebula_crypto::primitives::BigInt2048;
use nebula_crypto::rsa::{generate_key_pair, oaep_decrypt, oaep_encrypt, raw_decrypt, raw_encrypt};

fn fixed_entropy() -> FixedEntropy {
    FixedEntropy::new((0u8..=255).collect::<Vec<u8>>())
}

#[test]
fn raw_transform_round_trips() {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let message = BigInt2048::from_u64(0x1234_5678_9abc_def0);
    let ciphertext = raw_encrypt(&message, &public);
    let recovered = raw_decrypt(&ciphertext, &public, &private);

    assert_eq!(recovered, message);
}

#[test]
fn oaep_round_trips_with_label() {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let plaintext = b"the quick brown fox";
    let label = b"example-label";

    let ciphertext =
        oaep_encrypt(plaintext, &public, label, &mut entropy).expect("message fits capacity");
    let recovered =
        oaep_decrypt(&ciphertext, &public, &private, label).expect("decryption succeeds");

    assert_eq!(recovered, plaintext);
}

#[test]
fn oaep_rejects_wrong_label() {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let ciphertext =
        oaep_encrypt(b"secret", &public, b"label-a", &mut entropy).expect("fits capacity");

    assert_eq!(
        oaep_decrypt(&ciphertext, &public, &private, b"label-b"),
        Err(Error::DecryptionError)
    );
}

#[test]
fn oaep_rejects_message_too_long() {
    let mut entropy = fixed_entropy();
    let (public, _private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let too_long = vec![0u8; 1024];
    assert_eq!(
        oaep_encrypt(&too_long, &public, b"", &mut entropy),
        Err(Error::MessageTooLong)
    );
}

#[test]
fn oaep_tampered_ciphertext_fails() {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let mut ciphertext =
        oaep_encrypt(b"tamper me", &public, b"", &mut entropy).expect("fits capacity");
    ciphertext[0] ^= 0x01;

    assert_eq!(
        oaep_decrypt(&ciphertext, &public, &private, b""),
        Err(Error::DecryptionError)
    );
}

#[test]
fn key_serialization_round_trips() {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let public_bytes = public.to_bytes();
    let parsed_public =
        nebula_crypto::rsa::PublicKey::try_from(public_bytes.as_slice()).expect("parses");
    assert_eq!(parsed_public.to_bytes(), public_bytes);

    let private_bytes = private.to_bytes();
    let parsed_private =
        nebula_crypto::rsa::PrivateKey::try_from(private_bytes.as_slice()).expect("parses");
    assert_eq!(parsed_private.to_bytes(), private_bytes);
}

#[test]
fn key_serialization_rejects_wrong_length() {
    let short = [0u8; 10];
    assert_eq!(
        nebula_crypto::rsa::PublicKey::try_from(&short[..]),
        Err(Error::InvalidKey)
    );
}
