use nebula_crypto::entropy::FixedEntropy;
use nebula_crypto::envelope::Envelope;
use nebula_crypto::error::Error;
use nebula_crypto::rsa::generate_key_pair;

#[test]
fn round_trips_through_json() {
    let mut entropy = FixedEntropy::new((0u8..=255).collect::<Vec<u8>>());
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");

    let envelope = Envelope::new(public, private.clone());
    let json = envelope.to_json();
    let parsed = Envelope::from_json(&json).expect("round trip parses");

    assert_eq!(parsed.public.to_bytes(), public.to_bytes());
    assert_eq!(parsed.private.to_bytes(), private.to_bytes());
}

#[test]
fn rejects_truncated_public_key() {
    let json = r#"{"public":"AAAA","private":"AAAA"}"#;
    assert_eq!(Envelope::from_json(json).err(), Some(Error::InvalidKey));
}

#[test]
fn rejects_invalid_base64() {
    let json = r#"{"public":"not base64!!","private":"not base64!!"}"#;
    assert_eq!(Envelope::from_json(json).err(), Some(Error::InvalidKey));
}

#[test]
fn rejects_malformed_json() {
    assert_eq!(Envelope::from_json("not json at all").err(), Some(Error::InvalidKey));
}
