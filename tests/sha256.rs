use nebula_crypto::hash::Sha256;

#[test]
fn sha256_empty_vector() {
    let expected = [
        0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9,
        0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52,
        0xb8, 0x55,
    ];
    assert_eq!(Sha256::digest(&[]), expected);
}

#[test]
fn sha256_abc_vector() {
    let expected = [
        0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22,
        0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00,
        0x15, 0xad,
    ];
    assert_eq!(Sha256::digest(b"abc"), expected);
}

#[test]
fn sha256_two_block_message() {
    let expected = [
        0x24, 0x8d, 0x6a, 0x61, 0xd2, 0x06, 0x38, 0xb8, 0xe5, 0xc0, 0x26, 0x93, 0x0c, 0x3e, 0x60,
        0x39, 0xa3, 0x3c, 0xe4, 0x59, 0x64, 0xff, 0x21, 0x67, 0xf6, 0xec, 0xed, 0xd4, 0x19, 0xdb,
        0x06, 0xc1,
    ];
    assert_eq!(
        Sha256::digest(
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"
        ),
        expected
    );
}

#[test]
fn sha256_streaming_matches_oneshot() {
    let data = b"the quick brown fox jumps over the lazy dog, split across chunks";

    let oneshot = Sha256::digest(data);

    let mut hasher = Sha256::new();
    for chunk in data.chunks(9) {
        hasher.update(chunk).unwrap();
    }
    let streamed = hasher.finalize().unwrap();

    assert_eq!(oneshot, streamed);
}

#[test]
fn sha256_empty_updates_are_no_ops() {
    let mut hasher = Sha256::new();
    hasher.update(b"").unwrap();
    hasher.update(b"abc").unwrap();
    hasher.update(b"").unwrap();
    assert_eq!(hasher.finalize().unwrap(), Sha256::digest(b"abc"));
}

#[test]
fn sha256_block_boundary_lengths() {
    for len in [0, 1, 55, 56, 63, 64, 65, 128, 1000] {
        let buf = vec![0x5a_u8; len];
        let _ = Sha256::digest(&buf);
    }
}
