use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nebula_crypto::entropy::FixedEntropy;
use nebula_crypto::primitives::BigInt2048;
use nebula_crypto::rsa::{generate_key_pair, raw_decrypt, raw_encrypt};

fn fixed_entropy() -> FixedEntropy {
    FixedEntropy::new((0u8..=255).collect::<Vec<u8>>())
}

pub fn bench_keygen(c: &mut Criterion) {
    c.bench_function("rsa 2048-bit keygen", |b| {
        b.iter(|| {
            let mut entropy = fixed_entropy();
            generate_key_pair(black_box(&mut entropy), &NeverCancelled).expect("keygen succeeds").expect("not cancelled")
        })
    });
}

pub fn bench_raw_transform(c: &mut Criterion) {
    let mut entropy = fixed_entropy();
    let (public, private) = generate_key_pair(&mut entropy, &NeverCancelled).expect("keygen succeeds").expect("not cancelled");
    let message = BigInt2048::from_u64(0xdead_beef);
    let ciphertext = raw_encrypt(&message, &public);

    c.bench_function("rsa raw_encrypt 2048-bit", |b| {
        b.iter(|| raw_encrypt(black_box(&message), black_box(&public)))
    });

    c.bench_function("rsa raw_decrypt 2048-bit", |b| {
        b.iter(|| raw_decrypt(black_box(&ciphertext), black_box(&public), black_box(&private)))
    });
}

criterion_group!(benches, bench_keygen, bench_raw_transform);
criterion_main!(benches);
