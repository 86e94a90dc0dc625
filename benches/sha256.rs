use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nebula_crypto::hash::Sha256;

pub fn bench_sha256(c: &mut Criterion) {
    c.bench_function("sha256 64 bytes", |b| {
        b.iter(|| Sha256::digest(black_box(&[0u8; 64])))
    });

    c.bench_function("sha256 4096 bytes", |b| {
        b.iter(|| Sha256::digest(black_box(&[0u8; 4096])))
    });
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
