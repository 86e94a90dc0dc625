//! Reference baseline: the same workload against the widely-used `sha2`
//! crate, to keep this crate's own SHA-256 honest against an established
//! implementation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sha2::{Digest, Sha256};

pub fn bench_sha2_crate(c: &mut Criterion) {
    c.bench_function("sha2::Sha256 64 bytes", |b| {
        b.iter(|| {
            let mut hasher = Sha256::new();
            hasher.update(black_box(&[0u8; 64]));
            let _ = hasher.finalize();
        })
    });

    c.bench_function("sha2::Sha256 4096 bytes", |b| {
        b.iter(|| {
            let mut hasher = Sha256::new();
            hasher.update(black_box(&[0u8; 4096]));
            let _ = hasher.finalize();
        })
    });
}

criterion_group!(benches, bench_sha2_crate);
criterion_main!(benches);
