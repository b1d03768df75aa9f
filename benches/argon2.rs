use cryptal_argon2::derivation::{Argon2Params, Schedule, argon2id};
use cryptal_argon2::hash::blake2b;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_blake2b(c: &mut Criterion) {
    c.bench_function("blake2b 64 bytes", |b| {
        b.iter(|| blake2b(64, black_box(&[0u8; 64])))
    });
}

pub fn bench_argon2id(c: &mut Criterion) {
    let mut group = c.benchmark_group("argon2id 1 MiB");

    for (name, schedule) in [("sequential", Schedule::Sequential), ("parallel", Schedule::Parallel)] {
        let params = Argon2Params {
            mem_kib: 1024,
            time: 1,
            lanes: 4,
            tag_len: 32,
            secret: None,
            associated_data: None,
            schedule,
        };

        group.bench_with_input(BenchmarkId::from_parameter(name), &params, |b, params| {
            b.iter(|| argon2id(black_box(b"password"), black_box(b"saltsaltsalt"), params))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_blake2b, bench_argon2id);
criterion_main!(benches);
