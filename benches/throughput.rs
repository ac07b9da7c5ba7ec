//! Throughput of the two pipelines over synthetic data shaped for each:
//! small byte alphabets for the dictionary code, sparse bitmaps for the
//! run-length code, plus incompressible noise as a baseline.

use bitpress::codes::{dictionary, run_length};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

const LEN: usize = 1 << 20;

fn alphabet_data(alphabet: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(0);
    (0..LEN)
        .map(|_| ((rng.random_range(0..alphabet) * 97 + 13) % 256) as u8)
        .collect()
}

fn sparse_data(density: f64) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(0);
    (0..LEN)
        .map(|_| if rng.random_bool(density) { 0xFF } else { 0x00 })
        .collect()
}

fn bench_dictionary(c: &mut Criterion) {
    for alphabet in [2, 16, 256] {
        let data = alphabet_data(alphabet);
        let encoded = dictionary::compress(&data).unwrap();

        c.bench_function(&format!("dictionary,{},compress", alphabet), |b| {
            b.iter(|| black_box(dictionary::compress(black_box(&data)).unwrap()))
        });
        c.bench_function(&format!("dictionary,{},expand", alphabet), |b| {
            b.iter(|| black_box(dictionary::expand(black_box(&encoded)).unwrap()))
        });
    }
}

fn bench_run_length(c: &mut Criterion) {
    for density in [0.001, 0.02] {
        let data = sparse_data(density);
        let encoded = run_length::compress(&data).unwrap();

        c.bench_function(&format!("run_length,{},compress", density), |b| {
            b.iter(|| black_box(run_length::compress(black_box(&data)).unwrap()))
        });
        c.bench_function(&format!("run_length,{},expand", density), |b| {
            b.iter(|| black_box(run_length::expand(black_box(&encoded)).unwrap()))
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(20);
    targets = bench_dictionary, bench_run_length
}
criterion_main!(benches);
