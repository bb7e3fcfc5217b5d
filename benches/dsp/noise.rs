//! Benchmarks for the Gaussian noise source.

use std::hint::black_box;

use cable_sim::dsp::GaussianNoise;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &size in BLOCK_SIZES {
        let mut noise = GaussianNoise::new(0.05, Some(42)).expect("valid std dev");
        let mut buffer = vec![0.0; size];

        group.bench_with_input(BenchmarkId::new("add_to", size), &size, |b, _| {
            b.iter(|| noise.add_to(black_box(&mut buffer)))
        });
    }

    group.finish();
}
