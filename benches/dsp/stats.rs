//! Benchmarks for buffer statistics.

use std::hint::black_box;

use cable_sim::dsp::{oscillator::sine_wave, stats};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/stats");

    for &size in BLOCK_SIZES {
        let signal = sine_wave(1000.0, 44_100.0, size as f64 / 44_100.0);

        group.bench_with_input(BenchmarkId::new("std_dev", size), &size, |b, _| {
            b.iter(|| stats::std_dev(black_box(&signal)))
        });

        group.bench_with_input(BenchmarkId::new("mean_power", size), &size, |b, _| {
            b.iter(|| stats::mean_power(black_box(&signal)))
        });
    }

    group.finish();
}
