//! Benchmarks for full cable transmissions.

use std::hint::black_box;

use cable_sim::{dsp::oscillator::sine_wave, Cable, CableConfig};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_transmit(c: &mut Criterion) {
    let mut group = c.benchmark_group("cable/transmit");

    for &size in BLOCK_SIZES {
        let signal = sine_wave(1000.0, 44_100.0, size as f64 / 44_100.0);

        let mut clean = Cable::new(CableConfig::noiseless(100.0, 0.1)).expect("valid config");
        group.bench_with_input(BenchmarkId::new("noiseless", size), &size, |b, _| {
            b.iter(|| clean.transmit(black_box(&signal)))
        });

        let mut noisy =
            Cable::new(CableConfig::default().noise_level(0.05).seed(7)).expect("valid config");
        group.bench_with_input(BenchmarkId::new("noisy", size), &size, |b, _| {
            b.iter(|| noisy.transmit(black_box(&signal)))
        });

        group.bench_with_input(BenchmarkId::new("signal_stats", size), &size, |b, _| {
            b.iter(|| black_box(&noisy).signal_stats())
        });
    }

    group.finish();
}
