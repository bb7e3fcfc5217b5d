//! Benchmarks for attenuation primitives.

use std::hint::black_box;

use cable_sim::dsp::{attenuation, oscillator::sine_wave};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_attenuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/attenuation");
    let factor = attenuation::attenuation_factor(0.1, 100.0);

    for &size in BLOCK_SIZES {
        let signal = sine_wave(1000.0, 44_100.0, size as f64 / 44_100.0);
        let mut output = vec![0.0; signal.len()];

        group.bench_with_input(BenchmarkId::new("scale", size), &size, |b, _| {
            b.iter(|| attenuation::scale(black_box(&signal), black_box(factor), black_box(&mut output)))
        });

        let mut signal_copy = signal.clone();
        group.bench_with_input(BenchmarkId::new("apply_gain", size), &size, |b, _| {
            b.iter(|| {
                signal_copy.copy_from_slice(&signal);
                attenuation::apply_gain(black_box(&mut signal_copy), black_box(factor))
            })
        });
    }

    group.finish();
}
