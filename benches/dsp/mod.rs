//! Benchmarks for low-level signal primitives.

mod attenuation;
mod noise;
mod stats;

pub use attenuation::bench_attenuation;
pub use noise::bench_noise;
pub use stats::bench_stats;
