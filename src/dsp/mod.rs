//! Low-level signal primitives used by the cable model.
//!
//! These stay focused on the math over plain `f64` slices so the cable can
//! layer bookkeeping and visualization on top.

/// Exponential attenuation and constant gain.
pub mod attenuation;
/// Seeded additive white Gaussian noise.
pub mod noise;
/// Test-signal synthesis.
pub mod oscillator;
/// Windowed FFT magnitude spectrum.
pub mod spectrum;
/// Population statistics and SNR.
pub mod stats;

pub use attenuation::attenuation_factor;
pub use noise::GaussianNoise;
pub use spectrum::SpectrumAnalyzer;
