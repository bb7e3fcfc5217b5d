//! Exponential cable attenuation.

/*
Cable Attenuation
=================

A signal travelling down a cable loses amplitude as it goes. The loss per
unit length is roughly constant, which gives an exponential decay with
distance.

Vocabulary
----------

  attenuation coefficient   Loss per unit length (α). The course material
                            quotes it in dB/m; the model below uses it
                            directly as an exponent rate.

  attenuation factor        The single multiplier (0.0, 1.0] that the whole
                            cable applies to every sample.


The Math
--------

    A(d) = A₀ × exp(-α × d / 100)

The divisor 100 normalises the length so that α is expressed per 100 m of
cable. It is part of the numeric contract: changing it changes every output.

    length = 100 m, α = 0.1   →   factor = exp(-0.1) ≈ 0.904837
    length = 0 m              →   factor = 1.0 (back-to-back link)
    α = 0                     →   factor = 1.0 (lossless cable)

The factor is applied sample-by-sample:

    output[i] = input[i] × factor

This is the same operation as a constant gain, just with a gain that is
always ≤ 1.0.
*/

/// Length normalisation for the attenuation exponent (metres).
pub const LENGTH_NORMALIZATION: f64 = 100.0;

/// Amplitude multiplier for a cable of `length` metres with coefficient `attenuation`.
#[inline]
pub fn attenuation_factor(attenuation: f64, length: f64) -> f64 {
    (-attenuation * length / LENGTH_NORMALIZATION).exp()
}

/// Multiply a signal by a constant gain factor (in-place).
#[inline]
pub fn apply_gain(signal: &mut [f64], gain: f64) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}

/// Multiply `signal` by `gain`, writing the result into `out`.
///
/// # Panics
/// Panics in debug builds if the slices have different lengths.
#[inline]
pub fn scale(signal: &[f64], gain: f64, out: &mut [f64]) {
    debug_assert_eq!(signal.len(), out.len());

    for (o, &s) in out.iter_mut().zip(signal.iter()) {
        *o = s * gain;
    }
}

/// Attenuation factor expressed in decibels (`20 × log₁₀(factor)`).
#[inline]
pub fn factor_to_db(factor: f64) -> f64 {
    20.0 * factor.log10()
}
