//! Population statistics over sample buffers.
//!
//! All functions treat the buffer as the whole population (divide by `n`,
//! not `n - 1`). Empty buffers yield `0.0` for averages so callers never see
//! a division by zero; extrema of an empty buffer are `None`.

/// Arithmetic mean.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation.
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mu = mean(samples);
    let variance = samples.iter().map(|&x| (x - mu) * (x - mu)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

pub fn max(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::max)
}

pub fn min(samples: &[f64]) -> Option<f64> {
    samples.iter().copied().reduce(f64::min)
}

/// Mean of the squared samples.
pub fn mean_power(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|&x| x * x).sum::<f64>() / samples.len() as f64
}

/// Root-mean-square level.
#[inline]
pub fn rms(samples: &[f64]) -> f64 {
    mean_power(samples).sqrt()
}

/// Largest absolute sample.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
}

/// Signal-to-noise ratio in dB from two mean powers.
///
/// Zero noise power maps to `+∞`.
pub fn snr_db(signal_power: f64, noise_power: f64) -> f64 {
    if noise_power == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (signal_power / noise_power).log10()
}
