//! Additive white Gaussian noise source.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{CableError, CableResult};

/// Gaussian(0, σ) generator backed by a ChaCha8 stream.
///
/// A fixed seed makes the noise sequence reproducible across runs.
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    distr: Normal<f64>,
    rng: ChaCha8Rng,
}

impl GaussianNoise {
    /// Noise with standard deviation `std_dev`, seeded from `seed` or from OS entropy.
    pub fn new(std_dev: f64, seed: Option<u64>) -> CableResult<Self> {
        let distr = Normal::new(0.0, std_dev).map_err(|e| CableError::Noise(e.to_string()))?;
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self { distr, rng })
    }

    pub fn std_dev(&self) -> f64 {
        self.distr.std_dev()
    }

    /// Draw one variate.
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        self.distr.sample(&mut self.rng)
    }

    /// Add one independent variate to every sample, in place.
    pub fn add_to(&mut self, signal: &mut [f64]) {
        for x in signal.iter_mut() {
            *x += self.distr.sample(&mut self.rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_creation() {
        let noise = GaussianNoise::new(0.1, Some(42)).unwrap();
        assert_eq!(noise.std_dev(), 0.1);
    }

    #[test]
    fn test_non_finite_std_dev_rejected() {
        assert!(matches!(
            GaussianNoise::new(f64::NAN, Some(1)),
            Err(CableError::Noise(_))
        ));
    }

    #[test]
    fn test_noise_deterministic() {
        let mut a = GaussianNoise::new(0.5, Some(42)).unwrap();
        let mut b = GaussianNoise::new(0.5, Some(42)).unwrap();

        for _ in 0..100 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn test_noise_statistics() {
        let mut noise = GaussianNoise::new(1.0, Some(42)).unwrap();

        let n = 10000;
        let samples: Vec<f64> = (0..n).map(|_| noise.next_sample()).collect();

        let mean: f64 = samples.iter().sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.1, "Mean {} should be close to 0", mean);

        let variance: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(
            (variance - 1.0).abs() < 0.1,
            "Variance {} should be close to 1",
            variance
        );
    }

    #[test]
    fn test_std_dev_scaling() {
        for &sigma in &[0.05, 0.5, 2.0] {
            let mut noise = GaussianNoise::new(sigma, Some(7)).unwrap();
            let mut signal = vec![0.0; 50_000];
            noise.add_to(&mut signal);

            let n = signal.len() as f64;
            let mean = signal.iter().sum::<f64>() / n;
            let std = (signal.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
            assert!(
                (std - sigma).abs() / sigma < 0.05,
                "For sigma={}, measured std={}",
                sigma,
                std
            );
        }
    }

    #[test]
    fn test_add_to_preserves_length() {
        let mut noise = GaussianNoise::new(0.01, Some(3)).unwrap();
        let mut signal = vec![1.0; 17];
        noise.add_to(&mut signal);
        assert_eq!(signal.len(), 17);
        assert!(signal.iter().any(|&x| x != 1.0));
    }
}
