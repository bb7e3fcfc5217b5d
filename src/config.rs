//! Cable configuration.
//!
//! A [`CableConfig`] is plain data with a chainable builder. It is validated
//! once when a [`Cable`](crate::Cable) is constructed and never changes after
//! that.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CableError, CableResult};

/// Physical and debug parameters of a simulated cable
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableConfig {
    /// Cable length in metres
    pub length: f64,
    /// Attenuation coefficient (dB/m in the course material, applied per 100 m)
    pub attenuation: f64,
    /// Standard deviation of the additive Gaussian noise. 0 disables noise.
    pub noise_level: f64,
    /// Render the visualization after every transmission
    pub debug_mode: bool,
    /// Fixed RNG seed for reproducible noise. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for CableConfig {
    fn default() -> Self {
        Self {
            length: 100.0,
            attenuation: 0.1,
            noise_level: 0.01,
            debug_mode: false,
            seed: None,
        }
    }
}

impl CableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Noise-free cable of the given length and attenuation.
    pub fn noiseless(length: f64, attenuation: f64) -> Self {
        Self {
            length,
            attenuation,
            noise_level: 0.0,
            ..Self::default()
        }
    }

    pub fn length(mut self, meters: f64) -> Self {
        self.length = meters;
        self
    }

    pub fn attenuation(mut self, coefficient: f64) -> Self {
        self.attenuation = coefficient;
        self
    }

    pub fn noise_level(mut self, std_dev: f64) -> Self {
        self.noise_level = std_dev;
        self
    }

    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every numeric field is finite and non-negative.
    pub fn validate(&self) -> CableResult<()> {
        for (field, value) in [
            ("length", self.length),
            ("attenuation", self.attenuation),
            ("noise_level", self.noise_level),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CableError::InvalidConfiguration { field, value });
            }
        }
        Ok(())
    }

    /// True when transmissions add Gaussian noise.
    #[inline]
    pub fn has_noise(&self) -> bool {
        self.noise_level > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_course_cable() {
        let config = CableConfig::default();
        assert_eq!(config.length, 100.0);
        assert_eq!(config.attenuation, 0.1);
        assert_eq!(config.noise_level, 0.01);
        assert!(!config.debug_mode);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_chain() {
        let config = CableConfig::new()
            .length(250.0)
            .attenuation(0.3)
            .noise_level(0.0)
            .debug_mode(true)
            .seed(7);

        assert_eq!(config.length, 250.0);
        assert_eq!(config.attenuation, 0.3);
        assert!(!config.has_noise());
        assert!(config.debug_mode);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_accepts_zero() {
        assert!(CableConfig::noiseless(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_fields() {
        let err = CableConfig::new().length(-1.0).validate().unwrap_err();
        assert_eq!(
            err,
            CableError::InvalidConfiguration {
                field: "length",
                value: -1.0
            }
        );

        assert!(matches!(
            CableConfig::new().attenuation(-0.5).validate(),
            Err(CableError::InvalidConfiguration { field: "attenuation", .. })
        ));
        assert!(matches!(
            CableConfig::new().noise_level(-0.01).validate(),
            Err(CableError::InvalidConfiguration { field: "noise_level", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        assert!(CableConfig::new().length(f64::NAN).validate().is_err());
        assert!(CableConfig::new().noise_level(f64::INFINITY).validate().is_err());
    }
}
