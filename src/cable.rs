//! The simulated cable.

/*
Channel Model
=============

One transmission runs the input through two stages:

    input ──► × attenuation factor ──► + N(0, σ²) ──► output

  attenuation factor   exp(-α × length / 100), see dsp::attenuation
  σ                    noise_level; 0 skips the noise stage entirely, so
                       no random numbers are drawn

The cable remembers exactly one transmission (input and output together).
Statistics and the SNR estimate are computed from that record on demand.


SNR Estimate
------------

The cable knows what a noiseless output would have been, so it can split the
received signal into "expected" and "noise":

    expected[i] = input[i] × factor
    noise[i]    = output[i] - expected[i]

    SNR(dB) = 10 × log₁₀( mean(expected²) / mean(noise²) )

With noise disabled the noise power is exactly zero and the SNR is +∞.
*/

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::CableConfig;
use crate::dsp::{attenuation, noise::GaussianNoise, stats};
use crate::error::{CableError, CableResult};
use crate::scope::{SignalSnapshot, TraceScope, Visualizer, DEFAULT_PLOT_SAMPLES};

/// Default propagation speed in m/s (about 2/3 of c, typical for fibre).
pub const DEFAULT_SIGNAL_SPEED: f64 = 2e8;

/// The most recent input/output pair. Both series always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Transmission {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Transmission {
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn len(&self) -> usize {
        self.input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}

/// Summary statistics of the last transmission.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalStats {
    pub input_mean: f64,
    pub input_std: f64,
    pub input_max: f64,
    pub input_min: f64,
    pub output_mean: f64,
    pub output_std: f64,
    pub output_max: f64,
    pub output_min: f64,
    pub snr_db: f64,
}

impl SignalStats {
    pub const KEYS: [&'static str; 9] = [
        "input_mean",
        "input_std",
        "input_max",
        "input_min",
        "output_mean",
        "output_std",
        "output_max",
        "output_min",
        "snr_db",
    ];

    /// Keyed view, one entry per field.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        let values = [
            self.input_mean,
            self.input_std,
            self.input_max,
            self.input_min,
            self.output_mean,
            self.output_std,
            self.output_max,
            self.output_min,
            self.snr_db,
        ];
        Self::KEYS.into_iter().zip(values).collect()
    }
}

/// A point-to-point analog channel with attenuation and additive Gaussian noise.
pub struct Cable {
    config: CableConfig,
    attenuation_factor: f64,
    /// `None` when `noise_level == 0`
    noise: Option<GaussianNoise>,
    last: Option<Transmission>,
    visualizer: Box<dyn Visualizer>,
}

impl Cable {
    /// Validate `config` and build the cable.
    ///
    /// Debug-mode transmissions go to a [`TraceScope`] until a different
    /// visualizer is attached with [`Cable::with_visualizer`].
    pub fn new(config: CableConfig) -> CableResult<Self> {
        config.validate()?;

        let noise = if config.has_noise() {
            Some(GaussianNoise::new(config.noise_level, config.seed)?)
        } else {
            None
        };

        Ok(Self {
            attenuation_factor: attenuation::attenuation_factor(config.attenuation, config.length),
            config,
            noise,
            last: None,
            visualizer: Box::new(TraceScope),
        })
    }

    /// Replace the debug-mode visualizer.
    pub fn with_visualizer<V: Visualizer + 'static>(mut self, visualizer: V) -> Self {
        self.visualizer = Box::new(visualizer);
        self
    }

    pub fn config(&self) -> &CableConfig {
        &self.config
    }

    /// `exp(-attenuation × length / 100)`
    pub fn attenuation_factor(&self) -> f64 {
        self.attenuation_factor
    }

    /// The most recent transmission, if any.
    pub fn last_transmission(&self) -> Option<&Transmission> {
        self.last.as_ref()
    }

    /// Send `signal` down the cable and return what arrives at the far end.
    ///
    /// The input and output are kept as the cable's transmission record,
    /// replacing the previous one. In debug mode the record is then handed
    /// to the visualizer, capped at [`DEFAULT_PLOT_SAMPLES`] per series.
    ///
    /// # Errors
    /// [`CableError::EmptySignal`] for an empty slice. The previous record
    /// is kept in that case.
    pub fn transmit(&mut self, signal: &[f64]) -> CableResult<Vec<f64>> {
        if signal.is_empty() {
            return Err(CableError::EmptySignal);
        }

        let mut output = vec![0.0; signal.len()];
        attenuation::scale(signal, self.attenuation_factor, &mut output);

        if let Some(noise) = self.noise.as_mut() {
            noise.add_to(&mut output);
        }

        tracing::debug!(
            samples = signal.len(),
            attenuation_factor = self.attenuation_factor,
            noisy = self.noise.is_some(),
            "transmitted signal"
        );

        self.last = Some(Transmission {
            input: signal.to_vec(),
            output: output.clone(),
        });

        if self.config.debug_mode {
            self.plot_signals(DEFAULT_PLOT_SAMPLES);
        }

        Ok(output)
    }

    /// Propagation delay at [`DEFAULT_SIGNAL_SPEED`], in seconds.
    pub fn propagation_delay(&self) -> f64 {
        self.config.length / DEFAULT_SIGNAL_SPEED
    }

    /// Propagation delay at `signal_speed` m/s, in seconds.
    pub fn propagation_delay_at(&self, signal_speed: f64) -> CableResult<f64> {
        if !signal_speed.is_finite() || signal_speed <= 0.0 {
            return Err(CableError::InvalidSignalSpeed(signal_speed));
        }
        Ok(self.config.length / signal_speed)
    }

    /// Hand the current record to the visualizer, first `max_samples` of each series.
    pub fn plot_signals(&mut self, max_samples: usize) {
        let Some(record) = self.last.as_ref() else {
            tracing::warn!("no signal data available");
            return;
        };

        let snapshot = SignalSnapshot::truncated(
            &record.input,
            &record.output,
            max_samples,
            self.config.attenuation,
            self.config.noise_level,
        );
        self.visualizer.render(&snapshot);
    }

    /// Statistics of the last transmission, `None` before the first one.
    pub fn signal_stats(&self) -> Option<SignalStats> {
        let record = self.last.as_ref()?;
        let (input, output) = (record.input(), record.output());

        Some(SignalStats {
            input_mean: stats::mean(input),
            input_std: stats::std_dev(input),
            input_max: stats::max(input)?,
            input_min: stats::min(input)?,
            output_mean: stats::mean(output),
            output_std: stats::std_dev(output),
            output_max: stats::max(output)?,
            output_min: stats::min(output)?,
            snr_db: self.snr_db(),
        })
    }

    /// Keyed statistics; empty before the first transmission.
    pub fn signal_stats_map(&self) -> BTreeMap<&'static str, f64> {
        self.signal_stats()
            .map(|stats| stats.to_map())
            .unwrap_or_default()
    }

    /// Estimated SNR of the last transmission in dB.
    ///
    /// `0.0` before the first transmission, `+∞` when the output carries no noise.
    pub fn snr_db(&self) -> f64 {
        let Some(record) = self.last.as_ref() else {
            return 0.0;
        };

        let factor = attenuation::attenuation_factor(self.config.attenuation, self.config.length);
        let mut signal_power = 0.0;
        let mut noise_power = 0.0;
        for (&x, &y) in record.input.iter().zip(&record.output) {
            let expected = x * factor;
            let noise = y - expected;
            signal_power += expected * expected;
            noise_power += noise * noise;
        }
        let n = record.len() as f64;

        stats::snr_db(signal_power / n, noise_power / n)
    }
}

impl fmt::Display for Cable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cable(length={}m, attenuation={}dB/m, noise_level={}, debug={})",
            self.config.length, self.config.attenuation, self.config.noise_level, self.config.debug_mode
        )
    }
}

impl fmt::Debug for Cable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cable")
            .field("config", &self.config)
            .field("attenuation_factor", &self.attenuation_factor)
            .field("last_len", &self.last.as_ref().map(Transmission::len))
            .finish_non_exhaustive()
    }
}
