//! FFT magnitude spectrum with log-spaced display bins.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Number of frequency bins reported by default
pub const SPECTRUM_BINS: usize = 48;

/// Floor applied to bin power before converting to dB
const POWER_FLOOR: f64 = 1e-12;

/// Hann-windowed spectrum analyzer.
///
/// The FFT is re-planned whenever the buffer length changes, so it accepts
/// transmissions of any size.
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f64>,
    fft: Option<Arc<dyn Fft<f64>>>,
    window: Vec<f64>,
    scratch: Vec<Complex<f64>>,
    sample_rate: f64,
    num_bins: usize,
    /// (frequency_hz, magnitude_db)
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    pub fn new(sample_rate: f64) -> Self {
        Self::with_bins(sample_rate, SPECTRUM_BINS)
    }

    pub fn with_bins(sample_rate: f64, num_bins: usize) -> Self {
        Self {
            planner: FftPlanner::new(),
            fft: None,
            window: Vec::new(),
            scratch: Vec::new(),
            sample_rate,
            num_bins: num_bins.max(1),
            spectrum: Vec::new(),
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    fn prepare(&mut self, len: usize) {
        if self.window.len() == len && self.fft.is_some() {
            return;
        }
        self.fft = Some(self.planner.plan_fft_forward(len));
        self.window = hann_window(len);
        self.scratch = vec![Complex::new(0.0, 0.0); len];
    }

    /// Recompute the spectrum of `buffer`. Empty buffers clear it.
    pub fn update(&mut self, buffer: &[f64]) {
        if buffer.is_empty() {
            self.spectrum.clear();
            return;
        }
        self.prepare(buffer.len());

        for ((slot, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *slot = Complex::new(sample * w, 0.0);
        }
        if let Some(fft) = &self.fft {
            fft.process(&mut self.scratch);
        }

        let len = buffer.len();
        let half = (len / 2).max(1);
        let max_freq = (self.sample_rate / 2.0).max(1.0);
        let min_freq = (self.sample_rate / len as f64).clamp(1.0, max_freq);
        let ratio = max_freq / min_freq;

        self.spectrum.clear();
        for i in 0..self.num_bins {
            let t = if self.num_bins > 1 {
                i as f64 / (self.num_bins - 1) as f64
            } else {
                0.0
            };
            let freq = min_freq * ratio.powf(t);
            let index = ((freq * len as f64 / self.sample_rate).round() as usize).min(half - 1);
            let bin = self.scratch[index];
            let power = bin.norm_sqr().max(POWER_FLOOR);
            self.spectrum.push((freq, 10.0 * power.log10()));
        }
    }

    /// Current spectrum as `(frequency_hz, magnitude_db)` pairs.
    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }

    /// Frequency of the strongest bin, if any.
    pub fn peak_frequency(&self) -> Option<f64> {
        self.spectrum
            .iter()
            .copied()
            .reduce(|a, b| if b.1 > a.1 { b } else { a })
            .map(|(freq, _)| freq)
    }
}

fn hann_window(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            if len > 1 {
                let denom = (len - 1) as f64;
                0.5 * (1.0 - (std::f64::consts::TAU * i as f64 / denom).cos())
            } else {
                1.0
            }
        })
        .collect()
}
