//! Visualization collaborators.
//!
//! A [`Cable`](crate::Cable) in debug mode hands every transmission to a
//! [`Visualizer`] as a borrowed [`SignalSnapshot`]. The core never waits on
//! the visualizer or reads anything back from it, so the numeric path stays
//! testable without any renderer.
//!
//! - [`TraceScope`] logs a one-line summary per series through `tracing`.
//! - `ScopeTap` (feature `rtrb`) copies the snapshot into a lock-free ring
//!   buffer for a UI thread to draw.
//! - Any `FnMut(&SignalSnapshot<'_>) + Send` closure works as a visualizer.

#[cfg(feature = "rtrb")]
mod tap;

#[cfg(feature = "rtrb")]
pub use tap::{ScopeFrame, ScopeTap};

use crate::dsp::stats;

/// Default number of samples per series handed to a visualizer.
pub const DEFAULT_PLOT_SAMPLES: usize = 1000;

/// Borrowed view of the most recent transmission, truncated for plotting.
#[derive(Debug, Clone, Copy)]
pub struct SignalSnapshot<'a> {
    /// Transmitter side, at most `max_samples` long
    pub input: &'a [f64],
    /// Receiver side, at most `max_samples` long
    pub output: &'a [f64],
    /// Attenuation coefficient of the cable
    pub attenuation: f64,
    /// Noise standard deviation of the cable
    pub noise_level: f64,
}

impl<'a> SignalSnapshot<'a> {
    /// Build a snapshot, keeping only the first `max_samples` of each series.
    pub fn truncated(
        input: &'a [f64],
        output: &'a [f64],
        max_samples: usize,
        attenuation: f64,
        noise_level: f64,
    ) -> Self {
        Self {
            input: &input[..input.len().min(max_samples)],
            output: &output[..output.len().min(max_samples)],
            attenuation,
            noise_level,
        }
    }

    pub fn input_title(&self) -> &'static str {
        "Input Signal (Transmitter)"
    }

    pub fn output_title(&self) -> String {
        format!(
            "Output Signal (Receiver) - Attenuation={}, Noise={}",
            self.attenuation, self.noise_level
        )
    }
}

/// Receives transmissions from a cable in debug mode.
pub trait Visualizer: Send {
    fn render(&mut self, snapshot: &SignalSnapshot<'_>);
}

impl<F> Visualizer for F
where
    F: FnMut(&SignalSnapshot<'_>) + Send,
{
    fn render(&mut self, snapshot: &SignalSnapshot<'_>) {
        self(snapshot)
    }
}

/// Logs peak and RMS of each series at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceScope;

impl Visualizer for TraceScope {
    fn render(&mut self, snapshot: &SignalSnapshot<'_>) {
        tracing::debug!(
            samples = snapshot.input.len(),
            input_peak = stats::peak(snapshot.input),
            input_rms = stats::rms(snapshot.input),
            "{}",
            snapshot.input_title()
        );
        tracing::debug!(
            samples = snapshot.output.len(),
            output_peak = stats::peak(snapshot.output),
            output_rms = stats::rms(snapshot.output),
            "{}",
            snapshot.output_title()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation() {
        let input = vec![1.0; 1500];
        let output = vec![0.5; 1500];
        let snapshot = SignalSnapshot::truncated(&input, &output, DEFAULT_PLOT_SAMPLES, 0.1, 0.01);
        assert_eq!(snapshot.input.len(), 1000);
        assert_eq!(snapshot.output.len(), 1000);
    }

    #[test]
    fn test_short_series_kept_whole() {
        let input = [1.0, 2.0];
        let output = [0.5, 1.0];
        let snapshot = SignalSnapshot::truncated(&input, &output, 1000, 0.1, 0.0);
        assert_eq!(snapshot.input, &input);
        assert_eq!(snapshot.output, &output);
    }

    #[test]
    fn test_output_title_names_configuration() {
        let snapshot = SignalSnapshot::truncated(&[], &[], 10, 0.1, 0.05);
        assert_eq!(
            snapshot.output_title(),
            "Output Signal (Receiver) - Attenuation=0.1, Noise=0.05"
        );
    }

    #[test]
    fn test_closure_visualizer() {
        let mut seen = Vec::new();
        {
            let mut vis = |s: &SignalSnapshot<'_>| seen.push(s.input.len());
            let input = [1.0; 4];
            Visualizer::render(&mut vis, &SignalSnapshot::truncated(&input, &input, 3, 0.0, 0.0));
        }
        assert_eq!(seen, vec![3]);
    }
}
