use std::f64::consts::TAU;

/// Evenly spaced time base from `0` to `duration` seconds, both end points included.
pub fn linspace(duration: f64, num_samples: usize) -> Vec<f64> {
    match num_samples {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let step = duration / (n - 1) as f64;
            (0..n).map(|i| i as f64 * step).collect()
        }
    }
}

/// Sine test tone.
///
/// Produces `floor(sample_rate * duration)` samples on a time base that
/// includes both end points, so the last sample lands exactly on `duration`.
pub fn sine_wave(frequency: f64, sample_rate: f64, duration: f64) -> Vec<f64> {
    let num_samples = (sample_rate * duration).max(0.0) as usize;
    linspace(duration, num_samples)
        .into_iter()
        .map(|t| (TAU * frequency * t).sin())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let t = linspace(0.01, 441);
        assert_eq!(t.len(), 441);
        assert_eq!(t[0], 0.0);
        assert!((t[440] - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(1.0, 0).is_empty());
        assert_eq!(linspace(1.0, 1), vec![0.0]);
    }

    #[test]
    fn test_demo_tone_length() {
        let tone = sine_wave(1000.0, 44_100.0, 0.01);
        assert_eq!(tone.len(), 441);
        assert_eq!(tone[0], 0.0);
        assert!(tone.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_sine_reaches_full_scale() {
        let tone = sine_wave(10.0, 4000.0, 1.0);
        let peak = tone.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
        assert!(peak > 0.99);
    }
}
