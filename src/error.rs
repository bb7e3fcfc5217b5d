//! Error types for cable construction and transmission.

use thiserror::Error;

/// Result type for cable operations
pub type CableResult<T> = Result<T, CableError>;

/// Errors that can occur while configuring or driving a cable
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CableError {
    /// A configuration field is negative or not a finite number
    #[error("invalid configuration: {field} = {value} (must be finite and non-negative)")]
    InvalidConfiguration { field: &'static str, value: f64 },

    /// `transmit` was handed an empty sample sequence
    #[error("invalid input: cannot transmit an empty signal")]
    EmptySignal,

    /// Propagation speed must be a positive, finite number of metres per second
    #[error("invalid signal speed: {0} m/s")]
    InvalidSignalSpeed(f64),

    /// The Gaussian noise distribution could not be built
    #[error("noise source error: {0}")]
    Noise(String),
}

impl CableError {
    /// True for errors caused by the samples or arguments of a single call,
    /// as opposed to a bad cable configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(self, CableError::EmptySignal | CableError::InvalidSignalSpeed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = CableError::InvalidConfiguration {
            field: "length",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: length = -1 (must be finite and non-negative)"
        );
    }

    #[test]
    fn test_input_errors() {
        assert!(CableError::EmptySignal.is_input_error());
        assert!(CableError::InvalidSignalSpeed(0.0).is_input_error());
        assert!(!CableError::Noise("bad".into()).is_input_error());
    }
}
