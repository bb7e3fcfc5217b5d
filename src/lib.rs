pub mod cable;
pub mod config;
pub mod dsp; // Attenuation, noise, statistics, spectrum
pub mod error;
pub mod logging;
pub mod scope; // Visualization collaborators

pub use cable::{Cable, SignalStats, Transmission, DEFAULT_SIGNAL_SPEED};
pub use config::CableConfig;
pub use error::{CableError, CableResult};
pub use scope::{SignalSnapshot, Visualizer, DEFAULT_PLOT_SAMPLES};
