//! cable - analog cable transmission demo
//!
//! Run with: cargo run -- --noise 0.05
//! Add --scope for the terminal oscilloscope.

mod app;
mod ui;

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use app::ScopeApp;
use cable_sim::{
    dsp::oscillator::sine_wave,
    logging::{init_logging, LogConfig, LogLevel},
    Cable, CableConfig,
};

#[derive(Parser, Debug)]
#[command(name = "cable")]
#[command(version, about = "Send a test tone through a simulated analog cable")]
struct Cli {
    /// Cable length in metres
    #[arg(long, default_value_t = 100.0)]
    length: f64,

    /// Attenuation coefficient (per 100 m)
    #[arg(long, default_value_t = 0.1)]
    attenuation: f64,

    /// Noise standard deviation (0 disables noise)
    #[arg(long, default_value_t = 0.05)]
    noise: f64,

    /// Fixed RNG seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Test tone frequency in Hz
    #[arg(long, default_value_t = 1000.0)]
    frequency: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44_100.0)]
    sample_rate: f64,

    /// Tone duration in seconds
    #[arg(long, default_value_t = 0.01)]
    duration: f64,

    /// Log each transmission through the trace visualizer
    #[arg(long)]
    debug: bool,

    /// Open the terminal oscilloscope after the first transmission
    #[arg(long)]
    scope: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn cable_config(&self) -> CableConfig {
        let config = CableConfig::new()
            .length(self.length)
            .attenuation(self.attenuation)
            .noise_level(self.noise)
            .debug_mode(self.debug || self.scope);
        match self.seed {
            Some(seed) => config.seed(seed),
            None => config,
        }
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // stderr shares the terminal with the scope, so keep it to errors there.
    // --debug without -v still needs debug-level events for the trace scope.
    let log_config = if cli.scope {
        LogConfig::quiet()
    } else if cli.debug {
        LogConfig::default().level(LogLevel::from_verbosity(cli.verbose.max(2)))
    } else {
        LogConfig::default().level(LogLevel::from_verbosity(cli.verbose))
    };
    init_logging(&log_config);

    let signal = sine_wave(cli.frequency, cli.sample_rate, cli.duration);

    if cli.scope {
        return ScopeApp::new(cli.cable_config(), signal, cli.sample_rate)?.run();
    }

    let mut cable = Cable::new(cli.cable_config()).wrap_err("invalid cable configuration")?;

    println!("{}", "=".repeat(60));
    println!("Cable Transmission Demo");
    println!("{}", "=".repeat(60));
    println!();
    println!("{}", cable);

    println!();
    println!("Transmitting signal:");
    println!("  Number of samples: {}", signal.len());
    println!("  Frequency: {} Hz", cli.frequency);

    let received = cable
        .transmit(&signal)
        .wrap_err("transmission failed (try a longer --duration)")?;

    println!();
    println!("Received signal:");
    println!("  Number of samples: {}", received.len());
    println!("  Propagation delay: {:.9} seconds", cable.propagation_delay());

    if let Some(stats) = cable.signal_stats() {
        println!();
        println!("Signal statistics:");
        println!("  Input signal mean: {:.6}", stats.input_mean);
        println!("  Output signal mean: {:.6}", stats.output_mean);
        println!("  Input std / Output std: {:.6} / {:.6}", stats.input_std, stats.output_std);
        println!("  SNR: {:.2} dB", stats.snr_db);
    }

    println!();
    println!("{}", "=".repeat(60));
    Ok(())
}
