//! Scope application: owns the cable and drives the terminal UI

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use rtrb::Consumer;

use cable_sim::{
    dsp::SpectrumAnalyzer,
    scope::{ScopeFrame, ScopeTap},
    Cable, CableConfig,
};

use super::ui::ScopeUi;

/// Frames buffered between the cable and the UI
const FRAME_QUEUE: usize = 8;

pub struct ScopeApp {
    cable: Cable,
    frames: Consumer<ScopeFrame>,
    signal: Vec<f64>,
    analyzer: SpectrumAnalyzer,
}

impl ScopeApp {
    /// Build a cable wired to a scope tap. `config` must have debug mode on,
    /// otherwise transmissions never reach the UI.
    pub fn new(config: CableConfig, signal: Vec<f64>, sample_rate: f64) -> EyreResult<Self> {
        let (tap, frames) = ScopeTap::new(FRAME_QUEUE);
        let cable = Cable::new(config)
            .wrap_err("invalid cable configuration")?
            .with_visualizer(tap);

        Ok(Self {
            cable,
            frames,
            signal,
            analyzer: SpectrumAnalyzer::new(sample_rate),
        })
    }

    /// Transmit once, then hand over to the UI loop until the user quits.
    pub fn run(mut self) -> EyreResult<()> {
        self.cable
            .transmit(&self.signal)
            .wrap_err("transmission failed (try a longer --duration)")?;

        let mut terminal = ratatui::init();
        let mut ui = ScopeUi::new();
        let result = ui.run(&mut terminal, &mut self);
        ratatui::restore();
        result
    }

    /// Send the test signal again (fresh noise realisation).
    pub fn retransmit(&mut self) -> EyreResult<()> {
        self.cable.transmit(&self.signal)?;
        Ok(())
    }

    /// Latest frame from the tap, if one arrived since the last poll.
    pub fn poll_frame(&mut self) -> Option<ScopeFrame> {
        let mut latest = None;
        while let Ok(frame) = self.frames.pop() {
            latest = Some(frame);
        }
        if let Some(frame) = &latest {
            self.analyzer.update(&frame.output);
        }
        latest
    }

    pub fn cable(&self) -> &Cable {
        &self.cable
    }

    pub fn spectrum(&self) -> &[(f64, f64)] {
        self.analyzer.data()
    }
}
