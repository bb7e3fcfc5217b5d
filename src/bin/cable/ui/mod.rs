//! TUI module for the cable scope
//!
//! Input waveform above, received waveform below, with a stats bar and the
//! received spectrum.

mod spectrum;
mod stats;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::time::Duration;

use cable_sim::scope::ScopeFrame;

use super::app::ScopeApp;
use spectrum::render_spectrum;
use stats::render_stats;
use waveform::{render_waveform, WaveformStyle};

/// UI state
pub struct ScopeUi {
    /// Latest frame received from the cable
    frame: Option<ScopeFrame>,
    should_quit: bool,
}

impl ScopeUi {
    pub fn new() -> Self {
        Self {
            frame: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal, app: &mut ScopeApp) -> EyreResult<()> {
        while !self.should_quit {
            if let Some(frame) = app.poll_frame() {
                self.frame = Some(frame);
            }

            terminal.draw(|frame| self.render(frame, app))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, app)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, app: &mut ScopeApp) -> EyreResult<()> {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Char(' ') => {
                app.retransmit()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame, app: &ScopeApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Stats bar
                Constraint::Min(8),    // Input
                Constraint::Min(8),    // Output
                Constraint::Length(8), // Spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        render_stats(frame, chunks[0], app.cable());

        if let Some(scope) = &self.frame {
            let snapshot = scope.snapshot();
            // Shared y range so attenuation is visible between the two plots
            let amplitude = cable_sim::dsp::stats::peak(snapshot.input)
                .max(cable_sim::dsp::stats::peak(snapshot.output))
                .max(1e-3);

            render_waveform(
                frame,
                chunks[1],
                snapshot.input,
                snapshot.input_title(),
                amplitude,
                WaveformStyle::Input,
            );
            render_waveform(
                frame,
                chunks[2],
                snapshot.output,
                &snapshot.output_title(),
                amplitude,
                WaveformStyle::Output,
            );
        }

        render_spectrum(frame, chunks[3], app.spectrum());

        let help = Paragraph::new(" [T/Space] Retransmit  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[4]);
    }
}
