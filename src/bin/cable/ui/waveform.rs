//! Waveform chart widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

#[derive(Clone, Copy)]
pub enum WaveformStyle {
    Input,
    Output,
}

impl WaveformStyle {
    fn color(self) -> Color {
        match self {
            WaveformStyle::Input => Color::Blue,
            WaveformStyle::Output => Color::Red,
        }
    }
}

/// Render one series against sample index, y in `[-amplitude, amplitude]`
pub fn render_waveform(
    frame: &mut Frame,
    area: Rect,
    samples: &[f64],
    title: &str,
    amplitude: f64,
    style: WaveformStyle,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL);

    let data: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64, sample))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(style.color()))
        .data(&data);

    let last = samples.len().saturating_sub(1).max(1) as f64;
    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Sample")
                .bounds([0.0, last])
                .labels(vec!["0".to_string(), format!("{}", last as usize)])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("Amplitude")
                .bounds([-amplitude, amplitude])
                .labels(vec![format!("{:.2}", -amplitude), format!("{:.2}", amplitude)])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
