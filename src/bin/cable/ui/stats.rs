//! Stats bar widget - cable parameters, delay and last-transmission stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use cable_sim::Cable;

pub fn render_stats(frame: &mut Frame, area: Rect, cable: &Cable) {
    let block = Block::default()
        .title(" cable ")
        .borders(Borders::ALL);

    let config = cable.config();
    let mut spans = vec![
        Span::styled(
            format!(" {} m  ", config.length),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("x{:.6}  ", cable.attenuation_factor()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("delay {:.3e} s  ", cable.propagation_delay()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    match cable.signal_stats() {
        Some(stats) => {
            spans.push(Span::styled(
                format!(
                    "in {:.3}±{:.3}  out {:.3}±{:.3}  ",
                    stats.input_mean, stats.input_std, stats.output_mean, stats.output_std
                ),
                Style::default().fg(Color::Magenta),
            ));
            let snr = if stats.snr_db.is_infinite() {
                "SNR: inf".to_string()
            } else {
                format!("SNR: {:.2} dB", stats.snr_db)
            };
            spans.push(Span::styled(snr, Style::default().fg(Color::Green)));
        }
        None => spans.push(Span::styled(
            "no transmission yet",
            Style::default().fg(Color::Yellow),
        )),
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
