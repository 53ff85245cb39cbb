//! Header rendering: title, clock and current phase.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::colors;

/// Draws the header with the title and the time of the last refresh.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(" ☀ ", Style::default().fg(colors::phase_color(0))),
        Span::styled("HAPPY", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("·", Style::default().fg(colors::MUTED)),
        Span::styled("DAY", Style::default().fg(colors::KEY).bold()),
        Span::styled(
            format!("  v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
    ]);

    let clock = app
        .refreshed_at
        .map(|now| now.format("%A %Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    let phase = match app.active_phase() {
        Some(phase) => Span::styled(
            format!("  ▸ {}", phase.name),
            Style::default().fg(colors::SUCCESS).bold(),
        ),
        None => Span::styled("  ▸ between phases", Style::default().fg(colors::MUTED)),
    };

    let info = Line::from(vec![
        Span::styled(format!(" {clock}"), Style::default().fg(colors::PRIMARY)),
        phase,
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(colors::BORDER));

    frame.render_widget(Paragraph::new(vec![title, info]).block(block), area);
}
