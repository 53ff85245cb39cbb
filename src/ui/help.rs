//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ])),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    let key_style = Style::default().fg(colors::KEY).bold();
    let desc_style = Style::default().fg(Color::White);
    let muted_style = Style::default().fg(colors::MUTED);

    let binding = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled(key, key_style),
            Span::styled(desc, desc_style),
        ])
    };

    Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Each bar shows how much of a phase of the day has passed.",
            muted_style,
        )),
        Line::from(Span::styled(
            "  Bar length is proportional to the phase length.",
            muted_style,
        )),
        Line::from(""),
        binding("r        ", "Refresh now"),
        binding("? or F1  ", "Toggle this help"),
        binding("q or Esc ", "Quit"),
        binding("Ctrl+C   ", "Quit"),
    ])
}
