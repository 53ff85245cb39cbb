//! Phase rows: one labelled gauge per phase.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::constants::layout;
use crate::progress::{format_duration, Progress};

use super::colors;

/// Draws every phase as a row of label, gauge and elapsed/remaining caption.
pub fn draw_phases(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Span::styled(" Today ", Style::default().fg(colors::PRIMARY).bold()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.progress.is_empty() {
        let waiting = Paragraph::new(Span::styled(
            "Waiting for the first refresh...",
            Style::default().fg(colors::MUTED),
        ));
        frame.render_widget(waiting, inner);
        return;
    }

    let mut constraints: Vec<Constraint> = app
        .progress
        .iter()
        .map(|_| Constraint::Length(layout::PHASE_ROW_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let widths = app.bar_widths();
    let phases = app.table.phases().iter().zip(&app.progress).zip(widths);

    for (index, ((phase, progress), bar_width)) in phases.enumerate() {
        let color = colors::phase_color(index);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(app.label_width),
                Constraint::Length(bar_width),
                Constraint::Min(0),
            ])
            .split(rows[index]);

        let mut label_style = Style::default().fg(color);
        if progress.is_active() {
            label_style = label_style.bold();
        }
        let label = Paragraph::new(Line::from(Span::styled(phase.name.as_str(), label_style)));
        frame.render_widget(label, columns[0]);

        let bar_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(columns[1]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(colors::TRACK))
            .ratio(progress.ratio())
            .label(format!("{:.1}%", progress.ratio() * 100.0))
            .use_unicode(true);
        frame.render_widget(gauge, bar_rows[0]);

        frame.render_widget(Paragraph::new(caption(progress)), bar_rows[1]);
    }
}

/// Elapsed and remaining time beneath a gauge.
fn caption(progress: &Progress) -> Line<'static> {
    let value_style = if progress.elapsed_seconds < 0.0 {
        Style::default().fg(colors::MUTED)
    } else {
        Style::default().fg(colors::PRIMARY)
    };

    Line::from(vec![
        Span::styled(format_duration(progress.elapsed_seconds), value_style),
        Span::styled(" elapsed  ", Style::default().fg(colors::MUTED)),
        Span::styled(format_duration(progress.remaining_seconds()), value_style),
        Span::styled(" left", Style::default().fg(colors::MUTED)),
    ])
}
