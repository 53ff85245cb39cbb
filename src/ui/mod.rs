//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each area of the screen is rendered by a separate submodule.

mod colors;
mod header;
mod help;
mod phases;
mod status;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::constants::layout;

use header::draw_header;
use help::draw_help_overlay;
use phases::draw_phases;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function - lays out the screen and renders each area.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, phases, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Phase rows
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_phases(frame, chunks[1], app);
    draw_commands_bar(frame, chunks[2]);
    draw_status_bar(frame, chunks[3], app);

    if app.show_help {
        draw_help_overlay(frame);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::phase::PhaseTable;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 20;

    fn make_app() -> App {
        make_app_with_width(WIDTH)
    }

    fn make_app_with_width(width: u16) -> App {
        let table = PhaseTable::from_starts(&[("Wake", 7, 0), ("Sleep", 23, 0)]).unwrap();
        App::new(table, width, Duration::from_secs(1))
    }

    fn render(app: &App) -> String {
        render_sized(app, WIDTH, HEIGHT)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_phase_names_and_times() {
        let mut app = make_app();
        app.refresh_at(
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        );

        let screen = render(&app);
        assert!(screen.contains("Wake"));
        assert!(screen.contains("Sleep"));
        assert!(screen.contains("05:00:00"));
        assert!(screen.contains("12:00:00"));
        assert!(screen.contains("Ready"));
    }

    #[test]
    fn test_renders_placeholder_before_first_refresh() {
        let screen = render(&make_app());
        assert!(screen.contains("Waiting for the first refresh"));
    }

    #[test]
    fn test_renders_help_overlay() {
        let mut app = make_app();
        app.show_help = true;

        let screen = render(&app);
        assert!(screen.contains("Help"));
        assert!(screen.contains("Refresh now"));
    }

    #[test]
    fn test_tiny_terminal_still_shows_label() {
        let mut app = make_app_with_width(10);
        app.refresh_at(
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(3, 0, 0)
                .unwrap(),
        );

        // The widest bar gets the single column left beside the label.
        assert_eq!(app.bar_widths(), vec![1, 0]);
        let screen = render_sized(&app, 10, 10);
        assert!(screen.contains("Wake"));
    }
}
