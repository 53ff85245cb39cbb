//! Happy Day
//!
//! A terminal widget showing how far through the waking and sleeping parts of
//! the day you are. Run with: happyday

mod app;
mod constants;
mod event;
mod layout;
mod phase;
mod progress;
mod ui;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::App;
use crate::constants::{PHASES, REFRESH_INTERVAL};
use crate::event::EventHandler;
use crate::phase::PhaseTable;

/// Entry point for the application.
///
/// Validates the phase list before touching the terminal so a bad list fails
/// with a readable error.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let table = PhaseTable::from_starts(&PHASES).context("Failed to load the phase list")?;
    info!(phases = table.len(), "phase table loaded");

    // Initialize the terminal
    let terminal = ratatui::init();

    // Run the application
    let result = run_app(terminal, table);

    // Restore the terminal to its original state
    ratatui::restore();

    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Refresh progress if the refresh interval has passed
/// 2. Draw the current UI state
/// 3. Wait for input until the next refresh is due
/// 4. Repeat until the user quits
fn run_app(mut terminal: ratatui::DefaultTerminal, table: PhaseTable) -> Result<()> {
    let width = terminal
        .size()
        .context("Failed to read terminal size")?
        .width;
    let mut app = App::new(table, width, REFRESH_INTERVAL);

    let event_handler = EventHandler::new();

    loop {
        app.tick();

        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        let action = event_handler
            .next(app.time_until_refresh())
            .context("Failed to read terminal events")?;

        if let Some(action) = action {
            if app.handle_event(action) {
                break;
            }
        }
    }

    Ok(())
}
