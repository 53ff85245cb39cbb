//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Recompute progress immediately
    Refresh,
    /// Show or hide help
    Help,
    /// The terminal was resized to the given width
    Resize(u16),
    /// A key with no binding (closes the help overlay)
    Other,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Upper bound on how long a single poll may block
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Blocks for at most `wait`, capped at the handler's poll timeout, so the
    /// caller can wake up in time for its next refresh.
    pub fn next(&self, wait: Duration) -> io::Result<Option<Action>> {
        if event::poll(wait.min(self.poll_timeout))? {
            return Ok(self.event_to_action(event::read()?));
        }
        Ok(None)
    }

    /// Converts any terminal event to an action.
    pub(crate) fn event_to_action(&self, event: Event) -> Option<Action> {
        match event {
            // Only process key press events (not releases)
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                Some(self.key_to_action(key_event))
            }
            Event::Resize(width, _) => Some(Action::Resize(width)),
            _ => None,
        }
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('?') | KeyCode::F(1) => Action::Help,
            _ => Action::Other,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
