//! Application state and logic.
//!
//! This module contains the application state, the refresh schedule, and
//! event handling logic.

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::constants::{layout, STATUS_TIMEOUT};
use crate::event::Action;
use crate::layout::WidthAllocator;
use crate::phase::{Phase, PhaseTable};
use crate::progress::{compute_progress, Progress};

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// The fixed phases of the day
    pub table: PhaseTable,
    /// Progress per phase as of `refreshed_at`; replaced wholesale on refresh
    pub progress: Vec<Progress>,
    /// Wall-clock time of the last refresh
    pub refreshed_at: Option<NaiveDateTime>,
    /// Width of the phase name column
    pub label_width: u16,
    /// Current terminal width
    pub width: u16,
    /// Help visibility
    pub show_help: bool,
    /// Status message to display
    pub status: Option<StatusMessage>,

    allocator: WidthAllocator,
    refresh_interval: Duration,
    next_refresh: Instant,
    status_expires: Option<Instant>,
}

impl App {
    /// Creates the application for `table` in a terminal `width` columns wide.
    ///
    /// The chrome beside each bar is measured here, once, from the label
    /// column and the block borders, so it holds at any terminal width.
    pub fn new(table: PhaseTable, width: u16, refresh_interval: Duration) -> Self {
        let label_width = label_column_width(table.phases());
        let allocator = WidthAllocator::measure(label_width, layout::PHASES_MARGIN);
        debug!(
            width,
            chrome = allocator.chrome_width(),
            "measured phase row chrome"
        );

        let mut app = Self {
            table,
            progress: Vec::new(),
            refreshed_at: None,
            label_width,
            width,
            show_help: false,
            status: None,
            allocator,
            refresh_interval,
            next_refresh: Instant::now(),
            status_expires: None,
        };
        app.check_width();
        app
    }

    /// Recomputes progress as of `now`, replacing the previous snapshot.
    pub fn refresh_at(&mut self, now: NaiveDateTime) {
        self.progress = compute_progress(now, &self.table);
        self.refreshed_at = Some(now);
    }

    /// Refreshes from the local clock if the refresh deadline has passed,
    /// and drops a status message that has been shown long enough.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.status_expires.is_some_and(|expires| now >= expires) {
            self.clear_status();
        }
        if now >= self.next_refresh {
            self.refresh_at(Local::now().naive_local());
            self.next_refresh = now + self.refresh_interval;
        }
    }

    /// How long the main loop may wait for input before the next refresh.
    pub fn time_until_refresh(&self) -> Duration {
        self.next_refresh.saturating_duration_since(Instant::now())
    }

    /// Bar width for each phase at the current terminal width.
    pub fn bar_widths(&self) -> Vec<u16> {
        self.allocator.allocate_widths(self.width, &self.progress)
    }

    /// The phase `now` falls in, if any.
    pub fn active_phase(&self) -> Option<&Phase> {
        self.progress
            .iter()
            .position(Progress::is_active)
            .map(|index| &self.table.phases()[index])
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                info!("quit requested");
                return true;
            }
            Action::Help => {
                self.show_help = !self.show_help;
            }
            Action::Resize(width) => {
                debug!(old = self.width, new = width, "terminal resized");
                self.width = width;
                self.check_width();
            }
            Action::Refresh => {
                self.show_help = false;
                // Pull the deadline in; the next tick recomputes.
                self.next_refresh = Instant::now();
                self.set_status("Refreshed", false);
            }
            Action::Other => {
                // Any other key closes the help overlay and dismisses messages
                self.show_help = false;
                if self.status.as_ref().is_some_and(|status| !status.is_error) {
                    self.clear_status();
                }
            }
        }
        false
    }

    /// Sets a status message. Errors stay until their cause goes away;
    /// anything else expires after a few seconds.
    pub fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
        self.status_expires = if is_error {
            None
        } else {
            Some(Instant::now() + STATUS_TIMEOUT)
        };
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.status_expires = None;
    }

    /// Flags a terminal too narrow to leave any room for the bars, and clears
    /// that error once the terminal is wide enough again.
    fn check_width(&mut self) {
        if self.width <= self.allocator.chrome_width() {
            warn!(
                width = self.width,
                chrome = self.allocator.chrome_width(),
                "terminal too narrow"
            );
            self.set_status("Terminal too narrow for the phase bars", true);
        } else if self.status.as_ref().is_some_and(|status| status.is_error) {
            self.clear_status();
        }
    }
}

/// Longest phase name plus the gap before the bar.
fn label_column_width(phases: &[Phase]) -> u16 {
    let longest = phases
        .iter()
        .map(|phase| phase.name.chars().count())
        .max()
        .unwrap_or(0);
    u16::try_from(longest)
        .unwrap_or(u16::MAX)
        .saturating_add(layout::LABEL_GAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_app(width: u16) -> App {
        let table = PhaseTable::from_starts(&[("Wake", 7, 0), ("Sleep", 23, 0)]).unwrap();
        App::new(table, width, Duration::from_secs(1))
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_label_column_fits_longest_name() {
        let app = make_app(80);
        // "Sleep" plus the gap
        assert_eq!(app.label_width, 5 + layout::LABEL_GAP);
    }

    #[test]
    fn test_refresh_replaces_snapshot() {
        let mut app = make_app(80);
        assert!(app.progress.is_empty());

        app.refresh_at(noon());
        assert_eq!(app.progress.len(), 2);
        assert_eq!(app.progress[0].elapsed_seconds, 18_000.0);
        assert_eq!(app.refreshed_at, Some(noon()));

        let later = noon() + chrono::TimeDelta::hours(1);
        app.refresh_at(later);
        assert_eq!(app.progress.len(), 2);
        assert_eq!(app.progress[0].elapsed_seconds, 21_600.0);
    }

    #[test]
    fn test_first_tick_refreshes_immediately() {
        let mut app = make_app(80);
        app.tick();
        assert_eq!(app.progress.len(), 2);
        assert!(app.refreshed_at.is_some());
        assert!(app.time_until_refresh() <= Duration::from_secs(1));
    }

    #[test]
    fn test_active_phase_at_noon() {
        let mut app = make_app(80);
        app.refresh_at(noon());
        assert_eq!(app.active_phase().map(|p| p.name.as_str()), Some("Wake"));
    }

    #[test]
    fn test_bar_widths_use_measured_chrome() {
        let mut app = make_app(80);
        app.refresh_at(noon());
        let chrome = layout::PHASES_MARGIN + app.label_width;

        let widths = app.bar_widths();
        assert_eq!(widths[0], 80 - chrome);
        assert_eq!(widths[1], (80 - chrome) / 2);
    }

    #[test]
    fn test_resize_updates_width() {
        let mut app = make_app(80);
        app.refresh_at(noon());
        assert!(!app.handle_event(Action::Resize(100)));
        assert_eq!(app.width, 100);

        let chrome = layout::PHASES_MARGIN + app.label_width;
        assert_eq!(app.bar_widths()[0], 100 - chrome);
    }

    #[test]
    fn test_quit_returns_true() {
        let mut app = make_app(80);
        assert!(app.handle_event(Action::Quit));
    }

    #[test]
    fn test_help_toggles_and_other_key_closes() {
        let mut app = make_app(80);
        app.handle_event(Action::Help);
        assert!(app.show_help);
        app.handle_event(Action::Help);
        assert!(!app.show_help);

        app.handle_event(Action::Help);
        app.handle_event(Action::Other);
        assert!(!app.show_help);
    }

    #[test]
    fn test_refresh_action_sets_status() {
        let mut app = make_app(80);
        app.handle_event(Action::Refresh);
        assert_eq!(app.time_until_refresh(), Duration::ZERO);
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.text, "Refreshed");
        assert!(!status.is_error);
    }

    #[test]
    fn test_narrow_start_keeps_chrome_after_resize() {
        let mut app = make_app(5);
        app.refresh_at(noon());
        app.handle_event(Action::Resize(80));

        let room = 80 - layout::PHASES_MARGIN - app.label_width;
        let widths = app.bar_widths();
        assert_eq!(widths[0], room);
        assert_eq!(widths[1], room / 2);
    }

    #[test]
    fn test_narrow_terminal_reports_error_until_widened() {
        let mut app = make_app(5);
        let status = app.status.as_ref().unwrap();
        assert!(status.is_error);
        assert!(status.text.contains("too narrow"));

        // Keys do not dismiss an error whose cause is still there
        app.handle_event(Action::Other);
        assert!(app.status.is_some());

        app.handle_event(Action::Resize(80));
        assert!(app.status.is_none());
    }

    #[test]
    fn test_status_cleared_by_other_key() {
        let mut app = make_app(80);
        app.handle_event(Action::Refresh);
        assert!(app.status.is_some());

        app.handle_event(Action::Other);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_status_expires_on_tick() {
        let mut app = make_app(80);
        app.handle_event(Action::Refresh);
        app.tick();
        assert!(app.status.is_some());

        app.status_expires = Some(Instant::now());
        app.tick();
        assert!(app.status.is_none());
    }
}
