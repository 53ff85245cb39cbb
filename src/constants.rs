//! Application-wide constants.
//!
//! Centralizes magic numbers and the fixed phase list.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// How often the progress snapshot is recomputed.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// How long an informational status message stays on screen.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// The daily phases as `(name, hour, minute)`, ordered by start time.
pub const PHASES: [(&str, u32, u32); 2] = [("Wake", 7, 0), ("Sleep", 23, 0)];

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height (title line plus clock line plus border).
    pub const HEADER_HEIGHT: u16 = 3;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 2;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
    /// Height of a single phase row (gauge plus caption).
    pub const PHASE_ROW_HEIGHT: u16 = 2;
    /// Gap between the label column and the gauge.
    pub const LABEL_GAP: u16 = 2;
    /// Horizontal margin inside the phases block (one border cell per side).
    pub const PHASES_MARGIN: u16 = 2;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 50;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 50;
}
