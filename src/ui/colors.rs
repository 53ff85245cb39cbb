//! Color theme definitions for the UI.
//!
//! All color constants are defined here for consistency and easy theme changes.

use ratatui::style::Color;

/// Primary accent color (used for titles, highlights)
pub const PRIMARY: Color = Color::Rgb(56, 189, 248); // Bright cyan
/// Muted text color
pub const MUTED: Color = Color::Rgb(148, 163, 184); // Brighter gray
/// Error/danger color
pub const ERROR: Color = Color::Rgb(251, 113, 133); // Bright rose
/// Success color
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Border color
pub const BORDER: Color = Color::Rgb(129, 140, 248); // Light indigo
/// Key highlight color (for keyboard shortcuts)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Unfilled part of a gauge
pub const TRACK: Color = Color::Rgb(55, 65, 81); // Slate

/// Gauge colors, cycled by phase index
pub const PHASE_COLORS: [Color; 4] = [
    Color::Rgb(251, 191, 36),  // Amber
    Color::Rgb(192, 132, 252), // Purple
    Color::Rgb(52, 211, 153),  // Emerald
    Color::Rgb(56, 189, 248),  // Cyan
];

/// Returns the gauge color for the phase at `index`.
pub fn phase_color(index: usize) -> Color {
    PHASE_COLORS[index % PHASE_COLORS.len()]
}
