//! Progress through each phase of the day.

use chrono::{NaiveDateTime, TimeDelta};

use crate::phase::PhaseTable;

/// Elapsed and total duration of one phase, in seconds.
///
/// `elapsed_seconds` is negative when the phase has not started yet on the
/// current date, and may briefly exceed `total_seconds` until the next refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub elapsed_seconds: f64,
    pub total_seconds: f64,
}

impl Progress {
    pub fn remaining_seconds(&self) -> f64 {
        self.total_seconds - self.elapsed_seconds
    }

    /// Fraction of the phase that has passed, clamped into `[0, 1]`.
    ///
    /// Only for display; the stored seconds are left as computed.
    pub fn ratio(&self) -> f64 {
        if self.total_seconds <= 0.0 {
            return 0.0;
        }
        (self.elapsed_seconds / self.total_seconds).clamp(0.0, 1.0)
    }

    /// Whether `now` falls inside this phase.
    pub fn is_active(&self) -> bool {
        self.elapsed_seconds >= 0.0 && self.elapsed_seconds < self.total_seconds
    }
}

fn seconds(delta: TimeDelta) -> f64 {
    // Microseconds only overflow for spans of ~292k years.
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

/// Computes one [`Progress`] per phase, in phase order.
///
/// Each phase start is resolved on `now`'s date; the last phase runs until the
/// first phase starts on the next day.
pub fn compute_progress(now: NaiveDateTime, table: &PhaseTable) -> Vec<Progress> {
    let boundaries = table.boundaries(now.date());

    boundaries
        .windows(2)
        .map(|pair| Progress {
            elapsed_seconds: seconds(now - pair[0]),
            total_seconds: seconds(pair[1] - pair[0]),
        })
        .collect()
}

/// Formats a number of seconds as `HH:MM:SS`, with a leading `-` if negative.
pub fn format_duration(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let total = seconds.abs().floor() as u64;
    format!(
        "{sign}{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
