//! Daily phases and the validated phase table.
//!
//! A phase is a named segment of the day that starts at a fixed time-of-day and
//! lasts until the next phase starts. The table is cyclic: the phase after the
//! last one is the first phase of the following day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use thiserror::Error;

/// Errors raised while building a phase table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseError {
    /// No phases were configured.
    #[error("invalid configuration: the phase list is empty")]
    Empty,
    /// A phase has a blank name.
    #[error("invalid configuration: phase #{index} has an empty name")]
    BlankName { index: usize },
    /// A phase start is not a valid time-of-day.
    #[error("invalid configuration: phase '{name}' starts at {hour:02}:{minute:02}, which is not a time of day")]
    InvalidTime { name: String, hour: u32, minute: u32 },
    /// Start times do not strictly increase through the day.
    #[error("invalid configuration: phase '{name}' starts at {start}, not after '{previous}'")]
    OutOfOrder {
        name: String,
        start: NaiveTime,
        previous: String,
    },
}

/// A named segment of the day with a fixed daily start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub name: String,
    pub start: NaiveTime,
}

impl Phase {
    /// Builds a phase from an hour and minute, rejecting impossible times.
    pub fn at(name: impl Into<String>, hour: u32, minute: u32) -> Result<Self, PhaseError> {
        let name = name.into();
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(start) => Ok(Self { name, start }),
            None => Err(PhaseError::InvalidTime { name, hour, minute }),
        }
    }
}

/// A non-empty list of phases ordered by start time.
///
/// Once built the table never changes; it is handed explicitly to whoever needs
/// it instead of living in global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTable {
    phases: Vec<Phase>,
}

impl PhaseTable {
    /// Validates `phases` into a table.
    ///
    /// Fails if the list is empty, a name is blank, or start times are not
    /// strictly increasing (equal starts would give a zero-length phase).
    pub fn new(phases: Vec<Phase>) -> Result<Self, PhaseError> {
        if phases.is_empty() {
            return Err(PhaseError::Empty);
        }

        for (index, phase) in phases.iter().enumerate() {
            if phase.name.trim().is_empty() {
                return Err(PhaseError::BlankName { index });
            }
        }

        for pair in phases.windows(2) {
            if pair[1].start <= pair[0].start {
                return Err(PhaseError::OutOfOrder {
                    name: pair[1].name.clone(),
                    start: pair[1].start,
                    previous: pair[0].name.clone(),
                });
            }
        }

        Ok(Self { phases })
    }

    /// Builds a table from `(name, hour, minute)` triples.
    pub fn from_starts(starts: &[(&str, u32, u32)]) -> Result<Self, PhaseError> {
        let phases = starts
            .iter()
            .map(|&(name, hour, minute)| Phase::at(name, hour, minute))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(phases)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Resolves every phase start on `date`, plus the first phase's start on
    /// the following day. The result always has `len() + 1` entries.
    pub fn boundaries(&self, date: NaiveDate) -> Vec<NaiveDateTime> {
        let mut boundaries: Vec<NaiveDateTime> = self
            .phases
            .iter()
            .map(|phase| date.and_time(phase.start))
            .collect();
        // Table is non-empty by construction.
        let first = self.phases[0].start;
        boundaries.push((date + TimeDelta::days(1)).and_time(first));
        boundaries
    }
}
