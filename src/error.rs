use crate::model::ParPreset;
use thiserror::Error;

/// A mutation the round refused. State is left exactly as it was and nothing is persisted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("roster is full")]
    RosterFull,
    #[error("player name cannot be empty")]
    EmptyName,
    #[error("stroke count {0} is outside 1-15")]
    StrokeOutOfRange(i64),
    #[error("stroke count '{0}' is not a whole number")]
    StrokeNotANumber(String),
    #[error("par {0} is outside 3-5")]
    ParOutOfRange(i32),
    #[error("par moves one stroke at a time, not {0}")]
    ParStep(i32),
    #[error("course rating '{0}' must be a number from 67.0 to 77.0")]
    RatingOutOfRange(String),
    #[error("course slope '{0}' must be a whole number from 55 to 155")]
    SlopeOutOfRange(String),
    #[error("unknown par preset '{0}'")]
    UnknownPreset(String),
    #[error("preset {preset} does not fit a {holes}-hole round")]
    PresetMismatch { preset: ParPreset, holes: usize },
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorecardError {
    /// Refused input; see `Rejection`.
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),
    /// `index` is zero-based; the message shows it one-based.
    #[error("{what} {} is out of range ({len} available)", .index + 1)]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
    #[error("confirmation required: {0}")]
    ConfirmationRequired(&'static str),
    #[error("round is not complete")]
    RoundIncomplete,
    /// The current round has been finalized; start another before editing.
    #[error("round is already finished")]
    RoundFinished,
    #[error("no round in progress")]
    NoRound,
}

impl ScorecardError {
    /// Validation refusals the caller can simply re-prompt on.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, ScorecardError::Rejected(_))
    }
}
