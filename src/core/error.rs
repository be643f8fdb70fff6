//! Recoverable errors.
//!
//! Broken board invariants are not represented here: they can only come from
//! a move generation defect and panic instead.

use thiserror::Error;

use super::square::Square;

/// Errors from the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("game is already over")]
    GameOver,

    #[error("no legal action ends on {0}")]
    IllegalDestination(Square),
}

/// Errors from the game session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("episode is over, call reset first")]
    EpisodeOver,

    #[error("expected 64 square scores, got {0}")]
    ScoreLength(usize),

    #[error("move selector returned no legal action")]
    SelectorDeclined,

    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: i64, col: i64 },

    #[error(transparent)]
    Rules(#[from] RuleError),
}
