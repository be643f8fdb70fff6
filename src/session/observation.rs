//! Values exchanged with the training adapter and the renderer.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color, ColorMap, Path, SessionError, Square, NUM_SQUARES};
use crate::nn::EncodedState;
use crate::rules::LegalActions;

/// What the externally controlled side submits each step.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    /// Move to this square.
    Square(Square),
    /// One preference score per square (row-major, 64 entries). The highest
    /// scoring legal destination is played; ties go to the destination
    /// enumerated first and scores of illegal squares are ignored.
    Scores(Vec<f32>),
}

impl Selection {
    /// A destination from raw coordinates.
    pub fn at(row: i64, col: i64) -> Result<Self, SessionError> {
        u8::try_from(row)
            .ok()
            .zip(u8::try_from(col).ok())
            .and_then(|(r, c)| Square::try_new(r, c))
            .map(Selection::Square)
            .ok_or(SessionError::OutOfRange { row, col })
    }

    /// The destination this selection asks for, if any is legal.
    ///
    /// A `Square` selection is returned as is; whether it is legal is checked
    /// by the caller.
    pub(crate) fn resolve(&self, legal: &LegalActions) -> Result<Option<Square>, SessionError> {
        match self {
            Selection::Square(square) => Ok(Some(*square)),
            Selection::Scores(scores) => {
                if scores.len() != NUM_SQUARES {
                    return Err(SessionError::ScoreLength(scores.len()));
                }
                let mut best: Option<(Square, f32)> = None;
                for square in legal.destinations() {
                    let score = scores[square.index()];
                    if best.map_or(true, |(_, top)| score > top) {
                        best = Some((square, score));
                    }
                }
                Ok(best.map(|(square, _)| square))
            }
        }
    }
}

impl From<Square> for Selection {
    fn from(square: Square) -> Self {
        Selection::Square(square)
    }
}

/// Observation for the externally controlled side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Plane encoding from the external side's perspective.
    pub state: EncodedState,

    /// Legal destinations for the external side (empty when it is not to move).
    pub legal_destinations: Vec<Square>,

    /// Side to move, `None` once the game is over.
    pub to_move: Option<Color>,
}

impl Observation {
    /// Flat 0/1 mask of legal destinations.
    #[must_use]
    pub fn legal_mask(&self) -> [u8; NUM_SQUARES] {
        let mut mask = [0u8; NUM_SQUARES];
        for square in &self.legal_destinations {
            mask[square.index()] = 1;
        }
        mask
    }
}

/// Result of one `step`.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: f64,
    /// The game reached a terminal phase.
    pub terminated: bool,
    /// The step limit was reached before the game ended.
    pub truncated: bool,
    pub winner: Option<Color>,
    /// The selection was not a legal destination and nothing was played.
    pub rejected: bool,
}

/// Read-only board state for renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All 64 cells, row-major.
    pub cells: Vec<Cell>,
    /// Squares to highlight for the side to move.
    pub legal_destinations: Vec<Square>,
    /// Whether the highlighted destinations are captures.
    pub captures: bool,
    /// Last trail drawn by each side.
    pub last_paths: ColorMap<Option<Path>>,
    pub to_move: Option<Color>,
    pub pieces: ColorMap<u8>,
}

/// Counters owned by the session.
///
/// Increment policy:
/// - `episodes`: +1 on every reset
/// - `steps`: +1 on every accepted step
/// - `total_reward`: every reported reward, reset to zero on reset
/// - `best_score`: on reset, the best `total_reward` of finished episodes
/// - `white_wins` / `black_wins`: +1 once, when an episode reaches a terminal phase
/// - `rejected_streak`: +1 per rejected selection, zero after an accepted one
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub episodes: u32,
    pub steps: u32,
    pub total_reward: f64,
    pub best_score: Option<f64>,
    pub white_wins: u32,
    pub black_wins: u32,
    pub rejected_streak: u32,
}

impl EpisodeStats {
    /// Wins recorded for one side.
    #[must_use]
    pub fn wins(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_wins,
            Color::Black => self.black_wins,
        }
    }
}
