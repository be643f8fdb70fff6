//! Turn engine: applies actions and tracks whose turn it is.
//!
//! The engine owns the grid, the per-side piece counts and the legal actions
//! of the side to move. It moves through the phases
//! `Active(Black) <-> Active(White)` until a `Terminal(result)` phase, which
//! never changes again.
//!
//! After every half-move both terminal checks run:
//! - the opponent has no pieces left, or
//! - the opponent, now to move, has no jumps and no moves.
//!
//! Either way the side that just moved wins.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{Action, Color, ColorMap, Path, RuleError, Square};

use super::movegen::LegalActions;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The loser has no pieces left.
    NoPieces,
    /// The loser is to move and has no legal action.
    NoMoves,
    /// The loser gave up, e.g. through the illegal-selection limit.
    Forfeit,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Color,
    pub reason: EndReason,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        self.winner == color
    }

    #[must_use]
    pub fn loser(&self) -> Color {
        self.winner.opponent()
    }
}

/// State machine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Active(Color),
    Terminal(GameResult),
}

/// What one call to `apply` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    /// The side that moved.
    pub color: Color,
    /// The full action executed.
    pub action: Action,
    /// Opposing pieces removed.
    pub captured: u8,
    /// The moving man was crowned on its landing square.
    pub promoted: bool,
    /// Set when this half-move ended the game.
    pub result: Option<GameResult>,
}

/// Applies actions to the grid and evaluates the game state after each one.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    grid: Grid,
    phase: Phase,
    pieces: ColorMap<u8>,
    legal: LegalActions,
    last_paths: ColorMap<Option<Path>>,
    ply: u32,
}

impl TurnEngine {
    /// Standard opening position, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Grid::standard(), Color::Black)
    }

    /// Start from an arbitrary position.
    ///
    /// If `to_move` has no pieces or no legal action the game is already over.
    #[must_use]
    pub fn from_position(grid: Grid, to_move: Color) -> Self {
        let pieces = ColorMap::new(|color| grid.count(color));
        let legal = LegalActions::generate(&grid, to_move);

        let phase = if pieces[to_move] == 0 {
            Phase::Terminal(GameResult {
                winner: to_move.opponent(),
                reason: EndReason::NoPieces,
            })
        } else if legal.is_empty() {
            Phase::Terminal(GameResult {
                winner: to_move.opponent(),
                reason: EndReason::NoMoves,
            })
        } else {
            Phase::Active(to_move)
        };

        Self {
            grid,
            phase,
            pieces,
            legal,
            last_paths: ColorMap::default(),
            ply: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The side to move, or `None` once the game is over.
    #[must_use]
    pub fn side_to_move(&self) -> Option<Color> {
        match self.phase {
            Phase::Active(color) => Some(color),
            Phase::Terminal(_) => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::Active(_) => None,
            Phase::Terminal(result) => Some(result),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Legal actions of the side to move (empty once the game is over).
    #[must_use]
    pub fn legal_actions(&self) -> &LegalActions {
        &self.legal
    }

    /// Pieces left for one side.
    #[must_use]
    pub fn pieces(&self, color: Color) -> u8 {
        self.pieces[color]
    }

    /// Trail of the last action played by `color`.
    #[must_use]
    pub fn last_path(&self, color: Color) -> Option<&Path> {
        self.last_paths[color].as_ref()
    }

    #[must_use]
    pub fn last_paths(&self) -> &ColorMap<Option<Path>> {
        &self.last_paths
    }

    /// Half-moves played since the position was set up.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Play the first legal action that ends on `destination`.
    ///
    /// Nothing changes when no legal action ends there.
    pub fn apply(&mut self, destination: Square) -> Result<Applied, RuleError> {
        let color = self.side_to_move().ok_or(RuleError::GameOver)?;
        let action = self
            .legal
            .find(destination)
            .ok_or(RuleError::IllegalDestination(destination))?;
        Ok(self.execute(color, action))
    }

    /// Play a specific legal action.
    pub fn apply_action(&mut self, action: &Action) -> Result<Applied, RuleError> {
        let color = self.side_to_move().ok_or(RuleError::GameOver)?;
        if !self.legal.actions().any(|legal| legal == *action) {
            return Err(RuleError::IllegalDestination(action.destination()));
        }
        Ok(self.execute(color, action.clone()))
    }

    /// End the game with `color` losing.
    pub fn forfeit(&mut self, color: Color) -> Result<GameResult, RuleError> {
        if self.is_terminal() {
            return Err(RuleError::GameOver);
        }
        let result = GameResult {
            winner: color.opponent(),
            reason: EndReason::Forfeit,
        };
        self.phase = Phase::Terminal(result);
        self.legal = LegalActions::none(color);
        log::debug!("{color} forfeits");
        Ok(result)
    }

    fn execute(&mut self, color: Color, action: Action) -> Applied {
        let opponent = color.opponent();
        let mut captured = 0u8;

        match &action {
            Action::Move(mv) => {
                let piece = self.grid.relocate(mv.from, mv.to);
                assert_eq!(piece.color, color, "{color} moved a {} piece", piece.color);
            }
            Action::Jump(chain) => {
                for hop in chain.hops() {
                    let victim = self.grid.occupant(hop.captured);
                    assert!(
                        victim.is_opponent_of(color),
                        "hop {hop:?} captures {victim:?} for {color}"
                    );
                    let piece = self.grid.relocate(hop.from, hop.to);
                    assert_eq!(piece.color, color, "{color} jumped with a {} piece", piece.color);
                    self.grid.clear(hop.captured);

                    assert!(self.pieces[opponent] > 0, "{opponent} piece count underflow");
                    self.pieces[opponent] -= 1;
                    captured += 1;
                }
            }
        }

        let promoted = self.grid.promote(action.destination());
        let path = action.path();
        log::debug!(
            "ply {}: {color} {} -> {} capturing {captured}{}",
            self.ply,
            path.origin,
            path.destination,
            if promoted { ", crowned" } else { "" }
        );
        self.last_paths[color] = Some(path);
        self.ply += 1;

        let next = LegalActions::generate(&self.grid, opponent);
        let no_pieces = self.pieces[opponent] == 0;
        let no_moves = next.is_empty();

        let result = if no_pieces {
            Some(GameResult {
                winner: color,
                reason: EndReason::NoPieces,
            })
        } else if no_moves {
            Some(GameResult {
                winner: color,
                reason: EndReason::NoMoves,
            })
        } else {
            None
        };

        self.legal = next;
        self.phase = match result {
            Some(result) => Phase::Terminal(result),
            None => Phase::Active(opponent),
        };

        Applied {
            color,
            action,
            captured,
            promoted,
            result,
        }
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}
