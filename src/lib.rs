//! # rust-draughts
//!
//! English draughts (checkers) on an 8x8 board, built as an environment for
//! reinforcement learning.
//!
//! ## Design Principles
//!
//! 1. **Rules first**: move generation and turn execution know nothing about
//!    training. The session layer is a thin driver on top.
//!
//! 2. **Deterministic**: every random choice goes through a seeded `GameRng`,
//!    so an episode replays exactly from its seed.
//!
//! 3. **Invariants over checks**: legal actions are computed once per turn and
//!    execution only accepts one of them. A broken board invariant panics.
//!
//! ## Modules
//!
//! - `core`: Colors, squares, pieces, actions, RNG, configuration, errors
//! - `board`: The 8x8 grid of cells
//! - `rules`: Move generation (mandatory multi-captures) and the turn engine
//! - `nn`: Plane encoding of positions for neural networks
//! - `session`: Reset/step driver with a pluggable opponent
//!
//! With the `python` feature the crate also builds a Python extension module
//! exposing `CheckersEnv`.

pub mod board;
pub mod core;
pub mod nn;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Cell, Color, ColorMap, GameRng, GameRngState, JumpChain, JumpHop, Move,
    Path, Piece, Rank, RewardConfig, RuleError, SessionConfig, SessionError, Square, BOARD_SIZE,
    NUM_SQUARES,
};

pub use crate::board::Grid;

pub use crate::rules::{Applied, EndReason, GameResult, LegalActions, Phase, TurnEngine};

pub use crate::nn::{EncodedState, PlaneEncoder, StateEncoder};

pub use crate::session::{
    EpisodeStats, FirstLegal, GameSession, MoveSelector, Observation, Scripted, Selection,
    Snapshot, StepOutcome, UniformRandom,
};
