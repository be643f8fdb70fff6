//! Core types: colors, squares, pieces, actions, RNG, configuration, errors.
//!
//! These are shared by the board, the rules and the session layer and carry
//! no game logic of their own.

pub mod action;
pub mod color;
pub mod config;
pub mod error;
pub mod piece;
pub mod rng;
pub mod square;

pub use action::{Action, ActionRecord, JumpChain, JumpHop, Move, Path};
pub use color::{Color, ColorMap};
pub use config::{RewardConfig, SessionConfig};
pub use error::{RuleError, SessionError};
pub use piece::{Cell, Piece, Rank};
pub use rng::{GameRng, GameRngState};
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};
