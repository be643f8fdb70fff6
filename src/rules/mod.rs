//! English draughts rules.
//!
//! - `movegen`: legal moves and capture chains for the side to move
//! - `engine`: applies actions, promotes, alternates turns, detects the end
//!   of the game

pub mod engine;
pub mod movegen;

pub use engine::{Applied, EndReason, GameResult, Phase, TurnEngine};
pub use movegen::LegalActions;
