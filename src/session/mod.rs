//! Game session: the reset/step contract consumed by a training adapter.
//!
//! - `GameSession`: drives the turn engine, plays the internal side, keeps
//!   episode counters
//! - `MoveSelector`: pluggable move choice for the internal side
//! - `Observation`, `StepOutcome`, `Snapshot`: values handed to the adapter
//!   and the renderer

mod game;
mod observation;
pub mod selector;

pub use game::{GameSession, EXTERNAL, INTERNAL};
pub use observation::{EpisodeStats, Observation, Selection, Snapshot, StepOutcome};
pub use selector::{FirstLegal, MoveSelector, Scripted, UniformRandom};
