//! Observation encoding for neural network training.
//!
//! - `EncodedState`: flat tensor plus shape
//! - `StateEncoder`: trait for turning a position into a tensor
//! - `PlaneEncoder`: binary 8×8 planes (own, opponent, empty, legal)

pub mod encoder;
pub mod traits;

pub use encoder::{tri_state, PlaneEncoder, StateEncoder};
pub use traits::EncodedState;
