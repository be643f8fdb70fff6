//! State encoding for neural network input.
//!
//! Transforms a position into binary planes from one side's perspective.

use crate::core::{Cell, Color, Square, NUM_SQUARES};
use crate::nn::traits::EncodedState;
use crate::rules::TurnEngine;

/// Encodes game state into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the position from `perspective`'s point of view.
    fn encode(&self, engine: &TurnEngine, perspective: Color) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// Actions are addressed by destination square, so this is 64.
    fn action_space_size(&self) -> usize {
        NUM_SQUARES
    }
}

/// Binary plane encoder.
///
/// Planes, each 8×8 in row-major order (row 0 is Black's home row, the board
/// is never flipped):
/// 0. own pieces
/// 1. opponent pieces
/// 2. empty squares
/// 3. legal destinations (all zero unless `perspective` is to move)
///
/// `with_kings()` appends:
/// 4. own kings
/// 5. opponent kings
#[derive(Clone, Debug, Default)]
pub struct PlaneEncoder {
    kings: bool,
}

impl PlaneEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the two king planes.
    pub fn with_kings(mut self) -> Self {
        self.kings = true;
        self
    }

    fn plane_count(&self) -> usize {
        if self.kings {
            6
        } else {
            4
        }
    }
}

impl StateEncoder for PlaneEncoder {
    fn encode(&self, engine: &TurnEngine, perspective: Color) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.plane_count());

        for square in Square::all() {
            match engine.grid().occupant(square) {
                Cell::Empty => encoded.mark(2, square),
                Cell::Occupied(piece) => {
                    let own = piece.color == perspective;
                    encoded.mark(if own { 0 } else { 1 }, square);
                    if self.kings && piece.is_king() {
                        encoded.mark(if own { 4 } else { 5 }, square);
                    }
                }
            }
        }

        if engine.side_to_move() == Some(perspective) {
            for square in engine.legal_actions().destinations() {
                encoded.mark(3, square);
            }
        }

        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.plane_count(), 8, 8]
    }
}

/// Flat tri-state view: 1 own piece, -1 opponent piece, 0 empty.
#[must_use]
pub fn tri_state(engine: &TurnEngine, perspective: Color) -> [i8; NUM_SQUARES] {
    let mut out = [0i8; NUM_SQUARES];
    for (value, cell) in out.iter_mut().zip(engine.grid().cells()) {
        *value = match cell.color() {
            None => 0,
            Some(color) if color == perspective => 1,
            Some(_) => -1,
        };
    }
    out
}
