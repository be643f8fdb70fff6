//! Tensor types handed to neural network code.

use serde::{Deserialize, Serialize};

use crate::core::{Square, NUM_SQUARES};

/// Stack of 8x8 planes, flattened plane by plane in row-major order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data.
    pub tensor: Vec<f32>,

    /// `[planes, 8, 8]`
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// `planes` all-zero planes.
    #[must_use]
    pub fn zeros(planes: usize) -> Self {
        Self {
            tensor: vec![0.0; planes * NUM_SQUARES],
            shape: vec![planes, 8, 8],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    #[must_use]
    pub fn plane_count(&self) -> usize {
        self.tensor.len() / NUM_SQUARES
    }

    /// Value of `square` on `plane`.
    #[must_use]
    pub fn at(&self, plane: usize, square: Square) -> Option<f32> {
        self.tensor.get(plane * NUM_SQUARES + square.index()).copied()
    }

    /// Set `square` on `plane` to 1. Planes past the end are ignored.
    pub fn mark(&mut self, plane: usize, square: Square) {
        if let Some(value) = self.tensor.get_mut(plane * NUM_SQUARES + square.index()) {
            *value = 1.0;
        }
    }

    /// One 64-element plane.
    #[must_use]
    pub fn plane(&self, plane: usize) -> Option<&[f32]> {
        let start = plane * NUM_SQUARES;
        self.tensor.get(start..start + NUM_SQUARES)
    }
}
