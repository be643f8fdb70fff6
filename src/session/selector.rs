//! Move selection for the internally controlled side.
//!
//! The session never hard-codes how its own side picks a move; it asks a
//! `MoveSelector`. Swapping the selector gives seeded random play, fully
//! scripted games for tests, or a policy-driven opponent.

use std::collections::VecDeque;

use crate::board::Grid;
use crate::core::{GameRng, Square};
use crate::rules::LegalActions;

/// Chooses one of the legal actions for the side to move.
pub trait MoveSelector: Send {
    /// Return an index into `legal` (enumeration order: jumps, then moves).
    ///
    /// Returns `None` if the selector declines to move.
    fn select(&mut self, grid: &Grid, legal: &LegalActions, rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random selection among all legal actions.
///
/// Mandatory capture is respected because `legal` holds only captures
/// whenever one exists.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl MoveSelector for UniformRandom {
    fn select(&mut self, _grid: &Grid, legal: &LegalActions, rng: &mut GameRng) -> Option<usize> {
        rng.pick(legal.len())
    }
}

/// Always plays the first legal action.
#[derive(Clone, Debug, Default)]
pub struct FirstLegal;

impl MoveSelector for FirstLegal {
    fn select(&mut self, _grid: &Grid, legal: &LegalActions, _rng: &mut GameRng) -> Option<usize> {
        if legal.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

/// Plays a fixed list of destinations in order.
///
/// Each call consumes one destination and plays the first legal action
/// ending there. A destination that is not legal, or an exhausted script,
/// makes the selector decline.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    destinations: VecDeque<Square>,
}

impl Scripted {
    pub fn new(destinations: impl IntoIterator<Item = Square>) -> Self {
        Self {
            destinations: destinations.into_iter().collect(),
        }
    }

    /// Destinations not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.destinations.len()
    }
}

impl MoveSelector for Scripted {
    fn select(&mut self, _grid: &Grid, legal: &LegalActions, _rng: &mut GameRng) -> Option<usize> {
        let destination = self.destinations.pop_front()?;
        legal.index_of(destination)
    }
}
