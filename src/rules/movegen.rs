//! Legal action generation.
//!
//! For the side to move, produces either every capture chain (when any
//! capture exists anywhere on the board) or every simple move. The grid is
//! only read.
//!
//! ## Capture search
//!
//! Chains are found by a depth-first search from each piece. Every hop that
//! cannot be extended becomes the last hop of one emitted chain, so each
//! chain is a full root-to-leaf path of the search tree.
//!
//! - Men hop forward only and stop extending once they land on their
//!   promotion row.
//! - Kings hop in all four directions. Every landing square reached by any
//!   hop in this search is remembered; a king hop that lands on a square
//!   already reached earlier ends its chain there instead of being extended.
//!   Man hops record their landing squares but are never cut short by this
//!   guard.
//! - A chain never captures the same square twice.
//! - The moving piece stays on its origin square during the search, so no
//!   hop can land back on it.
//!
//! Enumeration order is scan order (rows 0-7, columns 0-7) then direction
//! order, with no sorting.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::Grid;
use crate::core::{Action, Color, JumpChain, JumpHop, Move, Piece, Rank, Square};

/// Every legal action for one side in one position.
///
/// Invariant: when `jumps` is non-empty, `moves` is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegalActions {
    color: Color,
    jumps: Vec<JumpChain>,
    moves: Vec<Move>,
}

impl LegalActions {
    /// Legal actions for `color` on `grid`.
    #[must_use]
    pub fn generate(grid: &Grid, color: Color) -> Self {
        let mut search = ChainSearch::new(grid, color);
        let mut moves = Vec::new();

        for (square, piece) in grid.pieces(color) {
            for &(dr, dc) in piece.directions() {
                if let Some(to) = square.offset(dr, dc) {
                    if grid.occupant(to).is_empty() {
                        moves.push(Move::new(square, to));
                    }
                }
            }
            search.search(piece, square);
        }

        let jumps = search.chains;
        if !jumps.is_empty() {
            moves.clear();
        }

        log::trace!(
            "generated {} jump chains and {} moves for {}",
            jumps.len(),
            moves.len(),
            color
        );

        Self { color, jumps, moves }
    }

    /// No legal actions at all.
    pub(crate) fn none(color: Color) -> Self {
        Self {
            color,
            jumps: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// The side these actions belong to.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn jumps(&self) -> &[JumpChain] {
        &self.jumps
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Flat view of every hop of every chain, in enumeration order.
    pub fn hops(&self) -> impl Iterator<Item = &JumpHop> {
        self.jumps.iter().flat_map(|chain| chain.hops().iter())
    }

    #[must_use]
    pub fn has_captures(&self) -> bool {
        !self.jumps.is_empty()
    }

    /// Number of actions (chains plus moves).
    #[must_use]
    pub fn len(&self) -> usize {
        self.jumps.len() + self.moves.len()
    }

    /// No jumps and no moves: the side to move has lost.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jumps.is_empty() && self.moves.is_empty()
    }

    /// The action at `index` in enumeration order (jumps, then moves).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Action> {
        if index < self.jumps.len() {
            Some(Action::Jump(self.jumps[index].clone()))
        } else {
            self.moves
                .get(index - self.jumps.len())
                .map(|mv| Action::Move(*mv))
        }
    }

    /// All actions in enumeration order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.jumps
            .iter()
            .cloned()
            .map(Action::Jump)
            .chain(self.moves.iter().copied().map(Action::Move))
    }

    /// Distinct final destinations, in enumeration order.
    #[must_use]
    pub fn destinations(&self) -> Vec<Square> {
        let mut out: Vec<Square> = Vec::with_capacity(self.len());
        let finals = self
            .jumps
            .iter()
            .map(JumpChain::destination)
            .chain(self.moves.iter().map(|mv| mv.to));
        for square in finals {
            if !out.contains(&square) {
                out.push(square);
            }
        }
        out
    }

    /// Enumeration index of the first action ending on `destination`.
    #[must_use]
    pub fn index_of(&self, destination: Square) -> Option<usize> {
        self.jumps
            .iter()
            .map(JumpChain::destination)
            .chain(self.moves.iter().map(|mv| mv.to))
            .position(|square| square == destination)
    }

    /// Whether some action ends on `destination`.
    #[must_use]
    pub fn contains_destination(&self, destination: Square) -> bool {
        self.jumps.iter().any(|chain| chain.destination() == destination)
            || self.moves.iter().any(|mv| mv.to == destination)
    }

    /// The first action, in enumeration order, ending on `destination`.
    #[must_use]
    pub fn find(&self, destination: Square) -> Option<Action> {
        if let Some(chain) = self.jumps.iter().find(|chain| chain.destination() == destination) {
            return Some(Action::Jump(chain.clone()));
        }
        self.moves
            .iter()
            .find(|mv| mv.to == destination)
            .map(|mv| Action::Move(*mv))
    }
}

/// Depth-first capture search shared by every piece of one side.
struct ChainSearch<'a> {
    grid: &'a Grid,
    color: Color,
    /// Landing squares reached by any hop so far.
    reached: FxHashSet<Square>,
    /// Hops from the current root to the current node.
    path: SmallVec<[JumpHop; 8]>,
    chains: Vec<JumpChain>,
}

impl<'a> ChainSearch<'a> {
    fn new(grid: &'a Grid, color: Color) -> Self {
        Self {
            grid,
            color,
            reached: FxHashSet::default(),
            path: SmallVec::new(),
            chains: Vec::new(),
        }
    }

    fn search(&mut self, piece: Piece, from: Square) {
        for &(dr, dc) in piece.directions() {
            let Some((captured, to)) = self.hop(from, dr, dc) else {
                continue;
            };
            if self.path.iter().any(|hop| hop.captured == captured) {
                continue;
            }

            let first_visit = self.reached.insert(to);
            let extend = match piece.rank {
                Rank::Man => to.row() != self.color.promotion_row(),
                Rank::King => first_visit,
            };

            self.path.push(JumpHop {
                from,
                captured,
                to,
                continuation: !self.path.is_empty(),
            });

            let emitted = self.chains.len();
            if extend {
                self.search(piece, to);
            }
            if self.chains.len() == emitted {
                self.chains.push(JumpChain::new(&self.path));
            }

            self.path.pop();
        }
    }

    /// Captured and landing squares of a legal hop from `from` along `(dr, dc)`.
    fn hop(&self, from: Square, dr: i8, dc: i8) -> Option<(Square, Square)> {
        let captured = from.offset(dr, dc)?;
        let to = from.offset(2 * dr, 2 * dc)?;
        if self.grid.occupant(captured).is_opponent_of(self.color) && self.grid.occupant(to).is_empty()
        {
            Some((captured, to))
        } else {
            None
        }
    }
}
