//! Action representation: simple moves and capture chains.
//!
//! A turn is either a single diagonal step (`Move`) or a full capture chain
//! (`JumpChain`). A chain is a self-contained list of hops from one root to
//! one leaf of the capture search; executing it never depends on what else
//! was generated alongside it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::square::Square;

/// A single diagonal step onto an adjacent empty square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// One hop of a capture chain.
///
/// `continuation` is false for the first hop of a chain and true for every
/// later hop, whose `from` equals the previous hop's `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpHop {
    pub from: Square,
    pub captured: Square,
    pub to: Square,
    pub continuation: bool,
}

/// A complete capture turn: one or more linked hops.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JumpChain {
    /// SmallVec keeps typical chains (1-4 hops) off the heap.
    hops: SmallVec<[JumpHop; 4]>,
}

impl JumpChain {
    /// Build a chain from its hops.
    ///
    /// # Panics
    ///
    /// Panics if `hops` is empty or the hops are not linked.
    #[must_use]
    pub fn new(hops: &[JumpHop]) -> Self {
        assert!(!hops.is_empty(), "a jump chain needs at least one hop");
        assert!(!hops[0].continuation, "first hop must start a chain");
        for pair in hops.windows(2) {
            assert!(
                pair[1].continuation && pair[1].from == pair[0].to,
                "hops are not linked: {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }
        Self {
            hops: SmallVec::from_slice(hops),
        }
    }

    #[must_use]
    pub fn hops(&self) -> &[JumpHop] {
        &self.hops
    }

    /// Number of hops, equal to the number of pieces captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Always false; chains have at least one hop.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    #[must_use]
    pub fn origin(&self) -> Square {
        self.hops[0].from
    }

    /// Final landing square.
    #[must_use]
    pub fn destination(&self) -> Square {
        self.hops[self.hops.len() - 1].to
    }

    /// Captured squares in hop order.
    pub fn captured(&self) -> impl Iterator<Item = Square> + '_ {
        self.hops.iter().map(|hop| hop.captured)
    }
}

/// A complete turn for the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Move(Move),
    Jump(JumpChain),
}

impl Action {
    #[must_use]
    pub fn origin(&self) -> Square {
        match self {
            Action::Move(mv) => mv.from,
            Action::Jump(chain) => chain.origin(),
        }
    }

    #[must_use]
    pub fn destination(&self) -> Square {
        match self {
            Action::Move(mv) => mv.to,
            Action::Jump(chain) => chain.destination(),
        }
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, Action::Jump(_))
    }

    /// Number of pieces this action removes.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        match self {
            Action::Move(_) => 0,
            Action::Jump(chain) => chain.len(),
        }
    }

    /// The trail this action draws on the board.
    #[must_use]
    pub fn path(&self) -> Path {
        match self {
            Action::Move(mv) => Path {
                origin: mv.from,
                captured: SmallVec::new(),
                destination: mv.to,
            },
            Action::Jump(chain) => Path {
                origin: chain.origin(),
                captured: chain.captured().collect(),
                destination: chain.destination(),
            },
        }
    }
}

/// Executed trail: origin, captured squares in order, final destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub origin: Square,
    pub captured: SmallVec<[Square; 4]>,
    pub destination: Square,
}

/// A recorded action with the side that played it.
///
/// Used for replay, debugging and deterministic test sequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that moved.
    pub color: Color,

    /// The action taken.
    pub action: Action,

    /// Half-move number, starting at 0 for the opening move.
    pub ply: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(from: (u8, u8), captured: (u8, u8), to: (u8, u8), continuation: bool) -> JumpHop {
        JumpHop {
            from: Square::new(from.0, from.1),
            captured: Square::new(captured.0, captured.1),
            to: Square::new(to.0, to.1),
            continuation,
        }
    }

    #[test]
    fn test_chain_endpoints() {
        let chain = JumpChain::new(&[
            hop((6, 2), (5, 3), (4, 4), false),
            hop((4, 4), (3, 5), (2, 6), true),
        ]);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.origin(), Square::new(6, 2));
        assert_eq!(chain.destination(), Square::new(2, 6));
        assert_eq!(
            chain.captured().collect::<Vec<_>>(),
            vec![Square::new(5, 3), Square::new(3, 5)]
        );
    }

    #[test]
    #[should_panic(expected = "hops are not linked")]
    fn test_chain_rejects_unlinked_hops() {
        let _ = JumpChain::new(&[
            hop((6, 2), (5, 3), (4, 4), false),
            hop((4, 0), (3, 1), (2, 2), true),
        ]);
    }

    #[test]
    fn test_action_path() {
        let mv = Action::Move(Move::new(Square::new(5, 0), Square::new(4, 1)));
        let path = mv.path();
        assert_eq!(path.origin, Square::new(5, 0));
        assert!(path.captured.is_empty());
        assert_eq!(path.destination, Square::new(4, 1));
        assert_eq!(mv.capture_count(), 0);

        let jump = Action::Jump(JumpChain::new(&[hop((4, 4), (3, 3), (2, 2), false)]));
        assert!(jump.is_capture());
        assert_eq!(jump.path().captured.as_slice(), &[Square::new(3, 3)]);
        assert_eq!(jump.destination(), Square::new(2, 2));
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Jump(JumpChain::new(&[hop((4, 4), (3, 3), (2, 2), false)]));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
