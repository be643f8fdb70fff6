//! Pieces and cell contents.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Rank of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Moves and captures forward only.
    Man,
    /// Moves and captures in all four diagonal directions.
    King,
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Row deltas this piece may step or jump along.
    #[must_use]
    pub fn directions(self) -> &'static [(i8, i8)] {
        match (self.rank, self.color) {
            (Rank::King, _) => &KING_DIRECTIONS,
            (Rank::Man, Color::White) => &WHITE_MAN_DIRECTIONS,
            (Rank::Man, Color::Black) => &BLACK_MAN_DIRECTIONS,
        }
    }
}

const WHITE_MAN_DIRECTIONS: [(i8, i8); 2] =
    [(Color::White.forward(), -1), (Color::White.forward(), 1)];
const BLACK_MAN_DIRECTIONS: [(i8, i8); 2] =
    [(Color::Black.forward(), 1), (Color::Black.forward(), -1)];
const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Contents of one square. There is no such thing as an empty king.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Color of the occupant, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece.color),
        }
    }

    /// Holds a piece of the other side.
    #[must_use]
    pub fn is_opponent_of(self, color: Color) -> bool {
        self.color() == Some(color.opponent())
    }
}
