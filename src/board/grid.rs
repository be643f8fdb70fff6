//! The 8×8 grid of cells.
//!
//! The grid stores occupancy only. It does not know whose turn it is, which
//! moves are legal, or how many pieces each side started with. Squares are
//! always on the board by construction, so no bounds checks happen here.

use crate::core::{Cell, Color, Piece, Rank, Square, NUM_SQUARES};

/// Board occupancy, one `Cell` per square in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; NUM_SQUARES],
}

impl Grid {
    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    /// Standard opening: Black men on the dark squares of rows 0-2, White men
    /// on the dark squares of rows 5-7.
    #[must_use]
    pub fn standard() -> Self {
        let mut grid = Self::empty();
        for square in Square::all().filter(|s| s.is_dark()) {
            match square.row() {
                0..=2 => grid.place(square, Piece::man(Color::Black)),
                5..=7 => grid.place(square, Piece::man(Color::White)),
                _ => {}
            }
        }
        grid
    }

    /// A board holding exactly the given pieces.
    #[must_use]
    pub fn with_pieces(pieces: &[(Square, Piece)]) -> Self {
        let mut grid = Self::empty();
        for &(square, piece) in pieces {
            grid.place(square, piece);
        }
        grid
    }

    #[must_use]
    pub fn occupant(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    pub fn place(&mut self, square: Square, piece: Piece) {
        self.cells[square.index()] = Cell::Occupied(piece);
    }

    pub fn clear(&mut self, square: Square) {
        self.cells[square.index()] = Cell::Empty;
    }

    /// Move the piece on `from` to `to`, keeping its rank.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty or `to` is occupied.
    pub fn relocate(&mut self, from: Square, to: Square) -> Piece {
        let Cell::Occupied(piece) = self.occupant(from) else {
            panic!("relocate from empty square {from}");
        };
        assert!(self.occupant(to).is_empty(), "relocate onto occupied square {to}");
        self.clear(from);
        self.place(to, piece);
        piece
    }

    /// Crown the piece on `square` if it stands on its promotion row.
    ///
    /// Returns true when a man was turned into a king.
    pub fn promote(&mut self, square: Square) -> bool {
        match self.occupant(square) {
            Cell::Occupied(piece)
                if piece.rank == Rank::Man && square.row() == piece.color.promotion_row() =>
            {
                self.place(square, Piece::king(piece.color));
                true
            }
            _ => false,
        }
    }

    /// Number of pieces of one color.
    #[must_use]
    pub fn count(&self, color: Color) -> u8 {
        self.cells
            .iter()
            .filter(|cell| cell.color() == Some(color))
            .count() as u8
    }

    /// Squares holding pieces of one color, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.occupant(square) {
            Cell::Occupied(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; NUM_SQUARES] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text diagram: `b`/`w` for men, `B`/`W` for kings, `.` for empty squares.
/// Row 0 is printed first.
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            let c = match cell.piece() {
                None => '.',
                Some(Piece { color: Color::Black, rank: Rank::Man }) => 'b',
                Some(Piece { color: Color::Black, rank: Rank::King }) => 'B',
                Some(Piece { color: Color::White, rank: Rank::Man }) => 'w',
                Some(Piece { color: Color::White, rank: Rank::King }) => 'W',
            };
            write!(f, "{c}")?;
            if index % 8 == 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup() {
        let grid = Grid::standard();

        assert_eq!(grid.count(Color::Black), 12);
        assert_eq!(grid.count(Color::White), 12);

        for (square, piece) in grid.pieces(Color::Black) {
            assert!(square.row() <= 2);
            assert!(square.is_dark());
            assert_eq!(piece.rank, Rank::Man);
        }
        for (square, piece) in grid.pieces(Color::White) {
            assert!(square.row() >= 5);
            assert!(square.is_dark());
            assert_eq!(piece.rank, Rank::Man);
        }
        for col in 0..8 {
            assert!(grid.occupant(Square::new(3, col)).is_empty());
            assert!(grid.occupant(Square::new(4, col)).is_empty());
        }
    }

    #[test]
    fn test_relocate_keeps_rank() {
        let mut grid = Grid::with_pieces(&[(Square::new(3, 3), Piece::king(Color::White))]);

        let moved = grid.relocate(Square::new(3, 3), Square::new(4, 4));

        assert!(moved.is_king());
        assert!(grid.occupant(Square::new(3, 3)).is_empty());
        assert_eq!(
            grid.occupant(Square::new(4, 4)),
            Cell::Occupied(Piece::king(Color::White))
        );
    }

    #[test]
    #[should_panic(expected = "relocate from empty square")]
    fn test_relocate_from_empty_panics() {
        let mut grid = Grid::empty();
        grid.relocate(Square::new(3, 3), Square::new(4, 4));
    }

    #[test]
    fn test_promote_only_on_promotion_row() {
        let mut grid = Grid::with_pieces(&[
            (Square::new(0, 1), Piece::man(Color::White)),
            (Square::new(7, 0), Piece::man(Color::Black)),
            (Square::new(1, 0), Piece::man(Color::White)),
            (Square::new(0, 3), Piece::man(Color::Black)),
        ]);

        assert!(grid.promote(Square::new(0, 1)));
        assert!(grid.promote(Square::new(7, 0)));
        assert!(!grid.promote(Square::new(1, 0)));
        // A black man on row 0 is on its own home row.
        assert!(!grid.promote(Square::new(0, 3)));
        // Already a king.
        assert!(!grid.promote(Square::new(0, 1)));
        assert!(!grid.promote(Square::new(4, 4)));

        assert!(grid.occupant(Square::new(0, 1)).piece().unwrap().is_king());
        assert!(grid.occupant(Square::new(7, 0)).piece().unwrap().is_king());
        assert!(!grid.occupant(Square::new(1, 0)).piece().unwrap().is_king());
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_pieces(&[
            (Square::new(0, 1), Piece::king(Color::White)),
            (Square::new(7, 6), Piece::man(Color::Black)),
        ]);
        let text = grid.to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], ".W......");
        assert_eq!(lines[7], "......b.");
    }
}
