//! Side identification and per-side data storage.
//!
//! ## Color
//!
//! The two sides of a draughts game. Black starts on rows 0-2 and moves
//! toward increasing rows; White starts on rows 5-7 and moves toward
//! decreasing rows.
//!
//! ## ColorMap
//!
//! Per-side data storage with O(1) access, indexable by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step for a man of this color.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row on which a man of this color is crowned.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Stable index (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Per-color data storage.
///
/// ## Example
///
/// ```
/// use rust_draughts::core::{Color, ColorMap};
///
/// let mut pieces: ColorMap<u8> = ColorMap::with_value(12);
/// pieces[Color::Black] -= 1;
///
/// assert_eq!(pieces[Color::White], 12);
/// assert_eq!(pieces[Color::Black], 11);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    white: T,
    black: T,
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            white: factory(Color::White),
            black: factory(Color::Black),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            white: value.clone(),
            black: value,
        }
    }

    /// Iterate over `(Color, &T)` pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::White, &self.white), (Color::Black, &self.black)].into_iter()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &T {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_direction_and_promotion_row() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
    }

    #[test]
    fn test_color_map_indexing() {
        let mut map = ColorMap::new(|c| c.index() * 10);
        assert_eq!(map[Color::White], 0);
        assert_eq!(map[Color::Black], 10);

        map[Color::White] = 5;
        assert_eq!(map[Color::White], 5);
    }

    #[test]
    fn test_color_map_iter_order() {
        let map = ColorMap::with_value(1u8);
        let colors: Vec<_> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(colors, vec![Color::White, Color::Black]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Color::Black).unwrap();
        let deserialized: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Color::Black);
    }
}
