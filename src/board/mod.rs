//! Board storage.
//!
//! The grid owns cell occupancy only. Game logic lives in `rules`.

pub mod grid;

pub use grid::Grid;
