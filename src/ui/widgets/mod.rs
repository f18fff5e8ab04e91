//! UI widgets

pub mod card_grid;

pub use card_grid::{CardGrid, GRID_COLS};
