//! Board layout and occupancy
//!
//! Tiles fill a fixed-width grid in row-major order. Removed tiles stay in
//! place as empty cells so indices never shift.

/// Tiles, grid positions and the board itself
pub mod board;
/// Bit-packed occupied/empty cell mask
pub mod occupancy;

pub use board::{Board, GridPosition, Tile, TileKind};
