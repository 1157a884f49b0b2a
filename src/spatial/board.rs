//! Live board state: tiles laid out row-major on a fixed-width grid
//!
//! Tiles are never deleted or moved. Removing a tile only flips its flag, so
//! every index keeps the same row and column for the whole session.

use std::fmt;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::occupancy::OccupancyMask;

/// Opaque tile identifier, unique within one generated board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// Which slot of a composition a tile fills
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// First part: the initial, or the base syllable on three-part tiers
    Head,
    /// Second part: the medial, or the final consonant on three-part tiers
    Tail,
}

/// One placed symbol cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Identifier assigned at generation
    pub id: TileId,
    /// Displayed symbol
    pub symbol: String,
    /// Composition slot
    pub kind: TileKind,
    /// Set once the tile's pair has been committed
    pub removed: bool,
}

impl Tile {
    /// Create a live tile
    pub fn new(id: TileId, symbol: &str, kind: TileKind) -> Self {
        Self {
            id,
            symbol: symbol.to_string(),
            kind,
            removed: false,
        }
    }
}

/// Row and column of a board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
}

impl GridPosition {
    /// Create a position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Ordered tiles paired with a fixed column count
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
    columns: usize,
}

impl Board {
    /// Create a board from generated tiles
    ///
    /// # Errors
    ///
    /// Returns an error if `columns` is zero
    pub fn new(tiles: Vec<Tile>, columns: usize) -> Result<Self> {
        if columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &columns,
                &"board needs at least one column",
            ));
        }

        Ok(Self { tiles, columns })
    }

    /// Fixed column count
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Row count, `ceil(tiles / columns)`
    pub fn rows(&self) -> usize {
        self.tiles.len().div_ceil(self.columns)
    }

    /// Number of tile slots, removed tiles included
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board has no tile slots at all
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in slot order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a slot index
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Whether the slot holds a tile that has not been removed
    pub fn is_live(&self, index: usize) -> bool {
        self.tiles.get(index).is_some_and(|tile| !tile.removed)
    }

    /// Grid position of a slot index
    pub fn position(&self, index: usize) -> Option<GridPosition> {
        if index >= self.tiles.len() {
            return None;
        }
        Some(GridPosition::new(index / self.columns, index % self.columns))
    }

    /// Slot index of a grid cell, if the cell lies inside the grid
    ///
    /// Cells past the last tile of a partial final row are inside the grid
    /// but hold no tile, so the returned index may be `>= len()`.
    pub fn index_of(&self, position: GridPosition) -> Option<usize> {
        if position.row >= self.rows() || position.col >= self.columns {
            return None;
        }
        Some(position.row * self.columns + position.col)
    }

    /// Mark a tile removed; returns whether a live tile was removed
    pub fn remove(&mut self, index: usize) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) if !tile.removed => {
                tile.removed = true;
                true
            }
            _ => false,
        }
    }

    /// Number of tiles not yet removed
    pub fn live_count(&self) -> usize {
        self.tiles.iter().filter(|tile| !tile.removed).count()
    }

    /// Whether every tile has been removed
    pub fn is_cleared(&self) -> bool {
        self.tiles.iter().all(|tile| tile.removed)
    }

    /// Indices of live tiles of one kind showing `symbol`
    pub fn live_indices(&self, kind: TileKind, symbol: &str) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.removed && tile.kind == kind && tile.symbol == symbol)
            .map(|(index, _)| index)
            .collect()
    }

    /// Mask of cells holding live tiles
    pub fn occupancy(&self) -> OccupancyMask {
        let mut mask = OccupancyMask::empty(self.rows() * self.columns);
        for (index, tile) in self.tiles.iter().enumerate() {
            if !tile.removed {
                mask.occupy(index);
            }
        }
        mask
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.tiles.chunks(self.columns).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let cells: Vec<&str> = row
                .iter()
                .map(|tile| if tile.removed { "·" } else { tile.symbol.as_str() })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
