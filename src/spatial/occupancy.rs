use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset marking which board cells hold a live tile
///
/// Uses 0-based tile indices, matching board slots. Cells past the last tile
/// of a partial final row are never occupied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyMask {
    bits: BitVec,
    cell_count: usize,
}

impl OccupancyMask {
    /// Create a mask with every cell empty
    pub fn empty(cell_count: usize) -> Self {
        Self {
            bits: bitvec![0; cell_count],
            cell_count,
        }
    }

    /// Mark a cell as holding a live tile
    pub fn occupy(&mut self, index: usize) {
        if index < self.cell_count {
            self.bits.set(index, true);
        }
    }

    /// Test whether a cell holds a live tile
    pub fn is_occupied(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of cells tracked
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Test if no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count occupied cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Occupied cell indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for OccupancyMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OccupancyMask({}/{} occupied: {:?})",
            self.count(),
            self.cell_count,
            self.to_vec()
        )
    }
}
