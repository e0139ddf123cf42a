use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SquaresError;

/// Number of rows/columns in the square grid
pub const SIZE: usize = 5;

/// Number of cells in the grid
pub const NUM_CELLS: usize = SIZE * SIZE;

/// A grid cell (0-24) using row-major ordering.
/// (0, 0)=0, (0, 1)=1, ..., (0, 4)=4, (1, 0)=5, ..., (4, 4)=24
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(pub(crate) u8);

impl Cell {
    /// Every cell in row-major order
    pub const ALL: [Cell; NUM_CELLS] = {
        let mut cells = [Cell(0); NUM_CELLS];
        let mut i = 0;
        while i < NUM_CELLS {
            cells[i] = Cell(i as u8);
            i += 1;
        }
        cells
    };

    /// Creates a cell from index, returning None if out of range
    #[inline]
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_CELLS {
            Some(Cell(index as u8))
        } else {
            None
        }
    }

    /// Creates a cell from row (0-4) and column (0-4)
    #[inline]
    pub const fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Cell((row * SIZE + col) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.0 as usize / SIZE
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.0 as usize % SIZE
    }

    /// Returns the raw index (0-24)
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl TryFrom<usize> for Cell {
    type Error = SquaresError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Cell::new(index).ok_or(SquaresError::InvalidCell(index))
    }
}
