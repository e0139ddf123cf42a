//! The 5x5 play grid.

use std::fmt;

use crate::{Card, Cell, NUM_CELLS, SIZE};

/// One row or column of the grid.
pub type Line = [Option<Card>; SIZE];

/// 5x5 matrix of optional cards, row-major.
///
/// ```text
///  0  1  2  3  4
///  5  6  7  8  9
/// 10 11 12 13 14
/// 15 16 17 18 19
/// 20 21 22 23 24
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Card>; NUM_CELLS],
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_CELLS],
        }
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Card> {
        self.cells[cell.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// Put a card in a cell, returning whatever was there.
    #[inline]
    pub fn set(&mut self, cell: Cell, card: Card) -> Option<Card> {
        self.cells[cell.index()].replace(card)
    }

    /// Empty a cell, returning its card.
    #[inline]
    pub fn clear(&mut self, cell: Cell) -> Option<Card> {
        self.cells[cell.index()].take()
    }

    /// Empty every cell.
    pub fn reset(&mut self) {
        self.cells = [None; NUM_CELLS];
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL.into_iter().filter(move |&cell| self.is_empty_at(cell))
    }

    pub fn row(&self, row: usize) -> Line {
        std::array::from_fn(|col| self.cells[row * SIZE + col])
    }

    pub fn col(&self, col: usize) -> Line {
        std::array::from_fn(|row| self.cells[row * SIZE + col])
    }

    /// The ten scoring lines: five rows, then five columns.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..SIZE)
            .map(move |r| self.row(r))
            .chain((0..SIZE).map(move |c| self.col(c)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * SIZE + col] {
                    Some(card) => write!(f, "{}", card)?,
                    None => write!(f, "--")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid(")?;
        fmt::Display::fmt(self, f)?;
        write!(f, ")")
    }
}
