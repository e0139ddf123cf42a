//! Scoring: the `PointSystem` contract and the standard hand tables.

use crate::{Grid, HandCategory};

/// Scores a grid.
///
/// Implementations must accept partially filled grids: empty cells simply
/// contribute nothing to the line they belong to. Monte Carlo rollouts score
/// partial grids all the time.
pub trait PointSystem {
    fn score(&self, grid: &Grid) -> i32;
}

/// Any `Fn(&Grid) -> i32` closure is a point system.
impl<F> PointSystem for F
where
    F: Fn(&Grid) -> i32,
{
    fn score(&self, grid: &Grid) -> i32 {
        self(grid)
    }
}

/// Point system that values each of the ten lines by its hand category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandTable {
    values: [i32; HandCategory::COUNT],
}

impl HandTable {
    /// Build a table from per-category values, weakest category first.
    pub const fn from_values(values: [i32; HandCategory::COUNT]) -> Self {
        Self { values }
    }

    /// American scoring.
    pub const fn american() -> Self {
        Self::from_values([0, 2, 5, 10, 15, 20, 25, 50, 75, 100])
    }

    /// British scoring. Straights outrank flushes.
    pub const fn british() -> Self {
        Self::from_values([0, 1, 3, 6, 12, 5, 10, 16, 30, 30])
    }

    #[inline]
    pub fn value(&self, category: HandCategory) -> i32 {
        self.values[category.index()]
    }
}

impl Default for HandTable {
    fn default() -> Self {
        Self::american()
    }
}

impl PointSystem for HandTable {
    fn score(&self, grid: &Grid) -> i32 {
        grid.lines()
            .map(|line| self.value(HandCategory::classify(&line)))
            .sum()
    }
}
