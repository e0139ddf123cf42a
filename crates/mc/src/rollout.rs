//! Rollout placement policies.
//!
//! A rollout policy picks a cell for one simulated card. The evaluator does
//! the placing, through the same commit primitive as real moves, so policies
//! only ever read the state.

use rand::Rng;
use squares_core::{Card, Cell, Grid, SIZE};

use crate::{NeighborBounds, SearchState};

/// Chooses where a simulated card goes during a rollout.
pub trait RolloutPolicy {
    /// Pick a free cell for `card`.
    ///
    /// `focus` is the candidate cell of the real card being evaluated.
    /// Returns None only if no cell is free.
    fn choose<R: Rng + ?Sized>(
        &self,
        state: &SearchState,
        card: Card,
        focus: Cell,
        rng: &mut R,
    ) -> Option<Cell>;
}

/// Proximity-biased placement.
///
/// First applicable rule wins:
/// 1. Next to the first placed card of the same rank (suits in canonical
///    order), probing up, down, left, right.
/// 2. Next to the focus cell, with the same probe.
/// 3. A uniformly random free cell.
///
/// Same-rank cards end up sharing rows and columns, which is where pairs,
/// trips and quads come from.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProximityRollout {
    bounds: NeighborBounds,
}

impl ProximityRollout {
    pub fn new(bounds: NeighborBounds) -> Self {
        Self { bounds }
    }
}

impl RolloutPolicy for ProximityRollout {
    fn choose<R: Rng + ?Sized>(
        &self,
        state: &SearchState,
        card: Card,
        focus: Cell,
        rng: &mut R,
    ) -> Option<Cell> {
        let grid = state.grid();

        state
            .placements()
            .anchor(card.rank())
            .and_then(|anchor| free_neighbor(grid, anchor, self.bounds))
            .or_else(|| free_neighbor(grid, focus, self.bounds))
            .or_else(|| random_free_cell(state, rng))
    }
}

/// Uniformly random placement; the baseline proximity placement is measured
/// against.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRollout;

impl RolloutPolicy for UniformRollout {
    fn choose<R: Rng + ?Sized>(
        &self,
        state: &SearchState,
        _card: Card,
        _focus: Cell,
        rng: &mut R,
    ) -> Option<Cell> {
        random_free_cell(state, rng)
    }
}

/// First empty neighbor of `origin`, probing up, down, left, right.
pub fn free_neighbor(grid: &Grid, origin: Cell, bounds: NeighborBounds) -> Option<Cell> {
    let (row, col) = (origin.row(), origin.col());

    // Smallest row/col from which the up/left neighbor is probed.
    let min_origin = match bounds {
        NeighborBounds::Strict => 1,
        NeighborBounds::Legacy => 2,
    };

    let mut probes = [
        (row >= min_origin).then(|| (row - 1, col)),
        (row + 1 < SIZE).then(|| (row + 1, col)),
        (col >= min_origin).then(|| (row, col - 1)),
        (col + 1 < SIZE).then(|| (row, col + 1)),
    ]
    .into_iter()
    .flatten()
    .filter_map(|(r, c)| Cell::from_coords(r, c));

    match bounds {
        NeighborBounds::Strict => probes.find(|&cell| grid.is_empty_at(cell)),
        NeighborBounds::Legacy => probes.next().filter(|&cell| grid.is_empty_at(cell)),
    }
}

/// A uniformly random free cell.
pub fn random_free_cell<R: Rng + ?Sized>(state: &SearchState, rng: &mut R) -> Option<Cell> {
    let free = state.free_cells();
    if free.is_empty() {
        None
    } else {
        Some(free[rng.gen_range(0..free.len())])
    }
}
