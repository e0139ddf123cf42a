//! Monte Carlo player configuration parameters.

use std::time::{Duration, Instant};

/// How long each candidate cell is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchBudget {
    /// Split the remaining game clock across turns and candidates.
    TimeSlice,

    /// A fixed number of rollouts per candidate, regardless of the clock.
    /// Makes seeded runs reproducible.
    Rollouts(usize),
}

/// Bounds used when probing the four neighbors of a cell during rollouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NeighborBounds {
    /// Any neighbor with row and column in [0, 4].
    #[default]
    Strict,

    /// Reference behavior: the up/left neighbor is only probed when it is not
    /// in row/column 0, and probing stops at the first in-bounds neighbor
    /// whether or not it is free.
    Legacy,
}

/// Stop condition for one candidate's rollout batch.
#[derive(Clone, Copy, Debug)]
pub enum RolloutLimit {
    /// Keep sampling until `slice` has elapsed since `start`.
    Time { start: Instant, slice: Duration },

    /// Run exactly this many rollouts.
    Count(usize),
}

impl RolloutLimit {
    /// Whether a batch that has completed `samples` rollouts should stop.
    ///
    /// Never true before the first rollout.
    pub fn exhausted(&self, samples: usize) -> bool {
        if samples == 0 {
            return false;
        }
        match *self {
            RolloutLimit::Time { start, slice } => start.elapsed() >= slice,
            RolloutLimit::Count(n) => samples >= n,
        }
    }
}

/// Monte Carlo player configuration parameters.
#[derive(Clone, Debug)]
pub struct McConfig {
    /// Simulated plays per rollout, clipped to the remaining free cells.
    pub depth_limit: usize,

    /// Sampling budget per candidate cell.
    pub budget: SearchBudget,

    /// Turns (counted from 0) that skip search and use the cheap
    /// deterministic opening placement. 0 disables the shortcut.
    pub opening_turns: usize,

    /// Neighbor probe bounds for proximity placement.
    pub neighbor_bounds: NeighborBounds,
}

impl Default for McConfig {
    fn default() -> Self {
        Self {
            depth_limit: 2,
            budget: SearchBudget::TimeSlice,
            opening_turns: 0,
            neighbor_bounds: NeighborBounds::Strict,
        }
    }
}

impl McConfig {
    /// Create a new config with the specified rollout depth.
    pub fn with_depth(depth_limit: usize) -> Self {
        Self {
            depth_limit,
            ..Default::default()
        }
    }

    /// Create a config that runs a fixed number of rollouts per candidate.
    pub fn with_rollouts(depth_limit: usize, rollouts: usize) -> Self {
        Self {
            depth_limit,
            budget: SearchBudget::Rollouts(rollouts),
            ..Default::default()
        }
    }

    /// Stop condition for a candidate that was given `slice` of the clock.
    pub fn rollout_limit(&self, slice: Duration) -> RolloutLimit {
        match self.budget {
            SearchBudget::TimeSlice => RolloutLimit::Time {
                start: Instant::now(),
                slice,
            },
            SearchBudget::Rollouts(n) => RolloutLimit::Count(n.max(1)),
        }
    }
}
