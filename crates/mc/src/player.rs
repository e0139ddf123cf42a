//! The Monte Carlo lookahead player.

use std::time::Duration;

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use squares_core::{Card, Cell, Player, PointSystem, Result, SquaresError};

use crate::{
    budget::time_slice, rollout::free_neighbor, Evaluation, McConfig, MonteCarloEvaluator,
    ProximityRollout, RolloutPolicy, SearchState,
};

/// Bounded-time Monte Carlo player.
///
/// For each dealt card, every free cell is evaluated by a batch of rollouts
/// within its share of the game clock, and the card goes to the cell with
/// the best mean rollout score (ties broken uniformly at random).
///
/// Generic over:
/// - `S`: The point system rollouts are scored with
/// - `R`: The random number generator
/// - `P`: The rollout placement policy
pub struct MonteCarloPlayer<S, R, P = ProximityRollout> {
    config: McConfig,
    point_system: S,
    evaluator: MonteCarloEvaluator<P>,
    state: SearchState,
    rng: R,
}

impl<S: PointSystem, R: Rng> MonteCarloPlayer<S, R, ProximityRollout> {
    /// Create a player with proximity-biased rollouts.
    pub fn new(config: McConfig, point_system: S, rng: R) -> Self {
        let policy = ProximityRollout::new(config.neighbor_bounds);
        Self::with_policy(config, point_system, policy, rng)
    }
}

impl<S, R, P> MonteCarloPlayer<S, R, P>
where
    S: PointSystem,
    R: Rng,
    P: RolloutPolicy,
{
    /// Create a player with a custom rollout policy.
    pub fn with_policy(config: McConfig, point_system: S, policy: P, rng: R) -> Self {
        Self {
            evaluator: MonteCarloEvaluator::new(config.depth_limit, policy),
            config,
            point_system,
            state: SearchState::new(),
            rng,
        }
    }

    /// Replace the point system rollouts are scored with.
    pub fn configure(&mut self, point_system: S) {
        self.point_system = point_system;
    }

    pub fn config(&self) -> &McConfig {
        &self.config
    }

    pub fn point_system(&self) -> &S {
        &self.point_system
    }

    /// The player's view of the game so far.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Turn index (0-24) of the next card to be decided.
    pub fn turn(&self) -> usize {
        self.state.placed_count()
    }

    /// Evaluate every free cell for a card that has already been drawn.
    ///
    /// Leaves the state unchanged.
    pub fn evaluate_candidates(&mut self, card: Card, remaining: Duration) -> Result<Vec<Evaluation>> {
        let free = self.state.free_cells().len();
        let slice = time_slice(remaining, free, free);

        // Each evaluation mutates the state it reads candidates from.
        let candidates: Vec<Cell> = self.state.free_cells().to_vec();

        let mut evaluations = Vec::with_capacity(candidates.len());
        for cell in candidates {
            let limit = self.config.rollout_limit(slice);
            let evaluation = self.evaluator.evaluate(
                &mut self.state,
                &self.point_system,
                &mut self.rng,
                card,
                cell,
                limit,
            )?;
            trace!(
                "{} at {}: avg {:.3} over {} rollouts",
                card,
                cell,
                evaluation.average,
                evaluation.samples
            );
            evaluations.push(evaluation);
        }

        debug!(
            "turn {}: {} candidates for {}, slice {:?}",
            self.turn(),
            evaluations.len(),
            card,
            slice
        );
        Ok(evaluations)
    }

    /// Pick the best cell for a drawn card by Monte Carlo search.
    fn search(&mut self, card: Card, remaining: Duration) -> Result<Cell> {
        let evaluations = self.evaluate_candidates(card, remaining)?;

        let mut best_average = f64::NEG_INFINITY;
        let mut best_cells: Vec<Cell> = Vec::new();
        for evaluation in &evaluations {
            if evaluation.average > best_average {
                best_average = evaluation.average;
                best_cells.clear();
            }
            if evaluation.average == best_average {
                best_cells.push(evaluation.cell);
            }
        }

        let chosen = *best_cells
            .choose(&mut self.rng)
            .ok_or(SquaresError::GridFull)?;

        debug!(
            "turn {}: {} -> {} (avg {:.3}, {} tied, {} rollouts)",
            self.turn(),
            card,
            chosen,
            best_average,
            best_cells.len(),
            evaluations.iter().map(|e| e.samples).sum::<usize>()
        );
        Ok(chosen)
    }

    /// Cheap deterministic placement for opening turns: next to a placed
    /// card of the same rank if possible, else the lowest free cell.
    fn opening_cell(&self, card: Card) -> Result<Cell> {
        let grid = self.state.grid();
        self.state
            .placements()
            .anchor(card.rank())
            .and_then(|anchor| free_neighbor(grid, anchor, self.config.neighbor_bounds))
            .or_else(|| grid.empty_cells().next())
            .ok_or(SquaresError::GridFull)
    }
}

impl<S, R, P> Player for MonteCarloPlayer<S, R, P>
where
    S: PointSystem,
    R: Rng,
    P: RolloutPolicy,
{
    fn name(&self) -> String {
        format!("MonteCarloDepth{}", self.evaluator.depth_limit())
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    /// Place `card`, searching unless the move is forced.
    ///
    /// # Errors
    /// `GridFull` after 25 cards, `CardNotAvailable` if `card` was already
    /// dealt this game.
    fn decide(&mut self, card: Card, remaining: Duration) -> Result<Cell> {
        if self.state.free_cells().is_empty() {
            return Err(SquaresError::GridFull);
        }
        self.state.draw(card)?;

        let cell = if self.turn() < self.config.opening_turns {
            let cell = self.opening_cell(card)?;
            debug!("turn {}: {} -> {} (opening)", self.turn(), card, cell);
            cell
        } else if let [only] = self.state.free_cells() {
            *only
        } else {
            self.search(card, remaining)?
        };

        self.state.place(card, cell)?;
        Ok(cell)
    }
}
