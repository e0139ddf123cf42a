//! Monte Carlo evaluation of one candidate cell.
//!
//! The real card is tentatively placed in the candidate cell, then random
//! rollouts are run from that position until the limit is reached. Each
//! rollout draws cards from the undrawn suffix of the deck, places them with
//! the rollout policy, scores the (possibly partial) grid, and undoes every
//! draw and placement in reverse. Nothing is ever copied.

use rand::Rng;
use squares_core::{Card, Cell, PointSystem, Result};

use crate::{RolloutLimit, RolloutPolicy, SearchState};

/// Result of evaluating one candidate cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// The candidate cell.
    pub cell: Cell,

    /// Mean rollout score.
    pub average: f64,

    /// Number of rollouts run. Always at least 1.
    pub samples: usize,
}

/// Runs rollout batches for candidate cells.
#[derive(Clone, Debug)]
pub struct MonteCarloEvaluator<P> {
    /// Simulated plays per rollout, clipped to the free cells left.
    depth_limit: usize,

    policy: P,
}

impl<P: RolloutPolicy> MonteCarloEvaluator<P> {
    /// Create a new evaluator.
    ///
    /// # Arguments
    /// * `depth_limit` - Simulated plays per rollout
    /// * `policy` - Placement policy for simulated cards
    pub fn new(depth_limit: usize, policy: P) -> Self {
        Self {
            depth_limit,
            policy,
        }
    }

    pub fn depth_limit(&self) -> usize {
        self.depth_limit
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Estimate the value of playing drawn `card` at `cell`.
    ///
    /// Places the card, runs rollouts until `limit` is exhausted (checked
    /// only between whole rollouts, and never before the first one), then
    /// takes the card back out. On return `state` is exactly as it was.
    ///
    /// # Errors
    /// `CardNotAvailable` if `card` has not been drawn or is already placed,
    /// `CellOccupied` if `cell` is not free.
    pub fn evaluate<S, R>(
        &self,
        state: &mut SearchState,
        scorer: &S,
        rng: &mut R,
        card: Card,
        cell: Cell,
        limit: RolloutLimit,
    ) -> Result<Evaluation>
    where
        S: PointSystem + ?Sized,
        R: Rng + ?Sized,
    {
        state.place(card, cell)?;

        let mut total: i64 = 0;
        let mut samples = 0;
        let outcome = loop {
            match self.rollout(state, scorer, rng, cell) {
                Ok(score) => {
                    total += i64::from(score);
                    samples += 1;
                }
                Err(e) => break Err(e),
            }
            if limit.exhausted(samples) {
                break Ok(());
            }
        };

        state.unplace();
        outcome?;

        Ok(Evaluation {
            cell,
            average: total as f64 / samples as f64,
            samples,
        })
    }

    /// One rollout from the current state, fully undone before returning.
    ///
    /// Plays `min(depth_limit, free cells)` simulated cards, each drawn
    /// uniformly from the undrawn cards and placed by the policy, and
    /// returns the score of the grid at that point.
    pub fn rollout<S, R>(
        &self,
        state: &mut SearchState,
        scorer: &S,
        rng: &mut R,
        focus: Cell,
    ) -> Result<i32>
    where
        S: PointSystem + ?Sized,
        R: Rng + ?Sized,
    {
        let depth = self
            .depth_limit
            .min(state.free_cells().len())
            .min(state.undrawn().len());

        let mut played = 0;
        let mut outcome = Ok(());
        for _ in 0..depth {
            let card = state.draw_nth(rng.gen_range(0..state.undrawn().len()));
            let Some(cell) = self.policy.choose(state, card, focus, rng) else {
                state.undraw();
                break;
            };
            if let Err(e) = state.place(card, cell) {
                state.undraw();
                outcome = Err(e);
                break;
            }
            played += 1;
        }

        let score = scorer.score(state.grid());

        for _ in 0..played {
            state.unplace();
            state.undraw();
        }

        outcome.map(|()| score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProximityRollout, UniformRollout};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use squares_core::{Grid, HandTable, SquaresError};
    use std::time::{Duration, Instant};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn filled(grid: &Grid) -> i32 {
        grid.filled_count() as i32
    }

    #[test]
    fn test_evaluate_restores_state() {
        let mut state = SearchState::new();
        state.draw(card("7C")).unwrap();
        state.place(card("7C"), Cell::ALL[6]).unwrap();
        state.draw(card("7D")).unwrap();
        let before = state.clone();

        let evaluator = MonteCarloEvaluator::new(3, ProximityRollout::default());
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let eval = evaluator
            .evaluate(
                &mut state,
                &HandTable::american(),
                &mut rng,
                card("7D"),
                Cell::ALL[7],
                RolloutLimit::Count(50),
            )
            .unwrap();

        assert_eq!(eval.samples, 50);
        assert_eq!(eval.cell, Cell::ALL[7]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_rollout_depth_scores_partial_grid() {
        let mut state = SearchState::new();
        state.draw(card("2H")).unwrap();
        state.place(card("2H"), Cell::ALL[0]).unwrap();

        let evaluator = MonteCarloEvaluator::new(4, UniformRollout);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let score = evaluator.rollout(&mut state, &filled, &mut rng, Cell::ALL[0]).unwrap();

        // One real card plus four simulated ones.
        assert_eq!(score, 5);
        assert_eq!(state.placed_count(), 1);
        assert_eq!(state.drawn_count(), 1);
    }

    #[test]
    fn test_rollout_depth_clipped_to_free_cells() {
        let mut state = SearchState::new();
        for (i, &cell) in Cell::ALL.iter().take(23).enumerate() {
            let c = Card::all()[i];
            state.draw(c).unwrap();
            state.place(c, cell).unwrap();
        }

        let evaluator = MonteCarloEvaluator::new(10, ProximityRollout::default());
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let score = evaluator.rollout(&mut state, &filled, &mut rng, Cell::ALL[0]).unwrap();

        assert_eq!(score, 25);
        assert_eq!(state.placed_count(), 23);
    }

    #[test]
    fn test_zero_depth_scores_current_grid() {
        let mut state = SearchState::new();
        state.draw(card("QS")).unwrap();

        let evaluator = MonteCarloEvaluator::new(0, ProximityRollout::default());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let eval = evaluator
            .evaluate(&mut state, &filled, &mut rng, card("QS"), Cell::ALL[4], RolloutLimit::Count(3))
            .unwrap();

        assert_eq!(eval.average, 1.0);
        assert_eq!(eval.samples, 3);
    }

    #[test]
    fn test_zero_slice_runs_one_rollout() {
        let mut state = SearchState::new();
        state.draw(card("4D")).unwrap();

        let evaluator = MonteCarloEvaluator::new(2, ProximityRollout::default());
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let limit = RolloutLimit::Time {
            start: Instant::now(),
            slice: Duration::ZERO,
        };
        let eval = evaluator
            .evaluate(&mut state, &filled, &mut rng, card("4D"), Cell::ALL[12], limit)
            .unwrap();

        assert_eq!(eval.samples, 1);
        assert_eq!(eval.average, 3.0);
    }

    #[test]
    fn test_occupied_candidate_fails() {
        let mut state = SearchState::new();
        state.draw(card("5S")).unwrap();
        state.place(card("5S"), Cell::ALL[0]).unwrap();
        state.draw(card("6S")).unwrap();
        let before = state.clone();

        let evaluator = MonteCarloEvaluator::new(2, ProximityRollout::default());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = evaluator.evaluate(
            &mut state,
            &filled,
            &mut rng,
            card("6S"),
            Cell::ALL[0],
            RolloutLimit::Count(1),
        );

        assert!(result.is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_undrawn_card_fails() {
        let mut state = SearchState::new();
        let before = state.clone();

        let evaluator = MonteCarloEvaluator::new(24, ProximityRollout::default());
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let result = evaluator.evaluate(
            &mut state,
            &filled,
            &mut rng,
            card("AC"),
            Cell::ALL[0],
            RolloutLimit::Count(500),
        );

        assert_eq!(result, Err(SquaresError::CardNotAvailable(card("AC"))));
        assert_eq!(state, before);
    }

    #[test]
    fn test_evaluate_deterministic() {
        let run = |seed: u64| {
            let mut state = SearchState::new();
            state.draw(card("TC")).unwrap();
            let evaluator = MonteCarloEvaluator::new(5, ProximityRollout::default());
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            evaluator
                .evaluate(
                    &mut state,
                    &HandTable::british(),
                    &mut rng,
                    card("TC"),
                    Cell::ALL[10],
                    RolloutLimit::Count(20),
                )
                .unwrap()
        };

        assert_eq!(run(77), run(77));
    }
}
