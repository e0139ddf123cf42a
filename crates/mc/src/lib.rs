//! Bounded-time Monte Carlo lookahead player for Poker Squares.
//!
//! For every dealt card the player evaluates each empty cell by running
//! randomized rollouts within a share of the game clock, then plays the
//! cell with the best mean simulated score.
//!
//! # Features
//!
//! - **No copying**: Real moves and rollout moves share one mutable
//!   [`SearchState`] and are undone in strict LIFO order
//! - **Swap-partition ledgers**: O(1) undo and allocation-free free-cell and
//!   undrawn-card enumeration ([`ledger`])
//! - **Proximity rollouts**: Simulated cards cluster next to cards of the
//!   same rank ([`ProximityRollout`])
//! - **Time slicing**: The remaining clock is split across turns and
//!   candidates ([`budget::time_slice`])
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use squares_core::{Card, HandTable, Player};
//! use squares_mc::{McConfig, MonteCarloPlayer};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = McConfig::with_rollouts(2, 20);
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut player = MonteCarloPlayer::new(config, HandTable::american(), rng);
//!
//! let card: Card = "QH".parse().unwrap();
//! let cell = player.decide(card, Duration::from_secs(30)).unwrap();
//! println!("{} -> {}", card, cell);
//! ```

pub mod budget;
pub mod config;
pub mod evaluator;
pub mod ledger;
mod placement;
pub mod player;
pub mod rollout;
mod state;

pub use config::{McConfig, NeighborBounds, RolloutLimit, SearchBudget};
pub use evaluator::{Evaluation, MonteCarloEvaluator};
pub use ledger::{DeckLedger, PositionLedger, SwapLedger};
pub use placement::RankPlacementIndex;
pub use player::MonteCarloPlayer;
pub use rollout::{ProximityRollout, RolloutPolicy, UniformRollout};
pub use state::SearchState;
