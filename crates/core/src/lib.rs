//! Poker Squares core types.
//!
//! Cards are dealt one at a time and each must be placed in an empty cell of
//! a 5x5 grid. Once all 25 cells are filled, every row and column is scored
//! as a poker hand by a [`PointSystem`].
//!
//! # Types
//!
//! - [`Card`], [`Rank`], [`Suit`] - Playing cards with a dense 0..52 index
//! - [`Cell`], [`Grid`] - The 5x5 play area
//! - [`HandCategory`] - Hand classification for partial or complete lines
//! - [`PointSystem`], [`HandTable`] - Grid scoring
//! - [`Player`], [`GameDriver`] - The turn-by-turn game contract

mod card;
mod cell;
pub mod driver;
mod error;
mod grid;
mod hand;
mod player;
mod points;

pub use card::{Card, Rank, Suit, NUM_CARDS, NUM_RANKS, NUM_SUITS};
pub use cell::{Cell, NUM_CELLS, SIZE};
pub use driver::{Deck, GameDriver, GameRecord, Play, DEFAULT_GAME_TIME};
pub use error::{Result, SquaresError};
pub use grid::{Grid, Line};
pub use hand::HandCategory;
pub use player::Player;
pub use points::{HandTable, PointSystem};
