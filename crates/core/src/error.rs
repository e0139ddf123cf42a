use thiserror::Error;

use crate::{Card, Cell};

/// Errors that can occur while playing Poker Squares
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquaresError {
    #[error("Invalid card string: {0}")]
    InvalidCard(String),

    #[error("Invalid cell index: {0}")]
    InvalidCell(usize),

    #[error("Card {0} is not among the undrawn cards")]
    CardNotAvailable(Card),

    #[error("Cell {0} is already occupied")]
    CellOccupied(Cell),

    #[error("Card {0} appears twice in the deck")]
    DuplicateCard(Card),

    #[error("Grid is full")]
    GridFull,

    #[error("Deck holds {0} cards, a game needs at least 25")]
    DeckTooSmall(usize),
}

/// Convenience Result type for Poker Squares operations
pub type Result<T> = std::result::Result<T, SquaresError>;
