use std::time::Duration;

use crate::{Card, Cell, Result};

/// A Poker Squares player.
///
/// The driver calls `reset` once at the start of every game, then `decide`
/// once per dealt card, 25 times. Cards are never re-delivered and
/// `remaining` never increases within a game.
pub trait Player {
    /// Display name, used in logs and game records
    fn name(&self) -> String;

    /// Clear all per-game state
    fn reset(&mut self);

    /// Choose an empty cell for `card`, given the time left on the game clock
    fn decide(&mut self, card: Card, remaining: Duration) -> Result<Cell>;
}
