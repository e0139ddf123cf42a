//! Game driver: deals a deck to a player and scores the finished grid.

use std::time::{Duration, Instant};

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::{Card, Cell, Grid, Player, PointSystem, Result, SquaresError, NUM_CARDS, NUM_CELLS};

/// Default time allowed for one whole game.
pub const DEFAULT_GAME_TIME: Duration = Duration::from_secs(30);

/// An ordered deck. The first 25 cards are dealt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full 52-card deck in random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::all().to_vec();
        cards.shuffle(rng);
        Self { cards }
    }

    /// A scripted deck. Needs at least 25 distinct cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.len() < NUM_CELLS {
            return Err(SquaresError::DeckTooSmall(cards.len()));
        }
        let mut seen = [false; NUM_CARDS];
        for card in &cards {
            if std::mem::replace(&mut seen[card.index()], true) {
                return Err(SquaresError::DuplicateCard(*card));
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The 25 cards a game uses, in deal order.
    pub fn deal(&self) -> &[Card] {
        &self.cards[..NUM_CELLS]
    }
}

/// One dealt card and where it went.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Play {
    pub card: Card,
    pub cell: Cell,
    pub elapsed_ms: u64,
}

/// Outcome of a single game.
#[derive(Clone, Debug, Serialize)]
pub struct GameRecord {
    pub player: String,
    pub plays: Vec<Play>,
    #[serde(skip)]
    pub grid: Grid,
    pub score: i32,
    /// The player used more than the game clock allowed.
    pub timed_out: bool,
    pub elapsed_ms: u64,
}

/// Runs games for one point system under a fixed game clock.
#[derive(Clone, Debug)]
pub struct GameDriver<S: PointSystem> {
    point_system: S,
    game_time: Duration,
}

impl<S: PointSystem> GameDriver<S> {
    pub fn new(point_system: S, game_time: Duration) -> Self {
        Self {
            point_system,
            game_time,
        }
    }

    pub fn point_system(&self) -> &S {
        &self.point_system
    }

    pub fn game_time(&self) -> Duration {
        self.game_time
    }

    /// Play one game of `deck` with `player`.
    ///
    /// # Errors
    /// Propagates player errors, and returns `CellOccupied` if the player
    /// picks a cell that already holds a card.
    pub fn play<P: Player + ?Sized>(&self, player: &mut P, deck: &Deck) -> Result<GameRecord> {
        player.reset();

        let mut grid = Grid::new();
        let mut plays = Vec::with_capacity(NUM_CELLS);
        let mut remaining = self.game_time;
        let mut timed_out = false;
        let game_start = Instant::now();

        for (turn, &card) in deck.deal().iter().enumerate() {
            let start = Instant::now();
            let cell = player.decide(card, remaining)?;
            let elapsed = start.elapsed();

            if !grid.is_empty_at(cell) {
                return Err(SquaresError::CellOccupied(cell));
            }
            grid.set(cell, card);

            if elapsed > remaining && !timed_out {
                warn!(
                    "{} overran the game clock on turn {} ({:?} left, took {:?})",
                    player.name(),
                    turn,
                    remaining,
                    elapsed
                );
                timed_out = true;
            }
            remaining = remaining.saturating_sub(elapsed);

            plays.push(Play {
                card,
                cell,
                elapsed_ms: elapsed.as_millis() as u64,
            });
        }

        let score = self.point_system.score(&grid);

        Ok(GameRecord {
            player: player.name(),
            plays,
            grid,
            score,
            timed_out,
            elapsed_ms: game_start.elapsed().as_millis() as u64,
        })
    }
}
