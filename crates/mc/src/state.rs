//! Mutable search state shared by real moves and rollouts.

use squares_core::{Card, Cell, Grid, Result, SquaresError};

use crate::{DeckLedger, PositionLedger, RankPlacementIndex};

/// Grid, both ledgers and the placement index, kept in lockstep.
///
/// Every mutation is a paired commit/undo: `draw`/`undraw` for the deck and
/// `place`/`unplace` for the grid. Undos must come in strict LIFO order per
/// pair (see [`crate::ledger`]).
///
/// Invariants, as long as undos are LIFO:
/// - the free cells of the position ledger are exactly the empty grid cells
/// - the placement index holds exactly the cards on the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    grid: Grid,
    cells: PositionLedger,
    deck: DeckLedger,
    placements: RankPlacementIndex,
}

impl SearchState {
    /// Empty grid, full deck.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            cells: PositionLedger::new(Cell::ALL),
            deck: DeckLedger::new(Card::all()),
            placements: RankPlacementIndex::new(),
        }
    }

    /// Back to an empty grid and full deck, in canonical order.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.cells.reset(Cell::ALL);
        self.deck.reset(Card::all());
        self.placements.reset();
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn placements(&self) -> &RankPlacementIndex {
        &self.placements
    }

    #[inline]
    pub fn cells(&self) -> &PositionLedger {
        &self.cells
    }

    #[inline]
    pub fn deck(&self) -> &DeckLedger {
        &self.deck
    }

    /// Empty cells, in ledger order.
    #[inline]
    pub fn free_cells(&self) -> &[Cell] {
        self.cells.remaining()
    }

    /// Cards not yet drawn, in ledger order.
    #[inline]
    pub fn undrawn(&self) -> &[Card] {
        self.deck.remaining()
    }

    #[inline]
    pub fn placed_count(&self) -> usize {
        self.cells.cursor()
    }

    #[inline]
    pub fn drawn_count(&self) -> usize {
        self.deck.cursor()
    }

    /// Mark `card` as drawn.
    ///
    /// # Errors
    /// `CardNotAvailable` if the card was already drawn.
    pub fn draw(&mut self, card: Card) -> Result<()> {
        if self.deck.commit(card) {
            Ok(())
        } else {
            Err(SquaresError::CardNotAvailable(card))
        }
    }

    /// Draw the `n`th undrawn card.
    pub fn draw_nth(&mut self, n: usize) -> Card {
        self.deck.commit_nth(n)
    }

    /// Undo the most recent draw.
    pub fn undraw(&mut self) -> Option<Card> {
        self.deck.release()
    }

    /// Put a drawn card into a free cell.
    ///
    /// # Errors
    /// `CardNotAvailable` if the card has not been drawn or is already on the
    /// grid, `CellOccupied` if the cell already holds a card.
    pub fn place(&mut self, card: Card, cell: Cell) -> Result<()> {
        if self.placements.get(card).is_some() || self.deck.is_available(card) {
            return Err(SquaresError::CardNotAvailable(card));
        }
        if !self.cells.commit(cell) {
            return Err(SquaresError::CellOccupied(cell));
        }
        self.grid.set(cell, card);
        self.placements.set(card, cell);
        Ok(())
    }

    /// Undo the most recent placement.
    pub fn unplace(&mut self) -> Option<(Card, Cell)> {
        let cell = self.cells.release()?;
        let card = self.grid.clear(cell)?;
        self.placements.clear(card);
        Some((card, cell))
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
