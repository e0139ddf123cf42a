use squares_core::{Card, Cell, Rank, Suit, NUM_CARDS};

/// Per-card lookup of the cell a card occupies.
///
/// Mirrors the grid exactly, including mid-rollout. Owned by a single
/// search state; there is no shared or global instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankPlacementIndex {
    cells: [Option<Cell>; NUM_CARDS],
}

impl RankPlacementIndex {
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_CARDS],
        }
    }

    pub fn reset(&mut self) {
        self.cells = [None; NUM_CARDS];
    }

    #[inline]
    pub fn get(&self, card: Card) -> Option<Cell> {
        self.cells[card.index()]
    }

    #[inline]
    pub fn set(&mut self, card: Card, cell: Cell) {
        self.cells[card.index()] = Some(cell);
    }

    #[inline]
    pub fn clear(&mut self, card: Card) {
        self.cells[card.index()] = None;
    }

    /// Cell of the first placed card of `rank`, scanning suits in canonical
    /// order (clubs, diamonds, hearts, spades).
    pub fn anchor(&self, rank: Rank) -> Option<Cell> {
        Suit::ALL
            .iter()
            .find_map(|&suit| self.get(Card::new(rank, suit)))
    }

    /// Number of placed cards.
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for RankPlacementIndex {
    fn default() -> Self {
        Self::new()
    }
}
