//! Swap-to-front partitioned arrays.
//!
//! A ledger is an owned fixed-size array plus a cursor. Items before the
//! cursor are committed (in commit order); items from the cursor on are
//! still available, in no particular order. Committing swaps the item to the
//! cursor slot, remembers the slot it came from, and advances the cursor.
//! Releasing swaps it back and moves the cursor back.
//!
//! # Invariant
//!
//! Releases must undo commits in strict LIFO order. Each release reverses
//! exactly one swap, so any sequence of commits undone in reverse restores
//! the array and cursor to their prior state, element for element.
//! Releasing out of order silently corrupts the partition; nothing here can
//! detect it.

use squares_core::{Card, Cell, NUM_CARDS, NUM_CELLS};

/// Tracks filled vs. free grid cells.
pub type PositionLedger = SwapLedger<Cell, NUM_CELLS>;

/// Tracks drawn vs. undrawn cards.
pub type DeckLedger = SwapLedger<Card, NUM_CARDS>;

/// Fixed-size array partitioned into committed prefix and available suffix.
#[derive(Clone, Debug)]
pub struct SwapLedger<T, const N: usize> {
    items: [T; N],
    cursor: usize,
    /// `origins[i]` is the slot the `i`th committed item was swapped out of.
    /// Only the first `cursor` entries are meaningful.
    origins: [usize; N],
}

impl<T: Copy + Eq, const N: usize> SwapLedger<T, N> {
    /// Create a ledger with every item available.
    pub fn new(items: [T; N]) -> Self {
        Self {
            items,
            cursor: 0,
            origins: [0; N],
        }
    }

    /// Make every item available again, in the given order.
    pub fn reset(&mut self, items: [T; N]) {
        self.items = items;
        self.cursor = 0;
        self.origins = [0; N];
    }

    /// Number of committed items.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Committed items, oldest first.
    #[inline]
    pub fn committed(&self) -> &[T] {
        &self.items[..self.cursor]
    }

    /// Available items.
    ///
    /// Commits reorder this slice, so copy it out before iterating if the
    /// loop body commits.
    #[inline]
    pub fn remaining(&self) -> &[T] {
        &self.items[self.cursor..]
    }

    /// The full backing array (committed prefix, then available suffix).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Whether `item` is still available.
    pub fn is_available(&self, item: T) -> bool {
        self.remaining().contains(&item)
    }

    /// Commit `item`. Returns false, changing nothing, if it is not available.
    #[must_use]
    pub fn commit(&mut self, item: T) -> bool {
        match self.remaining().iter().position(|&x| x == item) {
            Some(offset) => {
                self.commit_nth(offset);
                true
            }
            None => false,
        }
    }

    /// Commit the `n`th available item and return it.
    ///
    /// # Panics
    /// If `n` is not less than `remaining().len()`.
    pub fn commit_nth(&mut self, n: usize) -> T {
        let index = self.cursor + n;
        self.items.swap(self.cursor, index);
        self.origins[self.cursor] = index;
        self.cursor += 1;
        self.items[self.cursor - 1]
    }

    /// Undo the most recent commit and return the released item.
    ///
    /// The item is swapped back into the slot it was committed from.
    /// Returns None if nothing is committed.
    pub fn release(&mut self) -> Option<T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let origin = self.origins[self.cursor];
        self.items.swap(self.cursor, origin);
        Some(self.items[origin])
    }

    /// The most recently committed item.
    pub fn last_committed(&self) -> Option<T> {
        self.committed().last().copied()
    }
}

// Stale origins past the cursor are not part of the ledger's value.
impl<T: PartialEq, const N: usize> PartialEq for SwapLedger<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
            && self.items == other.items
            && self.origins[..self.cursor] == other.origins[..other.cursor]
    }
}

impl<T: Eq, const N: usize> Eq for SwapLedger<T, N> {}
