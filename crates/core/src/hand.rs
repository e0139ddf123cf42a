//! Poker hand classification for (possibly partial) grid lines.

use std::fmt;

use crate::{Card, Rank, NUM_RANKS, SIZE};

/// Poker hand categories, weakest first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub const COUNT: usize = 10;

    /// All categories, weakest first
    pub const ALL: [HandCategory; Self::COUNT] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Classify a line of up to five cards; empty slots are ignored.
    ///
    /// Rank-count hands (pairs through quads) are recognised at any size.
    /// Straights and flushes need all five cards.
    pub fn classify(line: &[Option<Card>]) -> HandCategory {
        let mut rank_counts = [0u8; NUM_RANKS];
        let mut suit = None;
        let mut same_suit = true;
        let mut n = 0;

        for card in line.iter().flatten() {
            rank_counts[card.rank().index()] += 1;
            match suit {
                None => suit = Some(card.suit()),
                Some(s) if s != card.suit() => same_suit = false,
                Some(_) => {}
            }
            n += 1;
        }

        let mut groups: Vec<u8> = rank_counts.iter().copied().filter(|&c| c > 0).collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        match groups.as_slice() {
            [4, ..] => return HandCategory::FourOfAKind,
            [3, 2] => return HandCategory::FullHouse,
            [3, ..] => return HandCategory::ThreeOfAKind,
            [2, 2, ..] => return HandCategory::TwoPair,
            [2, ..] => return HandCategory::Pair,
            _ => {}
        }

        if n < SIZE {
            return HandCategory::HighCard;
        }

        let straight = is_straight(&rank_counts);
        let broadway = rank_counts[Rank::Ace.index()] == 1 && rank_counts[Rank::King.index()] == 1;

        match (straight, same_suit) {
            (true, true) if broadway => HandCategory::RoyalFlush,
            (true, true) => HandCategory::StraightFlush,
            (false, true) => HandCategory::Flush,
            (true, false) => HandCategory::Straight,
            (false, false) => HandCategory::HighCard,
        }
    }
}

/// Five distinct ranks in sequence, with the ace playing low or high.
fn is_straight(rank_counts: &[u8; NUM_RANKS]) -> bool {
    let present: Vec<usize> = (0..NUM_RANKS).filter(|&r| rank_counts[r] == 1).collect();
    if present.len() != SIZE {
        return false;
    }
    if present[SIZE - 1] - present[0] == SIZE - 1 {
        return true;
    }
    // 10-J-Q-K-A
    present == [
        Rank::Ace.index(),
        Rank::Ten.index(),
        Rank::Jack.index(),
        Rank::Queen.index(),
        Rank::King.index(),
    ]
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
            HandCategory::RoyalFlush => "royal flush",
        };
        write!(f, "{}", name)
    }
}
