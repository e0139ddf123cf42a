use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SquaresError;

/// Number of cards in a standard deck
pub const NUM_CARDS: usize = 52;

/// Number of ranks per suit
pub const NUM_RANKS: usize = 13;

/// Number of suits
pub const NUM_SUITS: usize = 4;

/// A card suit, in canonical order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits in canonical order
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns the index (0-3)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Parse suit from its character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A card rank. Ace is stored lowest; hand evaluation lets it play high too.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    /// All ranks in order
    pub const ALL: [Rank; NUM_RANKS] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Returns the index (0-12)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    /// Parse rank from its character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Rank::Ace),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Cards map densely onto `0..52` as `suit * 13 + rank`, so per-card
/// lookups can be plain arrays.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    #[inline]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[inline]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the dense index (0-51)
    #[inline]
    pub const fn index(self) -> usize {
        self.suit.index() * NUM_RANKS + self.rank.index()
    }

    /// Creates a card from its dense index, returning None if out of range
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_CARDS {
            return None;
        }
        Some(Card {
            rank: Rank::ALL[index % NUM_RANKS],
            suit: Suit::ALL[index / NUM_RANKS],
        })
    }

    /// All 52 cards in index order
    pub fn all() -> [Card; NUM_CARDS] {
        let mut cards = [Card::new(Rank::Ace, Suit::Clubs); NUM_CARDS];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Card {
                rank: Rank::ALL[i % NUM_RANKS],
                suit: Suit::ALL[i / NUM_RANKS],
            };
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = SquaresError;

    /// Parses `"AC"`, `"td"`, or `"10D"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquaresError::InvalidCard(s.to_string());
        let mut chars = s.trim().chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_char)
            .ok_or_else(invalid)?;

        let rank = match chars.as_str() {
            "10" => Rank::Ten,
            rank_part => {
                let mut rank_chars = rank_part.chars();
                match (rank_chars.next(), rank_chars.next()) {
                    (Some(c), None) => Rank::from_char(c).ok_or_else(invalid)?,
                    _ => return Err(invalid()),
                }
            }
        };

        Ok(Card::new(rank, suit))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = SquaresError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
