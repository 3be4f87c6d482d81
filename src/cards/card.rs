//! Playing cards: suits, ranks and stable identifiers.
//!
//! A card is fully determined by its suit and rank, so `CardId` carries both
//! and displays as `"<suit>-<rank>"` (e.g. `"spades-14"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Lowest rank in the deck.
pub const MIN_RANK: u8 = 2;

/// Highest rank (Ace).
pub const MAX_RANK: u8 = 14;

/// Highest rank dealt in the red suits. Red face cards and aces are removed.
pub const MAX_RED_RANK: u8 = 10;

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    /// Lower-case name used in card ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '\u{2660}',
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
        }
    }

    /// Highest rank this suit contributes to the deck.
    #[must_use]
    pub const fn max_rank(self) -> u8 {
        match self {
            Suit::Spades | Suit::Clubs => MAX_RANK,
            Suit::Diamonds | Suit::Hearts => MAX_RED_RANK,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| EngineError::InvalidCardId(s.to_string()))
    }
}

/// Stable card identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    pub suit: Suit,
    pub rank: u8,
}

impl CardId {
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

impl FromStr for CardId {
    type Err = EngineError;

    /// Parse `"<suit>-<rank>"`. The rank must exist in that suit's range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidCardId(s.to_string());

        let (suit, rank) = s.split_once('-').ok_or_else(invalid)?;
        let suit: Suit = suit.parse().map_err(|_| invalid())?;
        let rank: u8 = rank.parse().map_err(|_| invalid())?;

        if !(MIN_RANK..=suit.max_rank()).contains(&rank) {
            return Err(invalid());
        }

        Ok(Self::new(suit, rank))
    }
}

/// An immutable playing card.
///
/// The card's `value` (damage, attack or heal amount) equals its rank:
/// Jack = 11, Queen = 12, King = 13, Ace = 14.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::new(self.suit, self.rank)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.rank as i32
    }

    /// Short rank label: `2`..`10`, `J`, `Q`, `K`, `A`.
    #[must_use]
    pub fn rank_label(&self) -> String {
        match self.rank {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            n => n.to_string(),
        }
    }
}

impl From<Card> for CardId {
    fn from(card: Card) -> Self {
        card.id()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}
