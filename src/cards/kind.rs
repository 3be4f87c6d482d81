//! Card classification.

use serde::{Deserialize, Serialize};

use super::card::{Card, Suit};

/// Functional role of a card, derived from its suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Spades and clubs. Deal damage equal to their value.
    Monster,
    /// Diamonds. Reduce monster damage by their value while equipped.
    Weapon,
    /// Hearts. Heal by their value, once per room.
    Potion,
}

impl Suit {
    /// Role played by every card of this suit.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Suit::Spades | Suit::Clubs => CardKind::Monster,
            Suit::Diamonds => CardKind::Weapon,
            Suit::Hearts => CardKind::Potion,
        }
    }
}

/// Classify a card by suit.
#[must_use]
pub const fn classify(card: &Card) -> CardKind {
    card.suit.kind()
}

impl Card {
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        classify(self)
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.kind() == CardKind::Monster
    }
}
