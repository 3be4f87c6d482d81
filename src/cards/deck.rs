//! Deck construction, shuffling and room dealing.
//!
//! ## Composition
//!
//! The dungeon is a 52-card deck minus the red face cards and red aces:
//! - Spades and clubs 2..=14 (26 monsters)
//! - Diamonds 2..=10 (9 weapons)
//! - Hearts 2..=10 (9 potions)
//!
//! The deck is ordered front-to-back: index 0 is the next card dealt.

use im::Vector;
use smallvec::SmallVec;
use tracing::trace;

use super::card::{Card, Suit, MIN_RANK};
use crate::core::rng::GameRng;

/// Cards in a fresh deck.
pub const DECK_SIZE: usize = 44;

/// Cards presented per room.
pub const ROOM_SIZE: usize = 4;

/// Cards currently presented to the player.
pub type Room = SmallVec<[Card; ROOM_SIZE]>;

/// Build the 44 cards in suit-then-rank order, before shuffling.
fn ordered_cards() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| (MIN_RANK..=suit.max_rank()).map(move |rank| Card::new(suit, rank)))
        .collect()
}

/// Build and shuffle a fresh deck.
///
/// The unshuffled order never leaves this function.
#[must_use]
pub fn create_deck(rng: &mut GameRng) -> Vector<Card> {
    let mut cards = ordered_cards();
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

/// Return a shuffled copy of `items`, leaving the input untouched.
///
/// Uniform Fisher-Yates: every permutation is equally likely.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], rng: &mut GameRng) -> Vec<T> {
    let mut result = items.to_vec();
    rng.shuffle(&mut result);
    result
}

/// Split the front of `deck` off as a room.
///
/// With fewer than [`ROOM_SIZE`] cards the whole deck becomes the room and the
/// remaining deck is empty. The input is not modified.
#[must_use]
pub fn deal_room(deck: &Vector<Card>) -> (Room, Vector<Card>) {
    if deck.len() < ROOM_SIZE {
        trace!(cards = deck.len(), "dealing final partial room");
        return (deck.iter().copied().collect(), Vector::new());
    }

    let (front, rest) = deck.clone().split_at(ROOM_SIZE);
    trace!(remaining = rest.len(), "dealt room");
    (front.into_iter().collect(), rest)
}
