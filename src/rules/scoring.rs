//! Terminal scoring.
//!
//! - Death: minus the total value of monsters still in deck and room.
//! - Survival: remaining health, plus a bonus at full health when the last
//!   resolved card was a potion.
//!
//! The bonus value is taken from the last potion still sitting in the final
//! room, not from the potion actually drunk. That lookup is kept as is.

use crate::cards::{Card, CardKind, ROOM_SIZE};
use crate::core::GameState;

/// Sum of monster values across `cards`.
#[must_use]
pub fn remaining_monster_sum<'a>(cards: impl IntoIterator<Item = &'a Card>) -> i32 {
    cards
        .into_iter()
        .filter(|card| card.is_monster())
        .map(Card::value)
        .sum()
}

/// Score a finished game.
///
/// Returns 0 while the deck still holds a full room and the player is alive.
#[must_use]
pub fn calculate_score(state: &GameState) -> i32 {
    if state.health <= 0 {
        return -remaining_monster_sum(state.deck.iter().chain(state.room.iter()));
    }

    let survived = state.deck.len() < ROOM_SIZE;
    if !survived {
        return 0;
    }

    let mut score = state.health;

    if state.health == state.max_health && state.last_card_was_potion {
        if let Some(potion) = state
            .room
            .iter()
            .rev()
            .find(|card| card.kind() == CardKind::Potion)
        {
            score += potion.value();
        }
    }

    score
}
