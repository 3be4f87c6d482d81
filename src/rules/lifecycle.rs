//! Room and game lifecycle.
//!
//! ## Post-action reducer
//!
//! After a card action applies its direct effect, [`settle`] runs a fixed
//! sequence of checks:
//!
//! 1. [`check_death`] (fights only): health at zero ends the game mid-room.
//! 2. [`check_room_complete`]: three resolved cards finish the room.
//!
//! ## Room transitions
//!
//! - [`finish_room`]: win if the deck can no longer fill a room, otherwise
//!   carry the leftover card into a fresh room.
//! - [`avoid_room`]: push the room to the bottom of the deck and deal again.
//!   Blocked until the next finished room.

use tracing::{debug, info};

use super::scoring::calculate_score;
use crate::cards::{create_deck, deal_room, Room, ROOM_SIZE};
use crate::core::{GameConfig, GameRng, GameState, Phase};

/// Cards the player must resolve before a room is finished.
pub const CARDS_TO_RESOLVE: usize = 3;

/// Build, shuffle and deal a new game.
#[must_use]
pub fn start_new_game(config: &GameConfig, rng: &mut GameRng) -> GameState {
    let deck = create_deck(rng);
    let (room, deck) = deal_room(&deck);

    info!(health = config.starting_health, "starting new game");
    GameState {
        deck,
        room,
        phase: Phase::Playing,
        ..GameState::new(config)
    }
}

/// End the game at once if health has run out.
pub fn check_death(state: &mut GameState) -> bool {
    if state.health > 0 {
        return false;
    }

    let score = calculate_score(state);
    state.phase = Phase::GameOver;
    state.score = Some(score);

    info!(score, rooms_cleared = state.rooms_cleared, "player died");
    true
}

/// Finish the room once enough of its cards are resolved.
pub fn check_room_complete(state: &mut GameState) -> bool {
    if state.resolved_in_room() < CARDS_TO_RESOLVE {
        return false;
    }
    finish_room(state);
    true
}

/// Run the post-action checks in order: death, then room completion.
pub fn settle(state: &mut GameState, fought: bool) {
    if fought && check_death(state) {
        return;
    }
    check_room_complete(state);
}

/// Close the current room.
///
/// With fewer than [`ROOM_SIZE`] cards left in the deck the game is won.
/// Otherwise four cards are dealt; the room's leftover card leads the new
/// room followed by the first three dealt. The fourth dealt card leaves play
/// and is recorded in the discard.
pub fn finish_room(state: &mut GameState) {
    state.rooms_cleared += 1;

    if state.deck.len() < ROOM_SIZE {
        let score = calculate_score(state);
        state.phase = Phase::GameOver;
        state.score = Some(score);

        info!(score, health = state.health, rooms_cleared = state.rooms_cleared, "dungeon cleared");
        return;
    }

    let (dealt, deck) = deal_room(&state.deck);
    let mut leftovers = std::mem::take(&mut state.room).into_iter();

    let room: Room = match leftovers.next() {
        Some(carried) => {
            let mut dealt = dealt.into_iter();
            let room = std::iter::once(carried)
                .chain(dealt.by_ref().take(ROOM_SIZE - 1))
                .collect();
            state.discard.extend(dealt);
            room
        }
        None => dealt,
    };
    state.discard.extend(leftovers);

    state.deck = deck;
    state.room = room;
    state.selected_cards.clear();
    state.can_avoid = true;
    state.potion_used_this_room = false;

    info!(
        rooms_cleared = state.rooms_cleared,
        deck = state.deck.len(),
        "room finished"
    );
}

/// Send the room to the bottom of the deck and deal a new one.
///
/// Ignored outside play or when the previous room was avoided.
pub fn avoid_room(state: &mut GameState) -> bool {
    if !state.is_playing() || !state.can_avoid {
        debug!(can_avoid = state.can_avoid, "avoid ignored");
        return false;
    }

    let mut deck = state.deck.clone();
    deck.extend(state.room.drain(..));
    let (room, deck) = deal_room(&deck);

    state.deck = deck;
    state.room = room;
    state.can_avoid = false;
    state.selected_cards.clear();
    state.potion_used_this_room = false;

    info!(deck = state.deck.len(), "room avoided");
    true
}
