//! Scoring tests.
//!
//! Terminal scores reached through real play:
//! - Death scores the monsters still waiting in deck and room
//! - Victory scores remaining health
//! - The full-health potion bonus reads the final room

use scoundrel_engine::cards::{Card, Suit};
use scoundrel_engine::core::{GameConfig, GameState};
use scoundrel_engine::GameSession;

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn final_room(room: [Card; 4], health: i32) -> GameSession {
    let config = GameConfig::default();
    let mut state = GameState::with_cards(&config, room, []);
    state.health = health;
    GameSession::with_state(config, state, 11).unwrap()
}

/// The bonus uses the last potion left in the room, not the one drunk.
#[test]
fn test_bonus_reads_remaining_potion() {
    let room = [
        card(Suit::Hearts, 3),
        card(Suit::Spades, 2),
        card(Suit::Clubs, 4),
        card(Suit::Hearts, 9),
    ];
    let mut session = final_room(room, 17);

    session.fight_bare_handed(room[1].id());
    session.fight_bare_handed(room[2].id());
    session.use_potion(room[3].id());

    let state = session.state();
    assert_eq!(state.health, 20);
    assert_eq!(state.score, Some(23));
}

#[test]
fn test_no_bonus_without_potion_in_room() {
    let room = [
        card(Suit::Spades, 2),
        card(Suit::Clubs, 4),
        card(Suit::Hearts, 9),
        card(Suit::Diamonds, 5),
    ];
    let mut session = final_room(room, 17);

    session.fight_bare_handed(room[0].id());
    session.fight_bare_handed(room[1].id());
    session.use_potion(room[2].id());

    assert_eq!(session.state().health, 20);
    assert_eq!(session.state().score, Some(20));
}

#[test]
fn test_no_bonus_when_last_card_not_potion() {
    let room = [
        card(Suit::Hearts, 4),
        card(Suit::Diamonds, 6),
        card(Suit::Spades, 3),
        card(Suit::Hearts, 8),
    ];
    let mut session = final_room(room, 20);

    session.use_potion(room[0].id());
    session.equip_weapon(room[1].id());
    session.fight_with_weapon(room[2].id());

    assert_eq!(session.state().health, 20);
    assert_eq!(session.state().score, Some(20));
}

#[test]
fn test_no_bonus_below_max_health() {
    let room = [
        card(Suit::Spades, 5),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 2),
        card(Suit::Hearts, 7),
    ];
    let mut session = final_room(room, 20);

    session.fight_bare_handed(room[0].id());
    session.fight_bare_handed(room[1].id());
    session.use_potion(room[2].id());

    assert_eq!(session.state().health, 11);
    assert_eq!(session.state().score, Some(11));
}

/// Weapons, potions and resolved monsters never count against a dead player.
#[test]
fn test_death_counts_only_waiting_monsters() {
    let config = GameConfig::default();
    let room = [
        card(Suit::Clubs, 14),
        card(Suit::Diamonds, 10),
        card(Suit::Hearts, 10),
        card(Suit::Spades, 7),
    ];
    let deck = [card(Suit::Spades, 13), card(Suit::Diamonds, 2), card(Suit::Clubs, 2)];
    let mut state = GameState::with_cards(&config, room, deck);
    state.health = 14;
    let mut session = GameSession::with_state(config, state, 0).unwrap();

    session.fight_bare_handed(room[0].id());

    let outcome = session.outcome().unwrap();
    assert!(!outcome.survived);
    assert_eq!(outcome.score, -(7 + 13 + 2));
}

#[test]
fn test_custom_max_health_bonus() {
    let config = GameConfig::new().with_max_health(25).with_starting_health(25);
    let room = [
        card(Suit::Spades, 2),
        card(Suit::Clubs, 3),
        card(Suit::Hearts, 5),
        card(Suit::Hearts, 6),
    ];
    let state = GameState::with_cards(&config, room, []);
    let mut session = GameSession::with_state(config, state, 5).unwrap();

    session.fight_bare_handed(room[0].id());
    session.fight_bare_handed(room[1].id());
    session.use_potion(room[2].id());

    assert_eq!(session.state().health, 25);
    assert_eq!(session.state().score, Some(31));
}
