//! Property tests over randomly played games.
//!
//! Each case shuffles a deck from a random seed, then plays a sequence of
//! legal actions picked by proptest, checking the game's invariants after
//! every step.

use proptest::prelude::*;
use proptest::sample::Index;

use scoundrel_engine::cards::{Card, CardKind, DECK_SIZE, ROOM_SIZE};
use scoundrel_engine::core::{Action, GameState};
use scoundrel_engine::rules::calculate_score;
use scoundrel_engine::GameSession;

/// Invariants that must hold after any action.
fn check_invariants(state: &GameState) {
    assert_eq!(state.card_count(), DECK_SIZE);
    assert!(state.health >= 0);
    assert!(state.health <= state.max_health);
    assert!(state.room.len() <= ROOM_SIZE);
    assert!(state.selected_cards.len() < 3 || !state.is_playing());

    if state.is_playing() {
        assert!(state.health > 0);
        assert_eq!(state.score, None);
    } else {
        assert!(state.score.is_some());
    }

    if let Some(weapon) = &state.weapon {
        assert_eq!(weapon.card.kind(), CardKind::Weapon);
        let kills: Vec<i32> = weapon.kill_stack.iter().map(Card::value).collect();
        assert!(kills.windows(2).all(|pair| pair[1] < pair[0]), "kills not descending: {kills:?}");
        if let Some(last) = kills.last() {
            assert_eq!(weapon.max_target, last - 1);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random legal play keeps every invariant.
    #[test]
    fn prop_random_play_keeps_invariants(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<Index>(), 1..250),
    ) {
        let mut session = GameSession::new(seed);
        session.start_new_game();
        check_invariants(session.state());

        for pick in picks {
            if !session.state().is_playing() {
                break;
            }
            let actions = session.legal_actions();
            prop_assert!(!actions.is_empty());
            let action = actions[pick.index(actions.len())];

            let before = session.state().clone();
            prop_assert!(session.apply(&action));
            let after = session.state();
            check_invariants(after);

            // A weapon's ceiling never rises while it stays equipped.
            if let (Some(old), Some(new)) = (&before.weapon, &after.weapon) {
                if old.card == new.card {
                    prop_assert!(new.max_target <= old.max_target);
                }
            }

            match action {
                Action::AvoidRoom => {
                    prop_assert!(!after.can_avoid);
                    prop_assert_eq!(after.room.len(), ROOM_SIZE);
                    prop_assert!(after.selected_cards.is_empty());
                    prop_assert_eq!(after.deck.len(), before.deck.len());
                }
                _ if after.rooms_cleared > before.rooms_cleared && after.is_playing() => {
                    prop_assert!(after.can_avoid);
                    prop_assert_eq!(after.room.len(), ROOM_SIZE);
                    prop_assert!(after.selected_cards.is_empty());
                    prop_assert!(!after.potion_used_this_room);
                }
                _ => {}
            }

            // A room that was just avoided into cannot be avoided again.
            if !before.can_avoid && after.rooms_cleared == before.rooms_cleared {
                prop_assert!(!after.can_avoid);
            }
        }
    }

    /// Invalid card ids never change the state.
    #[test]
    fn prop_unknown_cards_ignored(seed in any::<u64>(), rank in 2u8..=14) {
        let mut session = GameSession::new(seed);
        session.start_new_game();
        let before = session.state().clone();

        // Any card not in the room is rejected by every card action.
        let absent = before
            .deck
            .iter()
            .copied()
            .find(|card| card.rank == rank)
            .or_else(|| before.deck.front().copied());

        if let Some(card) = absent {
            let id = card.id();
            prop_assert!(!session.fight_bare_handed(id));
            prop_assert!(!session.fight_with_weapon(id));
            prop_assert!(!session.equip_weapon(id));
            prop_assert!(!session.use_potion(id));
            prop_assert_eq!(session.state(), &before);
        }
    }

    /// Finished games carry a score matching the scoring rules.
    #[test]
    fn prop_final_score_matches_rules(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<Index>(), 400),
    ) {
        let mut session = GameSession::new(seed);
        session.start_new_game();

        for pick in picks {
            if !session.state().is_playing() {
                break;
            }
            let actions = session.legal_actions();
            let action = actions[pick.index(actions.len())];
            session.apply(&action);
        }

        if let Some(outcome) = session.outcome() {
            prop_assert_eq!(outcome.score, calculate_score(session.state()));
            prop_assert_eq!(outcome.survived, outcome.score > 0);
        }
    }
}
