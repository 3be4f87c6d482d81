//! Combat and equipment rules.
//!
//! Each function validates its command, then applies the card's direct
//! effect. Validation happens before any mutation, so an ignored command
//! leaves the state untouched. Death and room completion are handled
//! afterwards by [`super::lifecycle::settle`].

use tracing::debug;

use crate::cards::{Card, CardId, CardKind};
use crate::core::{GameState, Weapon};

/// Remove the card at `index` from the room and mark it resolved.
fn resolve_from_room(state: &mut GameState, index: usize) -> Card {
    let card = state.room.remove(index);
    state.selected_cards.push(card.id());
    card
}

/// Whether the equipped weapon may be used on `monster`.
#[must_use]
pub fn can_fight_with_weapon(state: &GameState, monster: &Card) -> bool {
    monster.kind() == CardKind::Monster
        && state
            .weapon
            .as_ref()
            .is_some_and(|weapon| weapon.can_target(monster))
}

/// Fight a monster with bare hands, taking its full value as damage.
pub fn fight_bare_handed(state: &mut GameState, id: CardId) -> bool {
    let Some((index, _)) = state.find_in_room_of_kind(id, CardKind::Monster) else {
        debug!(card = %id, "bare-handed fight ignored");
        return false;
    };

    let card = resolve_from_room(state, index);
    state.health = (state.health - card.value()).max(0);
    state.discard.push_back(card);
    state.monsters_slain += 1;
    state.last_card_was_potion = false;

    debug!(card = %card, damage = card.value(), health = state.health, "fought bare-handed");
    true
}

/// Kill a monster with the equipped weapon.
///
/// Ignored without a weapon, or when the monster is stronger than the
/// weapon's `max_target`. The monster goes onto the kill stack.
pub fn fight_with_weapon(state: &mut GameState, id: CardId) -> bool {
    let Some((index, monster)) = state.find_in_room_of_kind(id, CardKind::Monster) else {
        debug!(card = %id, "weapon fight ignored");
        return false;
    };
    let Some(weapon) = state
        .weapon
        .as_mut()
        .filter(|weapon| weapon.can_target(&monster))
    else {
        debug!(card = %id, "weapon cannot be used");
        return false;
    };

    let damage = weapon.damage_against(&monster);
    let previous = weapon.last_kill().copied();
    weapon.record_kill(monster);
    let max_target = weapon.max_target;

    resolve_from_room(state, index);
    state.health = (state.health - damage).max(0);
    state.monsters_slain += 1;
    state.last_card_was_potion = false;

    debug!(
        card = %monster,
        previous = ?previous,
        damage,
        max_target,
        health = state.health,
        "fought with weapon"
    );
    true
}

/// Equip a weapon. The previous weapon and its kill stack are discarded.
pub fn equip_weapon(state: &mut GameState, id: CardId) -> bool {
    let Some((index, _)) = state.find_in_room_of_kind(id, CardKind::Weapon) else {
        debug!(card = %id, "equip ignored");
        return false;
    };

    let card = resolve_from_room(state, index);
    if let Some(old) = state.weapon.replace(Weapon::new(card)) {
        debug!(old = %old.card, kills = old.kill_stack.len(), "discarding weapon");
        state.discard.extend(old.into_cards());
    }
    state.last_card_was_potion = false;

    debug!(card = %card, "equipped weapon");
    true
}

/// Drink a potion.
///
/// Only the first potion in a room heals; later ones are wasted.
pub fn use_potion(state: &mut GameState, id: CardId) -> bool {
    let Some((index, _)) = state.find_in_room_of_kind(id, CardKind::Potion) else {
        debug!(card = %id, "potion ignored");
        return false;
    };

    let card = resolve_from_room(state, index);
    let heal = if state.potion_used_this_room { 0 } else { card.value() };

    state.health = (state.health + heal).min(state.max_health);
    state.discard.push_back(card);
    state.potion_used_this_room = true;
    state.last_card_was_potion = true;

    debug!(card = %card, heal, health = state.health, "drank potion");
    true
}
