//! Equipped weapon and its kill stack.
//!
//! A weapon degrades as it is used: after killing a monster of value `v` it
//! can only be used on monsters of value `v - 1` or lower. The kill stack
//! records every monster it has slain, oldest first.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, MAX_RANK};

/// `max_target` of a freshly equipped weapon. High enough to kill an Ace.
pub const UNRESTRICTED_TARGET: i32 = MAX_RANK as i32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// The diamond card being wielded.
    pub card: Card,

    /// Monsters killed with this weapon, oldest first.
    pub kill_stack: Vec<Card>,

    /// Highest monster value this weapon may still be used against.
    pub max_target: i32,
}

impl Weapon {
    /// Equip `card` with an empty kill stack and no target restriction.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            card,
            kill_stack: Vec::new(),
            max_target: UNRESTRICTED_TARGET,
        }
    }

    /// Attack value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.card.value()
    }

    #[must_use]
    pub fn can_target(&self, monster: &Card) -> bool {
        monster.value() <= self.max_target
    }

    /// Damage taken when killing `monster` with this weapon.
    #[must_use]
    pub fn damage_against(&self, monster: &Card) -> i32 {
        (monster.value() - self.value()).max(0)
    }

    /// Push a kill and tighten the target ceiling below it.
    pub fn record_kill(&mut self, monster: Card) {
        self.max_target = monster.value() - 1;
        self.kill_stack.push(monster);
    }

    #[must_use]
    pub fn last_kill(&self) -> Option<&Card> {
        self.kill_stack.last()
    }

    /// The weapon card followed by its kill stack, for discarding.
    pub fn into_cards(self) -> impl Iterator<Item = Card> {
        std::iter::once(self.card).chain(self.kill_stack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_new_weapon_is_unrestricted() {
        let weapon = Weapon::new(Card::new(Suit::Diamonds, 5));

        assert_eq!(weapon.max_target, 14);
        assert!(weapon.kill_stack.is_empty());
        assert!(weapon.can_target(&Card::new(Suit::Spades, 14)));
    }

    #[test]
    fn test_record_kill_tightens_target() {
        let mut weapon = Weapon::new(Card::new(Suit::Diamonds, 5));

        weapon.record_kill(Card::new(Suit::Clubs, 10));

        assert_eq!(weapon.max_target, 9);
        assert!(!weapon.can_target(&Card::new(Suit::Spades, 10)));
        assert!(weapon.can_target(&Card::new(Suit::Spades, 9)));
        assert_eq!(weapon.last_kill(), Some(&Card::new(Suit::Clubs, 10)));
    }

    #[test]
    fn test_damage_against() {
        let weapon = Weapon::new(Card::new(Suit::Diamonds, 5));

        assert_eq!(weapon.damage_against(&Card::new(Suit::Spades, 8)), 3);
        assert_eq!(weapon.damage_against(&Card::new(Suit::Spades, 5)), 0);
        assert_eq!(weapon.damage_against(&Card::new(Suit::Spades, 2)), 0);
    }

    #[test]
    fn test_into_cards_order() {
        let mut weapon = Weapon::new(Card::new(Suit::Diamonds, 7));
        weapon.record_kill(Card::new(Suit::Spades, 12));
        weapon.record_kill(Card::new(Suit::Clubs, 6));

        let cards: Vec<_> = weapon.into_cards().collect();
        assert_eq!(
            cards,
            vec![
                Card::new(Suit::Diamonds, 7),
                Card::new(Suit::Spades, 12),
                Card::new(Suit::Clubs, 6),
            ]
        );
    }
}
