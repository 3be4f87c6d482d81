//! Player actions.
//!
//! Every command the presentation layer can issue is an `Action`. The four
//! card actions carry the id of a card in the current room; `AvoidRoom`
//! takes no argument.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::CardId;

/// A player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Send the whole room to the bottom of the deck.
    AvoidRoom,
    /// Take a monster's full value as damage.
    FightBareHanded(CardId),
    /// Kill a monster with the equipped weapon.
    FightWithWeapon(CardId),
    /// Equip a weapon, discarding the previous one.
    EquipWeapon(CardId),
    /// Drink a potion.
    UsePotion(CardId),
}

impl Action {
    /// The room card this action resolves, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match *self {
            Action::AvoidRoom => None,
            Action::FightBareHanded(id)
            | Action::FightWithWeapon(id)
            | Action::EquipWeapon(id)
            | Action::UsePotion(id) => Some(id),
        }
    }

    /// Whether this action is a fight (the only actions that can kill).
    #[must_use]
    pub fn is_fight(&self) -> bool {
        matches!(self, Action::FightBareHanded(_) | Action::FightWithWeapon(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AvoidRoom => write!(f, "avoid room"),
            Action::FightBareHanded(id) => write!(f, "fight {id} bare-handed"),
            Action::FightWithWeapon(id) => write!(f, "fight {id} with weapon"),
            Action::EquipWeapon(id) => write!(f, "equip {id}"),
            Action::UsePotion(id) => write!(f, "drink {id}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging. Only applied actions are recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Rooms cleared when the action was taken.
    pub room: u32,

    /// Position in the game's action sequence.
    pub sequence: usize,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, room: u32, sequence: usize) -> Self {
        Self {
            action,
            room,
            sequence,
        }
    }
}
