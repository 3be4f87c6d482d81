//! Rules engine trait and the Scoundrel rules.
//!
//! `RulesEngine` is the seam between game state and whoever drives it (a
//! session, a UI, a search agent):
//! - What actions are legal
//! - How actions modify state
//! - Win/loss conditions

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{combat, lifecycle};
use crate::cards::CardKind;
use crate::core::{Action, GameConfig, GameState};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The deck ran out with the player alive.
    Survived { score: i32 },
    /// Health reached zero.
    Died { score: i32 },
}

impl GameResult {
    #[must_use]
    pub fn score(&self) -> i32 {
        match *self {
            GameResult::Survived { score } | GameResult::Died { score } => score,
        }
    }

    #[must_use]
    pub fn survived(&self) -> bool {
        matches!(self, GameResult::Survived { .. })
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if the player can't act
/// - `apply_action`: Must be deterministic; returns false for ignored commands
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Every action that would change `state` if applied.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action, including any room or phase transition it triggers.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> bool;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Whether `action` is currently legal.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }
}

/// Scoundrel rules.
#[derive(Clone, Debug, Default)]
pub struct Scoundrel {
    config: GameConfig,
}

impl Scoundrel {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for Scoundrel {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if !state.is_playing() {
            return vec![];
        }

        let mut actions = Vec::new();

        if state.can_avoid && state.selected_cards.is_empty() {
            actions.push(Action::AvoidRoom);
        }

        for card in &state.room {
            let id = card.id();
            match card.kind() {
                CardKind::Monster => {
                    actions.push(Action::FightBareHanded(id));
                    if combat::can_fight_with_weapon(state, card) {
                        actions.push(Action::FightWithWeapon(id));
                    }
                }
                CardKind::Weapon => actions.push(Action::EquipWeapon(id)),
                CardKind::Potion => actions.push(Action::UsePotion(id)),
            }
        }

        actions
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> bool {
        if !state.is_playing() {
            debug!(%action, phase = ?state.phase, "action outside play ignored");
            return false;
        }

        let applied = match *action {
            Action::AvoidRoom => return lifecycle::avoid_room(state),
            Action::FightBareHanded(id) => combat::fight_bare_handed(state, id),
            Action::FightWithWeapon(id) => combat::fight_with_weapon(state, id),
            Action::EquipWeapon(id) => combat::equip_weapon(state, id),
            Action::UsePotion(id) => combat::use_potion(state, id),
        };

        if applied {
            lifecycle::settle(state, action.is_fight());
        }
        applied
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        let score = state.score?;
        if !state.is_game_over() {
            return None;
        }

        Some(if state.health > 0 {
            GameResult::Survived { score }
        } else {
            GameResult::Died { score }
        })
    }
}
