//! Game session: the caller-owned engine instance.
//!
//! A `GameSession` owns one game's state, the rules, the RNG that shuffles
//! each new deck, and the history of applied actions. There is no global
//! store; independent sessions never share anything.
//!
//! ```
//! use scoundrel_engine::{Action, GameSession, Phase};
//!
//! let mut session = GameSession::new(42);
//! session.start_new_game();
//! assert_eq!(session.state().phase, Phase::Playing);
//!
//! // Any legal action changes the state.
//! let action = session.legal_actions()[0];
//! assert!(session.apply(&action));
//! ```
//!
//! Each action is applied to a copy of the state and swapped in only if it
//! took effect, so readers never observe a half-applied action.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::CardId;
use crate::core::{Action, ActionRecord, GameConfig, GameOutcome, GameRng, GameRngState, GameState};
use crate::error::Result;
use crate::rules::{lifecycle, GameResult, RulesEngine, Scoundrel};

/// Serializable checkpoint of a whole session.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct SessionSnapshot {
    config: GameConfig,
    state: GameState,
    rng: GameRngState,
    history: Vector<ActionRecord>,
}

/// One player's game, from menu to game over and again.
#[derive(Clone, Debug)]
pub struct GameSession {
    rules: Scoundrel,
    state: GameState,
    rng: GameRng,
    history: Vector<ActionRecord>,
}

impl GameSession {
    /// Session with default health settings. Starts in the menu.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// Session with custom health settings.
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Session seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::build(GameConfig::default(), GameRng::from_entropy().seed())
    }

    /// Session resuming a hand-built state, e.g. a puzzle layout.
    pub fn with_state(config: GameConfig, state: GameState, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state,
            ..Self::build(config, seed)
        })
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(&config),
            rules: Scoundrel::new(config),
            rng: GameRng::new(seed),
            history: Vector::new(),
        }
    }

    // === Read Access ===

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &Scoundrel {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    /// Applied actions of the current game, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// The `(score, survived, rooms_cleared, monsters_slain)` tuple for the
    /// leaderboard, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    // === Game Lifecycle ===

    /// Shuffle a fresh deck and deal the first room.
    ///
    /// Each game forks the session RNG, so games differ but replay the same
    /// way from the same seed.
    pub fn start_new_game(&mut self) {
        let mut game_rng = self.rng.fork();
        self.state = lifecycle::start_new_game(self.rules.config(), &mut game_rng);
        self.history = Vector::new();
    }

    /// Abandon the current game without scoring it and return to the menu.
    pub fn reset_game(&mut self) {
        info!(phase = ?self.state.phase, "resetting game");
        self.state = GameState::new(self.rules.config());
        self.history = Vector::new();
    }

    // === Player Actions ===

    /// Apply any action. Returns false if it was ignored.
    pub fn apply(&mut self, action: &Action) -> bool {
        let mut next = self.state.clone();
        if !self.rules.apply_action(&mut next, action) {
            let card_in_room = action
                .card()
                .and_then(|id| self.state.find_in_room(id))
                .is_some();
            debug!(%action, card_in_room, "command ignored");
            return false;
        }

        let sequence = self.history.len();
        self.history
            .push_back(ActionRecord::new(*action, self.state.rooms_cleared, sequence));
        self.state = next;
        true
    }

    pub fn avoid_room(&mut self) -> bool {
        self.apply(&Action::AvoidRoom)
    }

    pub fn fight_bare_handed(&mut self, id: CardId) -> bool {
        self.apply(&Action::FightBareHanded(id))
    }

    pub fn fight_with_weapon(&mut self, id: CardId) -> bool {
        self.apply(&Action::FightWithWeapon(id))
    }

    pub fn equip_weapon(&mut self, id: CardId) -> bool {
        self.apply(&Action::EquipWeapon(id))
    }

    pub fn use_potion(&mut self, id: CardId) -> bool {
        self.apply(&Action::UsePotion(id))
    }

    // === Checkpoints ===

    /// Encode the session (config, state, RNG position, history).
    pub fn save(&self) -> Result<Vec<u8>> {
        let snapshot = SessionSnapshot {
            config: self.rules.config().clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
            history: self.history.clone(),
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Restore a session saved with [`GameSession::save`].
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let snapshot: SessionSnapshot = bincode::deserialize(bytes)?;
        snapshot.config.validate()?;
        Ok(Self {
            rules: Scoundrel::new(snapshot.config),
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
            history: snapshot.history,
        })
    }
}
