//! Game state: the single source of truth for one game.
//!
//! ## GameState
//!
//! Everything the presentation layer renders:
//! - Deck (front = next dealt), room, discard
//! - Health and the equipped weapon
//! - Per-room flags (resolved cards, avoid, potion)
//! - Phase, score and run counters
//!
//! Deck and discard use `im` persistent vectors so a full snapshot is an
//! O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use super::weapon::Weapon;
use crate::cards::{Card, CardId, CardKind, Room, ROOM_SIZE};
use crate::error::Result;

/// Game phase.
///
/// `Menu -> Playing -> GameOver`. A new game always starts from a fresh
/// state, never by leaving `GameOver`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    /// Reserved. No transition enters this phase.
    RoomClear,
    GameOver,
}

/// Final tuple handed to the leaderboard once a game ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub score: i32,
    pub survived: bool,
    pub rooms_cleared: u32,
    pub monsters_slain: u32,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Cards ===
    /// Undealt cards; index 0 is dealt next.
    pub deck: Vector<Card>,

    /// Cards presented to the player, at most four.
    pub room: Room,

    /// Resolved cards. Audit only; never read by the rules.
    pub discard: Vector<Card>,

    // === Player ===
    pub health: i32,
    pub max_health: i32,
    pub weapon: Option<Weapon>,

    // === Room Flags ===
    /// Ids resolved in the current room.
    pub selected_cards: SmallVec<[CardId; ROOM_SIZE]>,

    /// False right after an avoid; restored when a room is finished.
    pub can_avoid: bool,

    /// Set by the first potion drunk in a room, cleared on each new room.
    pub potion_used_this_room: bool,

    /// Whether the most recently resolved card was a potion.
    pub last_card_was_potion: bool,

    // === Progression ===
    pub phase: Phase,

    /// Set once, when the game ends.
    pub score: Option<i32>,

    pub rooms_cleared: u32,
    pub monsters_slain: u32,
}

impl GameState {
    /// Pristine pre-game state (`Phase::Menu`, empty deck and room).
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            deck: Vector::new(),
            room: Room::new(),
            discard: Vector::new(),
            health: config.starting_health,
            max_health: config.max_health,
            weapon: None,
            selected_cards: SmallVec::new(),
            can_avoid: true,
            potion_used_this_room: false,
            last_card_was_potion: false,
            phase: Phase::Menu,
            score: None,
            rooms_cleared: 0,
            monsters_slain: 0,
        }
    }

    /// A game in progress with an explicit room and deck.
    ///
    /// Useful for puzzles, tutorials and tests that need a known layout.
    #[must_use]
    pub fn with_cards(
        config: &GameConfig,
        room: impl IntoIterator<Item = Card>,
        deck: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            room: room.into_iter().collect(),
            deck: deck.into_iter().collect(),
            phase: Phase::Playing,
            ..Self::new(config)
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    // === Room Queries ===

    /// Locate a room card by id.
    #[must_use]
    pub fn find_in_room(&self, id: CardId) -> Option<(usize, Card)> {
        self.room
            .iter()
            .enumerate()
            .find(|(_, card)| card.id() == id)
            .map(|(index, card)| (index, *card))
    }

    /// Locate a room card by id, requiring a specific kind.
    #[must_use]
    pub fn find_in_room_of_kind(&self, id: CardId, kind: CardKind) -> Option<(usize, Card)> {
        self.find_in_room(id).filter(|(_, card)| card.kind() == kind)
    }

    /// Number of cards resolved in the current room.
    #[must_use]
    pub fn resolved_in_room(&self) -> usize {
        self.selected_cards.len()
    }

    // === Accounting ===

    /// Every card the state holds, wherever it sits.
    ///
    /// Always 44 for a dealt game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let weapon_cards = self
            .weapon
            .as_ref()
            .map_or(0, |weapon| 1 + weapon.kill_stack.len());
        self.deck.len() + self.room.len() + self.discard.len() + weapon_cards
    }

    // === Outcome ===

    /// Final result, available once the game is over and scored.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_game_over() {
            return None;
        }
        let score = self.score?;
        Some(GameOutcome {
            score,
            survived: self.health > 0,
            rooms_cleared: self.rooms_cleared,
            monsters_slain: self.monsters_slain,
        })
    }

    // === Snapshots ===

    /// Encode a full snapshot with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
