//! # scoundrel-engine
//!
//! Rules engine for Scoundrel, a solitaire dungeon crawl played with a
//! trimmed 44-card deck.
//!
//! ## The Game
//!
//! The player works through the deck four cards ("a room") at a time:
//! - Spades and clubs are monsters that deal damage
//! - Diamonds are weapons that soften monster hits
//! - Hearts are potions that heal (one per room)
//!
//! Resolve three cards of a room and the fourth carries into the next.
//! A room can be avoided, but never twice in a row. A weapon can only be
//! used on monsters weaker than the last one it killed. Survive the deck to
//! score your remaining health; die and score minus the monsters left.
//!
//! ## Design Principles
//!
//! 1. **No globals**: state lives in a caller-owned [`GameSession`] (or a
//!    bare [`GameState`] driven through [`RulesEngine`]).
//!
//! 2. **Silent no-ops**: invalid commands change nothing and return `false`.
//!
//! 3. **Explicit reducer**: every action applies its effect, then a fixed
//!    death → room-complete check sequence runs (`rules::lifecycle::settle`).
//!
//! 4. **Deterministic**: seeded ChaCha8 shuffles; `im` persistent vectors
//!    make snapshots cheap.
//!
//! ## Modules
//!
//! - `core`: state, weapon, actions, RNG, configuration
//! - `cards`: card model, classification, deck and room dealing
//! - `rules`: combat, lifecycle, scoring, `RulesEngine`
//! - `session`: `GameSession`
//! - `leaderboard`: score submission contract and in-memory store

pub mod core;
pub mod cards;
pub mod rules;
pub mod session;
pub mod leaderboard;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameOutcome, GameRng, GameRngState, GameState, Phase, Weapon,
};

pub use crate::cards::{classify, Card, CardId, CardKind, Suit};

pub use crate::rules::{calculate_score, GameResult, RulesEngine, Scoundrel};

pub use crate::session::GameSession;

pub use crate::leaderboard::{
    InMemoryLeaderboard, Leaderboard, LeaderboardEntry, PlayerRecord, ScoreSubmission,
};

pub use crate::error::{EngineError, Result};
