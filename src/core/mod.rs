//! Core engine types: state, weapon, actions, RNG, configuration.

pub mod rng;
pub mod config;
pub mod action;
pub mod weapon;
pub mod state;

pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_HEALTH};
pub use action::{Action, ActionRecord};
pub use weapon::{Weapon, UNRESTRICTED_TARGET};
pub use state::{GameOutcome, GameState, Phase};
