//! Scoundrel rules.
//!
//! - `combat`: the four card actions
//! - `lifecycle`: room transitions, death and the post-action reducer
//! - `scoring`: terminal score
//! - `engine`: `RulesEngine` trait and the `Scoundrel` implementation

pub mod combat;
pub mod lifecycle;
pub mod scoring;
pub mod engine;

pub use engine::{GameResult, RulesEngine, Scoundrel};
pub use lifecycle::CARDS_TO_RESOLVE;
pub use scoring::calculate_score;
