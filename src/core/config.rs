//! Game configuration.
//!
//! Only health is tunable. Room size, cards resolved per room and the deck
//! composition are fixed rule constants (see `cards::deck` and `rules`).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Default starting and maximum health.
pub const DEFAULT_HEALTH: i32 = 20;

/// Health settings for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Health at the start of a game.
    pub starting_health: i32,

    /// Upper bound for healing; also the threshold for the potion bonus.
    pub max_health: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: DEFAULT_HEALTH,
            max_health: DEFAULT_HEALTH,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (20/20).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the maximum health.
    #[must_use]
    pub fn with_max_health(mut self, health: i32) -> Self {
        self.max_health = health;
        self
    }

    /// Check that `0 < starting_health <= max_health`.
    pub fn validate(&self) -> Result<()> {
        if self.max_health <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "max_health must be positive, got {}",
                self.max_health
            )));
        }
        if self.starting_health <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "starting_health must be positive, got {}",
                self.starting_health
            )));
        }
        if self.starting_health > self.max_health {
            return Err(EngineError::InvalidConfig(format!(
                "starting_health {} exceeds max_health {}",
                self.starting_health, self.max_health
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.starting_health, 20);
        assert_eq!(config.max_health, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new().with_max_health(30).with_starting_health(25);

        assert_eq!(config.max_health, 30);
        assert_eq!(config.starting_health, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_health() {
        assert!(GameConfig::new().with_max_health(0).validate().is_err());
        assert!(GameConfig::new().with_starting_health(0).validate().is_err());
        assert!(GameConfig::new().with_starting_health(21).validate().is_err());
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_starting_health(15);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
