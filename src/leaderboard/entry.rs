//! Leaderboard records.

use serde::{Deserialize, Serialize};

use crate::core::GameOutcome;

/// Name used when a player submits without one.
pub const ANONYMOUS: &str = "Anonymous";

/// A finished game ready to be ranked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub player_name: String,
    pub score: i32,
    pub survived: bool,
    pub rooms_cleared: u32,
    pub monsters_slain: u32,
}

impl ScoreSubmission {
    /// Build a submission from a game outcome. Blank names become
    /// [`ANONYMOUS`].
    #[must_use]
    pub fn new(player_name: &str, outcome: &GameOutcome) -> Self {
        let trimmed = player_name.trim();
        let player_name = if trimmed.is_empty() { ANONYMOUS } else { trimmed };

        Self {
            player_name: player_name.to_string(),
            score: outcome.score,
            survived: outcome.survived,
            rooms_cleared: outcome.rooms_cleared,
            monsters_slain: outcome.monsters_slain,
        }
    }
}

/// A stored leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub player_name: String,
    pub score: i32,
    pub survived: bool,
    pub rooms_cleared: u32,
    pub monsters_slain: u32,
    /// Monotonic submission sequence.
    pub submitted_at: u64,
}

/// Local player stats: best score and games played.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_name: String,
    pub best_score: Option<i32>,
    pub games_played: u32,
}

impl PlayerRecord {
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Count a finished game. Returns true when `score` is a new best.
    pub fn record_game(&mut self, score: i32) -> bool {
        self.games_played += 1;
        if self.best_score.is_some_and(|best| score <= best) {
            return false;
        }
        self.best_score = Some(score);
        true
    }
}
