//! Leaderboard contract.
//!
//! The rules never talk to a leaderboard. Once a game is over, the caller
//! turns its [`GameOutcome`](crate::core::GameOutcome) into a
//! [`ScoreSubmission`] and hands it to any `Leaderboard` implementation.
//! `InMemoryLeaderboard` is the reference implementation; a networked
//! backend implements the same trait.

mod entry;
mod memory;

pub use entry::{LeaderboardEntry, PlayerRecord, ScoreSubmission, ANONYMOUS};
pub use memory::InMemoryLeaderboard;

use crate::error::Result;

/// Entries returned by default.
pub const DEFAULT_LIMIT: usize = 100;

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 32;

/// A ranked store of finished games.
pub trait Leaderboard {
    /// Store a finished game.
    fn submit_score(&mut self, submission: ScoreSubmission) -> Result<LeaderboardEntry>;

    /// Top `limit` entries by score, highest first. Ties keep submission order.
    fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry>;

    /// 1-based rank of `score`: one more than the number of strictly higher
    /// scores.
    fn player_rank(&self, score: i32) -> usize;

    /// [`Leaderboard::leaderboard`] with [`DEFAULT_LIMIT`].
    fn top(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard(DEFAULT_LIMIT)
    }
}
