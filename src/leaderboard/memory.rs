//! In-memory leaderboard.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::entry::{LeaderboardEntry, PlayerRecord, ScoreSubmission};
use super::{Leaderboard, MAX_NAME_LEN};
use crate::error::{EngineError, Result};

/// Leaderboard held in process memory.
///
/// Also keeps a [`PlayerRecord`] per player name.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLeaderboard {
    entries: Vec<LeaderboardEntry>,
    players: FxHashMap<String, PlayerRecord>,
    next_id: u64,
}

impl InMemoryLeaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stats for a player who has submitted at least once.
    #[must_use]
    pub fn player_record(&self, player_name: &str) -> Option<&PlayerRecord> {
        self.players.get(player_name)
    }
}

impl Leaderboard for InMemoryLeaderboard {
    fn submit_score(&mut self, submission: ScoreSubmission) -> Result<LeaderboardEntry> {
        if submission.player_name.chars().count() > MAX_NAME_LEN {
            warn!(name = %submission.player_name, "rejecting long player name");
            return Err(EngineError::Leaderboard(format!(
                "player name longer than {MAX_NAME_LEN} characters"
            )));
        }

        let id = self.next_id;
        self.next_id += 1;

        let entry = LeaderboardEntry {
            id,
            player_name: submission.player_name,
            score: submission.score,
            survived: submission.survived,
            rooms_cleared: submission.rooms_cleared,
            monsters_slain: submission.monsters_slain,
            submitted_at: id,
        };

        self.players
            .entry(entry.player_name.clone())
            .or_insert_with(|| PlayerRecord::new(entry.player_name.clone()))
            .record_game(entry.score);
        self.entries.push(entry.clone());

        debug!(id, name = %entry.player_name, score = entry.score, "score submitted");
        Ok(entry)
    }

    fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.submitted_at.cmp(&b.submitted_at)));
        ranked.truncate(limit);
        ranked
    }

    fn player_rank(&self, score: i32) -> usize {
        1 + self.entries.iter().filter(|entry| entry.score > score).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, score: i32) -> ScoreSubmission {
        ScoreSubmission {
            player_name: name.to_string(),
            score,
            survived: score > 0,
            rooms_cleared: 3,
            monsters_slain: 5,
        }
    }

    #[test]
    fn test_submit_assigns_ids() {
        let mut board = InMemoryLeaderboard::new();

        let first = board.submit_score(submission("a", 5)).unwrap();
        let second = board.submit_score(submission("b", 7)).unwrap();

        assert_eq!(first.id, 0);
        assert_eq!(second.id, 1);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_long_name_rejected() {
        let mut board = InMemoryLeaderboard::new();
        let name = "x".repeat(MAX_NAME_LEN + 1);

        let err = board.submit_score(submission(&name, 5)).unwrap_err();
        assert!(matches!(err, EngineError::Leaderboard(_)));
        assert!(board.is_empty());
    }

    #[test]
    fn test_player_record_updates() {
        let mut board = InMemoryLeaderboard::new();
        board.submit_score(submission("rogue", 3)).unwrap();
        board.submit_score(submission("rogue", 11)).unwrap();
        board.submit_score(submission("rogue", -8)).unwrap();

        let record = board.player_record("rogue").unwrap();
        assert_eq!(record.games_played, 3);
        assert_eq!(record.best_score, Some(11));
        assert!(board.player_record("nobody").is_none());
    }
}
