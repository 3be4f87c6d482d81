//! Engine error type.
//!
//! Player actions never fail: an invalid command is ignored and reported as
//! `false`. Errors only come from the surfaces around the rules: bad
//! configuration, unparseable card ids, snapshot decoding, and leaderboard
//! submission.

/// Errors produced outside the action path.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Configuration values break a health invariant.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A card id string did not match `<suit>-<rank>`.
    #[error("invalid card id: {0:?}")]
    InvalidCardId(String),

    /// Snapshot encoding or decoding failed.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// The leaderboard rejected a submission.
    #[error("leaderboard error: {0}")]
    Leaderboard(String),
}

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
