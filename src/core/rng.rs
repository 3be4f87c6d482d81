//! Seeded randomness for deck shuffles.
//!
//! A session owns one `GameRng` built from its seed. Every new game draws a
//! child stream with [`GameRng::fork`], so game N of a session always sees
//! the same deck no matter how the previous games were played.
//!
//! ```
//! use scoundrel_engine::core::GameRng;
//!
//! let mut session_rng = GameRng::new(42);
//! let mut first = session_rng.fork();
//! let second = session_rng.fork();
//! assert_ne!(first.seed(), second.seed());
//!
//! let mut cards: Vec<u8> = (2..=14).collect();
//! let mut again = cards.clone();
//! first.shuffle(&mut cards);
//! GameRng::new(42).fork().shuffle(&mut again);
//! assert_eq!(cards, again);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment used to spread child seeds apart.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream plus the bookkeeping needed to fork and checkpoint it.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed drawn from the thread-local OS-seeded generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the next child stream.
    ///
    /// The child depends only on this RNG's seed and how many children it
    /// has produced, never on how far its own stream has advanced.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    /// Uniform in-place shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Pick one element uniformly, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Capture a checkpoint.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume exactly where [`GameRng::state`] left off.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng.forks = state.forks;
        rng
    }
}

/// Checkpoint of a [`GameRng`]. Constant size however long the stream ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// Position in the ChaCha8 keystream.
    pub word_pos: u128,
    /// Children forked so far.
    pub forks: u64,
}
