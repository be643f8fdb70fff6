//! Seeded randomness for the internally controlled side.
//!
//! An episode is reproducible from `(seed, word position)` alone, so a
//! session can be paused and resumed mid-game without replaying draws.
//!
//! ```
//! use rust_draughts::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.pick(7), b.pick(7));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// ChaCha8 stream tagged with the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..count`, `None` when `count` is zero.
    pub fn pick(&mut self, count: usize) -> Option<usize> {
        (count > 0).then(|| self.inner.gen_range(0..count))
    }

    /// Position in the stream, for pausing an episode.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume the stream exactly where `state` was taken.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Seed plus ChaCha8 word position (a 128-bit counter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng, n: usize) -> Vec<usize> {
        (0..n).filter_map(|_| rng.pick(7)).collect()
    }

    #[test]
    fn test_same_seed_same_picks() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        assert_eq!(draws(&mut a, 50), draws(&mut b, 50));
        assert!(draws(&mut a, 50).iter().all(|&i| i < 7));
    }

    #[test]
    fn test_different_seeds_diverge() {
        assert_ne!(
            draws(&mut GameRng::new(1), 20),
            draws(&mut GameRng::new(2), 20)
        );
    }

    #[test]
    fn test_pick_from_nothing() {
        let mut rng = GameRng::new(0);
        let before = rng.state();

        assert_eq!(rng.pick(0), None);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_resume_mid_stream() {
        let mut rng = GameRng::new(42);
        draws(&mut rng, 30);

        let state = rng.state();
        let expected = draws(&mut rng, 10);
        let mut resumed = GameRng::from_state(&state);

        assert_eq!(draws(&mut resumed, 10), expected);
        assert_eq!(resumed.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRng::new(9).state();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
