//! Session configuration.
//!
//! - `RewardConfig`: reward signal for the externally controlled side
//! - `SessionConfig`: seed, step limit, illegal-selection rule, rewards
//!
//! Both are plain serde structs with `with_*` builder setters, so a training
//! harness can load them from JSON or build them in code.

use serde::{Deserialize, Serialize};

/// Reward signal reported to the externally controlled side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Reward for an accepted simple move.
    pub step: f64,

    /// Reward per opposing piece captured by an accepted jump chain.
    pub capture: f64,

    /// Reward for a selection that is not a legal destination.
    pub illegal: f64,

    /// Reward when the episode ends with the external side winning.
    pub win: f64,

    /// Reward when the episode ends with the external side losing.
    pub loss: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            capture: 2.0,
            illegal: -0.1,
            win: 100.0,
            loss: -100.0,
        }
    }
}

impl RewardConfig {
    pub fn with_step(mut self, reward: f64) -> Self {
        self.step = reward;
        self
    }

    pub fn with_capture(mut self, reward: f64) -> Self {
        self.capture = reward;
        self
    }

    pub fn with_illegal(mut self, reward: f64) -> Self {
        self.illegal = reward;
        self
    }

    pub fn with_outcome(mut self, win: f64, loss: f64) -> Self {
        self.win = win;
        self.loss = loss;
        self
    }
}

/// Game session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the internal side's RNG.
    /// Same seed and same selections produce the same game.
    pub seed: u64,

    /// Accepted steps after which the episode is truncated (None = unlimited).
    pub max_steps: Option<u32>,

    /// Consecutive rejected selections that forfeit the game for the
    /// external side (None = never). `Some(0)` and `Some(1)` both forfeit on
    /// the first rejection.
    pub illegal_move_limit: Option<u32>,

    /// Reward scheme.
    pub rewards: RewardConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_steps: Some(1024),
            illegal_move_limit: None,
            rewards: RewardConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom step limit.
    pub fn with_max_steps(mut self, max_steps: Option<u32>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Enable the forfeit rule after `limit` consecutive rejected selections.
    pub fn with_illegal_move_limit(mut self, limit: u32) -> Self {
        self.illegal_move_limit = Some(limit);
        self
    }

    /// Create a new config with a custom reward scheme.
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_steps, Some(1024));
        assert_eq!(config.illegal_move_limit, None);
        assert_eq!(config.rewards.capture, 2.0);
        assert_eq!(config.rewards.illegal, -0.1);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_seed(7)
            .with_max_steps(None)
            .with_illegal_move_limit(3)
            .with_rewards(RewardConfig::default().with_outcome(1.0, -1.0));

        assert_eq!(config.seed, 7);
        assert_eq!(config.max_steps, None);
        assert_eq!(config.illegal_move_limit, Some(3));
        assert_eq!(config.rewards.win, 1.0);
        assert_eq!(config.rewards.loss, -1.0);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_illegal_move_limit(2);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
