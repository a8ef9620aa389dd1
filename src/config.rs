//! Game configuration

use crate::error::ConfigError;

/// Rounds allowed when nothing else is configured
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

/// Configuration for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: u32,
    /// Seed for the secret generator; `None` draws from the thread RNG
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_rounds: u32) -> Self {
        Self {
            max_rounds,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before any round is played
    ///
    /// # Errors
    /// Returns `ConfigError::NonPositiveRounds` if `max_rounds` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NonPositiveRounds);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.max_rounds, DEFAULT_MAX_ROUNDS);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_rounds_rejected() {
        assert_eq!(
            GameConfig::new(0).validate(),
            Err(ConfigError::NonPositiveRounds)
        );
    }

    #[test]
    fn single_round_allowed() {
        assert!(GameConfig::new(1).validate().is_ok());
    }

    #[test]
    fn with_seed_sets_seed() {
        let config = GameConfig::new(5).with_seed(17);
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.max_rounds, 5);
    }
}
