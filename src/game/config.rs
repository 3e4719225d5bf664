//! Game configuration

use crate::core::{DEFAULT_WORD_LENGTH, MatchRule};
use thiserror::Error;

/// Attempts per game when none is configured
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Longest word length the board supports
pub const MAX_WORD_LENGTH: usize = 16;

/// Most rows the board supports
pub const MAX_ATTEMPTS_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be between 1 and {MAX_WORD_LENGTH}, got {0}")]
    WordLength(usize),
    #[error("at least one attempt is required")]
    NoAttempts,
    #[error("at most {MAX_ATTEMPTS_LIMIT} attempts are supported, got {0}")]
    TooManyAttempts(usize),
}

/// Board size and feedback rule for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word (`WORD_LENGTH`)
    pub word_length: usize,
    /// Rows on the board (`MAX_ATTEMPTS`)
    pub max_attempts: usize,
    /// How misplaced letters are colored
    pub rule: MatchRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            rule: MatchRule::default(),
        }
    }
}

impl GameConfig {
    /// Check that the board can be built
    ///
    /// # Errors
    /// Returns `ConfigError` for a zero or oversized word length, or an
    /// attempt count outside `1..=MAX_ATTEMPTS_LIMIT`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::WordLength(self.word_length));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::TooManyAttempts(self.max_attempts));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.rule, MatchRule::Membership);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_boards() {
        let config = GameConfig {
            word_length: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::WordLength(0)));

        let config = GameConfig {
            word_length: 17,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::WordLength(17)));

        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoAttempts));

        let config = GameConfig {
            max_attempts: MAX_ATTEMPTS_LIMIT + 1,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyAttempts(MAX_ATTEMPTS_LIMIT + 1))
        );

        let config = GameConfig {
            max_attempts: usize::MAX,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooManyAttempts(usize::MAX)));
        assert!(crate::game::GameSession::new(config).is_err());

        let config = GameConfig {
            max_attempts: MAX_ATTEMPTS_LIMIT,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
