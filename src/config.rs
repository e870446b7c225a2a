//! Game configuration
//!
//! Settings shared by every front end, plus the configuration error type. Configuration
//! faults are fatal at startup; nothing here is recoverable mid-game.

use crate::wordlists::EntryError;
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Default number of guesses per game
pub const MAX_ROUNDS: usize = 6;

/// Default title used in share text
pub const DEFAULT_TITLE: &str = "Daily Wordle";

/// Errors raised while validating configuration or loading word lists
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: the word list is empty")]
    EmptyWordList,

    #[error("invalid configuration: word list entry on line {line}: {source}")]
    InvalidEntry {
        line: usize,
        #[source]
        source: EntryError,
    },

    #[error("invalid configuration: a game needs at least one round")]
    ZeroRounds,

    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The date day numbers are counted from (2024-01-01)
///
/// # Panics
/// Will not panic - the date is a valid calendar date.
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date")
}

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Title shown in the header and share text
    pub title: String,
    /// Guesses allowed before the game is lost
    pub max_rounds: usize,
    /// Day zero of the daily rotation
    pub epoch: NaiveDate,
    /// Optional link appended to share text
    pub share_link: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            max_rounds: MAX_ROUNDS,
            epoch: default_epoch(),
            share_link: None,
        }
    }
}

impl GameConfig {
    /// Check the settings can host a game
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroRounds` if `max_rounds` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.title, "Daily Wordle");
        assert_eq!(config.max_rounds, 6);
        assert_eq!(config.epoch.to_string(), "2024-01-01");
        assert!(config.share_link.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_rounds_rejected() {
        let config = GameConfig {
            max_rounds: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroRounds)));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::EmptyWordList.to_string(),
            "invalid configuration: the word list is empty"
        );
        let err = ConfigError::InvalidEntry {
            line: 3,
            source: EntryError::NonAlphabetic("GR8".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: word list entry on line 3: word 'GR8' must contain only letters A-Z"
        );
    }
}
