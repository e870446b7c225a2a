//! Daily word lists
//!
//! The curated solution list (embedded at build time or loaded from a file) and the
//! date-based selection of today's entry.

mod embedded;
pub mod loader;
pub mod selector;

pub use embedded::{DAILY_WORDS, DAILY_WORDS_COUNT};

use crate::config::ConfigError;
use crate::core::Word;
use chrono::NaiveDate;
use thiserror::Error;

/// Why a single word list entry was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("word is empty")]
    EmptyWord,
    #[error("word '{0}' must contain only letters A-Z")]
    NonAlphabetic(String),
}

/// A solution word and its hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: Word,
    hint: String,
}

impl WordEntry {
    /// Create an entry, normalizing the word to upper case
    ///
    /// # Errors
    /// Returns `EntryError` if the word is empty or contains anything but ASCII letters.
    pub fn new(word: &str, hint: impl Into<String>) -> Result<Self, EntryError> {
        // Word::new only fails on empty input
        let word = Word::new(word).map_err(|_| EntryError::EmptyWord)?;

        if !word.is_alphabetic() {
            return Err(EntryError::NonAlphabetic(word.text().to_string()));
        }

        Ok(Self {
            word,
            hint: hint.into(),
        })
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }
}

/// A validated, non-empty, ordered list of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Wrap a list of entries
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` if `entries` is empty.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        Ok(Self { entries })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// Returns `ConfigError` if an embedded entry is invalid or the list is empty.
    pub fn embedded() -> Result<Self, ConfigError> {
        let entries = DAILY_WORDS
            .iter()
            .enumerate()
            .map(|(i, &(word, hint))| {
                WordEntry::new(word, hint).map_err(|source| ConfigError::InvalidEntry {
                    line: i + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: emptiness is rejected at construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a calendar date
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` if the list is empty.
    pub fn entry_for(&self, date: NaiveDate, epoch: NaiveDate) -> Result<&WordEntry, ConfigError> {
        selector::select_entry(&self.entries, date, epoch)
    }
}
