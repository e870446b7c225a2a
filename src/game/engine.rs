//! Game state and round orchestration

use crate::config::MAX_ROUNDS;
use crate::core::{GuessResult, KeyboardState, Word, WordError};
use crate::wordlists::WordEntry;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the game has been won or lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// A submitted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub word: Word,
    pub result: GuessResult,
}

/// Recoverable guess rejections
///
/// The `Display` text is the message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Word must be {expected} letters")]
    InvalidGuessLength { expected: usize, actual: usize },
}

/// Outcome of a guess submission that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The game was already over; nothing changed
    Ignored,
    /// The guess was scored and recorded; carries the status afterwards
    Accepted(GameStatus),
}

/// One game against a fixed solution
#[derive(Debug, Clone)]
pub struct Game {
    entry: WordEntry,
    max_rounds: usize,
    history: Vec<HistoryEntry>,
    keyboard: KeyboardState,
    status: GameStatus,
    message: Option<String>,
    hint_revealed: bool,
    date: Option<NaiveDate>,
}

impl Game {
    /// Start a game with the default round cap
    #[must_use]
    pub fn new(entry: WordEntry) -> Self {
        Self::with_max_rounds(entry, MAX_ROUNDS)
    }

    /// Start a game with a custom round cap (at least one round)
    #[must_use]
    pub fn with_max_rounds(entry: WordEntry, max_rounds: usize) -> Self {
        Self {
            entry,
            max_rounds: max_rounds.max(1),
            history: Vec::new(),
            keyboard: KeyboardState::new(),
            status: GameStatus::Playing,
            message: None,
            hint_revealed: false,
            date: None,
        }
    }

    /// Tag the game with the puzzle day its entry was selected for
    #[must_use]
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Submit a guess
    ///
    /// The guess is trimmed and upper-cased before scoring. Submissions after the game is
    /// over are ignored without error.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidGuessLength` if the guess length differs from the
    /// solution's. The game state is left untouched.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::game::{Game, GameStatus, Submission};
    /// use daily_wordle::wordlists::WordEntry;
    ///
    /// let mut game = Game::new(WordEntry::new("great", "the best guess").unwrap());
    /// assert!(game.submit_guess("nope").is_err());
    /// assert_eq!(game.submit_guess("crane"), Ok(Submission::Accepted(GameStatus::Playing)));
    /// assert_eq!(game.submit_guess("great"), Ok(Submission::Accepted(GameStatus::Won)));
    /// assert_eq!(game.submit_guess("great"), Ok(Submission::Ignored));
    /// ```
    pub fn submit_guess(&mut self, guess: &str) -> Result<Submission, GameError> {
        if self.status.is_over() {
            log::debug!("ignoring guess after game end ({})", self.status);
            return Ok(Submission::Ignored);
        }

        // Length is checked on the guess as typed; upper-casing can change it (ß -> SS)
        let expected = self.word_length();
        let trimmed = guess.trim();
        let actual = trimmed.chars().count();
        if actual != expected {
            return Err(GameError::InvalidGuessLength { expected, actual });
        }
        let normalized = trimmed.to_uppercase();
        if normalized.chars().count() != expected {
            return Err(GameError::InvalidGuessLength { expected, actual });
        }

        // Length already matches the solution, so neither step can fail in practice
        let rejected = |_: WordError| GameError::InvalidGuessLength { expected, actual };
        let word = Word::new(&normalized).map_err(rejected)?;
        let result = GuessResult::evaluate(&word, self.solution()).map_err(rejected)?;
        log::debug!("round {}: {} -> {}", self.history.len() + 1, word, result.to_emoji());

        self.keyboard.fold(&word, &result);
        let solved = result.is_perfect();
        self.history.push(HistoryEntry { word, result });

        if solved {
            self.status = GameStatus::Won;
            self.message = Some(win_message(self.history.len()));
            log::info!("game won in {} rounds", self.history.len());
        } else if self.history.len() >= self.max_rounds {
            self.status = GameStatus::Lost;
            self.message = Some(format!("The word was {}", self.solution()));
            log::info!("game lost after {} rounds", self.history.len());
        } else {
            self.message = None;
        }

        Ok(Submission::Accepted(self.status))
    }

    /// Reinitialize every field for a new solution selected on `date`
    pub fn reset(&mut self, entry: WordEntry, date: Option<NaiveDate>) {
        log::info!("game reset");
        *self = Self::with_max_rounds(entry, self.max_rounds);
        self.date = date;
    }

    /// Reveal the hint; only possible while playing
    ///
    /// Returns the hint if it is (now) revealed.
    pub fn reveal_hint(&mut self) -> Option<&str> {
        if self.status == GameStatus::Playing {
            self.hint_revealed = true;
        }
        self.hint()
    }

    /// The hint, once revealed
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint_revealed.then(|| self.entry.hint())
    }

    #[must_use]
    pub const fn hint_revealed(&self) -> bool {
        self.hint_revealed
    }

    /// Puzzle day the entry was selected for, if known
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        self.entry.word()
    }

    /// Solution length L
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.solution().len()
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Flavor text for the player, separate from the status
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[must_use]
    pub fn rounds_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn rounds_remaining(&self) -> usize {
        self.max_rounds - self.history.len()
    }
}

fn win_message(rounds: usize) -> String {
    match rounds {
        1 => "Hole in one! Got it on the first try.".to_string(),
        2 => "Magnificent! Two guesses.".to_string(),
        n => format!("You got it in {n} guesses."),
    }
}
