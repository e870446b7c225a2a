//! Keyboard highlighting state
//!
//! Accumulates the strongest `LetterState` seen for each letter over a game.

use super::{GuessResult, LetterState, Word};
use rustc_hash::FxHashMap;

/// On-screen keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM."];

/// Strongest observed state per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterState>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the keyboard state
    ///
    /// A letter with no recorded state takes the new one. Otherwise the recorded state is
    /// replaced only by a strictly stronger one, so a letter never regresses.
    pub fn fold(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, &state) in guess.letters().iter().zip(result.states()) {
            self.letters
                .entry(letter)
                .and_modify(|prev| {
                    if state.is_stronger_than(*prev) {
                        *prev = state;
                    }
                })
                .or_insert(state);
        }
    }

    /// State for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterState> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Number of letters with a recorded state
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Recorded letters with their states, sorted alphabetically
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, LetterState)> {
        let mut entries: Vec<_> = self.letters.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }
}
