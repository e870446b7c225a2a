//! Guess scoring
//!
//! Turns a guess and a solution into one `LetterState` per position using Wordle's exact
//! feedback rules, including duplicate letters.

use super::{LetterState, Word, WordError};

/// Feedback for a whole guess, one state per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult(Vec<LetterState>);

impl GuessResult {
    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as correct and consume those solution letters
    /// 2. Second pass: for every other position, consume the leftmost unconsumed occurrence
    ///    of the letter in the solution and mark it present
    ///
    /// Each solution letter is consumed at most once, so a guess never earns more present or
    /// correct tiles for a letter than the solution contains.
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{GuessResult, LetterState, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("slate").unwrap();
    /// let result = GuessResult::evaluate(&guess, &solution).unwrap();
    ///
    /// assert_eq!(result.states()[2], LetterState::Correct);
    /// assert_eq!(result.to_emoji(), "⬛⬛🟩⬛🟩");
    /// ```
    pub fn evaluate(guess: &Word, solution: &Word) -> Result<Self, WordError> {
        if guess.len() != solution.len() {
            return Err(WordError::LengthMismatch {
                expected: solution.len(),
                actual: guess.len(),
            });
        }

        let mut states = vec![LetterState::Absent; solution.len()];
        let mut remaining: Vec<Option<char>> =
            solution.letters().iter().copied().map(Some).collect();

        // First pass: exact position matches
        for (i, (g, s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
            if g == s {
                states[i] = LetterState::Correct;
                remaining[i] = None;
            }
        }

        // Second pass: displaced letters, leftmost unconsumed occurrence first
        for (i, &letter) in guess.letters().iter().enumerate() {
            if states[i] == LetterState::Correct {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                states[i] = LetterState::Present;
                *slot = None;
            }
        }

        Ok(Self(states))
    }

    /// States in guess order
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True only for a zero-length result
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&state| state == LetterState::Correct)
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert to a share-grid row such as "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|state| state.emoji()).collect()
    }
}
