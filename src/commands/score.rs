//! Score command
//!
//! Evaluates a single guess against a given solution.

use crate::core::{GuessResult, Word, WordError};

/// A guess and its evaluation
pub struct ScoreResult {
    pub guess: Word,
    pub result: GuessResult,
}

/// Score `guess` against `solution`
///
/// # Errors
///
/// Returns `WordError` if either word is empty or their lengths differ.
pub fn score_guess(guess: &str, solution: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let result = GuessResult::evaluate(&guess, &solution)?;
    Ok(ScoreResult { guess, result })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_guess() {
        let scored = score_guess("speed", "erase").unwrap();
        assert_eq!(scored.guess.text(), "SPEED");
        assert_eq!(scored.result.to_emoji(), "🟨⬛🟨🟨⬛");
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert_eq!(
            score_guess("obx", "great").err(),
            Some(WordError::LengthMismatch {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(score_guess("", "great").err(), Some(WordError::Empty));
    }
}
