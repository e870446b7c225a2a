//! Per-letter tile states
//!
//! A `LetterState` is the feedback for one position of a guess. States are totally ordered
//! by strength (`Absent < Present < Correct`) so keyboard highlighting can keep the strongest
//! state ever seen for a letter.

use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Letter does not occur in the (remaining) solution letters
    Absent,
    /// Letter occurs in the solution, but at another position
    Present,
    /// Letter is at the right position
    Correct,
}

impl LetterState {
    /// All states, weakest first
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Numeric strength used for keyboard accumulation
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Whether `self` should replace `other` when accumulating keyboard state
    #[inline]
    #[must_use]
    pub const fn is_stronger_than(self, other: Self) -> bool {
        self.rank() > other.rank()
    }

    /// Share-grid square for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬛',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Lowercase name, as shown to players
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }
}

impl PartialOrd for LetterState {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LetterState {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_strictly_increasing() {
        assert!(LetterState::Absent.rank() < LetterState::Present.rank());
        assert!(LetterState::Present.rank() < LetterState::Correct.rank());
    }

    #[test]
    fn ordering_follows_rank() {
        let mut states = vec![
            LetterState::Correct,
            LetterState::Absent,
            LetterState::Present,
        ];
        states.sort();
        assert_eq!(states, LetterState::ALL.to_vec());
        assert_eq!(
            LetterState::ALL.iter().max(),
            Some(&LetterState::Correct)
        );
    }

    #[test]
    fn stronger_than_is_strict() {
        assert!(LetterState::Correct.is_stronger_than(LetterState::Present));
        assert!(LetterState::Present.is_stronger_than(LetterState::Absent));
        assert!(!LetterState::Present.is_stronger_than(LetterState::Present));
        assert!(!LetterState::Absent.is_stronger_than(LetterState::Correct));
    }

    #[test]
    fn emoji_and_names() {
        assert_eq!(LetterState::Correct.emoji(), '🟩');
        assert_eq!(LetterState::Present.emoji(), '🟨');
        assert_eq!(LetterState::Absent.emoji(), '⬛');
        assert_eq!(LetterState::Present.to_string(), "present");
    }
}
