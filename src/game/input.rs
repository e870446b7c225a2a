//! Keystroke assembly
//!
//! Physical and on-screen keys both reduce to `Key`. A `GuessBuffer` collects letters up to
//! the solution length; Enter hands the buffer to the game.

/// A normalized input key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// An uppercase letter A-Z, or `.`
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Map a typed character to a key, upper-casing letters
    ///
    /// Returns `None` for characters that cannot appear in a guess.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='z' | 'A'..='Z' | '.' => Some(Self::Letter(c.to_ascii_uppercase())),
            '\n' | '\r' => Some(Self::Enter),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            _ => None,
        }
    }
}

/// The guess being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    text: String,
    capacity: usize,
}

impl GuessBuffer {
    /// Create a buffer that holds at most `capacity` letters
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    /// Append a letter if there is room
    ///
    /// Returns whether the letter was added.
    pub fn push(&mut self, letter: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.text.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Clear and change capacity, for a new game with a different word length
    pub fn reset(&mut self, capacity: usize) {
        self.text.clear();
        self.capacity = capacity;
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of letters typed
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
