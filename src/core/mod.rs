//! Core domain types for the puzzle
//!
//! Words, per-letter states, guess scoring and keyboard accumulation. Everything here is
//! pure and synchronous.

mod evaluation;
mod keyboard;
mod letter;
mod word;

pub use evaluation::GuessResult;
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use letter::LetterState;
pub use word::{Word, WordError};
