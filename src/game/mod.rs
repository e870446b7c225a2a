//! Game engine
//!
//! Round orchestration on top of the core scoring types, plus the keystroke buffer that
//! front ends use to assemble guesses.

mod engine;
pub mod input;

pub use engine::{Game, GameError, GameStatus, HistoryEntry, Submission};
pub use input::{GuessBuffer, Key};
