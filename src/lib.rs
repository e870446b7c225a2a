//! Daily Wordle
//!
//! A daily word-guessing puzzle: one curated word (with a hint) per calendar day, six
//! guesses, per-letter feedback and a colored keyboard.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use daily_wordle::core::{GuessResult, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let solution = Word::new("great").unwrap();
//!
//! let result = GuessResult::evaluate(&guess, &solution).unwrap();
//! println!("{}", result.to_emoji());
//! ```

// Core domain types
pub mod core;

// Settings and configuration errors
pub mod config;

// Game state machine and input buffer
pub mod game;

// Word lists and daily selection
pub mod wordlists;

// Word list + config + date
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
