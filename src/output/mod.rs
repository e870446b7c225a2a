//! Terminal output formatting
//!
//! Display utilities for the line-based game, command results and share text.

pub mod display;
pub mod formatters;
pub mod share;

pub use display::{print_board, print_keyboard, print_message, print_schedule, print_score};
pub use share::share_text;
