//! Formatting utilities for terminal output

use crate::core::{GuessResult, KEYBOARD_ROWS, KeyboardState, LetterState, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(word: &Word, result: &GuessResult) -> String {
    word.letters()
        .iter()
        .zip(result.states())
        .map(|(&letter, &state)| tile(letter, state).to_string())
        .collect()
}

/// Placeholder row for a round not yet played
#[must_use]
pub fn empty_row(length: usize) -> String {
    " _ ".repeat(length)
}

/// Render the keyboard rows, coloring every guessed letter
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| match keyboard.get(letter) {
                    Some(state) => tile(letter, state).to_string(),
                    None => format!(" {letter} "),
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}
