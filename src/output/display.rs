//! Display functions for the line-based front end and commands

use super::formatters::{empty_row, guess_row, keyboard_rows};
use crate::commands::ScheduleDay;
use crate::core::{GuessResult, Word};
use crate::game::{Game, GameStatus};
use colored::Colorize;

/// Print the board: played rows, then placeholders for the remaining rounds
pub fn print_board(game: &Game) {
    println!();
    for entry in game.history() {
        println!("  {}", guess_row(&entry.word, &entry.result));
    }
    for _ in 0..game.rounds_remaining() {
        println!("  {}", empty_row(game.word_length()).bright_black());
    }
    println!();
}

/// Print the keyboard with letter highlighting
pub fn print_keyboard(game: &Game) {
    for row in keyboard_rows(game.keyboard()) {
        println!("  {row}");
    }
    println!();
}

/// Print the game message, if any, styled by outcome
pub fn print_message(game: &Game) {
    if let Some(message) = game.message() {
        let styled = match game.status() {
            GameStatus::Won => message.green().bold(),
            GameStatus::Lost => message.red().bold(),
            GameStatus::Playing => message.normal(),
        };
        println!("{styled}");
    }
}

/// Print a single scored guess
pub fn print_score(guess: &Word, result: &GuessResult) {
    println!("{}  {}", guess_row(guess, result), result.to_emoji());
}

/// Print the upcoming daily rotation
pub fn print_schedule(days: &[ScheduleDay]) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(" {}", "UPCOMING WORDS".bright_cyan().bold());
    println!("{}", "─".repeat(50).cyan());

    for day in days {
        println!(
            "  {}  #{:<4} {:<10} {}",
            day.date.format("%Y-%m-%d"),
            day.day_number,
            day.word.bright_yellow().bold(),
            day.hint.bright_black()
        );
    }
    println!();
}
