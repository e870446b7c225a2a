//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess and press Enter.

use crate::game::{Game, GameStatus, Submission};
use crate::output::{print_board, print_keyboard, print_message};
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for on one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Hint,
    New,
    Share,
    Quit,
}

impl Command {
    /// Interpret one input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":hint" | "?" => Self::Hint,
            ":new" | ":reset" => Self::New,
            ":share" => Self::Share,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => Self::Guess(line.trim().to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails or today's word cannot be selected.
pub fn run_simple(session: &Session) -> Result<()> {
    let stdin = io::stdin();
    run_with_input(session, &mut stdin.lock())
}

/// Run the line-based game reading commands from `input`
///
/// # Errors
///
/// Returns an error if reading input fails or today's word cannot be selected.
pub fn run_with_input<R: BufRead>(session: &Session, input: &mut R) -> Result<()> {
    let mut game = session.start_game()?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", session.config().title);
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_intro(&game);

    loop {
        let Some(line) = prompt(input, &format!("Guess {}", game.rounds_used() + 1))? else {
            // End of input
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Hint => match game.reveal_hint() {
                Some(hint) => println!("💡 Hint: {}", hint.bright_cyan()),
                None => println!("No hint once the game is over."),
            },
            Command::New => {
                session.reset_game(&mut game)?;
                println!("\n🔄 New game started!");
                print_intro(&game);
            }
            Command::Share => match session.share(&game) {
                Some(text) => println!("\n{text}\n"),
                None => println!("Finish the game to share your result."),
            },
            Command::Guess(guess) => match game.submit_guess(&guess) {
                Ok(Submission::Ignored) => {
                    println!("The game is over. Type ':new' to play again or ':quit' to exit.");
                }
                Ok(Submission::Accepted(status)) => {
                    print_board(&game);
                    print_keyboard(&game);
                    print_message(&game);
                    if status.is_over() {
                        print_finish(session, &game);
                    }
                }
                Err(err) => println!("{}", err.to_string().red()),
            },
        }
    }
}

fn print_intro(game: &Game) {
    println!(
        "Guess the {}-letter word in {} tries.",
        game.word_length(),
        game.max_rounds()
    );
    println!("Commands: ':hint', ':new', ':share', ':quit'\n");
}

fn print_finish(session: &Session, game: &Game) {
    if game.status() == GameStatus::Won {
        println!("\n{}", "═".repeat(62).bright_cyan());
    } else {
        println!("\n{}", "═".repeat(62).bright_black());
    }
    if let Some(text) = session.share(game) {
        println!("{text}");
    }
    println!("\nType ':new' to play again or ':quit' to exit.\n");
}

/// Read one trimmed line, or `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
