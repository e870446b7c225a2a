//! Daily Wordle - CLI
//!
//! Play today's puzzle in a TUI or on the plain command line.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use daily_wordle::{
    commands::{build_schedule, run_simple, score_guess},
    config::GameConfig,
    output::{print_schedule, print_score},
    session::Session,
    wordlists::{WordList, loader::load_from_file},
};
use env_logger::Env;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "A daily word puzzle: guess today's word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file ('WORD|hint' per line); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Play the puzzle of this day (YYYY-MM-DD) instead of today
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Title shown in the header and share text
    #[arg(short, long, global = true)]
    title: Option<String>,

    /// Link appended to the share text
    #[arg(short, long, global = true)]
    link: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score one guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The solution word
        solution: String,
    },

    /// Show which word each upcoming day selects
    Schedule {
        /// Number of days to list
        #[arg(short = 'n', long, default_value = "7")]
        days: u64,
    },
}

/// Load the word list named by `--words`, or the built-in one
fn load_word_list(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(WordList::embedded()?),
    }
}

/// Word list, settings and date from the command line
fn build_session(cli: &Cli) -> Result<Session> {
    let list = load_word_list(cli.words.as_deref())?;
    let mut config = GameConfig::default();
    if let Some(title) = &cli.title {
        config.title.clone_from(title);
    }
    config.share_link.clone_from(&cli.link);
    Session::new(list, config, cli.date).context("invalid game configuration")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    match &cli.command {
        Some(Commands::Score { guess, solution }) => run_score_command(guess, solution),
        Some(Commands::Simple) => run_simple(&build_session(&cli)?),
        Some(Commands::Schedule { days }) => run_schedule_command(&build_session(&cli)?, *days),
        Some(Commands::Play) | None => run_play_command(&build_session(&cli)?),
    }
}

fn run_score_command(guess: &str, solution: &str) -> Result<()> {
    let scored = score_guess(guess, solution)?;
    print_score(&scored.guess, &scored.result);
    Ok(())
}

fn run_schedule_command(session: &Session, days: u64) -> Result<()> {
    let schedule = build_schedule(session, days)?;
    print_schedule(&schedule);
    Ok(())
}

fn run_play_command(session: &Session) -> Result<()> {
    use daily_wordle::interactive::{App, run_tui};

    let app = App::new(session)?;
    if let Some(share) = run_tui(app)? {
        println!("{share}");
    }
    Ok(())
}
