//! TUI application state and logic

use crate::config::ConfigError;
use crate::game::{Game, GameStatus, GuessBuffer, Key, Submission};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: &'a Session,
    pub game: Game,
    pub buffer: GuessBuffer,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(Key),
    Hint,
    NewGame,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of the games finished in this session (not persisted)
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, game: &Game) {
        self.total_games += 1;
        if game.status() == GameStatus::Won {
            self.games_won += 1;
            let rounds = game.rounds_used();
            if self.guess_distribution.len() < rounds {
                self.guess_distribution.resize(rounds, 0);
            }
            self.guess_distribution[rounds - 1] += 1;
        }
    }

    /// Wins per guess count, e.g. `1:0 2:3 3:1`; `-` before the first win
    #[must_use]
    pub fn distribution_summary(&self) -> String {
        if self.guess_distribution.is_empty() {
            return "-".to_string();
        }
        self.guess_distribution
            .iter()
            .enumerate()
            .map(|(i, wins)| format!("{}:{wins}", i + 1))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Map a terminal key event to an app action
#[must_use]
pub fn action_for(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::NewGame),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::Hint),
        KeyCode::Enter => Some(Action::Input(Key::Enter)),
        KeyCode::Backspace | KeyCode::Delete => Some(Action::Input(Key::Backspace)),
        KeyCode::Char(c) if !ctrl => Key::from_char(c).map(Action::Input),
        _ => None,
    }
}

impl<'a> App<'a> {
    /// Create the app with a game on today's entry
    ///
    /// # Errors
    /// Returns `ConfigError` if today's entry cannot be selected.
    pub fn new(session: &'a Session) -> Result<Self, ConfigError> {
        let game = session.start_game()?;
        let buffer = GuessBuffer::new(game.word_length());

        let mut app = Self {
            session,
            game,
            buffer,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Welcome! Guess today's {}-letter word.",
                app.game.word_length()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Type or click letters, Enter to submit, Tab for a hint.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Apply one action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NewGame => self.new_game(),
            Action::Hint => self.reveal_hint(),
            Action::Input(key) => self.handle_key(key),
        }
    }

    /// Apply one game key; ignored once the game is over
    pub fn handle_key(&mut self, key: Key) {
        if self.game.status().is_over() {
            return;
        }

        match key {
            Key::Letter(letter) => {
                self.buffer.push(letter);
            }
            Key::Backspace => {
                self.buffer.pop();
            }
            Key::Enter => self.submit(),
        }
    }

    fn submit(&mut self) {
        match self.game.submit_guess(self.buffer.as_str()) {
            Ok(Submission::Accepted(status)) => {
                self.buffer.clear();
                if status.is_over() {
                    self.finish();
                }
            }
            Ok(Submission::Ignored) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self) {
        self.stats.record(&self.game);

        let style = if self.game.status() == GameStatus::Won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        if let Some(text) = self.game.message().map(str::to_string) {
            self.add_message(&text, style);
        }
        self.add_message(
            "Ctrl-N for a new game, Esc to quit and print your result.",
            MessageStyle::Info,
        );
    }

    fn reveal_hint(&mut self) {
        if self.game.hint_revealed() {
            return;
        }
        if self.game.reveal_hint().is_none() {
            self.add_message("No hints once the game is over.", MessageStyle::Info);
        }
    }

    /// Press the on-screen key under a click at (`column`, `row`) in a frame of size `area`
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) {
        if let Some(key) = super::rendering::key_at(area, self.game.max_rounds(), column, row) {
            self.handle_action(Action::Input(key));
        }
    }

    pub fn new_game(&mut self) {
        match self.session.reset_game(&mut self.game) {
            Ok(()) => {
                self.buffer.reset(self.game.word_length());
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Share text, once the current game is over
    #[must_use]
    pub fn share(&self) -> Option<String> {
        self.session.share(&self.game)
    }
}

/// Run the TUI application
///
/// Returns the share text of the final game if it was finished.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Option<String>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = action_for(key) {
                    app.handle_action(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                app.handle_click(
                    Rect::new(0, 0, size.width, size.height),
                    mouse.column,
                    mouse.row,
                );
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share())
}
