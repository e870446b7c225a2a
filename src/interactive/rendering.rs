//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and message panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{KEYBOARD_ROWS, LetterState};
use crate::game::{GameStatus, Key};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Screen regions, shared by drawing and mouse hit-testing
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub info: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

/// Split the frame for a game of `max_rounds` rounds
#[must_use]
pub fn screen_layout(area: Rect, max_rounds: usize) -> ScreenLayout {
    let board_height = u16::try_from(max_rounds).unwrap_or(u16::MAX - 2) + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board + side panel
            Constraint::Length(5),         // Keyboard
            Constraint::Length(3),         // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Messages / hint / share
        ])
        .split(chunks[1]);

    ScreenLayout {
        header: chunks[0],
        board: main_chunks[0],
        info: main_chunks[1],
        keyboard: chunks[2],
        status: chunks[3],
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area(), app.game.max_rounds());

    render_header(f, app, layout.header);
    render_board(f, app, layout.board);
    render_info_panel(f, app, layout.info);
    render_keyboard(f, app, layout.keyboard);
    render_status(f, app, layout.status);
}

/// One clickable key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCell {
    pub area: Rect,
    pub key: Key,
}

fn key_label(key: Key) -> String {
    match key {
        Key::Letter(letter) => letter.to_string(),
        Key::Enter => "ENTER".to_string(),
        Key::Backspace => "⌫".to_string(),
    }
}

fn keyboard_block() -> Block<'static> {
    Block::default().title(" Keyboard ").borders(Borders::ALL)
}

/// Key rows as laid out on screen: the letter rows, with ENTER and ⌫ around the last one
fn key_rows() -> Vec<Vec<Key>> {
    let last = KEYBOARD_ROWS.len() - 1;
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let letters = row.chars().map(Key::Letter);
            if i == last {
                std::iter::once(Key::Enter)
                    .chain(letters)
                    .chain(std::iter::once(Key::Backspace))
                    .collect()
            } else {
                letters.collect()
            }
        })
        .collect()
}

/// Positions of every on-screen key inside the keyboard panel `area`
///
/// Each row is centered; keys are one column apart. Keys that do not fit are left out.
#[must_use]
pub fn keyboard_cells(area: Rect) -> Vec<KeyCell> {
    let inner = keyboard_block().inner(area);
    let mut cells = Vec::new();

    for (row_index, keys) in key_rows().into_iter().enumerate() {
        let Ok(offset) = u16::try_from(row_index) else {
            break;
        };
        if offset >= inner.height {
            break;
        }

        let widths: Vec<u16> = keys
            .iter()
            .map(|&key| key_label(key).chars().count() as u16 + 2)
            .collect();
        let row_width = widths.iter().sum::<u16>() + widths.len().saturating_sub(1) as u16;

        let mut x = inner.x + inner.width.saturating_sub(row_width) / 2;
        for (key, width) in keys.into_iter().zip(widths) {
            if x + width > inner.right() {
                break;
            }
            cells.push(KeyCell {
                area: Rect::new(x, inner.y + offset, width, 1),
                key,
            });
            x += width + 1;
        }
    }

    cells
}

/// The on-screen key under a terminal cell, for a frame of size `area`
#[must_use]
pub fn key_at(area: Rect, max_rounds: usize, column: u16, row: u16) -> Option<Key> {
    let keyboard = screen_layout(area, max_rounds).keyboard;
    keyboard_cells(keyboard)
        .into_iter()
        .find(|cell| cell.area.contains(Position::new(column, row)))
        .map(|cell| cell.key)
}

const fn state_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterState::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterState::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {letter} "), style.add_modifier(Modifier::BOLD)),
        Span::raw(" "),
    ]
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🟩 {} · {}",
        app.session.config().title,
        app.session.game_date(&app.game)
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut lines: Vec<Line> = game
        .history()
        .iter()
        .map(|entry| {
            let spans: Vec<Span> = entry
                .word
                .letters()
                .iter()
                .zip(entry.result.states())
                .flat_map(|(&letter, &state)| tile(letter, state_style(state)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let blank = Style::default().fg(Color::DarkGray);
    if game.status() == GameStatus::Playing {
        // Row being typed
        let typed: Vec<char> = app.buffer.as_str().chars().collect();
        let spans: Vec<Span> = (0..game.word_length())
            .flat_map(|i| match typed.get(i) {
                Some(&letter) => tile(letter, Style::default().fg(Color::White)),
                None => tile('_', blank),
            })
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < game.max_rounds() {
        let spans: Vec<Span> = (0..game.word_length())
            .flat_map(|_| tile('_', blank))
            .collect();
        lines.push(Line::from(spans));
    }

    let title = format!(" Round {}/{} ", game.rounds_used(), game.max_rounds());
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Hint or share preview
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    if let Some(share) = app.share() {
        render_share(f, &share, chunks[0]);
    } else {
        render_hint(f, app, chunks[0]);
    }
    render_messages(f, app, chunks[1]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.game.hint() {
        Some(hint) => Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::Cyan),
        )),
        None => Line::from(Span::styled(
            "Press TAB to reveal a hint",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_share(f: &mut Frame, share: &str, area: Rect) {
    let color = Color::Green;
    let paragraph = Paragraph::new(share.to_string())
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();
    let block = keyboard_block();
    let inner = block.inner(area);
    f.render_widget(block, area);

    for cell in keyboard_cells(area) {
        let style = match cell.key {
            Key::Letter(letter) => keyboard
                .get(letter)
                .map_or_else(|| Style::default().fg(Color::White), state_style),
            Key::Enter | Key::Backspace => Style::default().fg(Color::Black).bg(Color::Gray),
        };
        let label = Paragraph::new(format!(" {} ", key_label(cell.key)))
            .style(style.add_modifier(Modifier::BOLD));
        f.render_widget(label, cell.area.intersection(inner));
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let status_color = match app.game.status() {
        GameStatus::Playing => Color::White,
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
    };
    let mode = Paragraph::new(format!("Status: {}", app.game.status()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(status_color));
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let distribution_text = format!("Wins by guess: {}", app.stats.distribution_summary());
    let distribution = Paragraph::new(distribution_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(distribution, chunks[2]);

    let help_text = if app.game.status().is_over() {
        "Esc: Quit | Ctrl-N: New Game"
    } else {
        "Type or click keys | Enter: Submit | TAB: Hint | Ctrl-N: Reset | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn keyboard_has_every_key_once() {
        let keyboard = screen_layout(screen(), 6).keyboard;
        let cells = keyboard_cells(keyboard);

        // 26 letters, '.', ENTER and backspace
        assert_eq!(cells.len(), 29);
        for letter in ('A'..='Z').chain(std::iter::once('.')) {
            let count = cells.iter().filter(|c| c.key == Key::Letter(letter)).count();
            assert_eq!(count, 1, "{letter}");
        }
        assert!(cells.iter().any(|c| c.key == Key::Enter));
        assert!(cells.iter().any(|c| c.key == Key::Backspace));

        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                assert!(!a.area.intersects(b.area), "{:?} overlaps {:?}", a.key, b.key);
            }
        }
    }

    #[test]
    fn clicks_hit_the_key_under_the_cursor() {
        let keyboard = screen_layout(screen(), 6).keyboard;
        let top = keyboard.y + 1;

        // Top row is 10 keys of width 3 plus 9 gaps = 39, centered in 78 inner columns
        assert_eq!(key_at(screen(), 6, 20, top), Some(Key::Letter('Q')));
        assert_eq!(key_at(screen(), 6, 22, top), Some(Key::Letter('Q')));
        assert_eq!(key_at(screen(), 6, 23, top), None);
        assert_eq!(key_at(screen(), 6, 24, top), Some(Key::Letter('W')));

        for cell in keyboard_cells(keyboard) {
            assert_eq!(
                key_at(screen(), 6, cell.area.x + cell.area.width - 1, cell.area.y),
                Some(cell.key)
            );
        }
    }

    #[test]
    fn bottom_row_has_enter_and_backspace_at_the_ends() {
        let keyboard = screen_layout(screen(), 6).keyboard;
        let bottom: Vec<Key> = keyboard_cells(keyboard)
            .into_iter()
            .filter(|c| c.area.y == keyboard.y + 3)
            .map(|c| c.key)
            .collect();
        assert_eq!(bottom.first(), Some(&Key::Enter));
        assert_eq!(bottom.last(), Some(&Key::Backspace));
        assert_eq!(bottom.len(), 10);
    }

    #[test]
    fn clicks_outside_the_keyboard_hit_nothing() {
        assert_eq!(key_at(screen(), 6, 20, 1), None);
        let keyboard = screen_layout(screen(), 6).keyboard;
        assert_eq!(key_at(screen(), 6, 0, keyboard.y + 1), None);
    }
}
