//! Shareable result summary
//!
//! Spoiler-free text: a header with the date and score, then one emoji row per guess.

use crate::game::{Game, GameStatus};
use chrono::NaiveDate;

/// Build share text for a finished game
///
/// Returns `None` while the game is still being played.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daily_wordle::game::Game;
/// use daily_wordle::output::share::share_text;
/// use daily_wordle::wordlists::WordEntry;
///
/// let mut game = Game::new(WordEntry::new("great", "hint").unwrap());
/// game.submit_guess("crane").unwrap();
/// game.submit_guess("great").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
/// let text = share_text(&game, "Daily Wordle", date, None).unwrap();
/// assert_eq!(text, "Daily Wordle 2025-12-01 2/6\n\n⬛🟩🟨⬛🟨\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(game: &Game, title: &str, date: NaiveDate, link: Option<&str>) -> Option<String> {
    let attempts = match game.status() {
        GameStatus::Playing => return None,
        GameStatus::Won => game.rounds_used().to_string(),
        GameStatus::Lost => "X".to_string(),
    };

    let header = format!(
        "{title} {} {attempts}/{}",
        date.format("%Y-%m-%d"),
        game.max_rounds()
    );
    let grid = game
        .history()
        .iter()
        .map(|entry| entry.result.to_emoji())
        .collect::<Vec<_>>()
        .join("\n");

    let mut text = format!("{header}\n\n{grid}");
    if let Some(link) = link {
        text.push_str("\n\n");
        text.push_str(link);
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordEntry;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    fn game(word: &str) -> Game {
        Game::new(WordEntry::new(word, "hint").unwrap())
    }

    #[test]
    fn no_share_while_playing() {
        let mut game = game("great");
        assert_eq!(share_text(&game, "Daily Wordle", date(), None), None);
        game.submit_guess("crane").unwrap();
        assert_eq!(share_text(&game, "Daily Wordle", date(), None), None);
    }

    #[test]
    fn won_game_shows_round_count() {
        let mut game = game("obx");
        game.submit_guess("obx").unwrap();
        let text = share_text(&game, "My Wordle", date(), None).unwrap();
        assert_eq!(text, "My Wordle 2024-02-29 1/6\n\n🟩🟩🟩");
    }

    #[test]
    fn lost_game_shows_x_and_every_row() {
        let mut game = game("great");
        for _ in 0..6 {
            game.submit_guess("fluff").unwrap();
        }
        let text = share_text(&game, "Daily Wordle", date(), None).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Daily Wordle 2024-02-29 X/6"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.filter(|l| *l == "⬛⬛⬛⬛⬛").count(), 6);
    }

    #[test]
    fn link_is_appended() {
        let mut game = game("jj");
        game.submit_guess("jj").unwrap();
        let text = share_text(&game, "Daily Wordle", date(), Some("https://example.com")).unwrap();
        assert!(text.ends_with("🟩🟩\n\nhttps://example.com"));
    }
}
