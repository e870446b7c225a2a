//! Hosting session
//!
//! Ties a word list and configuration to the games played on a given day. The session is the
//! only caller of the daily selector: once when a game starts and again on every reset.

use crate::config::{ConfigError, GameConfig};
use crate::game::Game;
use crate::output::share_text;
use crate::wordlists::{WordEntry, WordList, selector};
use chrono::NaiveDate;

/// Word list, settings and (optionally pinned) date for a play session
#[derive(Debug, Clone)]
pub struct Session {
    list: WordList,
    config: GameConfig,
    date: Option<NaiveDate>,
}

impl Session {
    /// Create a session; `date` pins the puzzle day, otherwise the local date is used
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(
        list: WordList,
        config: GameConfig,
        date: Option<NaiveDate>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { list, config, date })
    }

    /// The puzzle day: the pinned date, or today in local time
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(selector::local_today)
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn word_list(&self) -> &WordList {
        &self.list
    }

    /// Today's entry
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` if the list is empty.
    pub fn todays_entry(&self) -> Result<&WordEntry, ConfigError> {
        self.list.entry_for(self.date(), self.config.epoch)
    }

    /// Start a game on today's entry
    ///
    /// The date is read once and stored on the game, so a game that runs past midnight keeps
    /// the day its entry was selected for.
    ///
    /// # Errors
    /// Returns `ConfigError` if no entry can be selected.
    pub fn start_game(&self) -> Result<Game, ConfigError> {
        let date = self.date();
        let entry = self.list.entry_for(date, self.config.epoch)?.clone();
        Ok(Game::with_max_rounds(entry, self.config.max_rounds).on_date(date))
    }

    /// Reset `game` onto today's entry
    ///
    /// # Errors
    /// Returns `ConfigError` if no entry can be selected; `game` is then left unchanged.
    pub fn reset_game(&self, game: &mut Game) -> Result<(), ConfigError> {
        let date = self.date();
        let entry = self.list.entry_for(date, self.config.epoch)?.clone();
        game.reset(entry, Some(date));
        Ok(())
    }

    /// Puzzle day of `game`: the day it was started for, else the session date
    #[must_use]
    pub fn game_date(&self, game: &Game) -> NaiveDate {
        game.date().unwrap_or_else(|| self.date())
    }

    /// Share text for a finished game, using the session's title and link
    #[must_use]
    pub fn share(&self, game: &Game) -> Option<String> {
        share_text(
            game,
            &self.config.title,
            self.game_date(game),
            self.config.share_link.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_epoch;
    use crate::game::GameStatus;
    use crate::wordlists::loader::parse_entries;

    fn session(date: NaiveDate) -> Session {
        let list = parse_entries("great|best guess\nobx|drama\njj|twins\n").unwrap();
        Session::new(list, GameConfig::default(), Some(date)).unwrap()
    }

    #[test]
    fn pinned_date_selects_entry() {
        let s = session(default_epoch());
        assert_eq!(s.todays_entry().unwrap().word().text(), "GREAT");

        let next = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(session(next).todays_entry().unwrap().word().text(), "OBX");
    }

    #[test]
    fn start_game_uses_config_rounds() {
        let list = parse_entries("great|best guess\n").unwrap();
        let config = GameConfig {
            max_rounds: 3,
            ..GameConfig::default()
        };
        let session = Session::new(list, config, Some(default_epoch())).unwrap();
        let game = session.start_game().unwrap();
        assert_eq!(game.max_rounds(), 3);
        assert_eq!(game.solution().text(), "GREAT");
    }

    #[test]
    fn invalid_config_rejected() {
        let list = parse_entries("great|best guess\n").unwrap();
        let config = GameConfig {
            max_rounds: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            Session::new(list, config, None),
            Err(ConfigError::ZeroRounds)
        ));
    }

    #[test]
    fn reset_restarts_on_same_entry() {
        let s = session(default_epoch());
        let mut game = s.start_game().unwrap();
        game.submit_guess("great").unwrap();
        assert_eq!(game.status(), GameStatus::Won);

        s.reset_game(&mut game).unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.history().is_empty());
    }

    #[test]
    fn share_uses_session_settings() {
        let list = parse_entries("great|best guess\n").unwrap();
        let config = GameConfig {
            title: "Test Wordle".to_string(),
            share_link: Some("https://example.com/wordle".to_string()),
            ..GameConfig::default()
        };
        let s = Session::new(list, config, Some(default_epoch())).unwrap();
        let mut game = s.start_game().unwrap();
        assert_eq!(s.share(&game), None);

        game.submit_guess("great").unwrap();
        assert_eq!(
            s.share(&game).unwrap(),
            "Test Wordle 2024-01-01 1/6\n\n🟩🟩🟩🟩🟩\n\nhttps://example.com/wordle"
        );
    }

    #[test]
    fn game_keeps_the_date_it_was_started_for() {
        let s = session(default_epoch());
        let game = s.start_game().unwrap();
        assert_eq!(game.date(), Some(default_epoch()));
        assert_eq!(s.game_date(&game), default_epoch());
    }

    #[test]
    fn share_uses_the_game_date_over_the_session_date() {
        let s = session(default_epoch());
        let earlier = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let entry = s.todays_entry().unwrap().clone();
        let mut game = Game::new(entry).on_date(earlier);
        game.submit_guess("great").unwrap();

        let share = s.share(&game).unwrap();
        assert!(share.starts_with("Daily Wordle 2023-12-31 1/6"), "{share}");
    }

    #[test]
    fn reset_stamps_the_current_date() {
        let s = session(default_epoch());
        let mut game = Game::new(s.todays_entry().unwrap().clone());
        assert_eq!(game.date(), None);

        s.reset_game(&mut game).unwrap();
        assert_eq!(game.date(), Some(default_epoch()));
    }
}
