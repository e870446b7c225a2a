//! Rotation schedule command
//!
//! Lists which entry each upcoming day selects, to help curate the word list.

use crate::config::ConfigError;
use crate::session::Session;
use crate::wordlists::selector;
use chrono::{Days, NaiveDate};

/// One day of the rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub day_number: i64,
    pub word: String,
    pub hint: String,
}

/// Compute the entries for `days` consecutive days starting at the session date
///
/// # Errors
///
/// Returns `ConfigError` if no entry can be selected.
pub fn build_schedule(session: &Session, days: u64) -> Result<Vec<ScheduleDay>, ConfigError> {
    let start = session.date();
    let epoch = session.config().epoch;

    (0..days)
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| -> Result<ScheduleDay, ConfigError> {
            let entry = session.word_list().entry_for(date, epoch)?;
            Ok(ScheduleDay {
                date,
                day_number: selector::day_number(date, epoch),
                word: entry.word().text().to_string(),
                hint: entry.hint().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, default_epoch};
    use crate::wordlists::loader::parse_entries;

    #[test]
    fn schedule_cycles_through_list() {
        let list = parse_entries("great|a\nobx|b\njj|c\n").unwrap();
        let session = Session::new(list, GameConfig::default(), Some(default_epoch())).unwrap();

        let schedule = build_schedule(&session, 4).unwrap();
        let words: Vec<&str> = schedule.iter().map(|d| d.word.as_str()).collect();
        assert_eq!(words, vec!["GREAT", "OBX", "JJ", "GREAT"]);
        assert_eq!(schedule[3].day_number, 3);
        assert_eq!(schedule[1].date.to_string(), "2024-01-02");
        assert_eq!(schedule[2].hint, "c");
    }

    #[test]
    fn zero_days_is_empty() {
        let list = parse_entries("great|a\n").unwrap();
        let session = Session::new(list, GameConfig::default(), Some(default_epoch())).unwrap();
        assert!(build_schedule(&session, 0).unwrap().is_empty());
    }
}
