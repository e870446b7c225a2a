//! Daily word selection
//!
//! Maps a calendar date to a stable index into the word list, so every player sees the same
//! entry on the same day and the entry changes at local midnight. Selection takes an explicit
//! date; only `local_today` reads the clock.

use super::WordEntry;
use crate::config::ConfigError;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Signed number of calendar days from `epoch` to `date`
///
/// Negative for dates before the epoch.
#[must_use]
pub fn day_number(date: NaiveDate, epoch: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}

/// Index into a list of `len` entries for a day number
///
/// Always in `0..len`, including for negative day numbers.
///
/// # Errors
/// Returns `ConfigError::EmptyWordList` if `len` is zero.
pub fn entry_index(day: i64, len: usize) -> Result<usize, ConfigError> {
    if len == 0 {
        return Err(ConfigError::EmptyWordList);
    }
    Ok(day.rem_euclid(len as i64) as usize)
}

/// Select the entry for `date`
///
/// # Errors
/// Returns `ConfigError::EmptyWordList` if `entries` is empty.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daily_wordle::config::default_epoch;
/// use daily_wordle::wordlists::{WordEntry, selector::select_entry};
///
/// let entries = vec![
///     WordEntry::new("great", "the best guess").unwrap(),
///     WordEntry::new("happy", "a doggo").unwrap(),
/// ];
/// let day_one = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let entry = select_entry(&entries, day_one, default_epoch()).unwrap();
/// assert_eq!(entry.word().text(), "HAPPY");
/// ```
pub fn select_entry(
    entries: &[WordEntry],
    date: NaiveDate,
    epoch: NaiveDate,
) -> Result<&WordEntry, ConfigError> {
    let day = day_number(date, epoch);
    let index = entry_index(day, entries.len())?;
    log::debug!("day {day} selects entry {index} of {}", entries.len());
    Ok(&entries[index])
}

/// Local calendar date of an instant (the instant normalized to local midnight)
#[must_use]
pub fn local_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Today's local calendar date
#[must_use]
pub fn local_today() -> NaiveDate {
    local_date(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_epoch;
    use chrono::{Days, Utc};

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .map(|w| WordEntry::new(w, format!("hint for {w}")).unwrap())
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_number_counts_calendar_days() {
        let epoch = default_epoch();
        assert_eq!(day_number(epoch, epoch), 0);
        assert_eq!(day_number(date(2024, 1, 2), epoch), 1);
        assert_eq!(day_number(date(2025, 1, 1), epoch), 366); // 2024 is a leap year
        assert_eq!(day_number(date(2023, 12, 31), epoch), -1);
    }

    #[test]
    fn index_is_never_negative() {
        assert_eq!(entry_index(-1, 3).unwrap(), 2);
        assert_eq!(entry_index(-3, 3).unwrap(), 0);
        assert_eq!(entry_index(-4, 3).unwrap(), 2);
        assert_eq!(entry_index(7, 3).unwrap(), 1);
    }

    #[test]
    fn empty_list_is_invalid_configuration() {
        assert!(matches!(entry_index(5, 0), Err(ConfigError::EmptyWordList)));
        assert!(matches!(
            select_entry(&[], date(2024, 6, 1), default_epoch()),
            Err(ConfigError::EmptyWordList)
        ));
    }

    #[test]
    fn single_entry_always_selected() {
        let list = entries(&["great"]);
        for day in [date(2020, 2, 29), default_epoch(), date(2031, 7, 4)] {
            let entry = select_entry(&list, day, default_epoch()).unwrap();
            assert_eq!(entry.word().text(), "GREAT");
        }
    }

    #[test]
    fn same_date_same_entry() {
        let list = entries(&["great", "happy", "garba", "lulu"]);
        let day = date(2025, 12, 1);
        let first = select_entry(&list, day, default_epoch()).unwrap();
        let second = select_entry(&list, day, default_epoch()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn consecutive_days_cycle_with_list_length() {
        let list = entries(&["great", "happy", "garba"]);
        let start = date(2024, 3, 9);

        let picked: Vec<&str> = (0..6)
            .map(|offset| {
                let day = start.checked_add_days(Days::new(offset)).unwrap();
                select_entry(&list, day, default_epoch())
                    .unwrap()
                    .word()
                    .text()
            })
            .collect();

        assert_ne!(picked[0], picked[1]);
        assert_eq!(picked[0], picked[3]);
        assert_eq!(picked[1], picked[4]);
        assert_eq!(picked[2], picked[5]);
    }

    #[test]
    fn dates_before_epoch_wrap_around() {
        let list = entries(&["great", "happy", "garba"]);
        let entry = select_entry(&list, date(2023, 12, 31), default_epoch()).unwrap();
        assert_eq!(entry.word().text(), "GARBA");
    }

    #[test]
    fn local_date_matches_local_clock() {
        let now = Utc::now();
        assert_eq!(local_date(&now), now.with_timezone(&Local).date_naive());
    }
}
