//! Word list loading utilities
//!
//! Custom lists use the same format as `data/words.txt`: one `WORD|hint` entry per line,
//! blank lines and `#` comments ignored. Unlike guesses, list entries are validated strictly,
//! since a bad list is a configuration fault.

use super::{WordEntry, WordList};
use crate::config::ConfigError;
use std::fs;
use std::path::Path;

/// Parse entries from list text
///
/// # Errors
///
/// Returns `ConfigError::InvalidEntry` (with a 1-based line number) for the first invalid
/// entry, or `ConfigError::EmptyWordList` if no entries remain.
///
/// # Examples
/// ```
/// use daily_wordle::wordlists::loader::parse_entries;
///
/// let list = parse_entries("# mine\ngreat|the best guess\nobx|beach drama\n").unwrap();
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.entries()[1].word().text(), "OBX");
/// ```
pub fn parse_entries(content: &str) -> Result<WordList, ConfigError> {
    let mut entries = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (word, hint) = trimmed.split_once('|').unwrap_or((trimmed, ""));
        let entry = WordEntry::new(word, hint.trim()).map_err(|source| {
            ConfigError::InvalidEntry {
                line: index + 1,
                source,
            }
        })?;
        entries.push(entry);
    }

    WordList::new(entries)
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read, otherwise any error from
/// [`parse_entries`].
///
/// # Examples
/// ```no_run
/// use daily_wordle::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} entries", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let list = parse_entries(&content)?;
    log::info!("loaded {} entries from {}", list.len(), path.display());
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EntryError;

    #[test]
    fn parses_words_and_hints() {
        let list = parse_entries("great|the best wordle guess ever.\nHappy | a doggo \n").unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].word().text(), "GREAT");
        assert_eq!(list.entries()[0].hint(), "the best wordle guess ever.");
        assert_eq!(list.entries()[1].word().text(), "HAPPY");
        assert_eq!(list.entries()[1].hint(), "a doggo");
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let list = parse_entries("\n# header\n   \ngarba|dance\n# trailing\n").unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn hint_is_optional() {
        let list = parse_entries("lulu\n").unwrap();
        assert_eq!(list.entries()[0].hint(), "");
    }

    #[test]
    fn hint_may_contain_separator() {
        let list = parse_entries("obx|drama | beaches\n").unwrap();
        assert_eq!(list.entries()[0].hint(), "drama | beaches");
    }

    #[test]
    fn invalid_entry_reports_line() {
        let err = parse_entries("great|ok\n\ngr8|bad\n").unwrap_err();
        match err {
            ConfigError::InvalidEntry { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, EntryError::NonAlphabetic("GR8".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_word_reports_line() {
        let err = parse_entries("|hint without a word\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEntry {
                line: 1,
                source: EntryError::EmptyWord
            }
        ));
    }

    #[test]
    fn only_comments_is_empty_list() {
        assert!(matches!(
            parse_entries("# nothing here\n"),
            Err(ConfigError::EmptyWordList)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("definitely/not/a/real/list.txt").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn loads_bundled_data_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt");
        let list = load_from_file(path).unwrap();
        assert_eq!(list, WordList::embedded().unwrap());
    }
}
