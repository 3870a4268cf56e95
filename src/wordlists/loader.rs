//! Word list loading utilities
//!
//! Builds a corpus for a given word length from a newline separated dictionary,
//! either read from a file or taken from the embedded list.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a corpus from a dictionary file
///
/// Keeps entries of exactly `letters` alphabetic letters. Entries with an
/// upper-case letter are treated as proper nouns and kept only when
/// `allow_proper_nouns` is set. Duplicates are dropped, first occurrence wins.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use infogain_wordle::wordlists::loader::make_word_list;
///
/// let words = make_word_list("linuxwords.txt", 5, false).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn make_word_list<P: AsRef<Path>>(
    path: P,
    letters: usize,
    allow_proper_nouns: bool,
) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(filter_entries(content.lines(), letters, allow_proper_nouns))
}

/// Build a corpus from an embedded string slice
///
/// Applies the same filtering as [`make_word_list`].
///
/// # Examples
/// ```
/// use infogain_wordle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "Paris", "bear", "app1e"], 5, false);
/// assert_eq!(words.len(), 1);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], letters: usize, allow_proper_nouns: bool) -> Vec<Word> {
    filter_entries(slice.iter().copied(), letters, allow_proper_nouns)
}

fn filter_entries<'a, I>(entries: I, letters: usize, allow_proper_nouns: bool) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();

    entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| allow_proper_nouns || !entry.chars().any(char::is_uppercase))
        .filter_map(|entry| Word::new(entry, letters).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_keeps_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5, false);
        assert_eq!(texts(&words), ["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_filters_length_and_alphabet() {
        let input = &["crane", "toolong", "abc", "sl4te", "can't", "slate"];
        let words = words_from_slice(input, 5, false);
        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn proper_nouns_need_opt_in() {
        let input = &["apple", "Paris", "Texas"];

        assert_eq!(texts(&words_from_slice(input, 5, false)), ["apple"]);
        assert_eq!(
            texts(&words_from_slice(input, 5, true)),
            ["apple", "paris", "texas"]
        );
    }

    #[test]
    fn duplicates_are_dropped() {
        let input = &["apple", " apple ", "Apple", "angle"];
        let words = words_from_slice(input, 5, true);
        assert_eq!(texts(&words), ["apple", "angle"]);
    }

    #[test]
    fn other_lengths() {
        let input = &["bear", "apple", "bridge", "wolf"];
        assert_eq!(texts(&words_from_slice(input, 4, false)), ["bear", "wolf"]);
        assert_eq!(texts(&words_from_slice(input, 6, false)), ["bridge"]);
    }

    #[test]
    fn make_word_list_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "infogain_wordle_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "apple\n  angle  \nParis\n\nbear\nample").unwrap();
        }

        let words = make_word_list(&path, 5, false).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(texts(&words), ["apple", "angle", "ample"]);
    }

    #[test]
    fn make_word_list_missing_file_is_error() {
        assert!(make_word_list("/nonexistent/words.txt", 5, false).is_err());
    }
}
