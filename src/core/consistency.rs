//! Clue consistency checking
//!
//! Decides whether a word could still be the solution given a clue it was not
//! necessarily guessed with.

use super::{Clue, ExcludedLetters, Mark, Word};

/// Check whether `word` is consistent with `clue`
///
/// Position by position, the word is rejected when:
/// - the clue is EXACT there and the word holds a different letter
/// - the clue is PRESENT there and the word lacks that letter entirely
/// - the clue is PRESENT there and the word holds that very letter in that slot
/// - the word holds any letter from `excluded`
///
/// Checking stops at the first failing position. A word whose length differs
/// from the clue is never consistent.
///
/// # Examples
/// ```
/// use infogain_wordle::core::{Clue, Word, is_consistent};
///
/// let guess = Word::new("ample", 5).unwrap();
/// let clue = Clue::encode(&Word::new("apple", 5).unwrap(), &guess);
/// let excluded = clue.excluded_letters();
///
/// assert!(is_consistent(&Word::new("apple", 5).unwrap(), &clue, &excluded));
/// assert!(!is_consistent(&Word::new("amble", 5).unwrap(), &clue, &excluded));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, clue: &Clue, excluded: &ExcludedLetters) -> bool {
    if word.len() != clue.len() {
        return false;
    }

    word.letters()
        .iter()
        .zip(clue.marks())
        .all(|(&letter, &mark)| {
            let fits = match mark {
                Mark::Exact(expected) => letter == expected,
                Mark::Present(expected) => letter != expected && word.has_letter(expected),
                Mark::Absent(_) => true,
            };
            fits && !excluded.contains(letter)
        })
}

/// Check `word` against every clue, applying one shared excluded set to each
#[must_use]
pub fn is_consistent_with_all<'c, I>(word: &Word, clues: I, excluded: &ExcludedLetters) -> bool
where
    I: IntoIterator<Item = &'c Clue>,
{
    clues
        .into_iter()
        .all(|clue| is_consistent(word, clue, excluded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text, text.len()).unwrap()
    }

    fn clue_for(solution: &str, guess: &str) -> Clue {
        Clue::encode(&word(solution), &word(guess))
    }

    #[test]
    fn exact_mismatch_rejects() {
        let clue = Clue::parse(&word("crane"), "C____").unwrap();
        assert!(is_consistent(&word("chalk"), &clue, &ExcludedLetters::none()));
        assert!(!is_consistent(&word("slate"), &clue, &ExcludedLetters::none()));
    }

    #[test]
    fn present_letter_missing_rejects() {
        let clue = Clue::parse(&word("crane"), "_r___").unwrap();
        assert!(!is_consistent(&word("slate"), &clue, &ExcludedLetters::none()));
        assert!(is_consistent(&word("burnt"), &clue, &ExcludedLetters::none()));
    }

    #[test]
    fn present_letter_in_same_slot_rejects() {
        let clue = Clue::parse(&word("crane"), "_r___").unwrap();
        assert!(!is_consistent(&word("bribe"), &clue, &ExcludedLetters::none()));
    }

    #[test]
    fn excluded_letters_reject_anywhere() {
        let clue = Clue::parse(&word("crane"), "__A__").unwrap();
        let excluded: ExcludedLetters = b"cn".iter().copied().collect();
        assert!(is_consistent(&word("slate"), &clue, &excluded));
        assert!(!is_consistent(&word("beach"), &clue, &excluded));
        assert!(!is_consistent(&word("snake"), &clue, &excluded));
    }

    #[test]
    fn empty_excluded_set_is_ignored() {
        let clue = clue_for("slate", "crane");
        // the ABSENT R only bites through the excluded set
        assert!(is_consistent(&word("frame"), &clue, &ExcludedLetters::none()));
        assert!(!is_consistent(&word("frame"), &clue, &clue.excluded_letters()));
    }

    #[test]
    fn solution_survives_its_own_clue() {
        let solution = word("apple");
        for guess in ["ample", "angle", "amble", "paper", "lapel"] {
            let clue = clue_for("apple", guess);
            assert!(is_consistent(&solution, &clue, &clue.excluded_letters()));
        }
    }

    #[test]
    fn guess_fails_its_own_unsolved_clue() {
        for (solution, guess) in [("apple", "ample"), ("slate", "crane"), ("fghij", "abcde")] {
            let clue = clue_for(solution, guess);
            assert!(!is_consistent(&word(guess), &clue, &clue.excluded_letters()));
        }
    }

    #[test]
    fn length_mismatch_is_inconsistent() {
        let clue = clue_for("apple", "ample");
        assert!(!is_consistent(&word("bear"), &clue, &ExcludedLetters::none()));
    }

    #[test]
    fn all_clues_must_hold() {
        let first = clue_for("apple", "angle");
        let second = clue_for("apple", "ample");
        let excluded = second.excluded_letters();

        assert!(is_consistent_with_all(&word("apple"), [&first, &second], &excluded));
        // AMBLE passes the ANGLE clue but not the AMPLE one
        let none = ExcludedLetters::none();
        assert!(is_consistent(&word("amble"), &first, &none));
        assert!(!is_consistent_with_all(&word("amble"), [&first, &second], &none));
    }
}
