//! Clue encoding and rendering
//!
//! A clue records, per letter position of a guess, whether the guessed letter is:
//! - EXACT (right letter, right slot), rendered upper-case
//! - PRESENT (letter occurs in the solution, other slot), rendered lower-case
//! - ABSENT (letter does not occur in the solution), rendered as `_`
//!
//! Each mark keeps the guessed letter, so a clue on its own carries everything the
//! consistency checker needs.

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    /// Letter correct and in place
    Exact(u8),
    /// Letter in the solution but not at this position
    Present(u8),
    /// Letter not in the solution
    Absent(u8),
}

impl Mark {
    /// The guessed letter this mark refers to
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        match self {
            Self::Exact(letter) | Self::Present(letter) | Self::Absent(letter) => letter,
        }
    }

    /// Rendered symbol: upper-case, lower-case or `_`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact(letter) => letter.to_ascii_uppercase() as char,
            Self::Present(letter) => letter as char,
            Self::Absent(_) => '_',
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clue {
    marks: Vec<Mark>,
}

/// Error type for clue strings that cannot belong to a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueError {
    LengthMismatch { expected: usize, actual: usize },
    LetterMismatch { position: usize, expected: char, found: char },
    InvalidSymbol(char),
}

impl fmt::Display for ClueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Clue must be {expected} symbols long, got {actual}")
            }
            Self::LetterMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "Clue letter '{found}' at position {} does not match guess letter '{expected}'",
                position + 1
            ),
            Self::InvalidSymbol(ch) => write!(f, "Invalid clue symbol '{ch}'"),
        }
    }
}

impl std::error::Error for ClueError {}

impl Clue {
    /// Encode the clue `guess` receives when `solution` is the hidden word
    ///
    /// Position by position: EXACT if the letters agree, otherwise PRESENT if the
    /// guessed letter occurs anywhere in the solution, otherwise ABSENT.
    ///
    /// Letter counts are not tracked. A guess that repeats a letter the solution
    /// holds once gets a mark for every copy (`paper` against `apple` marks both
    /// `p`s), which differs from strict Wordle rules.
    ///
    /// Both words are expected to have the same length; extra letters of the longer
    /// one are ignored.
    ///
    /// # Examples
    /// ```
    /// use infogain_wordle::core::{Clue, Word};
    ///
    /// let solution = Word::new("slate", 5).unwrap();
    /// let guess = Word::new("crane", 5).unwrap();
    ///
    /// assert_eq!(Clue::encode(&solution, &guess).to_string(), "__A_E");
    /// ```
    #[must_use]
    pub fn encode(solution: &Word, guess: &Word) -> Self {
        let marks = guess
            .letters()
            .iter()
            .zip(solution.letters())
            .map(|(&letter, &target)| {
                if letter == target {
                    Mark::Exact(letter)
                } else if solution.has_letter(letter) {
                    Mark::Present(letter)
                } else {
                    Mark::Absent(letter)
                }
            })
            .collect();

        Self { marks }
    }

    /// Parse a rendered clue back into marks for the given guess
    ///
    /// Accepts upper-case letters for EXACT, lower-case for PRESENT and `_`, `-`
    /// or `⬜` for ABSENT. Letters must agree with the guess.
    ///
    /// # Errors
    /// Returns `ClueError` on a length mismatch, an unknown symbol, or a letter
    /// that differs from the guess at that position.
    ///
    /// # Examples
    /// ```
    /// use infogain_wordle::core::{Clue, Word};
    ///
    /// let guess = Word::new("crane", 5).unwrap();
    /// let clue = Clue::parse(&guess, "__A_E").unwrap();
    /// assert_eq!(clue.excluded_letters().len(), 3);
    /// ```
    pub fn parse(guess: &Word, rendered: &str) -> Result<Self, ClueError> {
        let symbols: Vec<char> = rendered.chars().collect();

        if symbols.len() != guess.len() {
            return Err(ClueError::LengthMismatch {
                expected: guess.len(),
                actual: symbols.len(),
            });
        }

        let marks = symbols
            .into_iter()
            .zip(guess.letters())
            .enumerate()
            .map(|(position, (symbol, &letter))| {
                let mark = match symbol {
                    '_' | '-' | '⬜' => return Ok(Mark::Absent(letter)),
                    ch if ch.is_ascii_uppercase() => Mark::Exact(ch.to_ascii_lowercase() as u8),
                    ch if ch.is_ascii_lowercase() => Mark::Present(ch as u8),
                    ch => return Err(ClueError::InvalidSymbol(ch)),
                };

                if mark.letter() == letter {
                    Ok(mark)
                } else {
                    Err(ClueError::LetterMismatch {
                        position,
                        expected: letter as char,
                        found: symbol,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { marks })
    }

    /// The marks, one per letter position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of positions in the clue
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True for a clue over zero positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check if every position is EXACT
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|m| matches!(m, Mark::Exact(_)))
    }

    /// Count EXACT positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, Mark::Exact(_)))
            .count()
    }

    /// Count PRESENT positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, Mark::Present(_)))
            .count()
    }

    /// Letters marked ABSENT in this clue
    #[must_use]
    pub fn excluded_letters(&self) -> ExcludedLetters {
        ExcludedLetters::from_clue(self)
    }

    /// Convert the clue to an emoji string such as "🟩⬜🟨🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| match mark {
                Mark::Exact(_) => '🟩',
                Mark::Present(_) => '🟨',
                Mark::Absent(_) => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.marks.iter().map(|m| m.symbol()).collect();
        f.write_str(&rendered)
    }
}

/// Letters known not to occur in the solution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedLetters(FxHashSet<u8>);

impl ExcludedLetters {
    /// Empty set: excludes nothing
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Collect the ABSENT letters of a clue
    #[must_use]
    pub fn from_clue(clue: &Clue) -> Self {
        Self(
            clue.marks()
                .iter()
                .filter_map(|mark| match mark {
                    Mark::Absent(letter) => Some(*letter),
                    _ => None,
                })
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.0.iter().copied().collect();
        letters.sort_unstable();
        letters
    }
}

impl FromIterator<u8> for ExcludedLetters {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().map(|b| b.to_ascii_lowercase()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text, text.len()).unwrap()
    }

    #[test]
    fn encode_all_absent() {
        let clue = Clue::encode(&word("fghij"), &word("abcde"));
        assert_eq!(clue.to_string(), "_____");
        assert_eq!(clue.count_exact(), 0);
        assert_eq!(clue.count_present(), 0);
        assert_eq!(clue.excluded_letters().len(), 5);
    }

    #[test]
    fn encode_is_reflexive() {
        for text in ["crane", "apple", "zzzzz", "aaaaa", "bridge"] {
            let w = word(text);
            let clue = Clue::encode(&w, &w);
            assert!(clue.is_solved());
            assert_eq!(clue.to_string(), text.to_uppercase());
        }
    }

    #[test]
    fn encode_mixed_marks() {
        // guess AMPLE against solution APPLE
        let clue = Clue::encode(&word("apple"), &word("ample"));
        assert_eq!(clue.to_string(), "A_PLE");
        assert!(!clue.is_solved());
    }

    #[test]
    fn encode_does_not_count_letters() {
        // APPLE holds one E and two Ps; PAPER is marked for every copy it guesses
        let clue = Clue::encode(&word("apple"), &word("paper"));
        assert_eq!(clue.to_string(), "paPe_");

        // ERASE has two Es, SPEED marks both and never the D
        let clue = Clue::encode(&word("erase"), &word("speed"));
        assert_eq!(clue.to_string(), "s_ee_");

        // a single A in the solution still marks all five guessed As
        let clue = Clue::encode(&word("slate"), &word("aaaaa"));
        assert_eq!(clue.to_string(), "aaAaa");
    }

    #[test]
    fn exact_iff_letters_agree() {
        let solution = word("crane");
        for guess in ["slate", "nacre", "eerie", "crank", "canal"] {
            let guess = word(guess);
            let clue = Clue::encode(&solution, &guess);
            for (i, mark) in clue.marks().iter().enumerate() {
                let agree = guess.letter_at(i) == solution.letter_at(i);
                assert_eq!(matches!(mark, Mark::Exact(_)), agree);
                if agree {
                    assert!(!matches!(mark, Mark::Absent(_)));
                }
            }
        }
    }

    #[test]
    fn parse_round_trips_rendering() {
        let guess = word("ample");
        let clue = Clue::encode(&word("apple"), &guess);
        assert_eq!(Clue::parse(&guess, &clue.to_string()).unwrap(), clue);
        assert_eq!(Clue::parse(&guess, "A-PLE").unwrap(), clue);
        assert_eq!(Clue::parse(&guess, "A⬜PLE").unwrap(), clue);
    }

    #[test]
    fn parse_rejects_bad_input() {
        let guess = word("crane");
        assert_eq!(
            Clue::parse(&guess, "__A_"),
            Err(ClueError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            Clue::parse(&guess, "__A_Z"),
            Err(ClueError::LetterMismatch {
                position: 4,
                expected: 'e',
                found: 'Z'
            })
        );
        assert_eq!(
            Clue::parse(&guess, "__A_?"),
            Err(ClueError::InvalidSymbol('?'))
        );
    }

    #[test]
    fn excluded_letters_collects_absent() {
        let clue = Clue::encode(&word("slate"), &word("crane"));
        let excluded = clue.excluded_letters();
        assert_eq!(excluded.sorted(), b"cnr".to_vec());
        assert!(excluded.contains(b'r'));
        assert!(!excluded.contains(b'a'));
    }

    #[test]
    fn excluded_letters_deduplicates() {
        let clue = Clue::encode(&word("crane"), &word("bobby"));
        assert_eq!(clue.excluded_letters().sorted(), b"boy".to_vec());
    }

    #[test]
    fn emoji_rendering() {
        let clue = Clue::encode(&word("apple"), &word("ample"));
        assert_eq!(clue.to_emoji(), "🟩⬜🟩🟩🟩");
    }
}
