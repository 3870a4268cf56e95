//! Puzzle word representation
//!
//! A Word stores a fixed-length, lower-cased alphabetic word. The length is chosen
//! per puzzle rather than baked into the type.

use std::fmt;

/// A lower-cased alphabetic word of a configured length
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word of exactly `letters` letters
    ///
    /// The text is normalized to lower case.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `letters`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use infogain_wordle::core::Word;
    ///
    /// let word = Word::new("Apple", 5).unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("apple", 4).is_err());
    /// assert!(Word::new("app1e", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, letters: usize) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();

        if text.len() != letters {
            return Err(WordError::InvalidLength {
                expected: letters,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lower-case ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word of positive length
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// Returns `None` when `position` is past the end of the word.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.letters().get(position).copied()
    }

    /// First letter of the word
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> Option<u8> {
        self.letter_at(0)
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
