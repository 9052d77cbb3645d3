//! Word representation
//!
//! A Word is exactly five ASCII letters stored in canonical uppercase form.

use super::WORD_LENGTH;
use std::fmt::{self, Write};
use thiserror::Error;

/// A validated 5-letter word
///
/// Words are case-insensitive on input and always stored uppercase. Once built a
/// Word cannot be changed, so every Word in the program satisfies the length and
/// letter invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for malformed words and letter arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {len} letters, got {0}", len = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("'{0}' is not a letter")]
    InvalidCharacter(char),
    #[error("position {0} is outside 0..{len}", len = WORD_LENGTH)]
    PositionOutOfRange(usize),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding text is not trimmed; callers reading user input trim first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = normalize_letter(ch)?;
        }

        Ok(Self { letters })
    }

    /// Get the word as an uppercase byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

/// Uppercase an ASCII letter, rejecting anything else
///
/// # Errors
/// Returns `WordError::InvalidCharacter` for non-letters.
fn normalize_letter(ch: char) -> Result<u8, WordError> {
    if ch.is_ascii_alphabetic() {
        Ok(ch.to_ascii_uppercase() as u8)
    } else {
        Err(WordError::InvalidCharacter(ch))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            f.write_char(char::from(letter))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
