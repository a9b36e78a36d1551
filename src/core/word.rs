//! Five-letter Russian word representation
//!
//! A Word stores the uppercase text along with its letters for feedback calculation.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A five-letter word over the Russian alphabet, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only Russian letters")]
    InvalidCharacters,
}

/// Check whether a character belongs to the game alphabet (А-Я plus Ё, any case)
#[must_use]
pub fn is_alphabet_letter(ch: char) -> bool {
    matches!(ch, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// Uppercase a single alphabet letter
///
/// Cyrillic letters map one-to-one, so the first uppercase char is the whole result.
#[must_use]
pub fn to_upper_letter(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Contains anything other than Russian letters
    ///
    /// # Examples
    /// ```
    /// use slovo::core::Word;
    ///
    /// let word = Word::new("слово").unwrap();
    /// assert_eq!(word.text(), "СЛОВО");
    ///
    /// assert!(Word::new("слон").is_err());
    /// assert!(Word::new("crane").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text.as_ref().trim().chars().map(to_upper_letter).collect();

        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        if !text.chars().all(is_alphabet_letter) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [' '; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = ch;
        }

        Ok(Self { text, letters })
    }

    /// Build a word from letters already collected by the session
    ///
    /// # Errors
    /// Same validation as [`Word::new`].
    pub fn from_letters(letters: &[char]) -> Result<Self, WordError> {
        Self::new(letters.iter().collect::<String>())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&to_upper_letter(letter))
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
