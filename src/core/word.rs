//! Word representation
//!
//! A Word is a validated, case-normalized sequence of exactly [`WORD_LEN`] letters.

use super::alphabet;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LEN: usize = 5;

/// A five-letter word, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased before validation, so `"SINAL"` and `"sinal"` are the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Contains non-ASCII characters
    /// - Length is not exactly [`WORD_LEN`]
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use sinal::core::Word;
    ///
    /// let word = Word::new("SINAL").unwrap();
    /// assert_eq!(word.text(), "sinal");
    ///
    /// assert!(Word::new("linhas").is_err());
    /// assert!(Word::new("l1nha").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Build a Word from letters that are already canonical
    ///
    /// Returns `None` if any byte is not a lowercase letter.
    #[must_use]
    pub fn from_letters(chars: [u8; WORD_LEN]) -> Option<Self> {
        if !chars.iter().all(|&c| alphabet::index_of(c).is_some()) {
            return None;
        }
        let text = chars.iter().map(|&c| c as char).collect();
        Some(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text.to_uppercase())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("sinal").unwrap();
        assert_eq!(word.text(), "sinal");
        assert_eq!(word.chars(), b"sinal");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("LINHA").unwrap();
        assert_eq!(word.text(), "linha");

        let word2 = Word::new("LiNhA").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("palavra"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(Word::new("mesa"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("sin4l"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("sin l"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("sina!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_rejects_accents() {
        assert_eq!(Word::new("maçãs"), Err(WordError::NonAscii));
        assert_eq!(Word::new("LÁPIS"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_from_letters() {
        let word = Word::from_letters(*b"linha").unwrap();
        assert_eq!(word, Word::new("linha").unwrap());
        assert!(Word::from_letters(*b"LINHA").is_none());
        assert!(Word::from_letters(*b"lin a").is_none());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("sinal").unwrap();
        assert_eq!(word.char_at(0), b's');
        assert_eq!(word.char_at(4), b'l');
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'p'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'd'), Some(&1));
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'a'), Some(&5));
    }

    #[test]
    fn word_display_is_uppercase() {
        let word = Word::new("sinal").unwrap();
        assert_eq!(format!("{word}"), "SINAL");
    }

    #[test]
    fn word_parse() {
        let word: Word = "Noite".parse().unwrap();
        assert_eq!(word.text(), "noite");
        assert!("noites".parse::<Word>().is_err());
    }
}
