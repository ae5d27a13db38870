//! Word lists for the game
//!
//! [`WordLists`] holds the two dictionaries the engine needs: the answers a secret
//! can be drawn from and the words accepted as guesses. Embedded defaults are
//! compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{ACCEPTED, ACCEPTED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::error::ConfigurationError;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Answer and accepted-guess dictionaries
///
/// The two lists are independent: `accepted` is expected to contain every answer but
/// this is not enforced, so guess legality always checks both.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    answers: Vec<Word>,
    answer_set: FxHashSet<Word>,
    accepted: FxHashSet<Word>,
}

impl WordLists {
    /// Build from already-parsed words
    ///
    /// Duplicate answers are collapsed, keeping first-occurrence order.
    #[must_use]
    pub fn new(answers: Vec<Word>, accepted: Vec<Word>) -> Self {
        let mut answer_set = FxHashSet::default();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|w| answer_set.insert(w.clone()))
            .collect();

        Self {
            answers,
            answer_set,
            accepted: accepted.into_iter().collect(),
        }
    }

    /// Build from raw string slices, dropping invalid entries
    #[must_use]
    pub fn from_slices(answers: &[&str], accepted: &[&str]) -> Self {
        Self::new(
            loader::words_from_slice(answers),
            loader::words_from_slice(accepted),
        )
    }

    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slices(ANSWERS, ACCEPTED)
    }

    /// Load both lists from newline-delimited files
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Read`] if either file cannot be read.
    pub fn from_files(
        answers: impl AsRef<Path>,
        accepted: impl AsRef<Path>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(
            loader::load_from_file(answers)?,
            loader::load_from_file(accepted)?,
        ))
    }

    /// Candidate secret words, de-duplicated
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Number of distinct accepted guesses (not counting answers missing from the list)
    #[must_use]
    pub fn accepted_len(&self) -> usize {
        self.accepted.len()
    }

    /// Whether `word` may be submitted as a guess
    ///
    /// True if it is in `accepted` or in `answers`.
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.accepted.contains(word) || self.answer_set.contains(word)
    }
}
