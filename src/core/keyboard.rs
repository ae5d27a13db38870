//! Keyboard letter status tracking
//!
//! Aggregates the verdicts of every submitted guess into one best-known
//! [`LetterStatus`] per letter of the alphabet.

use super::alphabet::{ALPHABET, ALPHABET_LEN, index_of};
use super::feedback::Feedback;
use super::verdict::{LetterStatus, Verdict};
use super::word::Word;

/// Best-known status for every letter
///
/// Statuses only ever move up: `Unknown < Absent < Present < Correct`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardStatus {
    statuses: [LetterStatus; ALPHABET_LEN],
}

impl KeyboardStatus {
    /// All letters `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status of a letter
    ///
    /// Non-letters are always `Unknown`.
    #[must_use]
    pub fn status_of(&self, letter: u8) -> LetterStatus {
        index_of(letter).map_or(LetterStatus::Unknown, |i| self.statuses[i])
    }

    /// Raise a letter's status to `verdict` if that is more informative
    ///
    /// Returns the new status when it changed.
    pub fn upgrade(&mut self, letter: u8, verdict: Verdict) -> Option<LetterStatus> {
        let slot = &mut self.statuses[index_of(letter)?];
        let candidate = LetterStatus::from(verdict);

        if candidate > *slot {
            *slot = candidate;
            Some(candidate)
        } else {
            None
        }
    }

    /// Record every (letter, verdict) pair of a scored guess
    ///
    /// Returns the letters whose status changed, in guess order, each with its new status.
    /// A letter appearing twice in the guess is reported once, with its final status.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) -> Vec<(u8, LetterStatus)> {
        let mut changed: Vec<(u8, LetterStatus)> = Vec::new();

        for (&letter, &verdict) in guess.chars().iter().zip(feedback.verdicts()) {
            if let Some(status) = self.upgrade(letter, verdict) {
                if let Some(entry) = changed.iter_mut().find(|(l, _)| *l == letter) {
                    entry.1 = status;
                } else {
                    changed.push((letter, status));
                }
            }
        }

        changed
    }

    /// Iterate over `(letter, status)` for the whole alphabet
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        ALPHABET.iter().copied().zip(self.statuses.iter().copied())
    }
}
