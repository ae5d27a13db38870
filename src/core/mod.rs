//! Core domain types for the word game
//!
//! This module contains the pure, stateless building blocks: words, verdicts,
//! the feedback scorer and the keyboard status tracker.

pub mod alphabet;
mod feedback;
mod keyboard;
mod verdict;
mod word;

pub use feedback::{Feedback, score_letters};
pub use keyboard::KeyboardStatus;
pub use verdict::{LetterStatus, Verdict};
pub use word::{WORD_LEN, Word, WordError};
