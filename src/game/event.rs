//! Events the engine emits for the presentation layer

use super::state::{Cell, Phase};
use crate::core::{LetterStatus, WORD_LEN, Word};
use thiserror::Error;

/// A change in game state a renderer may want to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game began on an empty board
    GameStarted { rows: usize },
    /// A row's letters or verdicts changed
    RowUpdated { row: usize, cells: [Cell; WORD_LEN] },
    /// A keyboard letter got a more informative status
    KeyStatusUpdated { letter: u8, status: LetterStatus },
    /// The game reached a new phase; `secret` is revealed when it is terminal
    PhaseChanged { phase: Phase, secret: Option<Word> },
}

/// Why a submitted guess was refused
///
/// Rejections leave the game untouched and do not use up a row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("not enough letters ({filled} of 5)")]
    IncompleteGuess { filled: usize },
    #[error("{0} is not in the word list")]
    InvalidWord(Word),
}
