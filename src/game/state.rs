//! Game state: the attempt grid, cursor, secret word and phase
//!
//! A [`GameState`] is only mutated by the engine. Presentation code reads it
//! through shared references or owned snapshots.

use crate::core::{Feedback, KeyboardStatus, Verdict, WORD_LEN, Word};
use std::fmt;

/// Phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    InProgress,
    Won,
    Lost,
}

impl Phase {
    /// Won or Lost
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// One grid cell as the presentation layer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<u8>,
    pub verdict: Option<Verdict>,
}

/// One row of the grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attempt {
    letters: [Option<u8>; WORD_LEN],
    feedback: Option<Feedback>,
}

impl Attempt {
    /// Number of filled cells
    #[must_use]
    pub fn filled(&self) -> usize {
        self.letters.iter().filter(|l| l.is_some()).count()
    }

    /// Index of the leftmost empty cell
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.letters.iter().position(Option::is_none)
    }

    /// Index of the rightmost filled cell
    #[must_use]
    pub fn last_filled(&self) -> Option<usize> {
        self.letters.iter().rposition(Option::is_some)
    }

    /// All cells filled
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Raw letters, `None` for empty cells
    #[must_use]
    pub const fn letters(&self) -> &[Option<u8>; WORD_LEN] {
        &self.letters
    }

    /// Feedback, once the row has been submitted
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// The row as a word, if every cell is filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut chars = [0u8; WORD_LEN];
        for (slot, letter) in chars.iter_mut().zip(&self.letters) {
            *slot = (*letter)?;
        }
        Word::from_letters(chars)
    }

    /// Letter and verdict for every cell
    #[must_use]
    pub fn cells(&self) -> [Cell; WORD_LEN] {
        let mut cells = [Cell::default(); WORD_LEN];
        for (i, cell) in cells.iter_mut().enumerate() {
            cell.letter = self.letters[i];
            cell.verdict = self.feedback.map(|f| f.verdicts()[i]);
        }
        cells
    }

    pub(crate) fn push(&mut self, letter: u8) -> bool {
        match self.first_empty() {
            Some(i) => {
                self.letters[i] = Some(letter);
                true
            }
            None => false,
        }
    }

    pub(crate) fn pop(&mut self) -> bool {
        match self.last_filled() {
            Some(i) => {
                self.letters[i] = None;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    attempts: Vec<Attempt>,
    row: usize,
    secret: Word,
    phase: Phase,
    keyboard: KeyboardStatus,
}

impl GameState {
    /// Fresh game with `rows` empty attempts
    ///
    /// # Panics
    /// Panics if `rows` is zero.
    #[must_use]
    pub fn new(secret: Word, rows: usize) -> Self {
        assert!(rows > 0, "a game needs at least one row");
        Self {
            attempts: vec![Attempt::default(); rows],
            row: 0,
            secret,
            phase: Phase::InProgress,
            keyboard: KeyboardStatus::new(),
        }
    }

    /// All rows, submitted or not
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Rows that have been scored
    pub fn submitted(&self) -> impl Iterator<Item = &Attempt> {
        self.attempts.iter().filter(|a| a.feedback.is_some())
    }

    /// Total number of rows on the board
    #[must_use]
    pub fn rows(&self) -> usize {
        self.attempts.len()
    }

    /// Index of the row currently being written
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Next writable cell as `(row, col)`
    ///
    /// `col` equals [`WORD_LEN`] when the current row is full.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        let col = self.current().first_empty().unwrap_or(WORD_LEN);
        (self.row, col)
    }

    /// The row currently being written
    #[must_use]
    pub fn current(&self) -> &Attempt {
        &self.attempts[self.row]
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    /// The secret word
    ///
    /// Presentation code should only show it once [`Self::revealed_secret`] returns it.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// The secret word, only once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.phase.is_terminal().then_some(&self.secret)
    }

    /// Emoji summary of the submitted rows, one line per row
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.submitted()
            .filter_map(Attempt::feedback)
            .map(Feedback::to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn current_mut(&mut self) -> &mut Attempt {
        &mut self.attempts[self.row]
    }

    pub(crate) fn keyboard_mut(&mut self) -> &mut KeyboardStatus {
        &mut self.keyboard
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Move to the next row
    ///
    /// # Panics
    /// Panics if the current row is the last one.
    pub(crate) fn advance(&mut self) {
        assert!(self.row + 1 < self.attempts.len(), "no row left to advance to");
        self.row += 1;
    }

    pub(crate) fn is_last_row(&self) -> bool {
        self.row + 1 == self.attempts.len()
    }
}
