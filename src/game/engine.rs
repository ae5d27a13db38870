//! Game engine
//!
//! Owns the [`GameState`] and applies player input to it: typing, erasing,
//! submitting and starting over. Each operation returns the [`GameEvent`]s it
//! caused; an empty list means the input was ignored.

use super::config::GameConfig;
use super::event::{GameEvent, GuessRejection};
use super::state::{GameState, Phase};
use crate::core::{Feedback, Word, alphabet};
use crate::error::ConfigurationError;
use crate::wordlists::WordLists;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Single-writer game engine
///
/// All mutation goes through `&mut self`, so at most one operation is ever in flight.
pub struct GameEngine {
    word_lists: WordLists,
    config: GameConfig,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    /// Create an engine and start its first game
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the config is invalid or there are no answers.
    ///
    /// # Examples
    /// ```
    /// use sinal::game::{GameConfig, GameEngine, Phase};
    /// use sinal::wordlists::WordLists;
    ///
    /// let lists = WordLists::from_slices(&["sinal"], &["linha"]);
    /// let mut engine = GameEngine::new(lists, GameConfig::default()).unwrap();
    ///
    /// for ch in "sinal".chars() {
    ///     engine.type_letter(ch);
    /// }
    /// engine.submit_guess().unwrap();
    /// assert_eq!(engine.state().phase(), Phase::Won);
    /// ```
    pub fn new(word_lists: WordLists, config: GameConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let secret = pick_secret(&word_lists, &mut rng)?;

        tracing::debug!(
            answers = word_lists.answers().len(),
            accepted = word_lists.accepted_len(),
            rows = config.rows,
            "Engine ready"
        );

        Ok(Self {
            state: GameState::new(secret, config.rows),
            word_lists,
            config,
            rng,
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    #[must_use]
    pub const fn word_lists(&self) -> &WordLists {
        &self.word_lists
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the current game with a fresh one
    ///
    /// Allowed in any phase.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyAnswers`] if there is no word to draw.
    pub fn new_game(&mut self) -> Result<Vec<GameEvent>, ConfigurationError> {
        let secret = pick_secret(&self.word_lists, &mut self.rng)?;
        self.state = GameState::new(secret, self.config.rows);

        tracing::debug!(rows = self.config.rows, "New game started");

        Ok(vec![GameEvent::GameStarted {
            rows: self.config.rows,
        }])
    }

    /// Write a letter into the leftmost empty cell of the current row
    ///
    /// Ignored for non-letters, a full row, or a finished game.
    pub fn type_letter(&mut self, ch: char) -> Vec<GameEvent> {
        if self.state.phase().is_terminal() {
            tracing::trace!(?ch, "Ignoring letter after game end");
            return Vec::new();
        }

        let Some(letter) = alphabet::normalize(ch) else {
            tracing::trace!(?ch, "Ignoring non-letter input");
            return Vec::new();
        };

        if self.state.current_mut().push(letter) {
            vec![self.row_updated()]
        } else {
            Vec::new()
        }
    }

    /// Clear the rightmost filled cell of the current row
    ///
    /// Ignored on an empty row or a finished game.
    pub fn backspace(&mut self) -> Vec<GameEvent> {
        if self.state.phase().is_terminal() {
            return Vec::new();
        }

        if self.state.current_mut().pop() {
            vec![self.row_updated()]
        } else {
            Vec::new()
        }
    }

    /// Submit the current row as a guess
    ///
    /// On success the row is scored, the keyboard updated, and the game either ends
    /// or moves to the next row. Ignored when the game is over.
    ///
    /// # Errors
    ///
    /// - [`GuessRejection::IncompleteGuess`] if the row is not full
    /// - [`GuessRejection::InvalidWord`] if the word is in neither list
    ///
    /// The state is unchanged after a rejection.
    pub fn submit_guess(&mut self) -> Result<Vec<GameEvent>, GuessRejection> {
        if self.state.phase().is_terminal() {
            return Ok(Vec::new());
        }

        let current = self.state.current();
        let Some(guess) = current.word() else {
            let filled = current.filled();
            tracing::debug!(filled, "Rejected incomplete guess");
            return Err(GuessRejection::IncompleteGuess { filled });
        };

        if !self.word_lists.is_valid_guess(&guess) {
            tracing::debug!(guess = %guess, "Rejected unknown word");
            return Err(GuessRejection::InvalidWord(guess));
        }

        let feedback = Feedback::score(&guess, self.state.secret());
        self.state.current_mut().set_feedback(feedback);

        let mut events = vec![self.row_updated()];
        events.extend(
            self.state
                .keyboard_mut()
                .record(&guess, &feedback)
                .into_iter()
                .map(|(letter, status)| GameEvent::KeyStatusUpdated { letter, status }),
        );

        let row = self.state.row();
        if feedback.is_perfect() {
            events.push(self.finish(Phase::Won));
        } else if self.state.is_last_row() {
            events.push(self.finish(Phase::Lost));
        } else {
            self.state.advance();
        }

        tracing::debug!(row, feedback = %feedback.to_emoji(), "Guess scored");

        Ok(events)
    }

    fn finish(&mut self, phase: Phase) -> GameEvent {
        self.state.set_phase(phase);
        tracing::info!(%phase, attempts = self.state.row() + 1, "Game over");

        GameEvent::PhaseChanged {
            phase,
            secret: Some(self.state.secret().clone()),
        }
    }

    fn row_updated(&self) -> GameEvent {
        GameEvent::RowUpdated {
            row: self.state.row(),
            cells: self.state.current().cells(),
        }
    }
}

fn pick_secret(word_lists: &WordLists, rng: &mut StdRng) -> Result<Word, ConfigurationError> {
    word_lists
        .answers()
        .choose(rng)
        .cloned()
        .ok_or(ConfigurationError::EmptyAnswers)
}
