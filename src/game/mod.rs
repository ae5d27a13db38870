//! The game-state engine
//!
//! [`GameEngine`] is the only writer of a [`GameState`]. Presentation code forwards
//! player input to it and draws from the returned [`GameEvent`]s or from the state.

mod config;
mod engine;
mod event;
mod state;
mod stats;

pub use config::{GameConfig, NUM_ROWS};
pub use engine::GameEngine;
pub use event::{GameEvent, GuessRejection};
pub use state::{Attempt, Cell, GameState, Phase};
pub use stats::Statistics;
