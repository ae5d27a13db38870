//! Sinal
//!
//! A Wordle-style word game engine: guess the secret five-letter word in a limited
//! number of attempts, with per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use sinal::game::{GameConfig, GameEngine, Phase};
//! use sinal::wordlists::WordLists;
//!
//! let lists = WordLists::from_slices(&["sinal"], &["sinal", "linha"]);
//! let mut engine = GameEngine::new(lists, GameConfig::seeded(1)).unwrap();
//!
//! for ch in "linha".chars() {
//!     engine.type_letter(ch);
//! }
//! engine.submit_guess().unwrap();
//!
//! let row = engine.state().attempts()[0].feedback().unwrap();
//! println!("{}", row.to_emoji());
//! assert_eq!(engine.state().phase(), Phase::InProgress);
//! ```

// Core domain types
pub mod core;

// Setup errors
pub mod error;

// Game-state engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
