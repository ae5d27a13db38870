//! Terminal output formatting
//!
//! Plain-text display of game state for the command-line harness.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_rejection, print_score, print_statistics};
