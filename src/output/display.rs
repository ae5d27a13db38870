//! Display functions for game state and command results

use super::formatters::{format_keyboard, format_row};
use crate::core::{Feedback, Word};
use crate::game::{GameState, GuessRejection, Phase, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the grid followed by the keyboard
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    for (i, attempt) in state.attempts().iter().enumerate() {
        let marker = if i == state.row() && state.phase() == Phase::InProgress {
            "›".cyan().bold().to_string()
        } else {
            " ".to_string()
        };
        writeln!(out, "  {marker} {}", format_row(attempt))?;
    }

    writeln!(out)?;
    for line in format_keyboard(state.keyboard()) {
        writeln!(out, "    {line}")?;
    }
    writeln!(out)
}

/// Print why a guess was refused
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rejection(out: &mut impl Write, rejection: &GuessRejection) -> io::Result<()> {
    let text = match rejection {
        GuessRejection::IncompleteGuess { .. } => format!("Incomplete word: {rejection}"),
        GuessRejection::InvalidWord(_) => format!("Unknown word: {rejection}"),
    };
    writeln!(out, "{}", format!("✗ {text}").red().bold())
}

/// Print the end-of-game banner with the share grid
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_game_over(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    let secret = state.secret();
    let guesses = state.submitted().count();

    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    match state.phase() {
        Phase::Won => writeln!(
            out,
            "{}",
            format!(
                "🎉 Solved {secret} in {guesses} {}!",
                if guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        )?,
        Phase::Lost => writeln!(
            out,
            "{}",
            format!("❌ Out of guesses. The word was {secret}.").red().bold()
        )?,
        Phase::InProgress => {}
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;

    writeln!(
        out,
        "\nSinal {}/{}\n{}\n",
        if state.phase() == Phase::Won {
            guesses.to_string()
        } else {
            "X".to_string()
        },
        state.rows(),
        state.share_grid()
    )?;
    writeln!(out, "Type :new to play again or :quit to exit.")
}

/// Print session statistics
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_statistics(out: &mut impl Write, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:         {}", stats.games_played)?;
    writeln!(out, "   Win rate:       {:.0}%", stats.win_rate())?;
    writeln!(out, "   Current streak: {}", stats.current_streak)?;
    writeln!(out, "   Best streak:    {}", stats.best_streak)?;

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if max > 0 {
        writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
        for (i, &count) in stats.guess_distribution.iter().enumerate() {
            let width = count * 30 / max;
            let bar = format!(
                "{}{}",
                "█".repeat(width).green(),
                "░".repeat(30 - width).bright_black()
            );
            writeln!(out, "   {}: {bar} {count}", i + 1)?;
        }
    }
    writeln!(out)
}

/// Print the verdicts for a single guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_score(
    out: &mut impl Write,
    guess: &Word,
    secret: &Word,
    feedback: &Feedback,
) -> io::Result<()> {
    writeln!(
        out,
        "{} vs {}: {}",
        guess.to_string().bright_white().bold(),
        secret.to_string().bright_yellow().bold(),
        feedback.to_emoji()
    )?;
    for (&letter, verdict) in guess.chars().iter().zip(feedback.verdicts()) {
        writeln!(
            out,
            "  {} {}",
            crate::core::alphabet::display(letter),
            verdict
        )?;
    }
    Ok(())
}
