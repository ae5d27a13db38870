//! Line-oriented play mode
//!
//! Each input line is a sequence of keystrokes: letters are typed, `-` erases the
//! last letter, and the end of the line submits. Lines starting with `:` are commands.

use crate::core::WORD_LEN;
use crate::game::{GameEngine, GameEvent, GuessRejection, Statistics};
use crate::output::{print_board, print_game_over, print_rejection, print_statistics};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Key that erases the last typed letter
pub const BACKSPACE_KEY: char = '-';

/// Run an interactive session until `:quit` or end of input
///
/// Returns the statistics of the games finished during the session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new game cannot
/// be started.
pub fn run_play<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    out: &mut W,
) -> Result<Statistics> {
    let mut stats = Statistics::new(engine.config().rows);

    print_banner(out, engine)?;
    print_board(out, engine.state())?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                engine.new_game()?;
                writeln!(out, "{}", "🔄 New game started!".bright_cyan())?;
                print_board(out, engine.state())?;
                continue;
            }
            ":stats" => {
                print_statistics(out, &stats)?;
                continue;
            }
            ":help" | ":h" => {
                print_help(out)?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        if engine.state().phase().is_terminal() {
            writeln!(out, "The game is over. Type :new to play again or :quit to exit.")?;
            continue;
        }

        for ch in line.chars() {
            let events = if ch == BACKSPACE_KEY {
                engine.backspace()
            } else {
                engine.type_letter(ch)
            };
            log_events(&events);
        }

        match engine.submit_guess() {
            Ok(events) => {
                log_events(&events);
                print_board(out, engine.state())?;

                if events
                    .iter()
                    .any(|e| matches!(e, GameEvent::PhaseChanged { .. }))
                {
                    stats.record(engine.state());
                    print_game_over(out, engine.state())?;
                }
            }
            Err(rejection) => {
                print_rejection(out, &rejection)?;
                if matches!(rejection, GuessRejection::InvalidWord(_)) {
                    for _ in 0..WORD_LEN {
                        engine.backspace();
                    }
                }
                print_board(out, engine.state())?;
            }
        }
    }

    print_statistics(out, &stats)?;
    writeln!(out, "👋 Até logo!")?;

    Ok(stats)
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        tracing::trace!(?event, "Engine event");
    }
}

fn print_banner(out: &mut impl Write, engine: &GameEngine) -> std::io::Result<()> {
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║              S I N A L                 ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LEN}-letter word in {} tries.",
        engine.config().rows
    )?;
    print_help(out)
}

fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "  - Type letters and press Enter to submit")?;
    writeln!(out, "  - '{BACKSPACE_KEY}' erases the last letter")?;
    writeln!(out, "  - [A] right spot, (A) wrong spot, plain A not in the word")?;
    writeln!(out, "Commands: :new, :stats, :help, :quit")
}
