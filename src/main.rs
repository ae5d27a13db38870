//! Sinal - CLI
//!
//! Plays the word game in the terminal, or scores a single guess.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use sinal::{
    commands::{run_play, score_words},
    game::{GameConfig, GameEngine, NUM_ROWS},
    wordlists::WordLists,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sinal",
    about = "Guess the secret 5-letter word in a limited number of tries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file (one word per line); defaults to the embedded list
    #[arg(long, global = true, requires = "accepted")]
    answers: Option<PathBuf>,

    /// Accepted-guess list file (one word per line); defaults to the embedded list
    #[arg(long, global = true, requires = "answers")]
    accepted: Option<PathBuf>,

    /// Number of attempts per game
    #[arg(short, long, global = true, default_value_t = NUM_ROWS)]
    rows: usize,

    /// Seed for choosing secret words (for reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Show the verdicts for a guess against a secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let word_lists = load_word_lists(cli.answers.as_ref(), cli.accepted.as_ref())?;
            let config = GameConfig {
                rows: cli.rows,
                seed: cli.seed,
            };
            run_play_command(word_lists, config)
        }
        Commands::Score { guess, secret } => {
            score_words(&guess, &secret, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load word lists from the given files, or the embedded lists when none are given
fn load_word_lists(answers: Option<&PathBuf>, accepted: Option<&PathBuf>) -> Result<WordLists> {
    match (answers, accepted) {
        (Some(answers), Some(accepted)) => WordLists::from_files(answers, accepted)
            .context("could not load word lists"),
        _ => Ok(WordLists::embedded()),
    }
}

fn run_play_command(word_lists: WordLists, config: GameConfig) -> Result<()> {
    let mut engine = GameEngine::new(word_lists, config).context("could not start a game")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut engine, stdin.lock(), &mut stdout)?;
    Ok(())
}
