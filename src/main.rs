//! Wordle Game - CLI
//!
//! Command-line word-guessing game: the program picks a secret five-letter
//! word and the player has a fixed number of attempts to find it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use wordle_game::{
    commands::{run_play, score_guess},
    core::Word,
    game::{DEFAULT_MAX_ATTEMPTS, GameSession},
    output::print_score_result,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Maximum attempts per game
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for secret selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play,

    /// Score a guess against a given secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the candidate set based on the -w flag
fn load_candidates(wordlist_mode: &str) -> Result<Vec<Word>> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)
            .with_context(|| format!("failed to load word list from '{path}'"))?,
    };

    log::info!("loaded {} candidate words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Score { secret, guess } => {
            let result = score_guess(&secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let candidates = load_candidates(&cli.wordlist)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut session = GameSession::new(&candidates, &mut rng, cli.max_attempts)
        .context("cannot start a game")?;

    let mut stdin = io::stdin().lock();
    run_play(&mut session, &mut stdin)?;

    Ok(())
}
