//! Wordle Game - CLI
//!
//! Play the five-letter word-guessing game in the terminal, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use wordle_game::{
    commands::{run_check, run_play},
    game::{Game, GameConfig},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed for answer selection, for a repeatable sequence of rounds
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Accept any well-formed word as a guess, even if it is not in the word list
    #[arg(long, global = true)]
    no_check: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play {
        /// Answer for the first round instead of a random word
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// Score one guess against an answer
    Check {
        /// The secret answer
        answer: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play { answer: None });

    match command {
        Commands::Play { answer } => {
            let words = load_words(cli.wordlist.as_deref(), cli.seed)?;
            let config = GameConfig {
                check_dictionary: !cli.no_check,
            };
            run_play_command(words, config, answer.as_deref())
        }
        Commands::Check { answer, guess } => {
            run_check(&answer, &guess, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the word list from `path`, or the built-in one
fn load_words(path: Option<&str>, seed: Option<u64>) -> Result<WordList> {
    let words = match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to load word list from {path}"))?;
            WordList::from_words(words)
        }
        None => WordList::embedded(),
    };
    info!("dictionary holds {} words", words.len());

    Ok(match seed {
        Some(seed) => words.with_seed(seed),
        None => words,
    })
}

fn run_play_command(words: WordList, config: GameConfig, answer: Option<&str>) -> Result<()> {
    let mut game = match answer {
        Some(answer) => Game::with_answer(words, config, answer),
        None => Game::new(words, config),
    }
    .context("failed to start the game")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let stats = run_play(&mut game, stdin.lock(), &mut stdout)?;
    info!(
        "session over: {} played, {} won",
        stats.games_played, stats.games_won
    );
    Ok(())
}
