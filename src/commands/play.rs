//! Interactive play mode
//!
//! Text-based game loop. Reads guesses line by line and renders the board after
//! each one; works over any reader and writer so it runs the same on a terminal
//! and in tests.

use crate::core::MAX_GUESSES;
use crate::error::GameError;
use crate::game::{Game, Statistics};
use crate::output::{write_board, write_keyboard, write_outcome, write_statistics};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

/// Play rounds until the player quits or input runs out
///
/// Malformed or unknown guesses are reported and do not use up a turn. When a
/// round ends its result is added to the session statistics and the player is
/// offered another round.
///
/// # Errors
///
/// Returns an error on I/O failure, or if a new round cannot be started.
pub fn run_play<S, R, W>(game: &mut Game<S>, input: R, out: &mut W) -> Result<Statistics>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    let mut stats = Statistics::default();
    let mut lines = input.lines();

    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, " {}", "W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(
        out,
        "Guess the 5-letter word in {MAX_GUESSES} tries. Type 'quit' to exit.\n"
    )?;

    loop {
        if game.is_game_over() {
            stats.record(game);
            write_outcome(out, game)?;
            write_statistics(out, &stats)?;

            write!(out, "Play again? (yes/no): ")?;
            out.flush()?;
            let again = match lines.next() {
                Some(line) => line.context("failed to read input")?,
                None => break,
            };
            if !matches!(again.trim().to_lowercase().as_str(), "yes" | "y") {
                break;
            }

            game.reset(None).context("failed to start a new round")?;
            debug!("player started round {}", stats.games_played + 1);
            writeln!(out, "\n🔄 New round started!\n")?;
        }

        write!(out, "Guess {}/{MAX_GUESSES}: ", game.guesses().len() + 1)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;
        let guess = line.trim();

        match guess.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            _ => {}
        }

        match game.make_guess(guess) {
            Ok(_) => {
                write_board(out, game)?;
                if !game.is_game_over() {
                    write_keyboard(out, game)?;
                }
            }
            Err(e @ (GameError::InvalidArgument(_) | GameError::InvalidWord(_))) => {
                writeln!(out, "{} {e}\n", "✗".red().bold())?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}
