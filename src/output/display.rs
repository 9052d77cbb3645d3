//! Display functions for game state

use super::formatters::{
    clues_to_emoji, create_progress_bar, empty_row, keyboard_rows, record_tiles,
};
use crate::core::{GuessRecord, MAX_GUESSES};
use crate::game::{Game, GameStatus, Statistics};
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// Write the board: every guess so far, then placeholder rows
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_board<S: WordSource, W: Write>(out: &mut W, game: &Game<S>) -> io::Result<()> {
    writeln!(out)?;
    for record in game.guesses() {
        writeln!(out, "  {}", record_tiles(record))?;
    }
    for _ in game.guesses().len()..MAX_GUESSES {
        writeln!(out, "  {}", empty_row())?;
    }
    writeln!(out)
}

/// Write the keyboard colored by what the guesses revealed
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_keyboard<S: WordSource, W: Write>(out: &mut W, game: &Game<S>) -> io::Result<()> {
    for row in keyboard_rows(&game.letter_hints()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)
}

/// Write the result line for a finished round, and the emoji summary
///
/// Writes nothing while the round is still being played.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_outcome<S: WordSource, W: Write>(out: &mut W, game: &Game<S>) -> io::Result<()> {
    let used = game.guesses().len();
    match game.status() {
        GameStatus::Playing => return Ok(()),
        GameStatus::Won => writeln!(
            out,
            "{}",
            format!(
                "🎉 Solved in {used} {}!",
                if used == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        )?,
        GameStatus::Lost => writeln!(
            out,
            "{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            game.answer().to_string().bright_yellow().bold()
        )?,
    }

    let score = if game.status() == GameStatus::Won {
        used.to_string()
    } else {
        "X".to_string()
    };
    writeln!(out, "\n  {score}/{MAX_GUESSES}")?;
    for record in game.guesses() {
        writeln!(out, "  {}", clues_to_emoji(record.clues()))?;
    }
    writeln!(out)
}

/// Write session statistics with a guess distribution chart
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(out, " {} ", "STATISTICS".bright_cyan().bold())?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(out, "   Played:          {}", stats.games_played)?;
    writeln!(out, "   Win %:           {:.0}", stats.win_percentage())?;
    writeln!(out, "   Current streak:  {}", stats.current_streak)?;
    writeln!(out, "   Max streak:      {}", stats.max_streak)?;

    writeln!(out, "\n   {}", "Guess distribution:".bright_cyan())?;
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "   {}: {} {count}", i + 1, bar.green())?;
    }
    writeln!(out)
}

/// Write a single scored guess as tiles and emoji
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_record<W: Write>(out: &mut W, record: &GuessRecord) -> io::Result<()> {
    writeln!(
        out,
        "  {}   {}",
        record_tiles(record),
        clues_to_emoji(record.clues())
    )
}
