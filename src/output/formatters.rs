//! Formatting utilities for terminal output

use crate::core::{Clue, Clues, GuessRecord};
use crate::game::LetterHints;
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format a clue sequence as emoji string
#[must_use]
pub fn clues_to_emoji(clues: &Clues) -> String {
    clues.iter().map(|clue| clue.to_emoji()).collect()
}

/// A single letter tile, colored by what is known about it
#[must_use]
pub fn tile(letter: char, clue: Option<Clue>) -> ColoredString {
    let text = format!(" {letter} ");
    match clue {
        Some(Clue::Correct) => text.black().bold().on_green(),
        Some(Clue::Present) => text.black().bold().on_yellow(),
        Some(Clue::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guessed word as a row of colored tiles
#[must_use]
pub fn record_tiles(record: &GuessRecord) -> String {
    record
        .tiles()
        .map(|(letter, clue)| tile(letter, Some(clue)).to_string())
        .collect()
}

/// Placeholder row for a guess not yet made
#[must_use]
pub fn empty_row() -> String {
    " _ ".repeat(crate::core::WORD_LENGTH).bright_black().to_string()
}

/// Keyboard rows colored by letter hints, indented like a physical keyboard
#[must_use]
pub fn keyboard_rows(hints: &LetterHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| tile(letter, hints.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
