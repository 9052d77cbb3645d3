//! Core domain types for the word-guessing game
//!
//! Words, clues and the evaluator. Everything here is pure: no I/O, no randomness,
//! no game state.

mod clue;
mod evaluate;
mod record;
mod word;

pub use clue::{Clue, Clues};
pub use evaluate::{evaluate_guess, evaluate_letter, score};
pub use record::GuessRecord;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses allowed per round
pub const MAX_GUESSES: usize = 6;
