//! Wordle Game
//!
//! Rules engine for the five-letter word-guessing game: scores guesses with the
//! game's repeated-letter rules and tracks each round from first guess to win or
//! loss.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Clue, Word, evaluate_guess};
//! use wordle_game::game::{Game, GameConfig, GameStatus};
//! use wordle_game::wordlists::WordList;
//!
//! // Score a single guess
//! let answer = Word::new("speed").unwrap();
//! let guess = Word::new("erase").unwrap();
//! let clues = evaluate_guess(&answer, &guess);
//! assert_eq!(clues[0], Clue::Present);
//!
//! // Play a round
//! let mut game = Game::with_answer(WordList::embedded(), GameConfig::default(), "speed").unwrap();
//! game.make_guess("erase").unwrap();
//! game.make_guess("speed").unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::GameError;
