//! Error types for the game engine

use crate::core::{Word, WordError};
use crate::game::GameStatus;
use thiserror::Error;

/// Everything that can go wrong when driving a game
///
/// Every variant is raised before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Malformed word or letter argument
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] WordError),

    /// Well-formed word that is not in the dictionary
    #[error("{0} is not in the word list")]
    InvalidWord(Word),

    /// Guess submitted after the round finished
    #[error("the game is over ({0}); reset to play again")]
    GameOver(GameStatus),

    /// Reset requested while a round is still being played
    #[error("cannot reset while a game is in progress")]
    PreconditionViolation,

    /// The word source had no word to offer as an answer
    #[error("the word source has no words to choose from")]
    EmptyWordSource,
}
