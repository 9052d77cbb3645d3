//! Game state
//!
//! The round state machine plus the read-only views built on top of it.

mod engine;
mod hints;
mod stats;
mod status;

pub use engine::{Game, GameConfig};
pub use hints::LetterHints;
pub use stats::Statistics;
pub use status::GameStatus;
