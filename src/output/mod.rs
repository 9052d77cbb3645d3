//! Terminal output formatting
//!
//! Renders game state for the console. The game itself never formats text.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_keyboard, write_outcome, write_record, write_statistics};
