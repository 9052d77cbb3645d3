//! Word lists and word sources
//!
//! Provides the embedded dictionary compiled into the binary, file loading, and the
//! [`WordSource`] seam games draw answers from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{WordList, WordSource};
