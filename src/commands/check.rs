//! Single-guess scoring command

use crate::core::{GuessRecord, Word};
use crate::output::write_record;
use anyhow::{Context, Result};
use std::io::Write;

/// Score `guess` against `answer` and print the tiles
///
/// No dictionary check is made; any two well-formed words can be compared.
///
/// # Errors
///
/// Returns an error if either word is malformed or the output cannot be written.
pub fn run_check<W: Write>(answer: &str, guess: &str, out: &mut W) -> Result<GuessRecord> {
    let answer = Word::new(answer.trim()).with_context(|| format!("invalid answer {answer:?}"))?;
    let guess = Word::new(guess.trim()).with_context(|| format!("invalid guess {guess:?}"))?;

    let record = GuessRecord::evaluate(&answer, guess);
    write_record(out, &record)?;
    Ok(record)
}
