//! What the guesses so far reveal about each letter

use crate::core::{Clue, GuessRecord};
use rustc_hash::FxHashMap;

/// Best known clue per letter across a set of guesses
///
/// A letter seen as `Correct` anywhere stays `Correct`; otherwise `Present` beats
/// `Absent`. Letters never guessed have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    best: FxHashMap<char, Clue>,
}

impl LetterHints {
    #[must_use]
    pub fn from_records(records: &[GuessRecord]) -> Self {
        let mut hints = Self::default();
        for record in records {
            for (letter, clue) in record.tiles() {
                hints.observe(letter, clue);
            }
        }
        hints
    }

    fn observe(&mut self, letter: char, clue: Clue) {
        self.best
            .entry(letter)
            .and_modify(|best| {
                if clue.strength() > best.strength() {
                    *best = clue;
                }
            })
            .or_insert(clue);
    }

    /// Best clue for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Clue> {
        self.best.get(&letter.to_ascii_uppercase()).copied()
    }
}
