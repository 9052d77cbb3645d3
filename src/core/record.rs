//! Evaluated guesses

use super::{Clue, Clues, Word, evaluate_guess};

/// A guess paired with its clues
///
/// Built only by [`GuessRecord::evaluate`], so the clues always belong to the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    word: Word,
    clues: Clues,
}

impl GuessRecord {
    /// Score `guess` against `answer` and keep the result
    #[must_use]
    pub fn evaluate(answer: &Word, guess: Word) -> Self {
        Self {
            clues: evaluate_guess(answer, &guess),
            word: guess,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Check if every letter was `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.clues.iter().all(|&clue| clue == Clue::Correct)
    }

    /// Letters paired with their clues, in position order
    pub fn tiles(&self) -> impl Iterator<Item = (char, Clue)> + '_ {
        self.word
            .letters()
            .iter()
            .map(|&letter| char::from(letter))
            .zip(self.clues.iter().copied())
    }
}
