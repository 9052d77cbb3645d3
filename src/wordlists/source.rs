//! Word sources
//!
//! A game needs two things from the outside world: a dictionary to check guesses
//! against and a way to pick a fresh answer. [`WordSource`] is that seam;
//! [`WordList`] is the in-memory implementation used by the binary and the tests.

use super::WORDS;
use super::loader::words_from_slice;
use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Supplies the dictionary and random answers to a game
pub trait WordSource {
    /// Every word accepted as a guess
    fn all_valid_words(&self) -> &FxHashSet<Word>;

    /// Check dictionary membership
    fn contains(&self, word: &Word) -> bool {
        self.all_valid_words().contains(word)
    }

    /// Pick an answer, or `None` if the source is empty
    fn random_word(&mut self) -> Option<Word>;
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn all_valid_words(&self) -> &FxHashSet<Word> {
        (**self).all_valid_words()
    }

    fn contains(&self, word: &Word) -> bool {
        (**self).contains(word)
    }

    fn random_word(&mut self) -> Option<Word> {
        (**self).random_word()
    }
}

/// An in-memory dictionary with its own random number generator
pub struct WordList {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
    rng: StdRng,
}

impl WordList {
    /// Build a list from words, dropping duplicates but keeping first-seen order
    ///
    /// The generator is seeded from the operating system; use
    /// [`WordList::with_seed`] for a repeatable answer sequence.
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut lookup = FxHashSet::default();
        let words = words.into_iter().filter(|w| lookup.insert(*w)).collect();

        Self {
            words,
            lookup,
            rng: StdRng::from_os_rng(),
        }
    }

    /// The dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::{WordList, WordSource, WORDS_COUNT};
    ///
    /// let mut list = WordList::embedded().with_seed(7);
    /// assert_eq!(list.len(), WORDS_COUNT);
    ///
    /// let answer = list.random_word().unwrap();
    /// assert!(list.contains(&answer));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(WORDS))
    }

    /// Replace the generator with one seeded from `seed`
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn all_valid_words(&self) -> &FxHashSet<Word> {
        &self.lookup
    }

    fn random_word(&mut self) -> Option<Word> {
        self.words.choose(&mut self.rng).copied()
    }
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("len", &self.words.len())
            .finish_non_exhaustive()
    }
}
