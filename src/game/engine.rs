//! The game state machine
//!
//! A [`Game`] owns one round: the secret answer, the guesses made so far and the
//! round status. Every operation checks its preconditions before touching state,
//! so a rejected call leaves the game exactly as it was.
//!
//! | Current   | Event            | Guard                         | Next    |
//! |-----------|------------------|-------------------------------|---------|
//! | Playing   | `make_guess(w)`  | `w == answer`                 | Won     |
//! | Playing   | `make_guess(w)`  | miss, guesses reach the limit | Lost    |
//! | Playing   | `make_guess(w)`  | miss, guesses below the limit | Playing |
//! | Won/Lost  | `make_guess(w)`  |                               | `GameOver` error |
//! | Won/Lost  | `reset()`        |                               | Playing |
//! | Playing   | `reset()`        |                               | `PreconditionViolation` error |

use super::{GameStatus, LetterHints};
use crate::core::{GuessRecord, MAX_GUESSES, Word};
use crate::error::GameError;
use crate::wordlists::WordSource;
use log::{debug, info};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ROUND_ID: AtomicU64 = AtomicU64::new(1);

fn next_round_id() -> u64 {
    NEXT_ROUND_ID.fetch_add(1, Ordering::Relaxed)
}

/// Rule options for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Reject guesses that are not in the word source's dictionary
    pub check_dictionary: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            check_dictionary: true,
        }
    }

    /// Accept any well-formed word as a guess
    #[must_use]
    pub const fn without_dictionary() -> Self {
        Self {
            check_dictionary: false,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One round of the guessing game
#[derive(Debug)]
pub struct Game<S: WordSource> {
    source: S,
    config: GameConfig,
    answer: Word,
    guesses: Vec<GuessRecord>,
    status: GameStatus,
    round_id: u64,
}

impl<S: WordSource> Game<S> {
    /// Start a round with an answer drawn from `source`
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordSource` if the source cannot supply a word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{Game, GameConfig, GameStatus};
    /// use wordle_game::wordlists::WordList;
    ///
    /// let game = Game::new(WordList::embedded().with_seed(3), GameConfig::default()).unwrap();
    /// assert_eq!(game.status(), GameStatus::Playing);
    /// assert_eq!(game.guesses_remaining(), 6);
    /// ```
    pub fn new(mut source: S, config: GameConfig) -> Result<Self, GameError> {
        let answer = source.random_word().ok_or(GameError::EmptyWordSource)?;
        Ok(Self::start(source, config, answer))
    }

    /// Start a round with a known answer
    ///
    /// The answer only has to be a well-formed word; it need not be in the
    /// dictionary.
    ///
    /// # Errors
    /// Returns `GameError::InvalidArgument` if `answer` is not a valid word.
    pub fn with_answer(source: S, config: GameConfig, answer: &str) -> Result<Self, GameError> {
        let answer = Word::new(answer)?;
        Ok(Self::start(source, config, answer))
    }

    fn start(source: S, config: GameConfig, answer: Word) -> Self {
        let round_id = next_round_id();
        debug!("round {round_id} started");
        Self {
            source,
            config,
            answer,
            guesses: Vec::with_capacity(MAX_GUESSES),
            status: GameStatus::Playing,
            round_id,
        }
    }

    /// Submit a guess
    ///
    /// The guess is normalized to uppercase, scored against the answer and
    /// appended to the history. The status then moves to `Won` on an exact match,
    /// to `Lost` once the last guess is spent, or stays `Playing`.
    ///
    /// # Errors
    /// Checked in this order, with no state change on failure:
    /// - `GameError::GameOver` if the round already finished
    /// - `GameError::InvalidArgument` if `word` is not 5 ASCII letters
    /// - `GameError::InvalidWord` if dictionary checking is on and the word is unknown
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Clue;
    /// use wordle_game::game::{Game, GameConfig, GameStatus};
    /// use wordle_game::wordlists::WordList;
    ///
    /// let mut game =
    ///     Game::with_answer(WordList::embedded(), GameConfig::default(), "stout").unwrap();
    ///
    /// let record = game.make_guess("stand").unwrap();
    /// assert_eq!(record.clues()[0], Clue::Correct);
    ///
    /// game.make_guess("STOUT").unwrap();
    /// assert_eq!(game.status(), GameStatus::Won);
    /// assert!(game.make_guess("crane").is_err());
    /// ```
    pub fn make_guess(&mut self, word: &str) -> Result<&GuessRecord, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let guess = Word::new(word.trim())?;

        if self.config.check_dictionary && !self.source.contains(&guess) {
            return Err(GameError::InvalidWord(guess));
        }

        let record = GuessRecord::evaluate(&self.answer, guess);
        self.guesses.push(record);

        self.status = if guess == self.answer {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        debug!(
            "guess {}/{MAX_GUESSES}: {guess} -> {}",
            self.guesses.len(),
            self.status
        );
        if self.status.is_over() {
            info!(
                "round {} after {} guesses; answer was {}",
                self.status,
                self.guesses.len(),
                self.answer
            );
        }

        Ok(&self.guesses[self.guesses.len() - 1])
    }

    /// Check if the round finished, won or lost
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Start a new round after the current one finished
    ///
    /// With `Some(answer)` that word becomes the answer; with `None` one is drawn
    /// from the word source.
    ///
    /// # Errors
    /// - `GameError::PreconditionViolation` if the round is still being played
    /// - `GameError::InvalidArgument` if the explicit answer is malformed
    /// - `GameError::EmptyWordSource` if no answer can be drawn
    pub fn reset(&mut self, new_answer: Option<&str>) -> Result<(), GameError> {
        if !self.is_game_over() {
            return Err(GameError::PreconditionViolation);
        }

        let answer = match new_answer {
            Some(text) => Word::new(text)?,
            None => self
                .source
                .random_word()
                .ok_or(GameError::EmptyWordSource)?,
        };

        self.answer = answer;
        self.guesses.clear();
        self.status = GameStatus::Playing;
        self.round_id = next_round_id();
        debug!("round {} started after reset", self.round_id);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Identifies the current round; unique across all games in the process
    #[inline]
    #[must_use]
    pub const fn round_id(&self) -> u64 {
        self.round_id
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Guesses left before the round is lost
    ///
    /// Zero once the round is over, whatever the outcome.
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        if self.is_game_over() {
            0
        } else {
            MAX_GUESSES - self.guesses.len()
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Best clue seen so far for every guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> LetterHints {
        LetterHints::from_records(&self.guesses)
    }
}
