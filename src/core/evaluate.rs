//! Guess evaluation
//!
//! Compares a guess with the answer and produces one [`Clue`] per position,
//! following the game's rules for repeated letters: each letter occurrence in the
//! answer can back at most one `Correct` or `Present` clue in the guess.

use super::{Clue, Clues, WORD_LENGTH, Word, WordError};
use crate::error::GameError;

/// Classify a single letter against the answer, ignoring the rest of the guess
///
/// Returns `Correct` if the answer has `letter` at `index`, `Present` if it has it
/// anywhere else, `Absent` otherwise. This does not account for repeated letters in
/// a guess; use [`evaluate_guess`] to score a whole word.
///
/// # Errors
/// Returns `GameError::InvalidArgument` if `index` is not in `0..5` or `letter` is
/// not an uppercase ASCII letter.
///
/// # Examples
/// ```
/// use wordle_game::core::{Clue, Word, evaluate_letter};
///
/// let answer = Word::new("stout").unwrap();
/// assert_eq!(evaluate_letter('T', 1, &answer).unwrap(), Clue::Correct);
/// assert_eq!(evaluate_letter('T', 0, &answer).unwrap(), Clue::Present);
/// assert_eq!(evaluate_letter('Z', 0, &answer).unwrap(), Clue::Absent);
/// assert!(evaluate_letter('T', 5, &answer).is_err());
/// assert!(evaluate_letter('t', 1, &answer).is_err());
/// ```
pub fn evaluate_letter(letter: char, index: usize, answer: &Word) -> Result<Clue, GameError> {
    if index >= WORD_LENGTH {
        return Err(WordError::PositionOutOfRange(index).into());
    }
    if !letter.is_ascii_uppercase() {
        return Err(WordError::InvalidCharacter(letter).into());
    }
    let letter = letter as u8;

    Ok(if answer.letter_at(index) == letter {
        Clue::Correct
    } else if answer.has_letter(letter) {
        Clue::Present
    } else {
        Clue::Absent
    })
}

/// Score `guess` against `answer`
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and claim those answer
///    positions
/// 2. Second pass: for every other guess position, claim an unclaimed answer
///    position holding the same letter (`Present`), or mark it `Absent`
///
/// # Examples
/// ```
/// use wordle_game::core::{Clue::*, Word, evaluate_guess};
///
/// let answer = Word::new("stout").unwrap();
/// let guess = Word::new("stand").unwrap();
/// assert_eq!(
///     evaluate_guess(&answer, &guess),
///     [Correct, Correct, Absent, Absent, Absent]
/// );
/// ```
#[must_use]
pub fn evaluate_guess(answer: &Word, guess: &Word) -> Clues {
    let mut clues = [Clue::Absent; WORD_LENGTH];
    let mut claimed = [false; WORD_LENGTH];

    // Allow: index pairs guess[i], answer[i] and clues[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.letter_at(i) == answer.letter_at(i) {
            clues[i] = Clue::Correct;
            claimed[i] = true;
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if clues[i] == Clue::Correct {
            continue;
        }
        let letter = guess.letter_at(i);
        let unclaimed = (0..WORD_LENGTH).find(|&j| !claimed[j] && answer.letter_at(j) == letter);
        if let Some(j) = unclaimed {
            claimed[j] = true;
            clues[i] = Clue::Present;
        }
    }

    clues
}

/// Score a guess given as plain strings
///
/// Both strings are normalized to uppercase before scoring.
///
/// # Errors
/// Returns `GameError::InvalidArgument` if either string is not a valid word.
pub fn score(answer: &str, guess: &str) -> Result<Clues, GameError> {
    let answer = Word::new(answer)?;
    let guess = Word::new(guess)?;
    Ok(evaluate_guess(&answer, &guess))
}

#[cfg(test)]
mod tests {
    use super::Clue::{Absent, Correct, Present};
    use super::*;

    fn eval(answer: &str, guess: &str) -> Clues {
        score(answer, guess).unwrap()
    }

    fn hits_for(guess: &str, clues: &Clues, letter: char) -> usize {
        guess
            .chars()
            .zip(clues)
            .filter(|&(ch, clue)| ch == letter && *clue != Absent)
            .count()
    }

    #[test]
    fn letter_correct_present_absent() {
        let answer = Word::new("crane").unwrap();
        assert_eq!(evaluate_letter('C', 0, &answer).unwrap(), Correct);
        assert_eq!(evaluate_letter('E', 0, &answer).unwrap(), Present);
        assert_eq!(evaluate_letter('Z', 3, &answer).unwrap(), Absent);
    }

    #[test]
    fn letter_must_be_uppercase() {
        let answer = Word::new("crane").unwrap();
        assert_eq!(
            evaluate_letter('c', 0, &answer),
            Err(GameError::InvalidArgument(WordError::InvalidCharacter('c')))
        );
        assert_eq!(
            evaluate_letter('é', 0, &answer),
            Err(GameError::InvalidArgument(WordError::InvalidCharacter('é')))
        );
    }

    #[test]
    fn letter_rejects_bad_arguments() {
        let answer = Word::new("crane").unwrap();
        assert!(matches!(
            evaluate_letter('C', 5, &answer),
            Err(GameError::InvalidArgument(WordError::PositionOutOfRange(5)))
        ));
        assert!(matches!(
            evaluate_letter('1', 0, &answer),
            Err(GameError::InvalidArgument(WordError::InvalidCharacter('1')))
        ));
    }

    #[test]
    fn letter_check_double_counts_repeats() {
        // CRANE has one E; the per-letter check reports three E hits
        let answer = Word::new("crane").unwrap();
        let naive: Vec<Clue> = "EERIE"
            .chars()
            .enumerate()
            .map(|(i, ch)| evaluate_letter(ch, i, &answer).unwrap())
            .collect();
        assert_eq!(naive, [Present, Present, Present, Absent, Correct]);

        assert_eq!(eval("crane", "eerie"), [Absent, Absent, Present, Absent, Correct]);
    }

    #[test]
    fn guess_against_itself_is_all_correct() {
        for word in ["crane", "speed", "aaaaa", "stout", "zzzzz"] {
            assert_eq!(eval(word, word), [Correct; WORD_LENGTH]);
        }
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        assert_eq!(eval("abcde", "fghij"), [Absent; WORD_LENGTH]);
        assert_eq!(eval("stout", "cramp"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn stout_stand() {
        assert_eq!(eval("stout", "stand"), [Correct, Correct, Absent, Absent, Absent]);
    }

    #[test]
    fn stout_torts_scores_one_t_per_answer_t() {
        // STOUT has T at 1 and 4; TORTS has T at 0 and 3
        let clues = eval("stout", "torts");
        assert_eq!(clues, [Present, Present, Absent, Present, Present]);
        assert_eq!(hits_for("TORTS", &clues, 'T'), 2);
    }

    #[test]
    fn single_t_answer_limits_repeated_t_in_guess() {
        // PLATE has a single T at 3
        let clues = eval("plate", "torts");
        assert_eq!(clues, [Absent, Absent, Absent, Correct, Absent]);
        assert_eq!(hits_for("TORTS", &clues, 'T'), 1);
    }

    #[test]
    fn speed_erase_never_exceeds_answer_count() {
        let clues = eval("speed", "erase");
        assert_eq!(clues, [Present, Absent, Absent, Present, Present]);
        assert!(hits_for("ERASE", &clues, 'E') <= 2);
    }

    #[test]
    fn hits_per_letter_equal_shared_count() {
        let words = [
            "SPEED", "ERASE", "GEESE", "LLAMA", "ABBEY", "STOUT", "TORTS", "EERIE", "ALLAY",
            "MAMMA",
        ];
        let count = |word: &str, letter: char| word.chars().filter(|&c| c == letter).count();

        for answer in words {
            for guess in words {
                let clues = eval(answer, guess);
                for letter in guess.chars() {
                    assert_eq!(
                        hits_for(guess, &clues, letter),
                        count(guess, letter).min(count(answer, letter)),
                        "{guess} against {answer}, letter {letter}"
                    );
                }
            }
        }
    }

    #[test]
    fn correct_takes_priority_over_present() {
        // Only one O in PRONE; the exact match at 2 must claim it
        assert_eq!(eval("prone", "oboes"), [Absent, Absent, Correct, Present, Absent]);
        // FLOOR: ROBOT -> R yellow, O yellow, B gray, O green, T gray
        assert_eq!(eval("floor", "robot"), [Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn lowercase_and_uppercase_guesses_score_identically() {
        for (answer, guess) in [("stout", "torts"), ("speed", "erase"), ("crane", "eerie")] {
            assert_eq!(
                eval(answer, guess),
                eval(&answer.to_uppercase(), &guess.to_uppercase())
            );
        }
    }

    #[test]
    fn score_rejects_malformed_words() {
        assert!(matches!(
            score("crane", "cran"),
            Err(GameError::InvalidArgument(WordError::InvalidLength(4)))
        ));
        assert!(matches!(
            score("cr4ne", "crane"),
            Err(GameError::InvalidArgument(WordError::InvalidCharacter('4')))
        ));
    }
}
