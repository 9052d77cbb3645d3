//! Session statistics across rounds

use super::{Game, GameStatus};
use crate::core::MAX_GUESSES;
use crate::wordlists::WordSource;
use rustc_hash::FxHashSet;

/// Running totals for a play session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses; index 0 is a first-guess win
    pub guess_distribution: [usize; MAX_GUESSES],
    recorded: FxHashSet<u64>,
}

impl Statistics {
    /// Count a finished round
    ///
    /// Returns `false` and changes nothing if the round is still in progress or
    /// was already counted.
    pub fn record<S: WordSource>(&mut self, game: &Game<S>) -> bool {
        if !game.is_game_over() || !self.recorded.insert(game.round_id()) {
            return false;
        }
        match game.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = game
                    .guesses()
                    .len()
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            GameStatus::Lost => self.current_streak = 0,
        }
        self.games_played += 1;
        true
    }

    /// Share of rounds won, 0-100
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 * 100.0 / self.games_played as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn game(answer: &str) -> Game<WordList> {
        let words = WordList::from_words(words_from_slice(&["crane", "slate", "stout"]));
        Game::with_answer(words, GameConfig::without_dictionary(), answer).unwrap()
    }

    #[test]
    fn in_progress_round_is_not_counted() {
        let mut stats = Statistics::default();
        let mut g = game("stout");
        g.make_guess("crane").unwrap();

        assert!(!stats.record(&g));
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn wins_fill_distribution_and_streaks() {
        let mut stats = Statistics::default();

        let mut g = game("stout");
        g.make_guess("crane").unwrap();
        g.make_guess("stout").unwrap();
        assert!(stats.record(&g));

        g.reset(Some("crane")).unwrap();
        g.make_guess("crane").unwrap();
        assert!(stats.record(&g));

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, [1, 1, 0, 0, 0, 0]);
        assert!((stats.win_percentage() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn loss_breaks_streak() {
        let mut stats = Statistics::default();

        let mut g = game("stout");
        g.make_guess("stout").unwrap();
        stats.record(&g);

        g.reset(Some("stout")).unwrap();
        for _ in 0..MAX_GUESSES {
            g.make_guess("crane").unwrap();
        }
        stats.record(&g);

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 1);
        assert!((stats.win_percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn same_round_is_counted_once() {
        let mut stats = Statistics::default();
        let mut g = game("stout");
        g.make_guess("stout").unwrap();

        assert!(stats.record(&g));
        assert!(!stats.record(&g));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.guess_distribution, [1, 0, 0, 0, 0, 0]);

        g.reset(Some("stout")).unwrap();
        g.make_guess("stout").unwrap();
        assert!(stats.record(&g));
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn no_games_no_percentage() {
        assert!(Statistics::default().win_percentage().abs() < f64::EPSILON);
    }
}
