//! Per-letter feedback

use super::WORD_LENGTH;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    /// Letter is in the answer at this position (green)
    Correct,
    /// Letter is in the answer at another, unclaimed position (yellow)
    Present,
    /// Letter is not in the answer, or every occurrence is already claimed (gray)
    Absent,
}

/// One clue per letter position, aligned with the guess
pub type Clues = [Clue; WORD_LENGTH];

impl Clue {
    /// How much this clue reveals about a letter
    ///
    /// `Correct` outranks `Present`, which outranks `Absent`.
    #[inline]
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Correct => 2,
            Self::Present => 1,
            Self::Absent => 0,
        }
    }

    /// Emoji tile for this clue
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}
