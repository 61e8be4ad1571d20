//! Per-letter feedback and completed guess rows

use super::{HintPattern, Word, WordError};
use std::fmt;
use thiserror::Error;

/// Feedback category for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackState {
    /// Letter present in the target at exactly this position
    CorrectPlace,
    /// Letter present in the target but not at this position
    WrongPlace,
    /// No occurrences beyond those already confirmed in the same row
    Absent,
}

impl FeedbackState {
    /// All states, in base-3 digit order
    pub const ALL: [Self; 3] = [Self::Absent, Self::WrongPlace, Self::CorrectPlace];

    #[inline]
    pub(crate) const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::WrongPlace => 1,
            Self::CorrectPlace => 2,
        }
    }

    #[inline]
    pub(crate) const fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::WrongPlace,
            _ => Self::CorrectPlace,
        }
    }

    /// Next state when a user taps a tile: Absent → `WrongPlace` → `CorrectPlace` → Absent
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Absent => Self::WrongPlace,
            Self::WrongPlace => Self::CorrectPlace,
            Self::CorrectPlace => Self::Absent,
        }
    }
}

/// Rejection reasons for a feedback row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has {actual} letters but the session uses {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("position {0} appears more than once")]
    DuplicatePosition(usize),
    #[error("position {position} is outside a {len}-letter row")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("unsupported word length {0}")]
    UnsupportedLength(usize),
    #[error("invalid pattern string: {0}")]
    InvalidPattern(String),
    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// One cell of a guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub position: usize,
    pub letter: u8,
    pub state: FeedbackState,
}

impl LetterFeedback {
    #[must_use]
    pub const fn new(position: usize, letter: u8, state: FeedbackState) -> Self {
        Self {
            position,
            letter,
            state,
        }
    }
}

/// A completed guess: exactly one feedback cell per position, in position order
///
/// Rows are immutable once built. `attempt` is stamped by the session when the
/// row is appended; hypothetical rows keep 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    attempt: usize,
    cells: Vec<LetterFeedback>,
}

impl GuessRow {
    /// Build a row from cells given in any order
    ///
    /// # Errors
    /// Fails when a position repeats or falls outside the row, or when a
    /// letter is not ASCII alphabetic. Uppercase letters are lowercased.
    pub fn new(mut cells: Vec<LetterFeedback>) -> Result<Self, RowError> {
        let len = cells.len();
        if len == 0 || len > super::MAX_WORD_LEN {
            return Err(RowError::UnsupportedLength(len));
        }

        let mut seen = vec![false; len];
        for cell in &mut cells {
            if !cell.letter.is_ascii_alphabetic() {
                return Err(RowError::InvalidWord(if cell.letter.is_ascii() {
                    WordError::InvalidCharacters
                } else {
                    WordError::NonAscii
                }));
            }
            cell.letter = cell.letter.to_ascii_lowercase();

            if cell.position >= len {
                return Err(RowError::PositionOutOfRange {
                    position: cell.position,
                    len,
                });
            }
            if seen[cell.position] {
                return Err(RowError::DuplicatePosition(cell.position));
            }
            seen[cell.position] = true;
        }
        // Every position is covered once there are `len` distinct in-range cells.
        cells.sort_by_key(|c| c.position);

        Ok(Self { attempt: 0, cells })
    }

    /// Pair a word's letters with a hint pattern
    ///
    /// # Errors
    /// Returns [`RowError::LengthMismatch`] if the lengths differ.
    pub fn from_pattern(word: &Word, pattern: &HintPattern) -> Result<Self, RowError> {
        if word.len() != pattern.len() {
            return Err(RowError::LengthMismatch {
                expected: word.len(),
                actual: pattern.len(),
            });
        }

        let cells = word
            .letters()
            .iter()
            .zip(pattern.states())
            .enumerate()
            .map(|(position, (&letter, &state))| LetterFeedback::new(position, letter, state))
            .collect();

        Ok(Self { attempt: 0, cells })
    }

    /// Parse `word` + `pattern` text, e.g. `("apple", "G--GG")`
    ///
    /// # Errors
    /// Fails on an invalid word, an invalid pattern, or a length mismatch.
    pub fn parse(word: &str, pattern: &str) -> Result<Self, RowError> {
        let word = Word::new(word)?;
        let pattern = HintPattern::parse(pattern)?;
        Self::from_pattern(&word, &pattern)
    }

    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    pub(crate) const fn with_attempt(mut self, attempt: usize) -> Self {
        self.attempt = attempt;
        self
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[LetterFeedback] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The guessed word, letters in position order
    #[must_use]
    pub fn word_text(&self) -> String {
        self.cells.iter().map(|c| char::from(c.letter)).collect()
    }

    /// The feedback states as a pattern
    #[must_use]
    pub fn pattern(&self) -> HintPattern {
        HintPattern::new(self.cells.iter().map(|c| c.state).collect())
    }

    /// True if every cell is `CorrectPlace`
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.cells
            .iter()
            .all(|c| c.state == FeedbackState::CorrectPlace)
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.word_text(), self.pattern())
    }
}

/// Parses the `word=pattern` form produced by `Display`
impl std::str::FromStr for GuessRow {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, pattern) = s
            .split_once('=')
            .ok_or_else(|| RowError::InvalidPattern(s.to_string()))?;
        Self::parse(word.trim(), pattern.trim())
    }
}

/// Compute the feedback row for `guess` against a known `target`
///
/// # Errors
/// Returns [`RowError::LengthMismatch`] when the words differ in length.
///
/// # Examples
/// ```
/// use helple::core::{Word, score_outcome};
///
/// let row = score_outcome(&Word::new("apple").unwrap(), &Word::new("angle").unwrap()).unwrap();
/// assert_eq!(row.to_string(), "apple=G--GG");
/// ```
pub fn score_outcome(guess: &Word, target: &Word) -> Result<GuessRow, RowError> {
    let pattern = HintPattern::calculate(guess, target)?;
    GuessRow::from_pattern(guess, &pattern)
}
