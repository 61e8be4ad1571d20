//! A game in progress: the ordered feedback rows for one word length

use super::feedback::{FeedbackState, GuessRow, RowError};
use super::{HintPattern, MAX_WORD_LEN, Word};

/// Ordered, append-only history of feedback rows
///
/// The solver only ever reads a session; callers own it and append rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    word_len: usize,
    rows: Vec<GuessRow>,
}

impl Session {
    /// Start an empty session for words of `word_len` letters
    ///
    /// # Errors
    /// Returns [`RowError::UnsupportedLength`] for 0 or lengths above
    /// [`MAX_WORD_LEN`].
    pub fn new(word_len: usize) -> Result<Self, RowError> {
        if word_len == 0 || word_len > MAX_WORD_LEN {
            return Err(RowError::UnsupportedLength(word_len));
        }
        Ok(Self {
            word_len,
            rows: Vec::new(),
        })
    }

    /// Rebuild a session from rows, validating each one
    ///
    /// # Errors
    /// Fails on the first row that does not match `word_len`.
    pub fn from_rows(
        word_len: usize,
        rows: impl IntoIterator<Item = GuessRow>,
    ) -> Result<Self, RowError> {
        let mut session = Self::new(word_len)?;
        for row in rows {
            session.push(row)?;
        }
        Ok(session)
    }

    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Index of the next attempt (number of rows so far)
    #[inline]
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a completed row, stamping its attempt index
    ///
    /// # Errors
    /// Returns [`RowError::LengthMismatch`] if the row length differs from the
    /// session's word length.
    pub fn push(&mut self, row: GuessRow) -> Result<(), RowError> {
        if row.len() != self.word_len {
            return Err(RowError::LengthMismatch {
                expected: self.word_len,
                actual: row.len(),
            });
        }
        let attempt = self.rows.len();
        self.rows.push(row.with_attempt(attempt));
        Ok(())
    }

    /// Append `word` with `pattern`
    ///
    /// # Errors
    /// Fails on length mismatches between the word, the pattern and the session.
    pub fn push_word(&mut self, word: &Word, pattern: &HintPattern) -> Result<(), RowError> {
        self.push(GuessRow::from_pattern(word, pattern)?)
    }

    /// True once the latest row is all `CorrectPlace`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rows.last().is_some_and(GuessRow::is_winning)
    }

    /// The state a feedback tile is forced into by earlier rows, if any
    ///
    /// A letter already fixed at this position stays `CorrectPlace`. So does a
    /// letter that every other position has already ruled out as
    /// `WrongPlace`.
    #[must_use]
    pub fn implied_state(&self, position: usize, letter: u8) -> Option<FeedbackState> {
        let already_correct = self.rows.iter().any(|row| {
            row.cells().get(position).is_some_and(|c| {
                c.letter == letter && c.state == FeedbackState::CorrectPlace
            })
        });
        if already_correct {
            return Some(FeedbackState::CorrectPlace);
        }

        let mut wrong_places = vec![false; self.word_len];
        for cell in self.rows.iter().flat_map(GuessRow::cells) {
            if cell.letter == letter && cell.state == FeedbackState::WrongPlace {
                wrong_places[cell.position] = true;
            }
        }
        let ruled_out = wrong_places.iter().filter(|&&w| w).count();
        if self.word_len > 1
            && ruled_out == self.word_len - 1
            && !wrong_places.get(position).copied().unwrap_or(true)
        {
            return Some(FeedbackState::CorrectPlace);
        }

        None
    }
}
