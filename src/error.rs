//! Errors surfaced by the solving engine

use crate::core::RowError;
use crate::dictionary::DictionaryError;
use thiserror::Error;

/// Why a turn produced no guess
#[derive(Debug, Error)]
pub enum SolverError {
    /// No dictionary word satisfies the feedback so far
    #[error("no word in the dictionary satisfies the feedback so far")]
    EmptyCandidatePool,

    /// A feedback row was malformed
    #[error("invalid feedback row: {0}")]
    InvalidFeedbackRow(#[from] RowError),

    /// The turn was cancelled before it finished
    #[error("operation was cancelled")]
    Cancelled,

    /// The dictionary backend failed; passed through unchanged
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

impl SolverError {
    /// True for cancellation, which callers usually treat as a silent no-op
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
