//! Core domain types
//!
//! Words, per-letter feedback, hint patterns and sessions. Everything here is
//! pure data with simple accessors; filtering and scoring live elsewhere.

mod feedback;
mod pattern;
mod session;
mod word;

pub use feedback::{FeedbackState, GuessRow, LetterFeedback, RowError, score_outcome};
pub use pattern::HintPattern;
pub use session::Session;
pub use word::{MAX_WORD_LEN, Word, WordError};
