//! Dictionary collaborator
//!
//! The engine only needs two read-only queries over a [`ConstraintSet`]: how
//! many words of a length match, and which ones. Storage is up to the
//! implementor; failures come back as [`DictionaryError`] and are passed to
//! the caller untouched.

mod memory;

pub use memory::InMemoryDictionary;

use crate::constraints::ConstraintSet;
use crate::core::Word;
use thiserror::Error;

/// Opaque failure raised by a dictionary backend
#[derive(Debug, Error)]
#[error("dictionary query failed: {message}")]
pub struct DictionaryError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl DictionaryError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Read-only word store queried by the solver
///
/// Both queries must be pure, and an empty constraint set means "every word
/// of that length". `list` must return words in a stable order; the solvers
/// break ties by it.
pub trait Dictionary: Sync {
    /// Number of `word_len`-letter words matching `constraints`
    ///
    /// # Errors
    /// Backend-specific failure.
    fn count(&self, word_len: usize, constraints: &ConstraintSet) -> Result<usize, DictionaryError>;

    /// The `word_len`-letter words matching `constraints`, in storage order
    ///
    /// # Errors
    /// Backend-specific failure.
    fn list(&self, word_len: usize, constraints: &ConstraintSet)
    -> Result<Vec<Word>, DictionaryError>;
}
