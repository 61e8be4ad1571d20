//! In-memory dictionary backed by per-length word lists

use super::{Dictionary, DictionaryError};
use crate::constraints::ConstraintSet;
use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Word lists bucketed by length, in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryDictionary {
    by_len: FxHashMap<usize, Vec<Word>>,
}

impl InMemoryDictionary {
    /// Build from words; repeats are dropped, first occurrence wins
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let mut by_len: FxHashMap<usize, Vec<Word>> = FxHashMap::default();

        for word in words {
            if seen.insert(word.text().to_string()) {
                by_len.entry(word.len()).or_default().push(word);
            }
        }

        Self { by_len }
    }

    /// All stored words of a length
    #[must_use]
    pub fn words(&self, word_len: usize) -> &[Word] {
        self.by_len.get(&word_len).map_or(&[], Vec::as_slice)
    }

    /// Lengths with at least one word, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_len.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of stored words
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_len.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a stored word by text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words(text.len()).iter().find(|w| w.text() == text)
    }
}

impl Dictionary for InMemoryDictionary {
    fn count(&self, word_len: usize, constraints: &ConstraintSet) -> Result<usize, DictionaryError> {
        Ok(self
            .words(word_len)
            .iter()
            .filter(|w| constraints.matches(w))
            .count())
    }

    fn list(
        &self,
        word_len: usize,
        constraints: &ConstraintSet,
    ) -> Result<Vec<Word>, DictionaryError> {
        Ok(self
            .words(word_len)
            .iter()
            .filter(|w| constraints.matches(w))
            .cloned()
            .collect())
    }
}
