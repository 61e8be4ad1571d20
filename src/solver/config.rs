//! Engine tunables

use crate::hints::SampleSchedule;
use rustc_hash::FxHashMap;

/// Seed for hint sampling when none is given
pub const DEFAULT_SEED: u64 = 1410;

/// Guesses allowed per game when none is given
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Settings shared by every strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the sampled hint space
    pub seed: u64,
    /// Sampled hint count per attempt
    pub sample_sizes: SampleSchedule,
    /// Fixed first guess per word length, used when present in the dictionary
    pub opening_words: FxHashMap<usize, String>,
    /// Guesses allowed per game
    pub max_attempts: usize,
}

impl EngineConfig {
    /// Drop all opening words so the strategy also picks the first guess
    #[must_use]
    pub fn without_opening_words(mut self) -> Self {
        self.opening_words.clear();
        self
    }

    /// Set the opening word for its length
    #[must_use]
    pub fn with_opening_word(mut self, word: &str) -> Self {
        let word = word.to_lowercase();
        self.opening_words.insert(word.len(), word);
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut opening_words = FxHashMap::default();
        opening_words.insert(5, "salet".to_string());

        Self {
            seed: DEFAULT_SEED,
            sample_sizes: SampleSchedule::default(),
            opening_words,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
