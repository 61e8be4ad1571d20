//! Enumeration of hypothetical feedback patterns
//!
//! Patterns are addressed by their base-3 index, so both modes are plain index
//! walks: no recursion and no materialized pattern lists.

use crate::core::HintPattern;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How many sampled patterns to score, by attempt index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSchedule {
    /// Attempt 0 (largest pool)
    pub first: usize,
    /// Attempt 1
    pub second: usize,
    /// Every later attempt
    pub later: usize,
}

impl SampleSchedule {
    #[must_use]
    pub const fn new(first: usize, second: usize, later: usize) -> Self {
        Self {
            first,
            second,
            later,
        }
    }

    /// Sample size for a given attempt
    #[must_use]
    pub const fn for_attempt(&self, attempt: usize) -> usize {
        match attempt {
            0 => self.first,
            1 => self.second,
            _ => self.later,
        }
    }
}

impl Default for SampleSchedule {
    fn default() -> Self {
        Self::new(16, 25, 70)
    }
}

#[derive(Debug, Clone)]
enum Indices {
    /// Every index below the terminal one
    All,
    /// A fixed subset, in sample order
    Sampled(Vec<u64>),
}

/// A finite, re-iterable space of non-terminal hint patterns
#[derive(Debug, Clone)]
pub struct HintSpace {
    word_len: usize,
    indices: Indices,
}

impl HintSpace {
    /// Every ordered pattern of `word_len` states except the all-correct one
    ///
    /// # Examples
    /// ```
    /// use helple::hints::HintSpace;
    ///
    /// let space = HintSpace::exhaustive(5);
    /// assert_eq!(space.len(), 242);
    /// assert!(space.iter().all(|p| !p.is_terminal()));
    /// ```
    #[must_use]
    pub const fn exhaustive(word_len: usize) -> Self {
        Self {
            word_len,
            indices: Indices::All,
        }
    }

    /// A deterministic pseudo-random subset of the exhaustive space
    ///
    /// The same `seed` and `size` always give the same patterns in the same
    /// order. Sizes above the space size are clamped.
    #[must_use]
    pub fn sampled(word_len: usize, size: usize, seed: u64) -> Self {
        let non_terminal = HintPattern::space_size(word_len) - 1;
        let amount = (size as u64).min(non_terminal) as usize;

        let mut rng = StdRng::seed_from_u64(seed);
        let indices = rand::seq::index::sample(&mut rng, non_terminal as usize, amount)
            .into_iter()
            .map(|i| i as u64)
            .collect();

        Self {
            word_len,
            indices: Indices::Sampled(indices),
        }
    }

    /// The sampled space for a given attempt, sized by `schedule`
    #[must_use]
    pub fn for_attempt(word_len: usize, attempt: usize, schedule: &SampleSchedule, seed: u64) -> Self {
        Self::sampled(word_len, schedule.for_attempt(attempt), seed)
    }

    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of patterns the space yields
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.indices {
            Indices::All => (HintPattern::space_size(self.word_len) - 1) as usize,
            Indices::Sampled(indices) => indices.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily decode the patterns; may be called any number of times
    pub fn iter(&self) -> impl Iterator<Item = HintPattern> + '_ {
        let word_len = self.word_len;
        let all = match &self.indices {
            Indices::All => Some(0..HintPattern::space_size(word_len) - 1),
            Indices::Sampled(_) => None,
        };
        let sampled = match &self.indices {
            Indices::All => None,
            Indices::Sampled(indices) => Some(indices.iter().copied()),
        };

        all.into_iter()
            .flatten()
            .chain(sampled.into_iter().flatten())
            .map(move |index| HintPattern::from_index(index, word_len))
    }
}
