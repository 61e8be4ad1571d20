//! Candidate pool evaluation under hypothetical feedback
//!
//! For a candidate guess and a hint pattern, the resulting pool is the
//! baseline constraints plus whatever that pattern would imply for the guess.
//! Only counts are queried here; word lists are never materialized.

use super::progress::{CancellationToken, ProgressCounter};
use crate::constraints::{ConstraintSet, row_constraints};
use crate::core::{GuessRow, HintPattern, Word};
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use crate::hints::HintSpace;
use rayon::prelude::*;

/// Counts resulting pool sizes for hypothetical outcomes
pub struct CandidateEvaluator<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    word_len: usize,
    baseline: &'a ConstraintSet,
    cancel: &'a CancellationToken,
}

impl<'a, D: Dictionary + ?Sized> CandidateEvaluator<'a, D> {
    #[must_use]
    pub const fn new(
        dictionary: &'a D,
        word_len: usize,
        baseline: &'a ConstraintSet,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            dictionary,
            word_len,
            baseline,
            cancel,
        }
    }

    /// Pool size if `guess` were answered with `pattern`
    ///
    /// # Errors
    /// Cancellation, a length mismatch, or a dictionary failure.
    pub fn outcome_count(&self, guess: &Word, pattern: &HintPattern) -> Result<usize, SolverError> {
        self.cancel.check()?;

        let row = GuessRow::from_pattern(guess, pattern)?;
        let mut constraints = self.baseline.clone();
        constraints.extend(row_constraints(&row));

        Ok(self.dictionary.count(self.word_len, &constraints)?)
    }

    /// Pool size for every pattern in `hints`, in enumeration order
    ///
    /// # Errors
    /// Stops at the first failing query.
    pub fn outcome_counts(
        &self,
        guess: &Word,
        hints: &HintSpace,
    ) -> Result<Vec<(HintPattern, usize)>, SolverError> {
        hints
            .iter()
            .map(|pattern| {
                let count = self.outcome_count(guess, &pattern)?;
                Ok((pattern, count))
            })
            .collect()
    }
}

/// Score every candidate on the rayon pool, ticking `progress` per candidate
///
/// Scores come back in candidate order regardless of completion order. The
/// first error (including cancellation) aborts the whole batch.
///
/// # Errors
/// Whatever `score` returns first.
pub fn score_candidates<T, F>(
    candidates: &[Word],
    progress: &ProgressCounter<'_>,
    score: F,
) -> Result<Vec<T>, SolverError>
where
    T: Send,
    F: Fn(&Word) -> Result<T, SolverError> + Sync,
{
    candidates
        .par_iter()
        .map(|word| {
            let value = score(word)?;
            progress.tick();
            Ok(value)
        })
        .collect()
}
