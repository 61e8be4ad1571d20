//! Worst-case pool size for a single guess
//!
//! Given a guess, computes the largest pool any non-terminal outcome could
//! leave behind.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use crate::hints::HintSpace;
use crate::solver::evaluator::CandidateEvaluator;

/// Calculate the maximum remaining pool size for a guess
///
/// # Strategy
/// For each pattern in `hints`:
/// - Count the dictionary words consistent with baseline + that pattern
/// - Return the maximum count (worst case)
///
/// An empty hint space yields 0.
///
/// # Errors
/// Cancellation or a dictionary failure.
pub fn calculate_worst_case<D: Dictionary + ?Sized>(
    evaluator: &CandidateEvaluator<'_, D>,
    guess: &Word,
    hints: &HintSpace,
) -> Result<usize, SolverError> {
    let mut worst = 0;
    for pattern in hints.iter() {
        worst = worst.max(evaluator.outcome_count(guess, &pattern)?);
    }
    Ok(worst)
}
