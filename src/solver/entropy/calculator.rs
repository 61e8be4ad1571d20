//! Shannon entropy of hypothetical outcomes
//!
//! Given a guess and a hint space, computes the information carried by the
//! distribution of resulting pool sizes.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use crate::hints::HintSpace;
use crate::solver::evaluator::CandidateEvaluator;

/// Calculate Shannon entropy from outcome pool sizes
///
/// H = -Σ p · log₂(p), with p = `count / total` for each outcome with p > 0.
///
/// `total` is the size of the whole word pool for this length, so the p values
/// of a sampled hint space need not sum to 1.
///
/// # Examples
/// ```
/// use helple::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25], 100);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: impl IntoIterator<Item = usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    counts
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of `guess` over the patterns in `hints`
///
/// # Errors
/// Cancellation or a dictionary failure.
pub fn calculate_entropy<D: Dictionary + ?Sized>(
    evaluator: &CandidateEvaluator<'_, D>,
    guess: &Word,
    hints: &HintSpace,
    total: usize,
) -> Result<f64, SolverError> {
    let counts = evaluator.outcome_counts(guess, hints)?;
    Ok(shannon_entropy(counts.into_iter().map(|(_, c)| c), total))
}
