//! Pure entropy-based word selection
//!
//! Selects the candidate that maximizes Shannon entropy over sampled outcomes.

use super::calculator::calculate_entropy;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use crate::hints::HintSpace;
use crate::solver::evaluator::{CandidateEvaluator, score_candidates};
use crate::solver::progress::ProgressCounter;

/// Select the candidate with the highest entropy
///
/// Candidates are scored in parallel; ties go to the earliest candidate in
/// `candidates` order. Returns `None` for an empty candidate list.
///
/// # Errors
/// Cancellation or a dictionary failure from any candidate.
pub fn select_best_guess<'w, D: Dictionary + ?Sized>(
    candidates: &'w [Word],
    evaluator: &CandidateEvaluator<'_, D>,
    hints: &HintSpace,
    total: usize,
    progress: &ProgressCounter<'_>,
) -> Result<Option<(&'w Word, f64)>, SolverError> {
    let scores = score_candidates(candidates, progress, |word| {
        let entropy = calculate_entropy(evaluator, word, hints, total)?;
        log::trace!("entropy {word}: {entropy:.4} bits");
        Ok(entropy)
    })?;

    let mut best: Option<(&Word, f64)> = None;
    for (word, entropy) in candidates.iter().zip(scores) {
        if best.is_none_or(|(_, current)| entropy.total_cmp(&current).is_gt()) {
            best = Some((word, entropy));
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ConstraintSet;
    use crate::dictionary::InMemoryDictionary;
    use crate::solver::progress::CancellationToken;
    use crate::wordlists::loader::words_from_slice;

    fn select(words: &[&str]) -> Option<(String, f64)> {
        let dict = InMemoryDictionary::new(words_from_slice(words));
        let candidates = dict.words(5).to_vec();
        let baseline = ConstraintSet::new();
        let cancel = CancellationToken::new();
        let evaluator = CandidateEvaluator::new(&dict, 5, &baseline, &cancel);
        let noop = |_: f32| {};
        let progress = ProgressCounter::new(candidates.len(), &noop);

        select_best_guess(
            &candidates,
            &evaluator,
            &HintSpace::exhaustive(5),
            candidates.len(),
            &progress,
        )
        .unwrap()
        .map(|(w, e)| (w.text().to_string(), e))
    }

    #[test]
    fn selects_highest_entropy() {
        // ZZZZZ lumps the rest into one outcome; ABCDE separates them.
        let (best, entropy) = select(&["zzzzz", "aaaaa", "bbbbb", "abcde"]).unwrap();
        assert_eq!(best, "abcde");
        assert!(entropy > 1.0);
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let (best, _) = select(&["aaaaa", "bbbbb", "ccccc"]).unwrap();
        assert_eq!(best, "aaaaa");
    }

    #[test]
    fn empty_candidates_give_none() {
        assert!(select(&[]).is_none());
    }
}
