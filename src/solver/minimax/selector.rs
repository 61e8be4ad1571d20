//! Minimax-based guess selection strategy
//!
//! Selects the candidate that minimizes the worst-case remaining pool.

use super::calculator::calculate_worst_case;
use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use crate::hints::HintSpace;
use crate::solver::evaluator::{CandidateEvaluator, score_candidates};
use crate::solver::progress::ProgressCounter;

/// Select the candidate with the smallest worst case
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
    progress: &ProgressCounter<'_>,
) -> Result<Option<(&'w Word, usize)>, SolverError> {
    let scores = score_candidates(candidates, progress, |word| {
        let worst = calculate_worst_case(evaluator, word, hints)?;
        log::trace!("minimax {word}: worst case {worst}");
        Ok(worst)
    })?;

    let mut best: Option<(&Word, usize)> = None;
    for (word, worst) in candidates.iter().zip(scores) {
        if best.is_none_or(|(_, current)| worst < current) {
            best = Some((word, worst));
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

    fn select(words: &[&str]) -> Option<(String, usize)> {
        let dict = InMemoryDictionary::new(words_from_slice(words));
        let candidates = dict.words(5).to_vec();
        let baseline = ConstraintSet::new();
        let cancel = CancellationToken::new();
        let evaluator = CandidateEvaluator::new(&dict, 5, &baseline, &cancel);
        let noop = |_: f32| {};
        let progress = ProgressCounter::new(candidates.len(), &noop);

        select_best_guess(&candidates, &evaluator, &HintSpace::exhaustive(5), &progress)
            .unwrap()
            .map(|(w, worst)| (w.text().to_string(), worst))
    }

    #[test]
    fn prefers_the_better_split() {
        // ZZZZZ can't tell the A/B/C words apart; ABCDE can.
        let (best, worst) = select(&["zzzzz", "aaaaa", "bbbbb", "abcde"]).unwrap();
        assert_ne!(best, "zzzzz");
        assert!(worst <= 1);
    }

    #[test]
    fn ties_go_to_first_candidate() {
        // Every word splits the others perfectly.
        let (best, worst) = select(&["aaaaa", "bbbbb", "ccccc"]).unwrap();
        assert_eq!(best, "aaaaa");
        assert_eq!(worst, 2);

        let (best, _) = select(&["ccccc", "bbbbb", "aaaaa"]).unwrap();
        assert_eq!(best, "ccccc");
    }

    #[test]
    fn empty_candidates_give_none() {
        assert!(select(&[]).is_none());
    }

    #[test]
    fn cancellation_aborts_selection() {
        let dict = InMemoryDictionary::new(words_from_slice(&["aaaaa", "bbbbb"]));
        let candidates = dict.words(5).to_vec();
        let baseline = ConstraintSet::new();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let evaluator = CandidateEvaluator::new(&dict, 5, &baseline, &cancel);
        let noop = |_: f32| {};
        let progress = ProgressCounter::new(candidates.len(), &noop);

        let result =
            select_best_guess(&candidates, &evaluator, &HintSpace::exhaustive(5), &progress);
        assert!(matches!(result, Err(SolverError::Cancelled)));
        assert_eq!(progress.done(), 0);
    }
}
