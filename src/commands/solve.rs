//! Word solving command
//!
//! Plays a full game against a known target and records every turn.

use crate::core::{HintPattern, Session, Word, score_outcome};
use crate::dictionary::Dictionary;
use crate::solver::{CancellationToken, Solver, Strategy};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, max_guesses: usize) -> Self {
        Self {
            target,
            max_guesses,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single turn of the game
pub struct GuessStep {
    pub word: String,
    pub pattern: HintPattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the given solver
///
/// `progress` receives the strategy's per-turn progress.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid word or not in the dictionary
/// - The solver fails, e.g. on a dictionary error
pub fn solve_word<D, S>(
    config: SolveConfig,
    solver: &Solver<'_, D, S>,
    progress: &(dyn Fn(f32) + Sync),
) -> Result<SolveResult>
where
    D: Dictionary + ?Sized,
    S: Strategy,
{
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("invalid target word {:?}", config.target))?;

    let mut session = Session::new(target.len())?;
    if !is_known(solver, &target)? {
        bail!("{target} is not in the dictionary");
    }

    let cancel = CancellationToken::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.remaining(&session)?;
        let guess = solver.next_guess(&session, progress, &cancel)?;

        let row = score_outcome(&guess, &target)?;
        let pattern = row.pattern();
        session.push(row)?;

        let candidates_after = solver.remaining(&session)?;
        log::debug!("{guess} -> {pattern}: {candidates_before} -> {candidates_after}");

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
        });

        if session.is_solved() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}

/// True if the dictionary holds `target`
fn is_known<D, S>(solver: &Solver<'_, D, S>, target: &Word) -> Result<bool>
where
    D: Dictionary + ?Sized,
    S: Strategy,
{
    let mut probe = Session::new(target.len())?;
    probe.push(score_outcome(target, target)?)?;
    Ok(solver.remaining(&probe)? > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::InMemoryDictionary;
    use crate::solver::StrategyKind;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> InMemoryDictionary {
        InMemoryDictionary::new(words_from_slice(&[
            "salet", "apple", "angle", "table", "cable", "fable", "gable", "sable", "maple",
            "ample", "eagle", "ladle", "llama", "alarm", "alloy",
        ]))
    }

    fn solve(strategy: &str, target: &str, max_guesses: usize) -> Result<SolveResult> {
        let dict = dictionary();
        let strategy = StrategyKind::from_name(strategy).unwrap();
        let solver = Solver::new(strategy, &dict);
        solve_word(SolveConfig::new(target.to_string(), max_guesses), &solver, &|_: f32| {})
    }

    #[test]
    fn solve_word_succeeds() {
        let result = solve("entropy", "angle", 6).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.first().unwrap().word, "salet");
        assert_eq!(result.guesses.last().unwrap().word, "angle");
        assert!(result.guesses.last().unwrap().pattern.is_terminal());
    }

    #[test]
    fn candidates_never_grow() {
        let result = solve("minimax", "ladle", 6).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn invalid_target_is_an_error() {
        assert!(solve("entropy", "l1ama", 6).is_err());
    }

    #[test]
    fn unknown_target_is_an_error() {
        let err = solve("entropy", "zzzzz", 6).err().unwrap();
        assert!(err.to_string().contains("not in the dictionary"));
    }

    #[test]
    fn respects_max_guesses() {
        let result = solve("first", "alloy", 2).unwrap();

        assert!(result.guesses.len() <= 2);
        if !result.success {
            assert_eq!(result.guesses.len(), 2);
        }
    }
}
