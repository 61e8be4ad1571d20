//! Benchmark command
//!
//! Plays a game against each target word and summarises the guess counts.

use crate::core::{Session, Word, score_outcome};
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use crate::solver::{CancellationToken, Solver, Strategy};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games keyed by guess count
    pub distribution: FxHashMap<usize, usize>,
    /// Targets not found within the attempt limit
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of target words
///
/// `on_word` is called after each target finishes.
///
/// # Errors
/// A solver failure other than running out of candidates, which only counts
/// as a failed game.
pub fn run_benchmark<D, S>(
    solver: &Solver<'_, D, S>,
    target_words: &[Word],
    on_word: impl Fn(&Word, Option<usize>),
) -> Result<BenchmarkResult, SolverError>
where
    D: Dictionary + ?Sized,
    S: Strategy,
{
    let start = Instant::now();
    let max_attempts = solver.config().max_attempts;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for target in target_words {
        let outcome = play_one(solver, target, max_attempts)?;
        on_word(target, outcome);

        if let Some(guesses) = outcome {
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            log::debug!("failed to solve {target}");
            failures.push(target.text().to_string());
        }
    }

    let duration = start.elapsed();
    let solved = target_words.len() - failures.len();

    Ok(BenchmarkResult {
        total_words: target_words.len(),
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: target_words.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Guesses needed to find `target`, or `None` if it was not found in time
fn play_one<D, S>(
    solver: &Solver<'_, D, S>,
    target: &Word,
    max_attempts: usize,
) -> Result<Option<usize>, SolverError>
where
    D: Dictionary + ?Sized,
    S: Strategy,
{
    let cancel = CancellationToken::new();
    let mut session = Session::new(target.len())?;

    for guesses in 1..=max_attempts {
        let guess = match solver.next_guess(&session, &|_: f32| {}, &cancel) {
            Ok(guess) => guess,
            Err(SolverError::EmptyCandidatePool) => return Ok(None),
            Err(e) => return Err(e),
        };
        session.push(score_outcome(&guess, target)?)?;
        if session.is_solved() {
            return Ok(Some(guesses));
        }
    }
    Ok(None)
}
