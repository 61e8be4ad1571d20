//! Guess selection strategies
//!
//! Defines the Strategy trait, the per-turn context it reads from, and the
//! four concrete implementations.

use super::config::EngineConfig;
use super::evaluator::CandidateEvaluator;
use super::progress::{CancellationToken, ProgressCounter};
use super::{entropy, minimax};
use crate::constraints::{ConstraintSet, build_constraints};
use crate::core::{Session, Word};
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use crate::hints::HintSpace;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Everything a strategy may read during one turn
pub struct Turn<'a, D: Dictionary + ?Sized> {
    pub session: &'a Session,
    pub dictionary: &'a D,
    pub config: &'a EngineConfig,
    pub progress: &'a (dyn Fn(f32) + Sync),
    pub cancel: &'a CancellationToken,
}

impl<D: Dictionary + ?Sized> Turn<'_, D> {
    /// Constraints accumulated over the session
    #[must_use]
    pub fn constraints(&self) -> ConstraintSet {
        build_constraints(self.session)
    }

    /// The live candidate pool, in dictionary order
    ///
    /// # Errors
    /// Cancellation or a dictionary failure.
    pub fn candidates(&self, constraints: &ConstraintSet) -> Result<Vec<Word>, SolverError> {
        self.cancel.check()?;
        Ok(self
            .dictionary
            .list(self.session.word_len(), constraints)?)
    }
}

/// A strategy for selecting the next guess from the live candidate pool
pub trait Strategy {
    /// Pick the next guess
    ///
    /// Returns `Ok(None)` when no dictionary word satisfies the session.
    ///
    /// # Errors
    /// Cancellation or a dictionary failure.
    fn select_guess<D: Dictionary + ?Sized>(
        &self,
        turn: &Turn<'_, D>,
    ) -> Result<Option<Word>, SolverError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Uniformly random candidate
    RandomValid(RandomStrategy),
    /// First candidate in dictionary order
    FirstMatch(FirstMatchStrategy),
    /// Smallest worst-case pool
    Minimax(MinimaxStrategy),
    /// Highest sampled entropy
    Entropy(EntropyStrategy),
}

impl Strategy for StrategyKind {
    fn select_guess<D: Dictionary + ?Sized>(
        &self,
        turn: &Turn<'_, D>,
    ) -> Result<Option<Word>, SolverError> {
        match self {
            Self::RandomValid(s) => s.select_guess(turn),
            Self::FirstMatch(s) => s.select_guess(turn),
            Self::Minimax(s) => s.select_guess(turn),
            Self::Entropy(s) => s.select_guess(turn),
        }
    }
}

impl StrategyKind {
    /// Names accepted by [`from_name`](Self::from_name)
    pub const NAMES: [&'static str; 4] = ["random", "first", "minimax", "entropy"];

    /// Create strategy from name string
    ///
    /// Supported names: "random", "first", "minimax", "entropy"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "random" | "simple" => Some(Self::RandomValid(RandomStrategy::default())),
            "first" | "first-match" => Some(Self::FirstMatch(FirstMatchStrategy)),
            "minimax" => Some(Self::Minimax(MinimaxStrategy)),
            "entropy" => Some(Self::Entropy(EntropyStrategy)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RandomValid(_) => "random",
            Self::FirstMatch(_) => "first",
            Self::Minimax(_) => "minimax",
            Self::Entropy(_) => "entropy",
        }
    }
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::Entropy(EntropyStrategy)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Random strategy
///
/// Picks uniformly among the live candidates. With a seed the pick is
/// reproducible; without one it uses the thread RNG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy {
    pub seed: Option<u64>,
}

impl RandomStrategy {
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Strategy for RandomStrategy {
    fn select_guess<D: Dictionary + ?Sized>(
        &self,
        turn: &Turn<'_, D>,
    ) -> Result<Option<Word>, SolverError> {
        use rand::prelude::IndexedRandom;

        let candidates = turn.candidates(&turn.constraints())?;
        let choice = match self.seed {
            Some(seed) => candidates.choose(&mut StdRng::seed_from_u64(seed)),
            None => candidates.choose(&mut rand::rng()),
        };
        Ok(choice.cloned())
    }
}

/// First-match strategy
///
/// Returns the first live candidate in dictionary order. No scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstMatchStrategy;

impl Strategy for FirstMatchStrategy {
    fn select_guess<D: Dictionary + ?Sized>(
        &self,
        turn: &Turn<'_, D>,
    ) -> Result<Option<Word>, SolverError> {
        Ok(turn.candidates(&turn.constraints())?.into_iter().next())
    }
}

/// Pure minimax strategy
///
/// Selects the candidate that minimizes the worst-case remaining pool over
/// every non-terminal hint pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<D: Dictionary + ?Sized>(
        &self,
        turn: &Turn<'_, D>,
    ) -> Result<Option<Word>, SolverError> {
        let constraints = turn.constraints();
        let candidates = turn.candidates(&constraints)?;
        log::debug!("minimax: scoring {} candidates", candidates.len());

        let word_len = turn.session.word_len();
        let evaluator = CandidateEvaluator::new(turn.dictionary, word_len, &constraints, turn.cancel);
        let hints = HintSpace::exhaustive(word_len);
        let progress = ProgressCounter::new(candidates.len(), turn.progress);

        let best = minimax::select_best_guess(&candidates, &evaluator, &hints, &progress)?;
        Ok(best.map(|(word, worst)| {
            log::debug!("minimax: picked {word} (worst case {worst})");
            word.clone()
        }))
    }
}

/// Pure entropy maximization strategy
///
/// Selects the candidate with the highest Shannon entropy over a seeded
/// sample of hint patterns, with p measured against every word of the length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<D: Dictionary + ?Sized>(
        &self,
        turn: &Turn<'_, D>,
    ) -> Result<Option<Word>, SolverError> {
        let constraints = turn.constraints();
        let candidates = turn.candidates(&constraints)?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let word_len = turn.session.word_len();
        turn.cancel.check()?;
        let total = turn.dictionary.count(word_len, &ConstraintSet::new())?;
        log::debug!(
            "entropy: scoring {} candidates against {total} words",
            candidates.len()
        );

        let evaluator = CandidateEvaluator::new(turn.dictionary, word_len, &constraints, turn.cancel);
        let hints = HintSpace::for_attempt(
            word_len,
            turn.session.attempt(),
            &turn.config.sample_sizes,
            turn.config.seed,
        );
        let progress = ProgressCounter::new(candidates.len(), turn.progress);

        let best = entropy::select_best_guess(&candidates, &evaluator, &hints, total, &progress)?;
        Ok(best.map(|(word, bits)| {
            log::debug!("entropy: picked {word} ({bits:.4} bits)");
            word.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessRow, score_outcome};
    use crate::dictionary::InMemoryDictionary;
    use crate::solver::entropy::calculate_entropy;
    use crate::solver::minimax::calculate_worst_case;
    use crate::wordlists::loader::words_from_slice;
    use rstest::rstest;
    use std::sync::Mutex;

    const WORDS: &[&str] = &[
        "apple", "angle", "table", "cable", "fable", "maple", "ample", "eagle", "ladle", "label",
        "llama", "alarm", "alloy", "sable", "gable",
    ];

    fn dictionary() -> InMemoryDictionary {
        InMemoryDictionary::new(words_from_slice(WORDS))
    }

    fn run<S: Strategy>(strategy: &S, dict: &InMemoryDictionary, session: &Session) -> Option<Word> {
        let config = EngineConfig::default();
        let cancel = CancellationToken::new();
        let noop = |_: f32| {};
        let turn = Turn {
            session,
            dictionary: dict,
            config: &config,
            progress: &noop,
            cancel: &cancel,
        };
        strategy.select_guess(&turn).unwrap()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[rstest]
    #[case("random", "random")]
    #[case("simple", "random")]
    #[case("FIRST", "first")]
    #[case("first-match", "first")]
    #[case("minimax", "minimax")]
    #[case("entropy", "entropy")]
    fn from_name_parses(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(StrategyKind::from_name(input).unwrap().name(), expected);
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert!(StrategyKind::from_name("adaptive").is_none());
    }

    #[test]
    fn first_match_follows_dictionary_order() {
        let dict = InMemoryDictionary::new(words_from_slice(&["APPLE", "ANGLE", "TABLE", "ABLE."]));
        let mut session = Session::new(5).unwrap();

        let first = run(&FirstMatchStrategy, &dict, &session).unwrap();
        assert_eq!(first.text(), "apple");

        session
            .push(score_outcome(&first, &word("angle")).unwrap())
            .unwrap();
        let next = run(&FirstMatchStrategy, &dict, &session).unwrap();
        assert_eq!(next.text(), "angle");
    }

    #[test]
    fn random_picks_a_live_candidate() {
        let dict = dictionary();
        let mut session = Session::new(5).unwrap();
        session.push(GuessRow::parse("table", "-GGGG").unwrap()).unwrap();

        for seed in 0..20 {
            let pick = run(&RandomStrategy::seeded(seed), &dict, &session).unwrap();
            assert!(["cable", "fable", "sable", "gable"].contains(&pick.text()));
        }
        assert!(run(&RandomStrategy::default(), &dict, &session).is_some());
    }

    #[test]
    fn random_with_seed_is_reproducible() {
        let dict = dictionary();
        let session = Session::new(5).unwrap();
        let a = run(&RandomStrategy::seeded(42), &dict, &session);
        let b = run(&RandomStrategy::seeded(42), &dict, &session);
        assert_eq!(a, b);
    }

    #[test]
    fn contradictory_session_yields_none_for_every_strategy() {
        let dict = dictionary();
        let session = Session::from_rows(
            5,
            [
                GuessRow::parse("apple", "G----").unwrap(),
                GuessRow::parse("angle", "-----").unwrap(),
            ],
        )
        .unwrap();

        for name in StrategyKind::NAMES {
            let strategy = StrategyKind::from_name(name).unwrap();
            assert!(run(&strategy, &dict, &session).is_none(), "{name}");
        }
    }

    #[test]
    fn minimax_is_no_worse_than_first_match() {
        let dict = dictionary();
        let session = Session::new(5).unwrap();
        let baseline = ConstraintSet::new();
        let cancel = CancellationToken::new();
        let evaluator = CandidateEvaluator::new(&dict, 5, &baseline, &cancel);
        let hints = HintSpace::exhaustive(5);

        let chosen = run(&MinimaxStrategy, &dict, &session).unwrap();
        let first = run(&FirstMatchStrategy, &dict, &session).unwrap();

        let chosen_worst = calculate_worst_case(&evaluator, &chosen, &hints).unwrap();
        let first_worst = calculate_worst_case(&evaluator, &first, &hints).unwrap();
        assert!(chosen_worst <= first_worst);
    }

    #[test]
    fn entropy_beats_the_average_candidate() {
        let dict = dictionary();
        let session = Session::new(5).unwrap();
        let config = EngineConfig::default();
        let baseline = ConstraintSet::new();
        let cancel = CancellationToken::new();
        let evaluator = CandidateEvaluator::new(&dict, 5, &baseline, &cancel);
        let hints = HintSpace::for_attempt(5, 0, &config.sample_sizes, config.seed);
        let total = dict.words(5).len();

        let chosen = run(&EntropyStrategy, &dict, &session).unwrap();
        let chosen_bits = calculate_entropy(&evaluator, &chosen, &hints, total).unwrap();

        // Expected entropy of a uniformly random pick, over many seeds.
        let trials = 50;
        let mut sum = 0.0;
        for seed in 0..trials {
            let pick = run(&RandomStrategy::seeded(seed), &dict, &session).unwrap();
            sum += calculate_entropy(&evaluator, &pick, &hints, total).unwrap();
        }
        assert!(chosen_bits >= sum / trials as f64);
    }

    #[test]
    fn progress_reaches_one_for_scoring_strategies() {
        let dict = dictionary();
        let session = Session::new(5).unwrap();
        let config = EngineConfig::default();
        let cancel = CancellationToken::new();

        for strategy in [
            StrategyKind::Minimax(MinimaxStrategy),
            StrategyKind::Entropy(EntropyStrategy),
        ] {
            let seen = Mutex::new(Vec::new());
            let record = |f: f32| seen.lock().unwrap().push(f);
            let turn = Turn {
                session: &session,
                dictionary: &dict,
                config: &config,
                progress: &record,
                cancel: &cancel,
            };
            strategy.select_guess(&turn).unwrap();

            let seen = seen.into_inner().unwrap();
            assert_eq!(seen.len(), WORDS.len());
            assert!(seen.windows(2).all(|w| w[0] <= w[1]));
            assert!((seen.last().copied().unwrap() - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn cancelled_turn_reports_cancellation() {
        let dict = dictionary();
        let session = Session::new(5).unwrap();
        let config = EngineConfig::default();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let noop = |_: f32| {};
        let turn = Turn {
            session: &session,
            dictionary: &dict,
            config: &config,
            progress: &noop,
            cancel: &cancel,
        };

        for name in StrategyKind::NAMES {
            let strategy = StrategyKind::from_name(name).unwrap();
            assert!(matches!(
                strategy.select_guess(&turn),
                Err(SolverError::Cancelled)
            ));
        }
    }

    /// Counts `count` queries on top of an in-memory dictionary
    struct CountingDictionary {
        inner: InMemoryDictionary,
        counts: std::sync::atomic::AtomicUsize,
    }

    impl Dictionary for CountingDictionary {
        fn count(
            &self,
            word_len: usize,
            constraints: &ConstraintSet,
        ) -> Result<usize, crate::dictionary::DictionaryError> {
            self.counts
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            self.inner.count(word_len, constraints)
        }

        fn list(
            &self,
            word_len: usize,
            constraints: &ConstraintSet,
        ) -> Result<Vec<Word>, crate::dictionary::DictionaryError> {
            self.inner.list(word_len, constraints)
        }
    }

    #[test]
    fn cancelling_mid_turn_stops_queries() {
        let dict = CountingDictionary {
            inner: dictionary(),
            counts: std::sync::atomic::AtomicUsize::new(0),
        };
        let session = Session::new(5).unwrap();
        let config = EngineConfig::default();
        let cancel = CancellationToken::new();
        let cancel_after_first = |_: f32| cancel.cancel();
        let turn = Turn {
            session: &session,
            dictionary: &dict,
            config: &config,
            progress: &cancel_after_first,
            cancel: &cancel,
        };

        // One worker, so candidates are scored one after another.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        let result = pool.install(|| MinimaxStrategy.select_guess(&turn));

        assert!(matches!(result, Err(SolverError::Cancelled)));
        let per_candidate = HintSpace::exhaustive(5).len();
        let issued = dict.counts.load(std::sync::atomic::Ordering::SeqCst);
        assert!(issued >= per_candidate);
        assert!(issued < 2 * per_candidate);
        assert!(issued < WORDS.len() * per_candidate);
    }
}
