//! Main solver interface

use super::config::EngineConfig;
use super::progress::CancellationToken;
use super::strategy::{Strategy, StrategyKind, Turn};
use crate::constraints::{Constraint, ConstraintSet, build_constraints};
use crate::core::{RowError, Session, Word};
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use std::time::Instant;

/// Pick the next guess for `session` with default settings
///
/// Returns `Ok(None)` when no dictionary word satisfies the feedback so far.
/// Unlike [`Solver::next_guess`] this never substitutes an opening word or
/// short-circuits a solved session; it always runs the strategy.
///
/// # Errors
/// A dictionary failure, passed through unchanged.
///
/// # Examples
/// ```
/// use helple::core::Session;
/// use helple::dictionary::InMemoryDictionary;
/// use helple::solver::{StrategyKind, select_guess};
/// use helple::wordlists::loader::words_from_slice;
///
/// let dict = InMemoryDictionary::new(words_from_slice(&["apple", "angle", "table"]));
/// let session = Session::new(5).unwrap();
/// let strategy = StrategyKind::from_name("first").unwrap();
///
/// let guess = select_guess(&session, &strategy, &dict, |_| {}).unwrap();
/// assert_eq!(guess.unwrap().text(), "apple");
/// ```
pub fn select_guess<D, S, P>(
    session: &Session,
    strategy: &S,
    dictionary: &D,
    progress: P,
) -> Result<Option<Word>, SolverError>
where
    D: Dictionary + ?Sized,
    S: Strategy,
    P: Fn(f32) + Sync,
{
    let config = EngineConfig::default();
    let cancel = CancellationToken::new();
    let turn = Turn {
        session,
        dictionary,
        config: &config,
        progress: &progress,
        cancel: &cancel,
    };
    strategy.select_guess(&turn)
}

/// Main solver
///
/// Coordinates one turn at a time: solved sessions, opening words, then the
/// strategy.
pub struct Solver<'a, D: Dictionary + ?Sized, S: Strategy = StrategyKind> {
    strategy: S,
    dictionary: &'a D,
    config: EngineConfig,
}

impl<'a, D: Dictionary + ?Sized, S: Strategy> Solver<'a, D, S> {
    /// Create a new solver with default settings
    pub fn new(strategy: S, dictionary: &'a D) -> Self {
        Self::with_config(strategy, dictionary, EngineConfig::default())
    }

    /// Create a new solver with explicit settings
    pub const fn with_config(strategy: S, dictionary: &'a D, config: EngineConfig) -> Self {
        Self {
            strategy,
            dictionary,
            config,
        }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the next guess given the feedback so far
    ///
    /// - A solved session returns its winning word.
    /// - An empty session returns the configured opening word when the
    ///   dictionary has it.
    /// - Otherwise the strategy decides.
    ///
    /// # Errors
    /// - [`SolverError::EmptyCandidatePool`] when no word fits the feedback
    /// - [`SolverError::Cancelled`] when `cancel` fires mid-turn
    /// - [`SolverError::Dictionary`] on a backend failure
    pub fn next_guess(
        &self,
        session: &Session,
        progress: &(dyn Fn(f32) + Sync),
        cancel: &CancellationToken,
    ) -> Result<Word, SolverError> {
        if session.is_solved()
            && let Some(row) = session.rows().last()
        {
            return Ok(Word::new(row.word_text()).map_err(RowError::from)?);
        }

        if session.is_empty()
            && let Some(word) = self.opening_word(session.word_len())?
        {
            log::debug!("using opening word {word}");
            return Ok(word);
        }

        let start = Instant::now();
        let turn = Turn {
            session,
            dictionary: self.dictionary,
            config: &self.config,
            progress,
            cancel,
        };
        let guess = self.strategy.select_guess(&turn);
        log::debug!(
            "calculating a guess for attempt {} took {:?}",
            session.attempt(),
            start.elapsed()
        );

        guess?.ok_or(SolverError::EmptyCandidatePool)
    }

    /// [`next_guess`](Self::next_guess) without progress or cancellation
    ///
    /// # Errors
    /// Same as [`next_guess`](Self::next_guess), minus cancellation.
    pub fn suggest(&self, session: &Session) -> Result<Word, SolverError> {
        self.next_guess(session, &|_: f32| {}, &CancellationToken::new())
    }

    /// Number of dictionary words consistent with the session
    ///
    /// # Errors
    /// A dictionary failure.
    pub fn remaining(&self, session: &Session) -> Result<usize, SolverError> {
        Ok(self
            .dictionary
            .count(session.word_len(), &build_constraints(session))?)
    }

    /// The dictionary words consistent with the session
    ///
    /// # Errors
    /// A dictionary failure.
    pub fn candidates(&self, session: &Session) -> Result<Vec<Word>, SolverError> {
        Ok(self
            .dictionary
            .list(session.word_len(), &build_constraints(session))?)
    }

    /// The configured opening word for a length, if the dictionary has it
    fn opening_word(&self, word_len: usize) -> Result<Option<Word>, SolverError> {
        let Some(text) = self.config.opening_words.get(&word_len) else {
            return Ok(None);
        };
        let Ok(word) = Word::new(text.as_str()) else {
            log::warn!("opening word {text:?} is not a valid word");
            return Ok(None);
        };

        let exact: ConstraintSet = word
            .letters()
            .iter()
            .enumerate()
            .map(|(position, &letter)| Constraint::LetterAt { position, letter })
            .collect();

        if self.dictionary.count(word_len, &exact)? > 0 {
            Ok(Some(word))
        } else {
            log::warn!("opening word {word} is not in the dictionary, falling back to strategy");
            Ok(None)
        }
    }
}
