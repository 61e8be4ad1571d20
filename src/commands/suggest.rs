//! One-shot suggestion from feedback rows given on the command line

use crate::core::{GuessRow, Session, Word};
use crate::dictionary::Dictionary;
use crate::solver::{CancellationToken, Solver, Strategy};
use anyhow::{Context, Result};

/// Candidates are listed in full up to this many
pub const LIST_LIMIT: usize = 10;

/// What the solver makes of the rows so far
pub struct Suggestion {
    pub remaining: usize,
    pub guess: Word,
    /// The live candidates, when there are at most [`LIST_LIMIT`]
    pub candidates: Vec<Word>,
}

/// Build a session from `word=pattern` rows, e.g. `apple=G--GG`
///
/// # Errors
/// The first row that fails to parse or does not match `word_len`.
pub fn parse_rows<I, R>(word_len: usize, rows: I) -> Result<Session>
where
    I: IntoIterator<Item = R>,
    R: AsRef<str>,
{
    let mut session = Session::new(word_len)?;
    for raw in rows {
        let raw = raw.as_ref();
        let row: GuessRow = raw
            .parse()
            .with_context(|| format!("bad feedback row {raw:?}"))?;
        session
            .push(row)
            .with_context(|| format!("bad feedback row {raw:?}"))?;
    }
    Ok(session)
}

/// Next guess for `session`
///
/// # Errors
/// An empty candidate pool or a dictionary failure.
pub fn suggest<D, S>(
    solver: &Solver<'_, D, S>,
    session: &Session,
    progress: &(dyn Fn(f32) + Sync),
) -> Result<Suggestion>
where
    D: Dictionary + ?Sized,
    S: Strategy,
{
    let remaining = solver.remaining(session)?;
    let guess = solver
        .next_guess(session, progress, &CancellationToken::new())
        .context("no word fits the feedback; check the rows")?;

    let candidates = if remaining <= LIST_LIMIT {
        solver.candidates(session)?
    } else {
        Vec::new()
    };

    Ok(Suggestion {
        remaining,
        guess,
        candidates,
    })
}
