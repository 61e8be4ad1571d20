//! Interactive mode
//!
//! The user plays a real game elsewhere and types back the feedback for each
//! suggested word.

use crate::core::{FeedbackState, GuessRow, HintPattern, RowError, Session, Word};
use crate::dictionary::Dictionary;
use crate::output::formatters::row_to_emoji;
use crate::solver::{CancellationToken, Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Rows entered so far in the current game
///
/// Sessions are append-only, so undo drops the last row here and the session
/// is rebuilt from what is left.
#[derive(Debug, Clone)]
pub struct Game {
    word_len: usize,
    rows: Vec<GuessRow>,
}

impl Game {
    /// # Errors
    /// Unsupported word length.
    pub fn new(word_len: usize) -> Result<Self, RowError> {
        Session::new(word_len)?;
        Ok(Self {
            word_len,
            rows: Vec::new(),
        })
    }

    /// The session for the rows entered so far
    ///
    /// # Errors
    /// Only if a stored row no longer fits, which [`record`](Self::record)
    /// prevents.
    pub fn session(&self) -> Result<Session, RowError> {
        Session::from_rows(self.word_len, self.rows.iter().cloned())
    }

    /// Add a row
    ///
    /// # Errors
    /// Returns [`RowError::LengthMismatch`] for a row of the wrong length.
    pub fn record(&mut self, row: GuessRow) -> Result<(), RowError> {
        if row.len() != self.word_len {
            return Err(RowError::LengthMismatch {
                expected: self.word_len,
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Drop the latest row
    pub fn undo(&mut self) -> Option<GuessRow> {
        self.rows.pop()
    }

    pub fn reset(&mut self) {
        self.rows.clear();
    }

    /// 1-based number of the turn being played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.rows.len() + 1
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }
}

/// One line of user input
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    New,
    Undo,
    Feedback(GuessRow),
}

/// Interpret a line typed after `guess` was suggested
///
/// A bare pattern applies to `guess`; `word=pattern` records a different
/// word that was played instead.
///
/// # Errors
/// Anything that is neither a command nor a valid row.
pub fn parse_input(line: &str, guess: &Word) -> Result<Input, RowError> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(Input::Quit),
        "new" | "n" => Ok(Input::New),
        "undo" | "u" => Ok(Input::Undo),
        "win" | "correct" | "solved" => Ok(Input::Feedback(GuessRow::from_pattern(
            guess,
            &HintPattern::terminal(guess.len()),
        )?)),
        _ if line.contains('=') => Ok(Input::Feedback(line.parse()?)),
        _ => {
            let pattern = HintPattern::parse(line)?;
            Ok(Input::Feedback(GuessRow::from_pattern(guess, &pattern)?))
        }
    }
}

/// Run the interactive loop until the user quits or input ends
///
/// # Errors
/// I/O failures and solver failures other than an empty pool.
pub fn run_play<D, S, R, W>(
    solver: &Solver<'_, D, S>,
    word_len: usize,
    progress: &(dyn Fn(f32) + Sync),
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    D: Dictionary + ?Sized,
    S: Strategy,
    R: BufRead,
    W: Write,
{
    let mut game = Game::new(word_len)?;
    let cancel = CancellationToken::new();

    print_banner(out, word_len)?;

    loop {
        let session = game.session()?;
        let remaining = solver.remaining(&session)?;

        if remaining == 0 {
            writeln!(
                out,
                "\n{} Type 'undo' to go back, or 'new' to start over.",
                "No candidates remain! The feedback may be incorrect.".red()
            )?;
            let Some(line) = prompt(input, out, "Command")? else {
                return Ok(());
            };
            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return farewell(out),
                "new" | "n" => start_over(&mut game, out)?,
                "undo" | "u" => {
                    undo(&mut game, out)?;
                }
                _ => {}
            }
            continue;
        }

        let guess = solver.next_guess(&session, progress, &cancel)?;
        print_turn(out, &session, game.turn(), remaining, &guess)?;

        if remaining <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for candidate in solver.candidates(&session)? {
                writeln!(out, "  • {}", candidate.text().to_uppercase())?;
            }
            writeln!(out)?;
        }

        let row = loop {
            let Some(line) = prompt(input, out, "Feedback (G/Y/-, 'win', or command)")? else {
                return Ok(());
            };
            match parse_input(&line, &guess) {
                Ok(Input::Quit) => return farewell(out),
                Ok(Input::New) => {
                    start_over(&mut game, out)?;
                    break None;
                }
                Ok(Input::Undo) => {
                    if undo(&mut game, out)? {
                        break None;
                    }
                }
                Ok(Input::Feedback(row)) => match game.record(row.clone()) {
                    Ok(()) => break Some(row),
                    Err(e) => writeln!(out, "{} {e}", "Invalid feedback:".red())?,
                },
                Err(e) => writeln!(
                    out,
                    "{} {e}. Use G/Y/- per letter, 'win', or 'word=pattern'.",
                    "Invalid input:".red()
                )?,
            }
        };

        if row.is_some_and(|r| r.is_winning()) {
            print_victory(out, &game)?;
            let again = prompt(input, out, "Play again? (yes/no)")?;
            if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                start_over(&mut game, out)?;
            } else {
                return farewell(out);
            }
        }
    }
}

fn print_banner<W: Write>(out: &mut W, word_len: usize) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} ",
        format!("Helple - interactive mode ({word_len} letters)")
            .bright_cyan()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "\nAfter each suggestion, enter the feedback you got:")?;
    writeln!(out, "  - G/g/🟩 for correct position")?;
    writeln!(out, "  - Y/y/🟨 for wrong position")?;
    writeln!(out, "  - -/_/⬜ for not in word")?;
    writeln!(out, "  - 'win' if it was right, 'word=pattern' if you played another word")?;
    writeln!(out, "Commands: 'quit', 'new', 'undo'\n")?;
    Ok(())
}

fn print_turn<W: Write>(
    out: &mut W,
    session: &Session,
    turn: usize,
    remaining: usize,
    guess: &Word,
) -> Result<()> {
    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(out, "Turn {turn}: {remaining} candidates remaining")?;
    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(
        out,
        "\nSuggested guess: {}",
        guess.text().to_uppercase().bright_yellow().bold()
    )?;

    let known: String = guess
        .letters()
        .iter()
        .enumerate()
        .map(|(position, &letter)| match session.implied_state(position, letter) {
            Some(FeedbackState::CorrectPlace) => 'G',
            _ => '?',
        })
        .collect();
    if known.contains('G') {
        writeln!(out, "Already known:   {known}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_victory<W: Write>(out: &mut W, game: &Game) -> Result<()> {
    let guesses = game.rows().len();
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        format!(
            "  Solved in {guesses} {}!",
            if guesses == 1 { "guess" } else { "guesses" }
        )
        .bright_green()
        .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    for (i, row) in game.rows().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            row.word_text().to_uppercase().bright_white().bold(),
            row_to_emoji(row)
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn start_over<W: Write>(game: &mut Game, out: &mut W) -> Result<()> {
    game.reset();
    writeln!(out, "\nNew game started!\n")?;
    Ok(())
}

fn undo<W: Write>(game: &mut Game, out: &mut W) -> Result<bool> {
    if let Some(row) = game.undo() {
        writeln!(out, "Undid {row}. Back to turn {}\n", game.turn())?;
        Ok(true)
    } else {
        writeln!(out, "Nothing to undo!\n")?;
        Ok(false)
    }
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nThanks for playing!\n")?;
    Ok(())
}

/// Print `label` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
