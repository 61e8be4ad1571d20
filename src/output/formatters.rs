//! Formatting utilities for terminal output

use crate::core::{FeedbackState, GuessRow, HintPattern};
use colored::{ColoredString, Colorize};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: &HintPattern) -> String {
    pattern.to_emoji()
}

/// Format a row's feedback as emoji string
#[must_use]
pub fn row_to_emoji(row: &GuessRow) -> String {
    row.pattern().to_emoji()
}

/// The guessed word with each letter coloured by its feedback
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.cells()
        .iter()
        .map(|cell| {
            let letter = char::from(cell.letter.to_ascii_uppercase()).to_string();
            tile(&letter, cell.state).to_string()
        })
        .collect()
}

fn tile(letter: &str, state: FeedbackState) -> ColoredString {
    match state {
        FeedbackState::CorrectPlace => letter.black().on_green().bold(),
        FeedbackState::WrongPlace => letter.black().on_yellow().bold(),
        FeedbackState::Absent => letter.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Truncation intended: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
