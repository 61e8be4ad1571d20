//! Information maximization
//!
//! Scores each candidate by the Shannon entropy of the pool sizes its
//! sampled outcomes would leave.

mod calculator;
mod selector;

pub use calculator::{calculate_entropy, shannon_entropy};
pub use selector::select_best_guess;
