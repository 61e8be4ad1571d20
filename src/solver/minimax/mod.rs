//! Worst-case minimization
//!
//! Scores each candidate by the largest pool an adversarial answer could
//! leave, over the exhaustive hint space.

mod calculator;
mod selector;

pub use calculator::calculate_worst_case;
pub use selector::select_best_guess;
