//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod suggest;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use suggest::{Suggestion, parse_rows, suggest};
