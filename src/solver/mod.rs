//! Guess selection
//!
//! Strategies read a session through a [`Turn`], query the dictionary for the
//! live pool and, for the scoring strategies, evaluate every candidate against
//! hypothetical feedback.

mod config;
mod engine;
pub mod entropy;
pub mod evaluator;
pub mod minimax;
pub mod progress;
pub mod strategy;

pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, EngineConfig};
pub use engine::{Solver, select_guess};
pub use evaluator::CandidateEvaluator;
pub use progress::{CancellationToken, ProgressCounter};
pub use strategy::{
    EntropyStrategy, FirstMatchStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyKind,
    Turn,
};
