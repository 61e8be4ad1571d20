//! Helple
//!
//! A Wordle-style guess advisor for words of any supported length. Feedback
//! rows become dictionary constraints; strategies pick the next guess by
//! querying a pluggable dictionary, from a plain first match up to minimax and
//! sampled-entropy search.
//!
//! # Quick Start
//!
//! ```rust
//! use helple::core::{Session, Word, score_outcome};
//! use helple::dictionary::InMemoryDictionary;
//! use helple::solver::{Solver, StrategyKind};
//! use helple::wordlists::loader::words_from_slice;
//!
//! let dict = InMemoryDictionary::new(words_from_slice(&["apple", "angle", "ample", "table"]));
//! let solver = Solver::new(StrategyKind::from_name("minimax").unwrap(), &dict);
//!
//! let mut session = Session::new(5).unwrap();
//! let target = Word::new("angle").unwrap();
//! session.push(score_outcome(&Word::new("apple").unwrap(), &target).unwrap()).unwrap();
//!
//! assert_eq!(solver.remaining(&session).unwrap(), 1);
//! assert_eq!(solver.suggest(&session).unwrap().text(), "angle");
//! ```

// Core domain types
pub mod core;

// Feedback rows to dictionary constraints
pub mod constraints;

// Hypothetical feedback enumeration
pub mod hints;

// Word store collaborator
pub mod dictionary;

pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
