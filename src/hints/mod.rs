//! Hint pattern enumeration
//!
//! Exhaustive mode feeds worst-case minimization; sampled mode bounds the cost
//! of information maximization.

mod enumerator;

pub use enumerator::{HintSpace, SampleSchedule};
