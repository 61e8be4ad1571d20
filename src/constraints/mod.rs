//! Constraint model
//!
//! Turns observed feedback into predicates a dictionary can filter on. The
//! builder never touches storage; it only produces a [`ConstraintSet`].

mod builder;
mod set;

pub use builder::{build_constraints, row_constraints};
pub use set::{Constraint, ConstraintSet};
