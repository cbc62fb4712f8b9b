//! Puzzle solving
//!
//! [`Solver`] searches a culled dictionary for two-word chains and
//! [`SolutionSet`] ranks and renders what it finds.

mod engine;
mod solution;

pub use engine::Solver;
pub use solution::{Solution, SolutionSet};
