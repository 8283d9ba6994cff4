//! Constraint checking and solving for the Kudoku puzzle engine.
//!
//! This crate answers two questions about a [`Puzzle`](kudoku_core::Puzzle):
//!
//! - May a given digit occupy a given cell? ([`placement`]: per-house
//!   predicates and ordered conflict reporting)
//! - Can the whole grid be completed by deduction? ([`solve`]: iterated
//!   single-candidate filling, the solver's only technique)
//!
//! The solver deliberately performs no search: a puzzle that cannot be
//! finished by repeatedly filling cells with exactly one candidate is
//! reported as [`SolveError::Unsolvable`]. Every call terminates — each
//! pass either fills at least one cell or ends the solve.
//!
//! # Examples
//!
//! ```
//! use kudoku_solver::samples::PUZZLE_SOLUTION_PAIRS;
//!
//! let (puzzle, solution) = PUZZLE_SOLUTION_PAIRS[0];
//! assert_eq!(kudoku_solver::solve_str(puzzle)?, solution);
//! # Ok::<(), kudoku_solver::SolveError>(())
//! ```

pub mod placement;
pub mod samples;
mod solver;

pub use self::{
    placement::{Conflict, conflicts, placement_allows},
    solver::{SolveError, solve, solve_str},
};
