//! Request/response operations of the Kudoku puzzle engine.
//!
//! This crate is the surface a transport layer (an HTTP router, a CLI, a
//! test harness) talks to. It exposes two pure operations:
//!
//! - [`check`]: is a digit placement consistent with the submitted grid?
//! - [`solve`]: complete the submitted grid by single-candidate deduction.
//!
//! Both take a request value with optional fields and return a
//! serde-serializable response body; every failure is reported inside the
//! body as an `error` message, never as a transport-level fault. The
//! engine crates ([`kudoku_core`], [`kudoku_solver`]) stay serialization-
//! free; the DTO types live here.
//!
//! # Examples
//!
//! ```
//! use kudoku_api::{SolveRequest, solve};
//!
//! let (puzzle, solution) = kudoku_solver::samples::PUZZLE_SOLUTION_PAIRS[0];
//! let response = solve(&SolveRequest {
//!     puzzle: Some(puzzle.to_owned()),
//! });
//! # let expected = solution;
//! # let kudoku_api::SolveResponse::Solution { solution } = response else {
//! #     panic!("expected a solution");
//! # };
//! # assert_eq!(solution, expected);
//! ```

pub mod check;
pub mod message;
pub mod solve;

pub use self::{
    check::{CheckRequest, CheckResponse, ConflictKind, check},
    solve::{SolveRequest, SolveResponse, solve},
};
