//! The solve operation.

use kudoku_core::ParsePuzzleError;
use kudoku_solver::SolveError;
use serde::{Deserialize, Serialize};

use crate::message;

/// Input fields of the solve operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// The 81-character puzzle string.
    pub puzzle: Option<String>,
}

/// Response body of the solve operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// The puzzle was solved.
    Solution {
        /// The solved 81-character grid.
        solution: String,
    },
    /// The request was rejected or the puzzle cannot be solved.
    Error {
        /// User-facing message.
        error: String,
    },
}

impl SolveResponse {
    fn error(message: &str) -> Self {
        Self::Error {
            error: message.to_owned(),
        }
    }
}

/// Solves a puzzle submitted as an 81-character string.
///
/// # Examples
///
/// ```
/// use kudoku_api::{SolveRequest, SolveResponse, solve};
///
/// let (puzzle, solution) = kudoku_solver::samples::PUZZLE_SOLUTION_PAIRS[0];
/// let request = SolveRequest {
///     puzzle: Some(puzzle.to_owned()),
/// };
/// assert_eq!(
///     solve(&request),
///     SolveResponse::Solution {
///         solution: solution.to_owned(),
///     }
/// );
/// ```
#[must_use]
pub fn solve(request: &SolveRequest) -> SolveResponse {
    let Some(puzzle) = message::present(request.puzzle.as_deref()) else {
        log::debug!("solve rejected: missing puzzle field");
        return SolveResponse::error(message::MISSING_FIELD);
    };

    match kudoku_solver::solve_str(puzzle) {
        Ok(solution) => {
            log::debug!("solved puzzle");
            SolveResponse::Solution { solution }
        }
        Err(err @ SolveError::Parse(ParsePuzzleError::InvalidLength { .. })) => {
            log::debug!("solve rejected: {err}");
            SolveResponse::error(message::PUZZLE_LENGTH)
        }
        Err(err @ SolveError::Parse(ParsePuzzleError::InvalidCharacter { .. })) => {
            log::debug!("solve rejected: {err}");
            SolveResponse::error(message::PUZZLE_CHARACTERS)
        }
        Err(err @ SolveError::Unsolvable) => {
            log::debug!("solve failed: {err}");
            SolveResponse::error(message::UNSOLVABLE)
        }
    }
}
