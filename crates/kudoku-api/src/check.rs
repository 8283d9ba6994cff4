//! The placement-check operation.

use kudoku_core::{Coordinate, Digit, ParsePuzzleError, Puzzle};
use kudoku_solver::placement::{self, Conflict};
use serde::{Deserialize, Serialize};

use crate::message;

/// Input fields of the check operation.
///
/// All fields are optional so that the transport layer can hand over
/// whatever the caller actually sent; the operation itself reports missing
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The 81-character puzzle string.
    pub puzzle: Option<String>,
    /// The target cell label, e.g. `A2`.
    pub coordinate: Option<String>,
    /// The digit to test, as a one-character string `1`-`9`.
    pub value: Option<String>,
}

/// A constraint group reported in a check response.
///
/// Serializes to the lowercase house name (`"row"`, `"column"`,
/// `"region"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// The digit already occurs in the target row.
    Row,
    /// The digit already occurs in the target column.
    Column,
    /// The digit already occurs in the target 3×3 region.
    Region,
}

impl From<Conflict> for ConflictKind {
    fn from(conflict: Conflict) -> Self {
        match conflict {
            Conflict::Row => Self::Row,
            Conflict::Column => Self::Column,
            Conflict::Region => Self::Region,
        }
    }
}

/// Response body of the check operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The placement was evaluated.
    Verdict {
        /// `true` if the digit may occupy the cell.
        valid: bool,
        /// The houses that reject the placement, in row/column/region
        /// order. Omitted from the body when the placement is valid.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        conflict: Vec<ConflictKind>,
    },
    /// The request was rejected before any placement was evaluated.
    Error {
        /// User-facing message.
        error: String,
    },
}

impl CheckResponse {
    fn valid() -> Self {
        Self::Verdict {
            valid: true,
            conflict: Vec::new(),
        }
    }

    fn invalid(conflict: impl IntoIterator<Item = Conflict>) -> Self {
        Self::Verdict {
            valid: false,
            conflict: conflict.into_iter().map(ConflictKind::from).collect(),
        }
    }

    fn error(message: &str) -> Self {
        Self::Error {
            error: message.to_owned(),
        }
    }
}

/// Checks whether a digit placement is consistent with the grid.
///
/// Inputs are validated in a fixed order so that each failure reports a
/// single, predictable message: field presence, puzzle length, puzzle
/// characters, coordinate, value, and finally the placement itself.
///
/// Restating the digit a cell already holds is valid even though the raw
/// row/column/region scans see the digit conflicting with itself.
///
/// # Examples
///
/// ```
/// use kudoku_api::{CheckRequest, CheckResponse, check};
///
/// let request = CheckRequest {
///     puzzle: Some(kudoku_solver::samples::PUZZLE_SOLUTION_PAIRS[0].0.to_owned()),
///     coordinate: Some("A1".to_owned()),
///     value: Some("7".to_owned()),
/// };
/// assert!(matches!(check(&request), CheckResponse::Verdict { valid: true, .. }));
/// ```
#[must_use]
pub fn check(request: &CheckRequest) -> CheckResponse {
    let (Some(puzzle), Some(coordinate), Some(value)) = (
        message::present(request.puzzle.as_deref()),
        message::present(request.coordinate.as_deref()),
        message::present(request.value.as_deref()),
    ) else {
        log::debug!("check rejected: missing field(s)");
        return CheckResponse::error(message::MISSING_FIELDS);
    };

    let puzzle: Puzzle = match puzzle.parse() {
        Ok(puzzle) => puzzle,
        Err(err @ ParsePuzzleError::InvalidLength { .. }) => {
            log::debug!("check rejected: {err}");
            return CheckResponse::error(message::PUZZLE_LENGTH);
        }
        Err(err @ ParsePuzzleError::InvalidCharacter { .. }) => {
            log::debug!("check rejected: {err}");
            return CheckResponse::error(message::PUZZLE_CHARACTERS);
        }
    };

    let coordinate: Coordinate = match coordinate.parse() {
        Ok(coordinate) => coordinate,
        Err(err) => {
            log::debug!("check rejected: {err}");
            return CheckResponse::error(message::COORDINATE);
        }
    };

    let Some(digit) = parse_value(value) else {
        log::debug!("check rejected: invalid value {value:?}");
        return CheckResponse::error(message::VALUE);
    };

    let pos = coordinate.position();
    let found = placement::conflicts(&puzzle, pos, digit);
    if found.is_empty() || puzzle.cell(pos) == Some(digit) {
        CheckResponse::valid()
    } else {
        CheckResponse::invalid(found)
    }
}

/// Parses the submitted value: exactly one character, a digit `1`-`9`.
fn parse_value(s: &str) -> Option<Digit> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::from_char(c),
        _ => None,
    }
}
