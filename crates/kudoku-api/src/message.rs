//! User-facing message catalog.
//!
//! The engine crates report failures as typed errors; this module owns the
//! fixed strings the operations put in response bodies.

/// Check operation: one or more of puzzle/coordinate/value is missing.
pub const MISSING_FIELDS: &str = "Required field(s) missing";

/// Solve operation: the puzzle field is missing.
pub const MISSING_FIELD: &str = "Required field missing";

/// The puzzle string is not exactly 81 characters long.
pub const PUZZLE_LENGTH: &str = "Expected puzzle to be 81 characters long";

/// The puzzle string contains a character other than `1`-`9` or `.`.
pub const PUZZLE_CHARACTERS: &str = "Invalid characters in puzzle";

/// The coordinate label is malformed.
pub const COORDINATE: &str = "Invalid coordinate";

/// The value is not a single digit `1`-`9`.
pub const VALUE: &str = "Invalid value";

/// Single-candidate deduction got stuck or hit a contradiction.
pub const UNSOLVABLE: &str = "Puzzle cannot be solved";

/// Returns the field content, treating empty strings as missing.
#[must_use]
pub(crate) fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}
