//! Placement checking against row, column, and region constraints.
//!
//! These checks answer "may `digit` occupy this cell given the current
//! grid?" by scanning the relevant houses for an existing occurrence of the
//! digit. The scans do **not** exclude the target cell itself: a digit
//! already present at the exact target cell reads as a conflict. Callers
//! that want to treat restating an existing value as valid must compare
//! against [`Puzzle::cell`] first (the check operation in `kudoku-api` does
//! this).

use std::fmt::{self, Display};

use kudoku_core::{Digit, Position, Puzzle};
use tinyvec::ArrayVec;

/// A constraint group a placement can conflict with.
///
/// The order of the variants is the fixed reporting order: row, then
/// column, then region.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Conflict {
    /// The digit already occurs in the target row.
    #[default]
    Row,
    /// The digit already occurs in the target column.
    Column,
    /// The digit already occurs in the target 3×3 region.
    Region,
}

impl Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Conflict::Row => "row",
            Conflict::Column => "column",
            Conflict::Region => "region",
        };
        f.write_str(name)
    }
}

/// Returns `true` if `digit` does not already occur in row `y`.
///
/// # Panics
///
/// Panics if `y` is not in the range 0-8.
#[must_use]
pub fn row_allows(puzzle: &Puzzle, y: u8, digit: Digit) -> bool {
    !puzzle.row(y).contains(&Some(digit))
}

/// Returns `true` if `digit` does not already occur in column `x`.
///
/// # Panics
///
/// Panics if `x` is not in the range 0-8.
#[must_use]
pub fn column_allows(puzzle: &Puzzle, x: u8, digit: Digit) -> bool {
    !puzzle.column(x).contains(&Some(digit))
}

/// Returns `true` if `digit` does not already occur in the 3×3 region
/// containing `pos`.
#[must_use]
pub fn region_allows(puzzle: &Puzzle, pos: Position, digit: Digit) -> bool {
    !puzzle
        .region(pos.region_x(), pos.region_y())
        .contains(&Some(digit))
}

/// Returns `true` if `digit` may occupy the cell at `pos` under all three
/// constraints.
#[must_use]
pub fn placement_allows(puzzle: &Puzzle, pos: Position, digit: Digit) -> bool {
    row_allows(puzzle, pos.y(), digit)
        && column_allows(puzzle, pos.x(), digit)
        && region_allows(puzzle, pos, digit)
}

/// Returns the constraint groups that reject placing `digit` at `pos`, in
/// row/column/region order.
///
/// An empty result means the placement is allowed.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, Position, Puzzle};
/// use kudoku_solver::placement::{Conflict, conflicts};
///
/// let puzzle: Puzzle =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///         .parse()
///         .unwrap();
///
/// // 4 already occurs in row A.
/// let found = conflicts(&puzzle, Position::new(1, 0), Digit::D4);
/// assert_eq!(found.as_slice(), [Conflict::Row]);
/// ```
#[must_use]
pub fn conflicts(puzzle: &Puzzle, pos: Position, digit: Digit) -> ArrayVec<[Conflict; 3]> {
    let mut found = ArrayVec::new();
    if !row_allows(puzzle, pos.y(), digit) {
        found.push(Conflict::Row);
    }
    if !column_allows(puzzle, pos.x(), digit) {
        found.push(Conflict::Column);
    }
    if !region_allows(puzzle, pos, digit) {
        found.push(Conflict::Region);
    }
    found
}
