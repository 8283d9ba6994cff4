//! The immutable 81-cell puzzle grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position};

/// The character denoting an unfilled cell in the string form.
pub const PLACEHOLDER: char = '.';

/// A 9×9 sudoku grid, parsed from and rendered to a flat 81-character
/// string.
///
/// The string form is read left-to-right, top-to-bottom: character `i`
/// belongs to row `i / 9`, column `i % 9`. Each character is either a digit
/// `1`-`9` or the placeholder `.` for an empty cell.
///
/// A `Puzzle` is an immutable value: all accessors derive their views from
/// the cell array on every call, and nothing is cached, so views can never
/// drift from the grid itself.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, Position, Puzzle};
///
/// let puzzle: Puzzle =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///         .parse()
///         .unwrap();
///
/// assert_eq!(puzzle.cell(Position::new(0, 0)), Some(Digit::D1));
/// assert_eq!(puzzle.cell(Position::new(1, 0)), None);
/// assert!(!puzzle.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    cells: [Option<Digit>; 81],
}

impl Puzzle {
    /// Creates a puzzle directly from an 81-cell array in row-major order.
    #[must_use]
    pub const fn from_cells(cells: [Option<Digit>; 81]) -> Self {
        Self { cells }
    }

    /// Returns the underlying cell array in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Option<Digit>; 81] {
        &self.cells
    }

    /// Returns the content of the cell at `pos`, or `None` if it is empty.
    #[must_use]
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Returns row `y` (0-8) as 9 cells in column order.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row(&self, y: u8) -> [Option<Digit>; 9] {
        assert!(y < 9);
        std::array::from_fn(|x| {
            #[expect(clippy::cast_possible_truncation)]
            let x = x as u8;
            self.cell(Position::new(x, y))
        })
    }

    /// Returns column `x` (0-8) as 9 cells in row order.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn column(&self, x: u8) -> [Option<Digit>; 9] {
        assert!(x < 9);
        std::array::from_fn(|y| {
            #[expect(clippy::cast_possible_truncation)]
            let y = y as u8;
            self.cell(Position::new(x, y))
        })
    }

    /// Returns the 3×3 region at region column `rx` and region row `ry`
    /// (each 0-2), cells in row-major order within the block.
    ///
    /// # Panics
    ///
    /// Panics if `rx` or `ry` is not in the range 0-2.
    #[must_use]
    pub fn region(&self, rx: u8, ry: u8) -> [Option<Digit>; 9] {
        assert!(rx < 3 && ry < 3);
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            self.cell(Position::new(rx * 3 + i % 3, ry * 3 + i / 3))
        })
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the positions of all empty cells, in index
    /// order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Position::from_index(i))
    }
}

/// Errors that can occur when parsing a [`Puzzle`] string.
///
/// Length is checked before characters, so an input that is both too short
/// and malformed reports [`InvalidLength`](Self::InvalidLength).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleError {
    /// The string is not exactly 81 characters long.
    #[display("expected 81 characters, got {len}")]
    InvalidLength {
        /// Number of characters in the rejected string.
        len: usize,
    },
    /// A character is neither a digit `1`-`9` nor the placeholder `.`.
    #[display("invalid character {found:?} at index {index}")]
    InvalidCharacter {
        /// Index of the rejected character.
        index: usize,
        /// The rejected character.
        found: char,
    },
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParsePuzzleError::InvalidLength { len });
        }

        let mut cells = [None; 81];
        for (index, c) in s.chars().enumerate() {
            cells[index] = match c {
                PLACEHOLDER => None,
                _ => Some(
                    Digit::from_char(c)
                        .ok_or(ParsePuzzleError::InvalidCharacter { index, found: c })?,
                ),
            };
        }
        Ok(Self { cells })
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}
