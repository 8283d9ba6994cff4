//! Core data structures for the Kudoku puzzle engine.
//!
//! This crate provides the representation layer shared by the solving and
//! operation crates: type-safe digits, board positions, human-facing cell
//! labels, and the immutable 81-cell puzzle grid.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Sets of digits 1-9, used for candidate tracking
//! - [`position`]: Board position (x, y) coordinate type with row-major
//!   index and 3×3-region coordinates
//! - [`coordinate`]: The `A1`-`I9` cell label grammar used by callers
//! - [`puzzle`]: The [`Puzzle`] grid with string parsing/rendering and
//!   row/column/region views
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Coordinate, Digit, Puzzle};
//!
//! let puzzle: Puzzle =
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!         .parse()
//!         .unwrap();
//!
//! let coord: Coordinate = "A1".parse().unwrap();
//! assert_eq!(puzzle.cell(coord.position()), Some(Digit::D1));
//! ```

pub mod coordinate;
pub mod digit;
pub mod digit_set;
pub mod position;
pub mod puzzle;

// Re-export commonly used types
pub use self::{
    coordinate::{Coordinate, ParseCoordinateError},
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
    puzzle::{ParsePuzzleError, Puzzle},
};
