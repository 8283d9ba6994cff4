//! Iterated single-candidate deduction.

use kudoku_core::{Digit, DigitSet, ParsePuzzleError, Position, Puzzle};

/// Errors that can occur when solving a puzzle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The puzzle string failed validation.
    #[display("{_0}")]
    Parse(#[from] ParsePuzzleError),
    /// The puzzle has no solution reachable by single-candidate deduction:
    /// either some cell has no candidate left, or a full pass over the
    /// grid deduced nothing while empty cells remain.
    #[display("puzzle cannot be solved")]
    Unsolvable,
}

/// Solves a puzzle by repeatedly filling cells that have exactly one
/// candidate.
///
/// Each pass visits the empty cells in index order and computes the digits
/// allowed by the cell's row, column, and region against the current state
/// of the grid. A cell with exactly one candidate is filled immediately, so
/// later cells in the same pass observe the update. Passes repeat until the
/// grid is complete.
///
/// An already-complete puzzle is returned unchanged; its filled cells are
/// not re-validated.
///
/// Puzzles that require guessing are reported as unsolvable: the solver
/// performs no search, so when a pass deduces nothing while empty cells
/// remain, no later pass ever would.
///
/// # Errors
///
/// Returns [`SolveError::Unsolvable`] when some cell has no remaining
/// candidate or a pass makes no progress.
///
/// # Examples
///
/// ```
/// use kudoku_core::Puzzle;
/// use kudoku_solver::solve;
///
/// let (puzzle, solution) = kudoku_solver::samples::PUZZLE_SOLUTION_PAIRS[0];
/// let puzzle: Puzzle = puzzle.parse()?;
///
/// let solved = solve(&puzzle)?;
/// assert_eq!(solved.to_string(), solution);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solve(puzzle: &Puzzle) -> Result<Puzzle, SolveError> {
    let mut cells = *puzzle.cells();

    loop {
        let mut progress = false;
        let mut remaining = 0_usize;

        for pos in Position::ALL {
            if cells[pos.index()].is_some() {
                continue;
            }
            let candidates = candidates_at(&cells, pos);
            if let Some(digit) = candidates.as_single() {
                cells[pos.index()] = Some(digit);
                progress = true;
            } else if candidates.is_empty() {
                return Err(SolveError::Unsolvable);
            } else {
                remaining += 1;
            }
        }

        if remaining == 0 {
            return Ok(Puzzle::from_cells(cells));
        }
        if !progress {
            // Stuck with only ambiguous cells; deduction alone cannot
            // finish this puzzle.
            return Err(SolveError::Unsolvable);
        }
    }
}

/// Solves a puzzle given in string form, returning the solved string.
///
/// This is the string-level entry point: the input is validated first
/// (length, then character set), then handed to [`solve`].
///
/// # Errors
///
/// Returns [`SolveError::Parse`] when the input is not a well-formed
/// 81-character puzzle string, and [`SolveError::Unsolvable`] when
/// deduction gets stuck.
pub fn solve_str(s: &str) -> Result<String, SolveError> {
    let puzzle: Puzzle = s.parse()?;
    Ok(solve(&puzzle)?.to_string())
}

/// Computes the candidate digits for the empty cell at `pos`: every digit
/// not present in the cell's row, column, or region.
fn candidates_at(cells: &[Option<Digit>; 81], pos: Position) -> DigitSet {
    let mut candidates = DigitSet::FULL;
    for i in 0..9 {
        if let Some(digit) = cells[Position::new(i, pos.y()).index()] {
            candidates.remove(digit);
        }
        if let Some(digit) = cells[Position::new(pos.x(), i).index()] {
            candidates.remove(digit);
        }
    }
    let (x0, y0) = (pos.region_x() * 3, pos.region_y() * 3);
    for y in y0..y0 + 3 {
        for x in x0..x0 + 3 {
            if let Some(digit) = cells[Position::new(x, y).index()] {
                candidates.remove(digit);
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{placement, samples::PUZZLE_SOLUTION_PAIRS};

    /// 81 characters; cell (8, 0) has no candidate: its row already holds
    /// 1-8 and its column holds 9.
    const ZERO_CANDIDATE: &str =
        "12345678.........9...............................................................";

    /// Valid but underdetermined; every empty cell keeps several
    /// candidates, so a pass deduces nothing.
    const STALLED: &str =
        "12...............................................................................";

    fn assert_solved(solved: &Puzzle) {
        assert!(solved.is_complete());
        for i in 0..9 {
            for digit in Digit::ALL {
                assert!(solved.row(i).contains(&Some(digit)));
                assert!(solved.column(i).contains(&Some(digit)));
                assert!(solved.region(i % 3, i / 3).contains(&Some(digit)));
            }
        }
    }

    #[test]
    fn test_solves_known_puzzles() {
        for (puzzle, solution) in PUZZLE_SOLUTION_PAIRS {
            let parsed: Puzzle = puzzle.parse().unwrap();
            let solved = solve(&parsed).unwrap();
            assert_eq!(solved.to_string(), solution);
            assert_solved(&solved);
        }
    }

    #[test]
    fn test_complete_puzzle_returned_unchanged() {
        for (_, solution) in PUZZLE_SOLUTION_PAIRS {
            let parsed: Puzzle = solution.parse().unwrap();
            assert_eq!(solve(&parsed).unwrap(), parsed);
        }
    }

    #[test]
    fn test_solve_is_idempotent() {
        let (puzzle, _) = PUZZLE_SOLUTION_PAIRS[0];
        let parsed: Puzzle = puzzle.parse().unwrap();
        let once = solve(&parsed).unwrap();
        let twice = solve(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_zero_candidate_cell_is_unsolvable() {
        let parsed: Puzzle = ZERO_CANDIDATE.parse().unwrap();
        assert_eq!(solve(&parsed), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_stalled_puzzle_is_unsolvable() {
        let parsed: Puzzle = STALLED.parse().unwrap();
        assert_eq!(solve(&parsed), Err(SolveError::Unsolvable));

        // The degenerate case: a fully empty grid never deduces anything.
        let empty: Puzzle = ".".repeat(81).parse().unwrap();
        assert_eq!(solve(&empty), Err(SolveError::Unsolvable));
    }

    #[test]
    fn test_solve_str_reports_parse_errors() {
        assert_eq!(
            solve_str("invalid"),
            Err(SolveError::Parse(ParsePuzzleError::InvalidLength {
                len: 7
            }))
        );

        let (puzzle, _) = PUZZLE_SOLUTION_PAIRS[0];
        let with_zero = format!("0{}", &puzzle[1..]);
        assert_eq!(
            solve_str(&with_zero),
            Err(SolveError::Parse(ParsePuzzleError::InvalidCharacter {
                index: 0,
                found: '0'
            }))
        );
    }

    #[test]
    fn test_solve_str_round_trip() {
        for (puzzle, solution) in PUZZLE_SOLUTION_PAIRS {
            assert_eq!(solve_str(puzzle).unwrap(), solution);
        }
    }

    #[test]
    fn test_candidates_respect_placement_checks() {
        let (puzzle, _) = PUZZLE_SOLUTION_PAIRS[0];
        let parsed: Puzzle = puzzle.parse().unwrap();
        for pos in parsed.empty_positions() {
            let candidates = candidates_at(parsed.cells(), pos);
            for digit in Digit::ALL {
                assert_eq!(
                    candidates.contains(digit),
                    placement::placement_allows(&parsed, pos, digit)
                );
            }
        }
    }

    proptest! {
        #[test]
        fn solved_outputs_are_complete_and_consistent(index in 0usize..5) {
            let (puzzle, _) = PUZZLE_SOLUTION_PAIRS[index];
            let parsed: Puzzle = puzzle.parse().unwrap();
            let solved = solve(&parsed).unwrap();
            prop_assert!(solved.is_complete());
            for i in 0..9u8 {
                for digit in Digit::ALL {
                    prop_assert!(solved.row(i).contains(&Some(digit)));
                    prop_assert!(solved.column(i).contains(&Some(digit)));
                }
            }
        }
    }
}
