//! Sample puzzles with known solutions.
//!
//! Every puzzle here is solvable by single-candidate deduction alone, so
//! the pairs double as end-to-end fixtures for the solver. They are shared
//! by unit tests, the operation-layer integration tests, and the benches.

/// Puzzle/solution string pairs, each solvable by single-candidate
/// deduction.
pub const PUZZLE_SOLUTION_PAIRS: [(&str, &str); 5] = [
    (
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.",
        "135762984946381257728459613694517832812936745357824196473298561581673429269145378",
    ),
    (
        "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3",
        "568913724342687519197254386685479231219538467734162895926345178473891652851726943",
    ),
    (
        "..839.7.575.....964..1.......16.29846.9.312.7..754.....62..5.78.8...3.2...492...1",
        "218396745753284196496157832531672984649831257827549613962415378185763429374928561",
    ),
    (
        ".7.89.....5....3.4.2..4..1.5689..472...6.....1.7.5.63873.1.2.8.6..47.1..2.9.387.6",
        "473891265851726394926345817568913472342687951197254638734162589685479123219538746",
    ),
    (
        "82..4..6...16..89...98315.749.157.............53..4...96.415..81..7632..3...28.51",
        "827549163531672894649831527496157382218396475753284916962415738185763249374928651",
    ),
];
