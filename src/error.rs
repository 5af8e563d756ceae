//! Error taxonomy shared by board construction and every search strategy.

use thiserror::Error;

/// Reasons a puzzle could not be turned into a solution path.
///
/// `NoSolutionFound` and `DepthCeilingReached` are budget outcomes rather than
/// verdicts about the puzzle: the caller may retry with a larger budget.
/// Only `Unsolvable` proves that the goal cannot be reached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Wrong number of cells, or a digit outside `0..=8` / a repeated digit.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// The inversion parity rules out reaching the goal.
    #[error("board is unsolvable: {inversions} inversions (odd)")]
    Unsolvable { inversions: u32 },

    /// The frontier ran dry without popping the goal.
    #[error("search frontier exhausted without reaching the goal")]
    NoSolutionFound,

    /// Iterative deepening gave up after trying every limit up to `ceiling`.
    #[error("no solution within depth ceiling {ceiling}")]
    DepthCeilingReached { ceiling: u32 },
}
