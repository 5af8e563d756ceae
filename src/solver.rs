//! Search strategies for reaching [`GOAL`] and the shared result types.
//!
//! [`solve`] is the entry point: it runs the solvability check exactly once and then hands
//! the board to a single strategy. The per-strategy functions are public too, for callers
//! that have already done the check themselves; they never re-check parity and report an
//! exhausted frontier as [`SolveError::NoSolutionFound`].
use crate::engine::{Board, Move, GOAL};
use crate::error::SolveError;
use crate::heuristics::{inversion_count, is_solvable};
use log::info;
use std::collections::HashMap;
use std::fmt;

pub mod astar;
pub mod bfs;
pub mod greedy;
pub mod iddfs;

pub use astar::solve_astar;
pub use bfs::solve_bfs;
pub use greedy::solve_greedy;
pub use iddfs::solve_iddfs;

/// Largest optimal solution length of any solvable 8-puzzle.
pub const MAX_OPTIMAL_MOVES: u32 = 31;

/// The available search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Breadth-first search; optimal.
    Bfs,
    /// Iterative-deepening depth-first search; optimal within its depth ceiling.
    Iddfs,
    /// Greedy best-first search on Manhattan distance; fast, not optimal.
    Greedy,
    /// A* search on moves-so-far plus Manhattan distance; optimal.
    Astar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Iddfs,
        Strategy::Greedy,
        Strategy::Astar,
    ];

    /// Whether the strategy always returns a minimum-move path.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Strategy::Greedy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Bfs => "BFS",
            Strategy::Iddfs => "IDDFS",
            Strategy::Greedy => "Greedy",
            Strategy::Astar => "A*",
        };
        f.write_str(name)
    }
}

/// Knobs for a single [`solve`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Highest depth limit iterative deepening will try. Ignored by the other strategies.
    pub depth_ceiling: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            strategy: Strategy::Astar,
            depth_ceiling: MAX_OPTIMAL_MOVES,
        }
    }
}

/// A path found by one of the strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The strategy that produced this path.
    pub strategy: Strategy,
    /// Boards from the initial state to the goal, both inclusive.
    pub path: Vec<Board>,
    /// The moves joining consecutive boards of `path`; always one shorter than `path`.
    pub moves: Vec<Move>,
    /// Number of states whose successors were generated during the search.
    /// For iterative deepening this is summed over every depth-limited attempt.
    pub nodes_expanded: usize,
}

impl Solution {
    /// Builds a solution from a board path, deriving the move labels between neighbours.
    ///
    /// # Panics
    /// Panics if two consecutive boards are not one legal move apart. Every strategy builds
    /// its path out of `Board::successors`, so this indicates a bug in the search itself.
    pub(crate) fn from_path(strategy: Strategy, path: Vec<Board>, nodes_expanded: usize) -> Self {
        let moves = path
            .windows(2)
            .map(|pair| {
                pair[0]
                    .move_to(&pair[1])
                    .expect("consecutive path boards must be one move apart")
            })
            .collect();
        Solution {
            strategy,
            path,
            moves,
            nodes_expanded,
        }
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// The last board of the path, which is always the goal.
    pub fn final_board(&self) -> Board {
        self.path.last().copied().unwrap_or(GOAL)
    }
}

/// Walks parent links back from `goal` and returns the boards in start-to-goal order.
///
/// `parents` maps every discovered board except the start to the board it was reached from.
pub(crate) fn reconstruct_path(parents: &HashMap<Board, Board>, goal: Board) -> Vec<Board> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&previous) = parents.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Rejects boards whose inversion parity rules out reaching the goal.
pub fn check_solvable(board: &Board) -> Result<(), SolveError> {
    if is_solvable(board) {
        Ok(())
    } else {
        let inversions = inversion_count(board);
        info!("rejecting board with {} inversions as unsolvable", inversions);
        Err(SolveError::Unsolvable { inversions })
    }
}

/// Solves `board` with the default configuration (A*).
pub fn solve(board: &Board) -> Result<Solution, SolveError> {
    solve_with_config(board, &SolverConfig::default())
}

/// Checks solvability once, then runs the configured strategy.
///
/// # Returns
/// * `Ok(Solution)` with a path ending at [`GOAL`].
/// * `Err(SolveError::Unsolvable)` if the parity check fails; no strategy is run.
/// * `Err(SolveError::DepthCeilingReached)` if iterative deepening ran out of depth budget.
/// * `Err(SolveError::NoSolutionFound)` if a frontier was exhausted.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, Move};
/// use eight_puzzle_solver::solver::{solve_with_config, SolverConfig, Strategy};
///
/// let board = Board::new([1, 2, 3, 0, 4, 6, 7, 5, 8]).unwrap();
/// let config = SolverConfig { strategy: Strategy::Bfs, ..SolverConfig::default() };
/// let solution = solve_with_config(&board, &config).unwrap();
/// assert_eq!(solution.moves, vec![Move::Right, Move::Down, Move::Right]);
/// ```
pub fn solve_with_config(board: &Board, config: &SolverConfig) -> Result<Solution, SolveError> {
    check_solvable(board)?;
    let solution = match config.strategy {
        Strategy::Bfs => solve_bfs(board),
        Strategy::Iddfs => solve_iddfs(board, config.depth_ceiling),
        Strategy::Greedy => solve_greedy(board),
        Strategy::Astar => solve_astar(board),
    }?;
    info!(
        "{} found a {}-move solution after expanding {} states",
        solution.strategy,
        solution.move_count(),
        solution.nodes_expanded
    );
    Ok(solution)
}

/// Asserts shared invariants of a returned solution. Used by the strategy test modules.
#[cfg(test)]
pub(crate) fn assert_valid_solution(start: &Board, solution: &Solution) {
    assert_eq!(solution.path.first(), Some(start), "path must begin at the start");
    assert!(solution.final_board().is_goal(), "path must end at the goal");
    assert_eq!(solution.path.len(), solution.moves.len() + 1);
    for (pair, mv) in solution.path.windows(2).zip(&solution.moves) {
        let legal: Vec<Board> = pair[0].successors().into_iter().map(|(_, b)| b).collect();
        assert!(
            legal.contains(&pair[1]),
            "{:?} is not a legal successor of {:?}",
            pair[1],
            pair[0]
        );
        assert_eq!(pair[0].apply(*mv), Some(pair[1]));
    }
}
