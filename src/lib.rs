//! # Eight-Puzzle Solver Library
//!
//! This library provides the board model for the 3x3 sliding-tile puzzle and four search
//! strategies for solving it: breadth-first search, iterative-deepening depth-first search,
//! greedy best-first search and A* search.
//!
//! It is used by two binaries:
//! - `solver`: Takes a board and a strategy, then prints the path to the goal.
//! - `strategy_evaluator`: Runs every strategy on a batch of seeded random scrambles and
//!   compares solution lengths and search effort.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), moves (`Move`), the fixed `GOAL` and the
//!   move generator.
//! - `heuristics`: The inversion-parity solvability check and the Manhattan-distance estimate.
//! - `solver`: The `solve` entry point, `Solution`, and one submodule per strategy.
//! - `error`: `SolveError`, returned by every fallible operation.
//! - `utils`: Parsing boards from text and formatting move lists.
//!
//! ## Example
//! ```
//! use eight_puzzle_solver::{solve_with_config, SolverConfig, Strategy};
//! use eight_puzzle_solver::utils::{board_from_str, format_moves};
//!
//! let board = board_from_str("1 2 3 0 4 6 7 5 8").unwrap();
//! let config = SolverConfig { strategy: Strategy::Astar, ..SolverConfig::default() };
//! let solution = solve_with_config(&board, &config).unwrap();
//! assert_eq!(format_moves(&solution.moves), "Right Down Right");
//! ```

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod utils;

pub use crate::engine::{Board, Move, GOAL};
pub use crate::error::SolveError;
pub use crate::solver::{solve, solve_with_config, Solution, SolverConfig, Strategy};
