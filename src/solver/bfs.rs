//! Breadth-first search.
//!
//! Boards are marked visited the moment they are enqueued, so no board enters the queue
//! twice. Every move costs one, so the first time the goal is dequeued it has been reached
//! by a minimum-move path.
use super::{reconstruct_path, Solution, Strategy};
use crate::engine::Board;
use crate::error::SolveError;
use log::{debug, warn};
use std::collections::{HashMap, HashSet, VecDeque};

/// Solves `start` with breadth-first search, returning a minimum-move path.
///
/// Does not check solvability. On an unsolvable board the whole reachable half of the
/// state space (181,440 boards) is explored before `NoSolutionFound` is returned.
pub fn solve_bfs(start: &Board) -> Result<Solution, SolveError> {
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    let mut parents: HashMap<Board, Board> = HashMap::new();
    let mut nodes_expanded = 0;

    visited.insert(*start);
    queue.push_back(*start);

    while let Some(current) = queue.pop_front() {
        if current.is_goal() {
            debug!(
                "bfs reached the goal: {} expanded, {} discovered",
                nodes_expanded,
                visited.len()
            );
            let path = reconstruct_path(&parents, current);
            return Ok(Solution::from_path(Strategy::Bfs, path, nodes_expanded));
        }

        nodes_expanded += 1;
        for (_, next) in current.successors() {
            if visited.insert(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    warn!(
        "bfs exhausted its frontier after expanding {} states",
        nodes_expanded
    );
    Err(SolveError::NoSolutionFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Move, GOAL};
    use crate::solver::assert_valid_solution;

    #[test_log::test]
    fn test_bfs_finds_three_move_path() {
        let start = Board::new([1, 2, 3, 0, 4, 6, 7, 5, 8]).unwrap();
        let solution = solve_bfs(&start).unwrap();
        assert_valid_solution(&start, &solution);
        assert_eq!(solution.moves, vec![Move::Right, Move::Down, Move::Right]);
        assert_eq!(solution.path.len(), 4);
    }

    #[test]
    fn test_bfs_goal_needs_no_expansion() {
        let solution = solve_bfs(&GOAL).unwrap();
        assert_eq!(solution.path, vec![GOAL]);
        assert_eq!(solution.nodes_expanded, 0);
    }

    #[test]
    fn test_bfs_never_longer_than_the_scramble() {
        for seed in 0..10 {
            let start = Board::scrambled(seed, 14);
            let solution = solve_bfs(&start).unwrap();
            assert_valid_solution(&start, &solution);
            assert!(solution.move_count() <= 14);
        }
    }

    #[test]
    fn test_bfs_single_move_boards() {
        for (mv, start) in GOAL.successors() {
            let solution = solve_bfs(&start).unwrap();
            assert_eq!(solution.moves, vec![mv.opposite()]);
        }
    }

    #[test_log::test]
    fn test_bfs_unsolvable_board_exhausts_frontier() {
        // Skipping the parity check on an unsolvable board drains the entire component.
        let start = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert_eq!(solve_bfs(&start), Err(SolveError::NoSolutionFound));
    }
}
