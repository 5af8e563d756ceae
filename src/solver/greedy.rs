//! Greedy best-first search on Manhattan distance.
use super::{Solution, Strategy};
use crate::engine::Board;
use crate::error::SolveError;
use crate::heuristics::manhattan_distance;
use log::{debug, warn};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// A frontier entry carrying the full path that produced it.
///
/// Field order matters: the derived ordering compares the estimate first, then the board
/// lexicographically, which gives a total and reproducible frontier order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    estimate: u32,
    board: Board,
    path: Vec<Board>,
}

/// Solves `start` by always expanding the frontier board that looks closest to the goal.
///
/// Fast in practice, but the returned path is not necessarily the shortest: the search
/// commits to locally attractive boards even when a shorter route exists elsewhere.
/// Boards are marked visited when expanded, so no board is expanded twice.
pub fn solve_greedy(start: &Board) -> Result<Solution, SolveError> {
    let mut frontier = BinaryHeap::new();
    let mut expanded = HashSet::new();

    frontier.push(Reverse(Candidate {
        estimate: manhattan_distance(start),
        board: *start,
        path: vec![*start],
    }));

    while let Some(Reverse(candidate)) = frontier.pop() {
        if candidate.board.is_goal() {
            debug!(
                "greedy reached the goal: {} expanded, {} still queued",
                expanded.len(),
                frontier.len()
            );
            let nodes_expanded = expanded.len();
            return Ok(Solution::from_path(
                Strategy::Greedy,
                candidate.path,
                nodes_expanded,
            ));
        }
        if !expanded.insert(candidate.board) {
            continue;
        }

        for (_, next) in candidate.board.successors() {
            if expanded.contains(&next) {
                continue;
            }
            let mut path = candidate.path.clone();
            path.push(next);
            frontier.push(Reverse(Candidate {
                estimate: manhattan_distance(&next),
                board: next,
                path,
            }));
        }
    }

    warn!(
        "greedy exhausted its frontier after expanding {} states",
        expanded.len()
    );
    Err(SolveError::NoSolutionFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Move, GOAL};
    use crate::solver::{assert_valid_solution, solve_bfs};

    #[test_log::test]
    fn test_greedy_scenario_a() {
        let start = Board::new([1, 2, 3, 0, 4, 6, 7, 5, 8]).unwrap();
        let solution = solve_greedy(&start).unwrap();
        assert_valid_solution(&start, &solution);
        // Each of the three optimal moves strictly lowers the estimate here.
        assert_eq!(solution.moves, vec![Move::Right, Move::Down, Move::Right]);
        assert_eq!(solution.nodes_expanded, 3);
    }

    #[test]
    fn test_greedy_goal_is_trivial() {
        let solution = solve_greedy(&GOAL).unwrap();
        assert_eq!(solution.path, vec![GOAL]);
        assert_eq!(solution.nodes_expanded, 0);
    }

    #[test]
    fn test_greedy_paths_are_valid_but_not_shorter_than_optimal() {
        for seed in 0..20 {
            let start = Board::scrambled(seed, 20);
            let greedy = solve_greedy(&start).unwrap();
            assert_valid_solution(&start, &greedy);

            let optimal = solve_bfs(&start).unwrap();
            assert!(greedy.move_count() >= optimal.move_count());
        }
    }

    #[test]
    fn test_greedy_is_deterministic() {
        let start = Board::scrambled(99, 40);
        assert_eq!(solve_greedy(&start), solve_greedy(&start));
    }

    #[test]
    fn test_candidate_ordering_breaks_ties_on_board() {
        let low = Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let high = Board::new([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let mut heap = BinaryHeap::new();
        for board in [high, low] {
            heap.push(Reverse(Candidate {
                estimate: 4,
                board,
                path: vec![board],
            }));
        }
        heap.push(Reverse(Candidate {
            estimate: 9,
            board: Board::new([0, 1, 2, 3, 4, 5, 6, 8, 7]).unwrap(),
            path: Vec::new(),
        }));
        let order: Vec<Board> = std::iter::from_fn(|| heap.pop().map(|Reverse(c)| c.board)).collect();
        assert_eq!(order[0], low);
        assert_eq!(order[1], high);
    }
}
