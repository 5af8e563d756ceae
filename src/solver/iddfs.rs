//! Iterative-deepening depth-first search.
//!
//! Runs a depth-limited DFS for limits `0, 1, 2, ...` up to a ceiling. Within one attempt a
//! board is only "visited" while it sits on the current branch: it is added on descent and
//! removed again when its subtree is done. The same board can therefore be reached again
//! through a different branch of the same attempt, while cycles along a single branch are
//! still cut off.
use super::{Solution, Strategy};
use crate::engine::Board;
use crate::error::SolveError;
use log::debug;
use std::collections::HashSet;

/// Solves `start` by iterative deepening, trying every depth limit up to `depth_ceiling`.
///
/// Limits are tried in increasing order and a limit-`d` attempt can only succeed if a path of
/// at most `d` moves exists, so the first success is a minimum-move path.
///
/// # Returns
/// * `Ok(Solution)` with a minimum-move path if one of at most `depth_ceiling` moves exists.
/// * `Err(SolveError::DepthCeilingReached)` otherwise. This says nothing about solvability:
///   the caller may raise the ceiling and retry.
pub fn solve_iddfs(start: &Board, depth_ceiling: u32) -> Result<Solution, SolveError> {
    let mut nodes_expanded = 0;
    for limit in 0..=depth_ceiling {
        let mut on_branch = HashSet::new();
        let mut path = vec![*start];
        if depth_limited(*start, limit, &mut path, &mut on_branch, &mut nodes_expanded) {
            debug!(
                "iddfs succeeded at depth limit {} after {} expansions",
                limit, nodes_expanded
            );
            return Ok(Solution::from_path(Strategy::Iddfs, path, nodes_expanded));
        }
        debug!(
            "iddfs exhausted depth limit {} ({} expansions so far)",
            limit, nodes_expanded
        );
    }
    Err(SolveError::DepthCeilingReached {
        ceiling: depth_ceiling,
    })
}

/// One depth-limited descent from `current`, which is already the last board of `path`.
///
/// On success `path` holds the full route to the goal. On failure `path` is left exactly as
/// it was on entry. `on_branch` is always restored before returning, whatever the outcome.
fn depth_limited(
    current: Board,
    remaining: u32,
    path: &mut Vec<Board>,
    on_branch: &mut HashSet<Board>,
    nodes_expanded: &mut usize,
) -> bool {
    if current.is_goal() {
        return true;
    }
    if remaining == 0 {
        return false;
    }

    on_branch.insert(current);
    *nodes_expanded += 1;

    let found = current.successors().into_iter().any(|(_, next)| {
        if on_branch.contains(&next) {
            return false;
        }
        path.push(next);
        if depth_limited(next, remaining - 1, path, on_branch, nodes_expanded) {
            true
        } else {
            path.pop();
            false
        }
    });

    on_branch.remove(&current);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Move, GOAL};
    use crate::solver::{assert_valid_solution, solve_bfs};

    fn scenario_a() -> Board {
        Board::new([1, 2, 3, 0, 4, 6, 7, 5, 8]).unwrap()
    }

    #[test_log::test]
    fn test_iddfs_finds_three_move_path() {
        let start = scenario_a();
        let solution = solve_iddfs(&start, 10).unwrap();
        assert_valid_solution(&start, &solution);
        assert_eq!(solution.moves, vec![Move::Right, Move::Down, Move::Right]);
    }

    #[test]
    fn test_iddfs_goal_with_zero_ceiling() {
        let solution = solve_iddfs(&GOAL, 0).unwrap();
        assert_eq!(solution.path, vec![GOAL]);
        assert_eq!(solution.nodes_expanded, 0);
    }

    #[test]
    fn test_iddfs_ceiling_below_optimum_is_reported() {
        let start = scenario_a();
        for ceiling in 0..3 {
            assert_eq!(
                solve_iddfs(&start, ceiling),
                Err(SolveError::DepthCeilingReached { ceiling })
            );
        }
        // Exactly the optimum is enough.
        assert_eq!(solve_iddfs(&start, 3).unwrap().move_count(), 3);
    }

    #[test]
    fn test_iddfs_matches_bfs_length() {
        for seed in 0..15 {
            let start = Board::scrambled(seed, 10);
            let optimal = solve_bfs(&start).unwrap().move_count() as u32;

            let solution = solve_iddfs(&start, optimal + 2).unwrap();
            assert_valid_solution(&start, &solution);
            assert_eq!(solution.move_count() as u32, optimal, "seed {}", seed);

            if optimal > 0 {
                assert_eq!(
                    solve_iddfs(&start, optimal - 1),
                    Err(SolveError::DepthCeilingReached {
                        ceiling: optimal - 1
                    })
                );
            }
        }
    }

    #[test]
    fn test_depth_limited_restores_branch_state() {
        let start = scenario_a();
        let mut on_branch = HashSet::new();
        let mut path = vec![start];
        let mut expanded = 0;

        // Failing attempt: path and branch set are unchanged.
        assert!(!depth_limited(start, 2, &mut path, &mut on_branch, &mut expanded));
        assert_eq!(path, vec![start]);
        assert!(on_branch.is_empty());
        assert!(expanded > 0);

        // Successful attempt: the branch set is still cleaned up.
        assert!(depth_limited(start, 3, &mut path, &mut on_branch, &mut expanded));
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&GOAL));
        assert!(on_branch.is_empty());
    }

    #[test]
    fn test_iddfs_counts_expansions_across_attempts() {
        let start = scenario_a();
        let one_pass = {
            let mut on_branch = HashSet::new();
            let mut path = vec![start];
            let mut expanded = 0;
            depth_limited(start, 3, &mut path, &mut on_branch, &mut expanded);
            expanded
        };
        let solution = solve_iddfs(&start, 3).unwrap();
        assert!(solution.nodes_expanded > one_pass);
    }
}
