//! Board evaluations used before and during search.
//!
//! - `inversion_count` / `is_solvable`: the parity pre-check run once before any strategy.
//! - `manhattan_distance`: the admissible, consistent estimate used by greedy and A* search.
use crate::engine::{Board, BLANK, CELLS, GOAL, SIDE};

/// Counts pairs of non-blank tiles that appear in the wrong relative order.
///
/// Tiles are read row-major with the blank skipped; a pair `(a, b)` with `a` before `b`
/// is an inversion when `a > b`.
///
/// # Arguments
/// * `board`: A reference to the `Board` to analyze.
///
/// # Returns
/// The number of inversions, between 0 and 28.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, GOAL};
/// use eight_puzzle_solver::heuristics::inversion_count;
/// assert_eq!(inversion_count(&GOAL), 0);
/// let swapped = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
/// assert_eq!(inversion_count(&swapped), 1);
/// ```
pub fn inversion_count(board: &Board) -> u32 {
    let tiles: Vec<u8> = board
        .tiles()
        .iter()
        .copied()
        .filter(|&t| t != BLANK)
        .collect();
    let mut inversions = 0;
    for i in 0..tiles.len() {
        for j in i + 1..tiles.len() {
            if tiles[i] > tiles[j] {
                inversions += 1;
            }
        }
    }
    inversions
}

/// Returns `true` if `board` can reach [`GOAL`].
///
/// A slide never changes the parity of the inversion count on a 3-wide board, and the goal
/// has zero inversions, so a board is solvable exactly when its count is even.
///
/// This only holds for the goal used here (blank in the last cell, tiles ascending). A goal
/// with a different tile order would need the parity compared against *its* inversion count.
pub fn is_solvable(board: &Board) -> bool {
    inversion_count(board) % 2 == 0
}

/// Row and column of `tile` in the goal arrangement.
fn goal_cell(tile: u8) -> (usize, usize) {
    let p = GOAL
        .tiles()
        .iter()
        .position(|&t| t == tile)
        .unwrap_or(CELLS - 1);
    (p / SIDE, p % SIDE)
}

/// Sums, over every non-blank tile, the grid distance between its cell and its goal cell.
///
/// Each move shifts exactly one tile by one cell, so the estimate changes by exactly one per
/// move and never exceeds the true number of moves left. That makes it both admissible and
/// consistent, which A* needs for its first goal pop to be optimal.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, GOAL};
/// use eight_puzzle_solver::heuristics::manhattan_distance;
/// assert_eq!(manhattan_distance(&GOAL), 0);
/// let board = Board::new([1, 2, 3, 0, 4, 6, 7, 5, 8]).unwrap();
/// assert_eq!(manhattan_distance(&board), 3);
/// ```
pub fn manhattan_distance(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(p, &tile)| {
            let (goal_r, goal_c) = goal_cell(tile);
            ((p / SIDE).abs_diff(goal_r) + (p % SIDE).abs_diff(goal_c)) as u32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Move;
    use std::collections::{HashSet, VecDeque};

    fn board(tiles: [u8; CELLS]) -> Board {
        Board::new(tiles).unwrap()
    }

    /// Every board reachable from the goal, found by flooding the move graph.
    fn reachable_from_goal() -> HashSet<Board> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(GOAL);
        queue.push_back(GOAL);
        while let Some(current) = queue.pop_front() {
            for (_, next) in current.successors() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Heap's algorithm over all 9! arrangements.
    fn all_permutations() -> Vec<[u8; CELLS]> {
        let mut tiles = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        let mut counters = [0usize; CELLS];
        let mut out = vec![tiles];
        let mut i = 1;
        while i < CELLS {
            if counters[i] < i {
                if i % 2 == 0 {
                    tiles.swap(0, i);
                } else {
                    tiles.swap(counters[i], i);
                }
                out.push(tiles);
                counters[i] += 1;
                i = 1;
            } else {
                counters[i] = 0;
                i += 1;
            }
        }
        out
    }

    #[test]
    fn test_inversion_count_examples() {
        assert_eq!(inversion_count(&GOAL), 0);
        // Scenario A: 1 2 3 _ 4 6 7 5 8 -> pairs (6,5) and (7,5).
        assert_eq!(inversion_count(&board([1, 2, 3, 0, 4, 6, 7, 5, 8])), 2);
        // Scenario B: goal with 1 and 2 swapped.
        assert_eq!(inversion_count(&board([2, 1, 3, 4, 5, 6, 7, 8, 0])), 1);
        // Fully reversed non-blank tiles: 8 choose 2.
        assert_eq!(inversion_count(&board([8, 7, 6, 5, 4, 3, 2, 1, 0])), 28);
        // The blank never counts, wherever it sits.
        assert_eq!(inversion_count(&board([0, 1, 2, 3, 4, 5, 6, 7, 8])), 0);
    }

    #[test]
    fn test_is_solvable_scenarios() {
        assert!(is_solvable(&GOAL));
        assert!(is_solvable(&board([1, 2, 3, 0, 4, 6, 7, 5, 8])));
        assert!(!is_solvable(&board([2, 1, 3, 4, 5, 6, 7, 8, 0])));
    }

    #[test]
    fn test_solvability_matches_exhaustive_reachability() {
        let reachable = reachable_from_goal();
        assert_eq!(reachable.len(), 181_440);

        let permutations = all_permutations();
        assert_eq!(permutations.len(), 362_880);
        for tiles in permutations {
            let b = board(tiles);
            assert_eq!(
                is_solvable(&b),
                reachable.contains(&b),
                "parity check disagrees with reachability for\n{}",
                b
            );
        }
    }

    #[test]
    fn test_manhattan_distance_values() {
        assert_eq!(manhattan_distance(&GOAL), 0);
        assert_eq!(manhattan_distance(&board([1, 2, 3, 0, 4, 6, 7, 5, 8])), 3);
        // 8 1 2 / _ 4 3 / 7 6 5
        // 8:3, 1:1, 2:1, 4:1, 3:1, 7:0, 6:2, 5:2
        assert_eq!(manhattan_distance(&board([8, 1, 2, 0, 4, 3, 7, 6, 5])), 11);
    }

    #[test]
    fn test_manhattan_distance_is_consistent() {
        // One move changes the estimate by exactly one, in either direction.
        for seed in 0..200 {
            let b = Board::scrambled(seed, 30);
            let h = manhattan_distance(&b);
            for mv in Move::ALL {
                if let Some(next) = b.apply(mv) {
                    assert_eq!(manhattan_distance(&next).abs_diff(h), 1);
                }
            }
        }
    }
}
