//! A* search with `f = g + h`, where `g` counts moves from the start and `h` is the
//! Manhattan distance.
//!
//! The frontier may hold several entries for one board. Whenever a strictly cheaper route to
//! a board is found, its best-known `g` and parent are overwritten and a fresh entry is pushed;
//! the older, dearer entries stay in the heap and are dropped unexpanded when popped.
use super::{reconstruct_path, Solution, Strategy};
use crate::engine::Board;
use crate::error::SolveError;
use crate::heuristics::manhattan_distance;
use log::{debug, warn};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Frontier entry. The derived ordering compares `f`, then the board, then `g`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    f: u32,
    board: Board,
    g: u32,
}

/// Bookkeeping for one A* run.
struct Search {
    frontier: BinaryHeap<Reverse<Entry>>,
    best_g: HashMap<Board, u32>,
    parents: HashMap<Board, Board>,
    stale_skipped: usize,
}

impl Search {
    fn new(start: Board) -> Self {
        let mut search = Search {
            frontier: BinaryHeap::new(),
            best_g: HashMap::new(),
            parents: HashMap::new(),
            stale_skipped: 0,
        };
        search.best_g.insert(start, 0);
        search.frontier.push(Reverse(Entry {
            f: manhattan_distance(&start),
            board: start,
            g: 0,
        }));
        search
    }

    /// Records `board` as reached from `parent` in `g` moves if that beats the best known
    /// route. Returns whether anything changed.
    fn relax(&mut self, board: Board, parent: Board, g: u32) -> bool {
        if self.best_g.get(&board).is_some_and(|&known| known <= g) {
            return false;
        }
        self.best_g.insert(board, g);
        self.parents.insert(board, parent);
        self.frontier.push(Reverse(Entry {
            f: g + manhattan_distance(&board),
            board,
            g,
        }));
        true
    }

    /// Pops the lowest-`f` entry whose `g` still matches the best known `g` for its board.
    fn pop_fresh(&mut self) -> Option<Entry> {
        while let Some(Reverse(entry)) = self.frontier.pop() {
            if self.best_g.get(&entry.board) == Some(&entry.g) {
                return Some(entry);
            }
            self.stale_skipped += 1;
        }
        None
    }
}

/// Solves `start` with A*, returning a minimum-move path.
///
/// The Manhattan estimate is consistent, so the first time the goal is popped its `g` is
/// optimal.
pub fn solve_astar(start: &Board) -> Result<Solution, SolveError> {
    let mut search = Search::new(*start);
    let mut nodes_expanded = 0;

    while let Some(entry) = search.pop_fresh() {
        if entry.board.is_goal() {
            debug!(
                "astar reached the goal: {} expanded, {} stale entries skipped, {} discovered",
                nodes_expanded,
                search.stale_skipped,
                search.best_g.len()
            );
            let path = reconstruct_path(&search.parents, entry.board);
            return Ok(Solution::from_path(Strategy::Astar, path, nodes_expanded));
        }

        nodes_expanded += 1;
        for (_, next) in entry.board.successors() {
            search.relax(next, entry.board, entry.g + 1);
        }
    }

    warn!(
        "astar exhausted its frontier after expanding {} states",
        nodes_expanded
    );
    Err(SolveError::NoSolutionFound)
}
