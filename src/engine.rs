//! Board model and move generator for the 3x3 sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: The four directions the blank can travel.
//! - `Board`: An immutable, validated arrangement of the tiles `0..=8`, where `0` is the blank.
//!   Boards are cheap `Copy` values; applying a move always yields a new board.
//! - `GOAL`: The fixed target arrangement `1 2 3 / 4 5 6 / 7 8 _`.
use crate::error::SolveError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// The value used for the blank cell.
pub const BLANK: u8 = 0;

/// The solved arrangement: tiles in ascending order with the blank in the last cell.
pub const GOAL: Board = Board {
    tiles: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
    blank: 8,
};

/// A single step of the blank.
///
/// The variant names the direction the *blank* travels, not the tile that slides into it.
/// `Up` therefore swaps the blank with the tile directly above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in the canonical expansion order.
    ///
    /// Every strategy enumerates successors in this order, which keeps results reproducible.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Returns the move that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Move;
    /// assert_eq!(Move::Up.opposite(), Move::Down);
    /// assert_eq!(Move::Left.opposite(), Move::Right);
    /// ```
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Single-letter form used in compact move strings, e.g. `RDR`.
    pub fn to_char(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        f.write_str(name)
    }
}

/// An arrangement of the eight tiles and the blank, stored row-major.
///
/// Position `p` maps to `(row, col) = (p / 3, p % 3)`. A `Board` can only be built through
/// the validating constructors, so every instance holds each digit `0..=8` exactly once.
///
/// The derived ordering is lexicographic over the flattened tiles (the `blank` field is a
/// function of the tiles and never decides a comparison). Informed strategies rely on it
/// as a deterministic tie-breaker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
}

impl Board {
    /// Creates a board from a flat, row-major array of tiles.
    ///
    /// # Arguments
    /// * `tiles`: Nine values where `0` marks the blank.
    ///
    /// # Returns
    /// * `Ok(Board)` if every digit `0..=8` appears exactly once.
    /// * `Err(SolveError::InvalidBoard)` if a value is out of range or repeated.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, GOAL};
    /// let board = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    /// assert_eq!(board, GOAL);
    /// assert!(Board::new([1, 1, 3, 4, 5, 6, 7, 8, 0]).is_err());
    /// assert!(Board::new([1, 2, 3, 4, 5, 6, 7, 8, 9]).is_err());
    /// ```
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, SolveError> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            let idx = tile as usize;
            if idx >= CELLS {
                return Err(SolveError::InvalidBoard(format!(
                    "tile {} is out of range 0..={}",
                    tile,
                    CELLS - 1
                )));
            }
            if seen[idx] {
                return Err(SolveError::InvalidBoard(format!(
                    "tile {} appears more than once",
                    tile
                )));
            }
            seen[idx] = true;
        }
        // Nine in-range values without repeats cover every digit, so the blank exists.
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default() as u8;
        Ok(Board { tiles, blank })
    }

    /// Creates a board from a 3x3 grid, the nested form of [`Board::new`].
    pub fn from_grid(grid: [[u8; SIDE]; SIDE]) -> Result<Self, SolveError> {
        let mut tiles = [0; CELLS];
        for (r, row) in grid.iter().enumerate() {
            tiles[r * SIDE..(r + 1) * SIDE].copy_from_slice(row);
        }
        Board::new(tiles)
    }

    /// Creates a board by shuffling all nine values with a seeded RNG.
    ///
    /// The same seed always yields the same board. Roughly half of all such boards are
    /// unsolvable, which makes this handy for exercising the solvability check.
    pub fn new_random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tiles = GOAL.tiles;
        tiles.shuffle(&mut rng);
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default() as u8;
        Board { tiles, blank }
    }

    /// Creates a guaranteed-solvable board by walking the blank randomly away from the goal.
    ///
    /// The walk never immediately undoes its previous step, so `walk_len` is an upper bound
    /// on (not the exact value of) the optimal solution length.
    ///
    /// # Arguments
    /// * `seed`: Seed for the deterministic `SmallRng`.
    /// * `walk_len`: Number of random blank moves applied to `GOAL`.
    pub fn scrambled(seed: u64, walk_len: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = GOAL;
        let mut last: Option<Move> = None;
        for _ in 0..walk_len {
            let candidates: Vec<(Move, Board)> = board
                .successors()
                .into_iter()
                .filter(|(mv, _)| last.map_or(true, |prev| *mv != prev.opposite()))
                .collect();
            let (mv, next) = candidates[rng.gen_range(0..candidates.len())];
            board = next;
            last = Some(mv);
        }
        board
    }

    /// Returns the flat, row-major tile array.
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Returns the tiles as a 3x3 grid.
    pub fn to_grid(&self) -> [[u8; SIDE]; SIDE] {
        let mut grid = [[0; SIDE]; SIDE];
        for (p, &tile) in self.tiles.iter().enumerate() {
            grid[p / SIDE][p % SIDE] = tile;
        }
        grid
    }

    /// Returns the tile at row `r` and column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is 3 or greater.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.tiles[r * SIDE + c]
    }

    /// Returns the flat index (`0..9`) of the blank.
    pub fn blank_position(&self) -> usize {
        self.blank as usize
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Applies `mv` and returns the resulting board, or `None` if the blank would leave the grid.
    ///
    /// `self` is never modified; the result is a fresh value.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, Move, GOAL};
    /// // The goal has its blank in the bottom-right corner.
    /// assert!(GOAL.apply(Move::Down).is_none());
    /// assert!(GOAL.apply(Move::Right).is_none());
    /// let up = GOAL.apply(Move::Up).unwrap();
    /// assert_eq!(up.tiles(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
    /// ```
    pub fn apply(&self, mv: Move) -> Option<Board> {
        let from = self.blank_position();
        let (r, c) = (from / SIDE, from % SIDE);
        let to = match mv {
            Move::Up if r > 0 => from - SIDE,
            Move::Down if r < SIDE - 1 => from + SIDE,
            Move::Left if c > 0 => from - 1,
            Move::Right if c < SIDE - 1 => from + 1,
            _ => return None,
        };
        let mut tiles = self.tiles;
        tiles.swap(from, to);
        Some(Board {
            tiles,
            blank: to as u8,
        })
    }

    /// Enumerates every board reachable by one legal move.
    ///
    /// Successors come out in the canonical `Up, Down, Left, Right` order, skipping moves that
    /// would leave the grid: two successors in a corner, three on an edge, four in the centre.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply(mv).map(|next| (mv, next)))
            .collect()
    }

    /// Finds the move that turns `self` into `other`, if they are one move apart.
    pub fn move_to(&self, other: &Board) -> Option<Move> {
        Move::ALL
            .iter()
            .copied()
            .find(|&mv| self.apply(mv).as_ref() == Some(other))
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = SolveError;

    /// Builds a board from a slice, rejecting anything that is not exactly nine cells.
    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        let tiles: [u8; CELLS] = values.try_into().map_err(|_| {
            SolveError::InvalidBoard(format!(
                "expected {} tiles, found {}",
                CELLS,
                values.len()
            ))
        })?;
        Board::new(tiles)
    }
}

impl fmt::Display for Board {
    /// Formats the board as three rows of space-separated tiles, with `_` for the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..SIDE {
            for c in 0..SIDE {
                if c > 0 {
                    f.write_str(" ")?;
                }
                match self.get_tile(r, c) {
                    BLANK => f.write_str("_")?,
                    tile => write!(f, "{}", tile)?,
                }
            }
            if r < SIDE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
