//! Text helpers: parsing boards typed by a user or read from a file, and formatting move lists.
use crate::engine::{Board, Move, BLANK, SIDE};
use crate::error::SolveError;

fn parse_cell(token: &str) -> Result<u8, SolveError> {
    if token == "_" {
        return Ok(BLANK);
    }
    token
        .parse::<u8>()
        .map_err(|_| SolveError::InvalidBoard(format!("unrecognized tile '{}'", token)))
}

/// Splits a line of text into cell tokens.
///
/// Brackets, parentheses and commas are treated as whitespace. A single run of characters
/// with no separators at all (e.g. `"123046758"`) is read one character per cell.
fn cell_tokens(s: &str) -> Vec<String> {
    let cleaned: String = s
        .chars()
        .map(|ch| match ch {
            '(' | ')' | '[' | ']' | ',' => ' ',
            other => other,
        })
        .collect();
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    match tokens.as_slice() {
        [single] if single.chars().count() > 1 => single.chars().map(String::from).collect(),
        _ => tokens.iter().map(|t| t.to_string()).collect(),
    }
}

/// Parses a board from a single line of text.
///
/// Accepted forms, all row-major with `0` or `_` for the blank:
/// - nine digits with no separators: `123046758`
/// - nine values separated by whitespace and/or commas: `1 2 3 0 4 6 7 5 8`
/// - a tuple or list literal: `(1,2,3,0,4,6,7,5,8)`
///
/// # Returns
/// * `Ok(Board)` if the text holds exactly nine cells forming a valid board.
/// * `Err(SolveError::InvalidBoard)` for unknown tokens, the wrong number of cells,
///   or a repeated/out-of-range digit.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str;
///
/// let a = board_from_str("123046758").unwrap();
/// let b = board_from_str("(1, 2, 3, _, 4, 6, 7, 5, 8)").unwrap();
/// assert_eq!(a, b);
/// assert!(board_from_str("1 2 3").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, SolveError> {
    let cells = cell_tokens(s)
        .iter()
        .map(|t| parse_cell(t))
        .collect::<Result<Vec<u8>, SolveError>>()?;
    Board::try_from(cells.as_slice())
}

/// Parses a board from three row strings, e.g. the lines of a board file.
///
/// Each row must contain exactly three cells, written in any of the forms accepted by
/// [`board_from_str`] (`"1 2 3"`, `"123"`, `"_ 4 6"`, ...).
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_array;
/// use eight_puzzle_solver::engine::GOAL;
///
/// let board = board_from_str_array(&["1 2 3", "4 5 6", "7 8 _"]).unwrap();
/// assert_eq!(board, GOAL);
///
/// assert!(board_from_str_array(&["123", "456"]).is_err());
/// assert!(board_from_str_array(&["1234", "56", "780"]).is_err());
/// ```
pub fn board_from_str_array(rows: &[&str]) -> Result<Board, SolveError> {
    if rows.len() != SIDE {
        return Err(SolveError::InvalidBoard(format!(
            "invalid number of rows: expected {}, found {}",
            SIDE,
            rows.len()
        )));
    }

    let mut grid = [[BLANK; SIDE]; SIDE];
    for (r, row_str) in rows.iter().enumerate() {
        let cells = cell_tokens(row_str)
            .iter()
            .map(|t| parse_cell(t))
            .collect::<Result<Vec<u8>, SolveError>>()?;
        if cells.len() != SIDE {
            return Err(SolveError::InvalidBoard(format!(
                "row {} has {} tiles, expected {}",
                r,
                cells.len(),
                SIDE
            )));
        }
        grid[r].copy_from_slice(&cells);
    }
    Board::from_grid(grid)
}

/// Joins moves with spaces: `Right Down Right`.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One letter per move: `RDR`.
pub fn compact_moves(moves: &[Move]) -> String {
    moves.iter().map(|mv| mv.to_char()).collect()
}
