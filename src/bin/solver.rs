use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::solver::{solve_with_config, SolverConfig, Strategy, MAX_OPTIMAL_MOVES};
use eight_puzzle_solver::utils::{board_from_str, board_from_str_array, compact_moves, format_moves};
use eight_puzzle_solver::SolveError;
use log::{info, warn};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a 3x3 sliding-tile puzzle", long_about = None)]
struct Args {
    /// Search strategy
    #[clap(short, long, value_enum, default_value_t = Strategy::Astar)]
    strategy: Strategy,

    /// Depth ceiling for iterative deepening
    #[clap(short, long, default_value_t = MAX_OPTIMAL_MOVES)]
    depth: u32,

    /// Path to a board file (three rows of three tiles, `0` or `_` for the blank)
    #[clap(short, long, conflicts_with = "board")]
    file: Option<PathBuf>,

    /// Instead of reading a board, scramble the goal with this many random moves
    #[clap(long, conflicts_with_all = ["board", "file"])]
    scramble: Option<usize>,

    /// Seed used with --scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Board as nine tiles, row-major, e.g. "123046758". Read from stdin if omitted.
    board: Option<String>,
}

fn read_board_file(path: &PathBuf) -> Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {}", path.display()))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines)
        .with_context(|| format!("Invalid board in {}", path.display()))
}

fn read_board_stdin() -> Result<Board> {
    println!("Enter the initial state as 9 numbers (use 0 for the blank):");
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read board from stdin")?;
    let flat = input.split_whitespace().collect::<Vec<_>>().join(" ");
    board_from_str(&flat).context("Invalid board on stdin")
}

fn load_board(args: &Args) -> Result<Board> {
    if let Some(walk_len) = args.scramble {
        info!("Scrambling goal with {} moves (seed {})", walk_len, args.seed);
        return Ok(Board::scrambled(args.seed, walk_len));
    }
    if let Some(path) = &args.file {
        return read_board_file(path);
    }
    match &args.board {
        Some(text) => board_from_str(text).context("Invalid board argument"),
        None => read_board_stdin(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let board = load_board(&args)?;
    let config = SolverConfig {
        strategy: args.strategy,
        depth_ceiling: args.depth,
    };

    println!("Initial board state:\n{}\n", board);
    println!("Searching with {}...\n", config.strategy);

    match solve_with_config(&board, &config) {
        Ok(solution) => {
            println!("Goal state reached in {} moves!", solution.move_count());
            println!("States expanded: {}", solution.nodes_expanded);
            if !solution.moves.is_empty() {
                println!("Moves: {}", format_moves(&solution.moves));
                println!("Compact: {}", compact_moves(&solution.moves));
            }
            for (i, step) in solution.path.iter().enumerate() {
                println!("\nStep {}:\n{}", i, step);
            }
        }
        Err(SolveError::DepthCeilingReached { ceiling }) => {
            warn!("No solution within depth {}; retry with a larger --depth", ceiling);
            println!("No solution found within depth limit {}.", ceiling);
        }
        Err(e) => {
            println!("Could not solve the puzzle: {}", e);
        }
    }
    Ok(())
}
