use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::solver::{solve_with_config, SolverConfig, Strategy};
use eight_puzzle_solver::SolveError;
use log::{info, warn};
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare search strategies on random scrambles", long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first board; later boards use consecutive seeds
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Random moves applied to the goal for each board
    #[clap(short, long, default_value_t = 30)]
    walk: usize,

    /// Depth ceiling for iterative deepening (kept low: IDDFS is exponential in depth)
    #[clap(short, long, default_value_t = 12)]
    depth: u32,
}

#[derive(Default)]
struct Tally {
    solved: usize,
    total_moves: usize,
    total_expanded: usize,
    ceiling_hits: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut tallies: HashMap<Strategy, Tally> = HashMap::new();
    info!("Starting strategy evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx as u64;
        let board = Board::scrambled(seed, args.walk);
        println!("\nEvaluating Board {} (Seed: {})\n{}", board_idx, seed, board);

        for strategy in Strategy::ALL {
            let config = SolverConfig {
                strategy,
                depth_ceiling: args.depth,
            };
            let tally = tallies.entry(strategy).or_default();
            match solve_with_config(&board, &config) {
                Ok(solution) => {
                    println!(
                        "  Strategy: {:<8} Moves: {:<4} Expanded: {}",
                        strategy.to_string(),
                        solution.move_count(),
                        solution.nodes_expanded
                    );
                    tally.solved += 1;
                    tally.total_moves += solution.move_count();
                    tally.total_expanded += solution.nodes_expanded;
                }
                Err(SolveError::DepthCeilingReached { ceiling }) => {
                    println!("  Strategy: {:<8} no solution within depth {}", strategy.to_string(), ceiling);
                    tally.ceiling_hits += 1;
                }
                Err(e) => {
                    warn!("{} failed on board {} (seed {}): {}", strategy, board_idx, seed, e);
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages over solved boards ---");

    let mut rows: Vec<(Strategy, f64, f64, &Tally)> = Strategy::ALL
        .iter()
        .filter_map(|s| tallies.get(s).map(|t| (*s, t)))
        .filter(|(_, t)| t.solved > 0)
        .map(|(s, t)| {
            let n = t.solved as f64;
            (s, t.total_moves as f64 / n, t.total_expanded as f64 / n, t)
        })
        .collect();

    // Fewest states expanded first.
    rows.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

    for (strategy, avg_moves, avg_expanded, tally) in rows {
        println!(
            "Strategy {:<8}: Avg Moves = {:.2}, Avg Expanded = {:.1}, Solved = {}, Ceiling hits = {}",
            strategy.to_string(),
            avg_moves,
            avg_expanded,
            tally.solved,
            tally.ceiling_hits
        );
    }
}
