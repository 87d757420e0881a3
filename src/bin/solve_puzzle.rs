use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{search_bounded, SolveError, MAX_DEPTH, MIN_DEPTH};
use eight_puzzle_solver::utils::board_from_str;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Depth ceiling for the bound escalation (2-20)
    #[clap(short, long)]
    depth: u32,

    /// Frontier-ranking heuristic: h1 (tile distance) or h2 (misplaced tiles)
    #[clap(short = 'H', long, default_value = "h1")]
    heuristic: Heuristic,

    /// Seed for random generation; ignored when a board file is given
    #[clap(long)]
    seed: Option<u64>,

    /// Path to a puzzle file (3 lines of 3 integers); omit for a random puzzle
    board_file: Option<PathBuf>,
}

fn load_board(args: &Args) -> Result<Board, String> {
    match &args.board_file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            board_from_str(&content).map_err(|e| format!("Invalid board format: {}", e))
        }
        None => Ok(match args.seed {
            Some(seed) => Board::new_random_with_seed(seed),
            None => Board::new_random(),
        }),
    }
}

fn main() {
    let args = Args::parse();

    if !(MIN_DEPTH..=MAX_DEPTH).contains(&args.depth) {
        eprintln!(
            "Invalid depth {}. The depth should be between {} and {}.",
            args.depth, MIN_DEPTH, MAX_DEPTH
        );
        std::process::exit(1);
    }

    let board = match load_board(&args) {
        Ok(board) => board,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    println!("Initial puzzle:\n{}\n", board);

    if !board.is_solvable() {
        println!("{}", SolveError::Unsolvable);
        return;
    }

    // The bound escalation lives out here so each attempt can be timed; the
    // engine itself holds no clocks.
    for bound in MIN_DEPTH..=args.depth {
        let start = Instant::now();
        let attempt = search_bounded(&board, args.heuristic, bound);
        let elapsed = start.elapsed();

        if let Some(path) = attempt.solution {
            println!(
                "Solution found at depth bound {} ({} moves):\n",
                bound,
                path.len() - 1
            );
            for (step, state) in path.iter().enumerate() {
                println!("Step {}:\n{}\n", step, state);
            }
            println!("Search cost: {}", attempt.expansions);
            println!("Time taken: {} ms", elapsed.as_millis());
            return;
        }
    }

    println!("{}", SolveError::BoundExhausted { ceiling: args.depth });
}
