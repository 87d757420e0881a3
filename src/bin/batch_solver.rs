use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{search_bounded, MAX_DEPTH, MIN_DEPTH};
use eight_puzzle_solver::utils::boards_from_batch_str;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Depth ceiling applied to every puzzle (2-20)
    #[clap(short, long)]
    depth: u32,

    /// Frontier-ranking heuristic: h1 (tile distance) or h2 (misplaced tiles)
    #[clap(short = 'H', long, default_value = "h1")]
    heuristic: Heuristic,

    /// Solve this many random puzzles instead of reading a file
    #[clap(long, conflicts_with = "board_file")]
    random: Option<usize>,

    /// Seed for the first random puzzle; later puzzles use consecutive seeds
    #[clap(long, requires = "random")]
    seed: Option<u64>,

    /// Path to a batch file of puzzles separated by `///...` lines
    #[clap(required_unless_present = "random")]
    board_file: Option<PathBuf>,
}

fn gather_boards(args: &Args) -> Result<Vec<Board>, String> {
    if let Some(count) = args.random {
        let boards = match args.seed {
            Some(seed) => (0..count)
                .map(|i| Board::new_random_with_seed(seed + i as u64))
                .collect(),
            None => (0..count).map(|_| Board::new_random()).collect(),
        };
        return Ok(boards);
    }

    // clap guarantees a file is present when --random is absent.
    let path = args
        .board_file
        .as_ref()
        .expect("clap enforces file-or-random");
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    Ok(boards_from_batch_str(&content))
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

    let boards = match gather_boards(&args) {
        Ok(boards) => boards,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };
    if boards.is_empty() {
        println!("No valid puzzles found.");
        return;
    }

    let mut solved = 0usize;
    let mut total_cost: u64 = 0;
    let mut total_time = Duration::ZERO;

    for (index, board) in boards.iter().enumerate() {
        println!("/////////////////////////////");
        println!("Solving puzzle {}\n{}\n", index + 1, board);

        if !board.is_solvable() {
            println!("Puzzle is not solvable.\n");
            continue;
        }

        let mut outcome = None;
        for bound in MIN_DEPTH..=args.depth {
            let start = Instant::now();
            let attempt = search_bounded(board, args.heuristic, bound);
            let elapsed = start.elapsed();
            if let Some(path) = attempt.solution {
                outcome = Some((path, attempt.expansions, elapsed));
                break;
            }
        }

        match outcome {
            Some((path, expansions, elapsed)) => {
                println!("Solved in {} moves.", path.len() - 1);
                println!("Search cost: {}", expansions);
                println!("Time taken: {} ms\n", elapsed.as_millis());
                solved += 1;
                total_cost += u64::from(expansions);
                total_time += elapsed;
            }
            None => println!("No solution found within depth {}.\n", args.depth),
        }
    }

    if solved > 0 {
        println!("------------------------");
        println!("Puzzles solved: {}/{}", solved, boards.len());
        println!(
            "Average search cost: {:.2}",
            total_cost as f64 / solved as f64
        );
        println!(
            "Average time taken: {:.2} ms",
            total_time.as_secs_f64() * 1000.0 / solved as f64
        );
    } else {
        println!("No puzzles were solved.");
    }
}
