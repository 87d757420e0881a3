use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{solve, MAX_DEPTH, MIN_DEPTH};
use eight_puzzle_solver::utils::{board_from_str, boards_from_batch_str};
use std::fs;
use std::io::{self, Write}; // For input/output

fn main() {
    println!("Welcome to the 8-puzzle solver!");

    loop {
        println!("---------------------");
        println!("[1] Solve a single puzzle");
        println!("[2] Solve puzzles from a batch file");
        println!("[3] Exit");

        match prompt("Choose an option: ").as_str() {
            "1" => solve_single(),
            "2" => solve_batch(),
            "3" => {
                println!("Exiting...");
                break;
            }
            other => println!("Invalid option '{}'. Please choose again.", other),
        }
    }
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    io::stdout().flush().unwrap(); // Ensure prompt is shown before input

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn solve_single() {
    let board = match read_single_board() {
        Some(board) => board,
        None => return,
    };

    println!("Initial puzzle:\n{}\n", board);

    let heuristic = match read_heuristic() {
        Some(heuristic) => heuristic,
        None => return,
    };
    let depth = match read_depth() {
        Some(depth) => depth,
        None => return,
    };

    match solve(&board, heuristic, depth) {
        Ok(solution) => {
            println!("\nSolution found at depth bound {}:", solution.bound);
            for (step, state) in solution.path.iter().enumerate() {
                println!("Step {}:\n{}\n", step, state);
            }
            println!("Moves: {}", solution.moves());
            println!("Search cost: {}", solution.expansions);
        }
        Err(error) => println!("{}", error),
    }
}

fn solve_batch() {
    let path = prompt("Enter the batch file path: ");
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(error) => {
            println!("Failed to read {}: {}", path, error);
            return;
        }
    };

    let boards = boards_from_batch_str(&content);
    if boards.is_empty() {
        println!("No valid puzzles found in the file.");
        return;
    }

    let heuristic = match read_heuristic() {
        Some(heuristic) => heuristic,
        None => return,
    };
    let depth = match read_depth() {
        Some(depth) => depth,
        None => return,
    };

    for (index, board) in boards.iter().enumerate() {
        println!("/////////////////////////////");
        println!("Solving puzzle {}\n{}\n", index + 1, board);

        match solve(board, heuristic, depth) {
            Ok(solution) => println!(
                "Solved in {} moves (search cost {}).\n",
                solution.moves(),
                solution.expansions
            ),
            Err(error) => println!("{}\n", error),
        }
    }
}

fn read_single_board() -> Option<Board> {
    println!("Select input method:\n[1] Random\n[2] Type it in");
    match prompt("Choose an option: ").as_str() {
        "1" => Some(Board::new_random()),
        "2" => {
            println!("Enter the puzzle, 3 rows of 3 space-separated integers:");
            let mut lines = Vec::new();
            for _ in 0..3 {
                lines.push(prompt(""));
            }
            match board_from_str(&lines.join("\n")) {
                Ok(board) => Some(board),
                Err(message) => {
                    println!("Invalid puzzle: {}", message);
                    None
                }
            }
        }
        other => {
            println!("Invalid option '{}'.", other);
            None
        }
    }
}

fn read_heuristic() -> Option<Heuristic> {
    println!("Select heuristic:\n[1] H1 (tile distance)\n[2] H2 (misplaced tiles)");
    match prompt("Choose an option: ").as_str() {
        "1" => Some(Heuristic::TileDistance),
        "2" => Some(Heuristic::MisplacedTiles),
        other => {
            println!("Invalid heuristic option '{}'.", other);
            None
        }
    }
}

fn read_depth() -> Option<u32> {
    let input = prompt(&format!(
        "Enter solution depth ({}-{}): ",
        MIN_DEPTH, MAX_DEPTH
    ));
    match input.parse::<u32>() {
        Ok(depth) if (MIN_DEPTH..=MAX_DEPTH).contains(&depth) => Some(depth),
        _ => {
            println!(
                "Invalid depth. The depth should be between {} and {}.",
                MIN_DEPTH, MAX_DEPTH
            );
            None
        }
    }
}
