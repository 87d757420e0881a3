//! # Eight Puzzle Solver Library
//!
//! This library solves the 8-puzzle (3x3 sliding tile puzzle) with a
//! depth-bounded best-first search and a selectable ranking heuristic.
//!
//! It is used by three binaries:
//! - `solve_puzzle`: solves a single puzzle read from a file or generated
//!   randomly, printing the step-by-step solution and the search cost.
//! - `batch_solver`: solves a stream of puzzles and reports aggregate
//!   search-cost and timing statistics.
//! - `interactive`: a menu-driven front end for trying puzzles by hand.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), adjacency generation,
//!   the solvability parity check, and random board generation.
//! - `heuristics`: the two frontier-ranking estimates (`Heuristic`).
//! - `solver`: the depth-bounded search engine, the bound-escalation driver,
//!   and the error taxonomy (`SolveError`).
//! - `utils`: parsing of the single-puzzle and batch text formats.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, are accessed via their full path,
// e.g. `eight_puzzle_solver::solver::solve`. This keeps the top-level
// library namespace cleaner.
