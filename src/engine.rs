//! Core board representation for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental component:
//! - `Board`: the 3x3 tile grid with its cached blank position, adjacency
//!   generation (sliding the blank), the goal check, and the inversion-parity
//!   solvability check.
//!
//! Random board generation comes in a seeded flavour (reproducible, used by
//! tests and batch runs) and an unseeded one (a fresh shuffle per call).

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};
use std::fmt;

/// Width and height of the puzzle grid. The board is always 3x3.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, blank included.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The solved configuration: `0 1 2 / 3 4 5 / 6 7 8`, blank in the top-left.
const GOAL_GRID: [[u8; BOARD_SIZE]; BOARD_SIZE] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// A single 8-puzzle configuration.
///
/// The grid holds the values 0-8 exactly once each, with 0 standing for the
/// blank. The blank's coordinates are cached alongside the grid so move
/// generation never has to scan for it; the cache is kept consistent by
/// every constructor, which also makes the derived `PartialEq`/`Hash` agree
/// with plain cell-wise grid equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
    blank: (usize, usize),
}

impl Board {
    /// Returns the solved board.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let goal = Board::goal();
    /// assert!(goal.is_goal());
    /// assert_eq!(goal.blank_pos(), (0, 0));
    /// ```
    pub fn goal() -> Self {
        Board {
            grid: GOAL_GRID,
            blank: (0, 0),
        }
    }

    /// Builds a board from a raw grid, validating the puzzle invariant.
    ///
    /// This is the only constructor that accepts external data: every value
    /// must lie in 0-8 and appear exactly once, which also guarantees a
    /// single blank.
    ///
    /// # Arguments
    /// * `grid`: The candidate 3x3 grid, row-major.
    ///
    /// # Returns
    /// * `Ok(Board)` when the grid is a permutation of 0-8.
    /// * `Err(String)` describing the first out-of-range or duplicate value
    ///   encountered.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    ///
    /// let board = Board::from_grid([[1, 2, 0], [3, 4, 5], [6, 7, 8]]).unwrap();
    /// assert_eq!(board.blank_pos(), (0, 2));
    ///
    /// assert!(Board::from_grid([[1, 1, 2], [3, 4, 5], [6, 7, 8]]).is_err());
    /// assert!(Board::from_grid([[9, 1, 2], [3, 4, 5], [6, 7, 8]]).is_err());
    /// ```
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, String> {
        let mut seen = [false; CELL_COUNT];
        let mut blank = None;

        for (r, row) in grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value as usize >= CELL_COUNT {
                    return Err(format!(
                        "Tile value {} at ({}, {}) is out of range 0-{}",
                        value,
                        r,
                        c,
                        CELL_COUNT - 1
                    ));
                }
                if seen[value as usize] {
                    return Err(format!("Duplicate tile value {} at ({}, {})", value, r, c));
                }
                seen[value as usize] = true;
                if value == 0 {
                    blank = Some((r, c));
                }
            }
        }

        // Nine distinct in-range values always include the blank.
        let blank = blank.expect("a validated grid contains the blank");
        Ok(Board { grid, blank })
    }

    /// Builds a uniformly random board from a seeded generator.
    ///
    /// The same seed always produces the same board, which keeps batch runs
    /// and tests reproducible. Like the shuffle it models, the permutation
    /// may well be unsolvable; callers report that case distinctly.
    pub fn new_random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Builds a uniformly random board from the thread-local generator.
    pub fn new_random() -> Self {
        Self::shuffled(&mut thread_rng())
    }

    fn shuffled(rng: &mut impl Rng) -> Self {
        let mut values: [u8; CELL_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        values.shuffle(rng);

        let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        let mut blank = (0, 0);
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let value = values[r * BOARD_SIZE + c];
                grid[r][c] = value;
                if value == 0 {
                    blank = (r, c);
                }
            }
        }
        Board { grid, blank }
    }

    /// Returns the tile at row `r`, column `c` (0 = blank).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns an immutable reference to the underlying grid.
    pub fn grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Returns the cached `(row, column)` of the blank.
    pub fn blank_pos(&self) -> (usize, usize) {
        self.blank
    }

    /// Whether this board is the solved configuration.
    pub fn is_goal(&self) -> bool {
        self.grid == GOAL_GRID
    }

    /// Generates every board reachable by one slide of the blank.
    ///
    /// The blank is swapped with the neighbouring tile above, below, left of
    /// and right of it; candidates whose target falls outside the grid are
    /// dropped, so the result holds between two boards (blank in a corner)
    /// and four (blank in the centre). The receiver is never modified.
    pub fn successors(&self) -> Vec<Board> {
        let dr = [-1isize, 1, 0, 0]; // Delta for row (up, down)
        let dc = [0isize, 0, -1, 1]; // Delta for column (left, right)

        let mut next = Vec::with_capacity(4);
        for i in 0..4 {
            let nr_signed = self.blank.0 as isize + dr[i];
            let nc_signed = self.blank.1 as isize + dc[i];

            if nr_signed >= 0
                && nr_signed < BOARD_SIZE as isize
                && nc_signed >= 0
                && nc_signed < BOARD_SIZE as isize
            {
                let nr = nr_signed as usize;
                let nc = nc_signed as usize;

                let mut grid = self.grid;
                grid[self.blank.0][self.blank.1] = grid[nr][nc];
                grid[nr][nc] = 0;
                next.push(Board {
                    grid,
                    blank: (nr, nc),
                });
            }
        }
        next
    }

    /// Whether any sequence of slides can reach the goal from this board.
    ///
    /// Flattens the grid row-major and counts inversions among the non-blank
    /// values; the board is solvable iff that count is even. The goal itself
    /// has zero inversions, and on an odd-width board every legal slide
    /// preserves inversion parity, so parity separates the reachable half of
    /// the configurations from the unreachable half.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    ///
    /// assert!(Board::goal().is_solvable());
    /// // Goal with tiles 7 and 8 swapped: one inversion, unreachable.
    /// let swapped = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 8, 7]]).unwrap();
    /// assert!(!swapped.is_solvable());
    /// ```
    pub fn is_solvable(&self) -> bool {
        self.count_inversions() % 2 == 0
    }

    fn count_inversions(&self) -> usize {
        let flat: Vec<u8> = self
            .grid
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect();

        flat.iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                flat[i + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < value)
                    .count()
            })
            .sum()
    }
}

impl fmt::Display for Board {
    /// Formats the board as three rows of space-separated digits, the blank
    /// printed as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", value)?;
            }
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_board() {
        let goal = Board::goal();
        assert!(goal.is_goal());
        assert_eq!(goal.blank_pos(), (0, 0));
        assert_eq!(goal.tile(2, 2), 8);
        assert!(goal.is_solvable());
    }

    #[test]
    fn test_from_grid_valid() {
        let board = Board::from_grid([[1, 2, 0], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert_eq!(board.blank_pos(), (0, 2));
        assert_eq!(board.tile(0, 0), 1);
        assert!(!board.is_goal());
    }

    #[test]
    fn test_from_grid_duplicate_value() {
        let result = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 7, 7]]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate tile value 7"));
    }

    #[test]
    fn test_from_grid_out_of_range_value() {
        let result = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 7, 9]]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("out of range"));
    }

    #[test]
    fn test_successor_counts_by_blank_position() {
        // Corner blank: two slides.
        assert_eq!(Board::goal().successors().len(), 2);

        // Edge blank: three slides.
        let edge = Board::from_grid([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert_eq!(edge.successors().len(), 3);

        // Centre blank: four slides.
        let centre = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        assert_eq!(centre.successors().len(), 4);
    }

    #[test]
    fn test_successors_of_goal() {
        let successors = Board::goal().successors();
        let below = Board::from_grid([[3, 1, 2], [0, 4, 5], [6, 7, 8]]).unwrap();
        let right = Board::from_grid([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert!(successors.contains(&below));
        assert!(successors.contains(&right));
    }

    #[test]
    fn test_successor_blank_cache_matches_grid() {
        let start = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        for successor in start.successors() {
            let (r, c) = successor.blank_pos();
            assert_eq!(successor.tile(r, c), 0);
        }
    }

    #[test]
    fn test_slides_are_reversible() {
        let start = Board::from_grid([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        for successor in start.successors() {
            assert!(successor.successors().contains(&start));
        }
    }

    #[test]
    fn test_solvability_parity() {
        // Two slides from the goal, zero inversions.
        let near_goal = Board::from_grid([[1, 2, 0], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert!(near_goal.is_solvable());

        // Swapping two non-blank tiles flips parity.
        let swapped = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 8, 7]]).unwrap();
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn test_every_slide_preserves_solvability() {
        let start = Board::from_grid([[1, 4, 0], [3, 5, 2], [6, 7, 8]]).unwrap();
        assert!(start.is_solvable());
        for successor in start.successors() {
            assert!(successor.is_solvable());
        }
    }

    #[test]
    fn test_seeded_random_is_deterministic() {
        let first = Board::new_random_with_seed(514514);
        let second = Board::new_random_with_seed(514514);
        assert_eq!(first, second);

        // The seed actually feeds the shuffle: different seeds do not all
        // collapse onto one permutation.
        let distinct: std::collections::HashSet<Board> =
            (0..10).map(Board::new_random_with_seed).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_random_boards_are_valid_permutations() {
        for seed in 0..20 {
            let board = Board::new_random_with_seed(seed);
            assert!(Board::from_grid(*board.grid()).is_ok());
            let (r, c) = board.blank_pos();
            assert_eq!(board.tile(r, c), 0);
        }
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Board::goal().to_string(), "0 1 2\n3 4 5\n6 7 8");
    }
}
