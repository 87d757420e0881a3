//! Parsing helpers for the puzzle text formats.
//!
//! Two formats feed the solver:
//! - a single puzzle: three lines of three whitespace-separated integers;
//! - a batch stream: puzzle blocks separated by lines of repeated `/`
//!   characters, where malformed blocks are skipped rather than failing
//!   the whole stream.

use crate::engine::{Board, BOARD_SIZE};

/// Parses a single 3x3 puzzle from text.
///
/// Blank lines and surrounding whitespace are ignored; what remains must be
/// exactly three lines of three whitespace-separated integers forming a
/// permutation of 0-8 (grid validation is delegated to
/// [`Board::from_grid`]).
///
/// # Arguments
/// * `s`: The puzzle text, e.g. the contents of a puzzle file.
///
/// # Returns
/// * `Ok(Board)` when the text describes a valid puzzle.
/// * `Err(String)` naming the first problem found: wrong row count, a row
///   that is not three integers, or an invalid grid.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("1 2 0\n3 4 5\n6 7 8").unwrap();
/// assert_eq!(board.blank_pos(), (0, 2));
///
/// assert!(board_from_str("1 2\n3 4 5\n6 7 8").is_err());
/// assert!(board_from_str("1 2 0\n3 4 5").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, String> {
    let lines: Vec<&str> = s
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() != BOARD_SIZE {
        return Err(format!(
            "Expected {} rows, found {}",
            BOARD_SIZE,
            lines.len()
        ));
    }

    let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (r, line) in lines.iter().enumerate() {
        grid[r] = parse_row(line)
            .ok_or_else(|| format!("Row {} is not {} integers: '{}'", r, BOARD_SIZE, line))?;
    }
    Board::from_grid(grid)
}

/// Reads a batch stream of puzzles.
///
/// Blocks are separated by lines consisting solely of repeated `/`
/// characters. A block yields a puzzle only when it contains exactly three
/// lines that each parse as three integers and the grid passes validation;
/// any other block is skipped, so one bad entry cannot abort a batch.
/// Lines that are neither separators nor three integers are ignored.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::boards_from_batch_str;
///
/// let stream = "1 2 0\n3 4 5\n6 7 8\n/////////\n0 1 2\n3 4 5\n6 7 8\n";
/// let boards = boards_from_batch_str(stream);
/// assert_eq!(boards.len(), 2);
/// assert!(boards[1].is_goal());
/// ```
pub fn boards_from_batch_str(s: &str) -> Vec<Board> {
    let mut boards = Vec::new();
    let mut block: Vec<[u8; BOARD_SIZE]> = Vec::new();

    for line in s.lines().map(str::trim) {
        if is_separator(line) {
            flush_block(&mut boards, &mut block);
        } else if let Some(row) = parse_row(line) {
            block.push(row);
        }
    }
    flush_block(&mut boards, &mut block);

    boards
}

/// Parses one row of exactly `BOARD_SIZE` whitespace-separated integers.
fn parse_row(line: &str) -> Option<[u8; BOARD_SIZE]> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != BOARD_SIZE {
        return None;
    }

    let mut row = [0u8; BOARD_SIZE];
    for (c, field) in fields.iter().enumerate() {
        row[c] = field.parse().ok()?;
    }
    Some(row)
}

/// A separator is a non-empty line of nothing but `/` characters.
fn is_separator(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|ch| ch == '/')
}

/// Ends the current block: a block of exactly three valid rows that form a
/// valid grid becomes a board, anything else is dropped.
fn flush_block(boards: &mut Vec<Board>, block: &mut Vec<[u8; BOARD_SIZE]>) {
    if block.len() == BOARD_SIZE {
        let grid = [block[0], block[1], block[2]];
        if let Ok(board) = Board::from_grid(grid) {
            boards.push(board);
        }
    }
    block.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_valid() {
        let board = board_from_str("1 2 0\n3 4 5\n6 7 8").unwrap();
        assert_eq!(board.blank_pos(), (0, 2));
        assert_eq!(board.tile(1, 0), 3);
    }

    #[test]
    fn test_board_from_str_ignores_blank_lines() {
        let board = board_from_str("\n0 1 2\n\n3 4 5\n6 7 8\n\n").unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_board_from_str_wrong_row_count() {
        let result = board_from_str("1 2 0\n3 4 5");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Expected 3 rows"));
    }

    #[test]
    fn test_board_from_str_short_row() {
        let result = board_from_str("1 2\n3 4 5\n6 7 8");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 0"));
    }

    #[test]
    fn test_board_from_str_non_numeric() {
        assert!(board_from_str("1 2 x\n3 4 5\n6 7 8").is_err());
    }

    #[test]
    fn test_board_from_str_invalid_grid() {
        let result = board_from_str("1 2 0\n3 4 5\n6 7 7");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate tile value"));
    }

    #[test]
    fn test_batch_two_blocks() {
        let stream = "1 2 0\n3 4 5\n6 7 8\n/////////////////////////////\n0 1 2\n3 4 5\n6 7 8\n";
        let boards = boards_from_batch_str(stream);
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].blank_pos(), (0, 2));
        assert!(boards[1].is_goal());
    }

    #[test]
    fn test_batch_skips_malformed_blocks() {
        // Middle block has only two valid rows.
        let stream = "1 2 0\n3 4 5\n6 7 8\n///\n1 2 3\n4 5 6\n///\n0 1 2\n3 4 5\n6 7 8\n";
        let boards = boards_from_batch_str(stream);
        assert_eq!(boards.len(), 2);
        assert!(boards[1].is_goal());
    }

    #[test]
    fn test_batch_skips_invalid_grids() {
        // First block repeats a value, second is out of range.
        let stream = "1 2 0\n3 4 5\n6 7 7\n///\n10 11 12\n3 4 5\n6 7 8\n///\n0 1 2\n3 4 5\n6 7 8\n";
        let boards = boards_from_batch_str(stream);
        assert_eq!(boards.len(), 1);
        assert!(boards[0].is_goal());
    }

    #[test]
    fn test_batch_ignores_junk_lines() {
        let stream = "puzzle one\n1 2 0\n3 4 5\n6 7 8\n";
        let boards = boards_from_batch_str(stream);
        assert_eq!(boards.len(), 1);
    }

    #[test]
    fn test_batch_extra_rows_invalidate_block() {
        let stream = "0 1 2\n3 4 5\n6 7 8\n6 7 8\n";
        assert!(boards_from_batch_str(stream).is_empty());
    }

    #[test]
    fn test_batch_leading_and_trailing_separators() {
        let stream = "///\n0 1 2\n3 4 5\n6 7 8\n///\n";
        let boards = boards_from_batch_str(stream);
        assert_eq!(boards.len(), 1);
    }

    #[test]
    fn test_batch_empty_input() {
        assert!(boards_from_batch_str("").is_empty());
    }
}
