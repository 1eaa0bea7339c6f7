//! File I/O for the Takuzu textual grid format
//!
//! A puzzle file is a size line followed by that many rows of
//! tab-separated digits: `0`, `1`, or `2` for an unset cell.

use super::board::{Board, Cell};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a board from a puzzle file
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read puzzle file: {}", path.as_ref().display()))?;

    parse_board_from_string(&content)
        .with_context(|| format!("Failed to parse puzzle file: {}", path.as_ref().display()))
}

/// Parse a board from its textual representation
pub fn parse_board_from_string(content: &str) -> Result<Board> {
    let mut lines = content.lines().map(str::trim_end).filter(|l| !l.is_empty());

    let size: usize = lines
        .next()
        .context("Puzzle is empty")?
        .trim()
        .parse()
        .context("First line must be the board size")?;

    let mut rows = Vec::with_capacity(size);
    for row_idx in 0..size {
        let line = lines
            .next()
            .with_context(|| format!("Expected {} rows, found {}", size, row_idx))?;

        let mut row = Vec::with_capacity(size);
        for (col_idx, token) in line.split('\t').enumerate() {
            let digit: u32 = token.trim().parse().with_context(|| {
                format!("Invalid token {:?} at ({}, {})", token, row_idx, col_idx)
            })?;
            let cell = Cell::from_digit(digit).with_context(|| {
                format!(
                    "Invalid digit {} at ({}, {}); only 0, 1 and 2 are allowed",
                    digit, row_idx, col_idx
                )
            })?;
            row.push(cell);
        }
        rows.push(row);
    }

    Ok(Board::from_cells(rows)?)
}

/// Render rows of cells in the tab-separated grid format
pub fn rows_to_string(rows: &[Vec<Cell>]) -> String {
    let mut result = String::new();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                result.push('\t');
            }
            result.push_str(&cell.to_digit().to_string());
        }
        result.push('\n');
    }
    result
}

/// Render rows with the size header line prepended
pub fn rows_to_string_with_header(rows: &[Vec<Cell>]) -> String {
    format!("{}\n{}", rows.len(), rows_to_string(rows))
}

/// Save a board (with size header) to a puzzle file
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    let content = rows_to_string_with_header(&board.to_rows());

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write puzzle to: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create a few example puzzle files for testing and setup
pub fn create_example_puzzles<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // One forced cell in the first row, the rest wide open
    let example = "4\n0\t0\t2\t1\n2\t2\t2\t2\n2\t2\t2\t2\n2\t2\t2\t2\n";
    std::fs::write(dir.join("example.txt"), example).context("Failed to write example.txt")?;

    // The smallest interesting board
    let tiny = "2\n0\t2\n2\t2\n";
    std::fs::write(dir.join("tiny.txt"), tiny).context("Failed to write tiny.txt")?;

    // A partially filled 6x6 instance
    let medium = "6\n2\t2\t0\t2\t2\t0\n2\t0\t2\t2\t1\t2\n0\t2\t2\t1\t2\t2\n\
                  2\t2\t1\t2\t2\t2\n2\t1\t2\t2\t0\t2\n1\t2\t2\t0\t2\t2\n";
    std::fs::write(dir.join("medium.txt"), medium).context("Failed to write medium.txt")?;

    Ok(())
}
