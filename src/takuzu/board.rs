//! Takuzu board representation with incrementally maintained constraint state

use super::rules::TakuzuRules;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use thiserror::Error;

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Zero,
    One,
    Unset,
}

impl Cell {
    /// The two placeable values
    pub const VALUES: [Cell; 2] = [Cell::Zero, Cell::One];

    /// Parse a cell from its textual digit (2 means unset)
    pub fn from_digit(digit: u32) -> Option<Self> {
        match digit {
            0 => Some(Cell::Zero),
            1 => Some(Cell::One),
            2 => Some(Cell::Unset),
            _ => None,
        }
    }

    /// The textual digit for this cell (2 for unset)
    pub fn to_digit(self) -> u32 {
        match self {
            Cell::Zero => 0,
            Cell::One => 1,
            Cell::Unset => 2,
        }
    }

    /// Whether the cell holds a determined value
    pub fn is_set(self) -> bool {
        self != Cell::Unset
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_digit())
    }
}

/// The set of values still legal at an unset cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Candidates {
    bits: u8,
}

impl Candidates {
    pub const EMPTY: Candidates = Candidates { bits: 0 };

    fn bit(value: Cell) -> u8 {
        match value {
            Cell::Zero => 0b01,
            Cell::One => 0b10,
            Cell::Unset => 0,
        }
    }

    pub fn contains(self, value: Cell) -> bool {
        let bit = Self::bit(value);
        bit != 0 && self.bits & bit != 0
    }

    pub fn insert(&mut self, value: Cell) {
        self.bits |= Self::bit(value);
    }

    pub fn count(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate the contained values, Zero before One
    pub fn values(self) -> impl Iterator<Item = Cell> {
        Cell::VALUES.into_iter().filter(move |&v| self.contains(v))
    }

    /// The single remaining value, if the cell is forced
    pub fn sole(self) -> Option<Cell> {
        if self.count() == 1 {
            self.values().next()
        } else {
            None
        }
    }
}

/// Determined-value counts for one row or column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounts {
    pub zeros: usize,
    pub ones: usize,
}

impl LineCounts {
    /// Count of the given value in this line
    pub fn of(self, value: Cell) -> usize {
        match value {
            Cell::Zero => self.zeros,
            Cell::One => self.ones,
            Cell::Unset => 0,
        }
    }

    pub fn total(self) -> usize {
        self.zeros + self.ones
    }

    fn bump(&mut self, value: Cell) {
        match value {
            Cell::Zero => self.zeros += 1,
            Cell::One => self.ones += 1,
            Cell::Unset => {}
        }
    }
}

/// Errors raised by board construction and placement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,
    #[error("board size {0} is odd; only even sizes are supported")]
    OddSize(usize),
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cell ({row}, {col}) has no legal value in the initial grid")]
    Contradiction { row: usize, col: usize },
    #[error("{axis} {index} is complete but holds {zeros} zeros and {ones} ones")]
    UnbalancedLine {
        axis: &'static str,
        index: usize,
        zeros: usize,
        ones: usize,
    },
    #[error("{axis} {index} duplicates an earlier completed {axis}")]
    DuplicateLine { axis: &'static str, index: usize },
    #[error("{axis} {index} holds three consecutive equal values")]
    TripleInLine { axis: &'static str, index: usize },
    #[error("value {value} is not a legal candidate at ({row}, {col})")]
    IllegalPlacement { row: usize, col: usize, value: Cell },
}

/// An immutable-per-version Takuzu board.
///
/// Every derived field (line counts, completed-line sets, candidate table,
/// open-cell queue) is kept exactly in sync with the grid: `from_cells`
/// computes them from scratch, `place` produces a patched copy and leaves
/// the original untouched, so boards can be shared freely across a search
/// frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    row_counts: Vec<LineCounts>,
    col_counts: Vec<LineCounts>,
    complete_rows: HashSet<Vec<Cell>>,
    complete_cols: HashSet<Vec<Cell>>,
    candidates: Vec<Candidates>,
    open_cells: VecDeque<(usize, usize)>,
}

impl Board {
    /// Build a board from parsed rows, computing all derived state.
    ///
    /// Cells with a single legal value go to the front of the open queue,
    /// cells with two to the back, so the most constrained cell is always
    /// branched on first.
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        if size % 2 != 0 {
            return Err(BoardError::OddSize(size));
        }
        for (row, line) in rows.iter().enumerate() {
            if line.len() != size {
                return Err(BoardError::Ragged {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }
        }

        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        let mut board = Self {
            size,
            cells,
            row_counts: vec![LineCounts::default(); size],
            col_counts: vec![LineCounts::default(); size],
            complete_rows: HashSet::new(),
            complete_cols: HashSet::new(),
            candidates: vec![Candidates::EMPTY; size * size],
            open_cells: VecDeque::new(),
        };

        for row in 0..size {
            for col in 0..size {
                let value = board.get(row, col);
                board.row_counts[row].bump(value);
                board.col_counts[col].bump(value);
            }
        }

        board.check_determined_lines()?;

        for row in 0..size {
            if board.row_counts[row].total() == size
                && !board.complete_rows.insert(board.row_cells(row))
            {
                return Err(BoardError::DuplicateLine {
                    axis: "row",
                    index: row,
                });
            }
        }
        for col in 0..size {
            if board.col_counts[col].total() == size
                && !board.complete_cols.insert(board.col_cells(col))
            {
                return Err(BoardError::DuplicateLine {
                    axis: "column",
                    index: col,
                });
            }
        }

        for row in 0..size {
            for col in 0..size {
                if board.get(row, col).is_set() {
                    continue;
                }
                let legal = TakuzuRules::legal_values(&board, row, col);
                if legal.is_empty() {
                    return Err(BoardError::Contradiction { row, col });
                }
                board.candidates[row * size + col] = legal;
                if legal.count() == 1 {
                    board.open_cells.push_front((row, col));
                } else {
                    board.open_cells.push_back((row, col));
                }
            }
        }

        Ok(board)
    }

    /// A fully unset board of the given (even) size
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        Self::from_cells(vec![vec![Cell::Unset; size]; size])
    }

    /// Reject determined-cell rule violations in the bootstrap grid
    fn check_determined_lines(&self) -> Result<(), BoardError> {
        for row in 0..self.size {
            let line = self.row_cells(row);
            if self.row_counts[row].total() == self.size && self.row_counts[row].zeros != self.size / 2
            {
                return Err(BoardError::UnbalancedLine {
                    axis: "row",
                    index: row,
                    zeros: self.row_counts[row].zeros,
                    ones: self.row_counts[row].ones,
                });
            }
            if TakuzuRules::line_has_triple(&line) {
                return Err(BoardError::TripleInLine {
                    axis: "row",
                    index: row,
                });
            }
        }
        for col in 0..self.size {
            let line = self.col_cells(col);
            if self.col_counts[col].total() == self.size && self.col_counts[col].zeros != self.size / 2
            {
                return Err(BoardError::UnbalancedLine {
                    axis: "column",
                    index: col,
                    zeros: self.col_counts[col].zeros,
                    ones: self.col_counts[col].ones,
                });
            }
            if TakuzuRules::line_has_triple(&line) {
                return Err(BoardError::TripleInLine {
                    axis: "column",
                    index: col,
                });
            }
        }
        Ok(())
    }

    /// Place a value at an unset cell, producing the successor board.
    ///
    /// The value must be a member of the cell's candidate set; anything
    /// else is a caller bug and reported as `IllegalPlacement`. Candidate
    /// sets are recomputed only for the open cells whose legality can have
    /// changed, and a cell whose candidate count drops from two to one is
    /// promoted to the front of the open queue.
    pub fn place(&self, row: usize, col: usize, value: Cell) -> Result<Self, BoardError> {
        let idx = row * self.size + col;
        if !value.is_set() || !self.candidates[idx].contains(value) {
            return Err(BoardError::IllegalPlacement { row, col, value });
        }

        let mut next = self.clone();
        next.cells[idx] = value;
        next.candidates[idx] = Candidates::EMPTY;
        next.row_counts[row].bump(value);
        next.col_counts[col].bump(value);

        if let Some(pos) = next.open_cells.iter().position(|&rc| rc == (row, col)) {
            next.open_cells.remove(pos);
        }

        // A line completed by this placement becomes visible to the
        // uniqueness checks of every cell recomputed below.
        let row_completed = next.row_counts[row].total() == next.size;
        let col_completed = next.col_counts[col].total() == next.size;
        if row_completed {
            let line = next.row_cells(row);
            next.complete_rows.insert(line);
        }
        if col_completed {
            let line = next.col_cells(col);
            next.complete_cols.insert(line);
        }

        // Cells sharing the placed row or column, plus - when a line just
        // completed - the last open cell of any parallel line one step from
        // completing, whose uniqueness legality can have changed.
        let mut affected: Vec<(usize, usize)> = next
            .open_cells
            .iter()
            .filter(|&&(r, c)| {
                r == row
                    || c == col
                    || (row_completed && next.row_counts[r].total() == next.size - 1)
                    || (col_completed && next.col_counts[c].total() == next.size - 1)
            })
            .copied()
            .collect();
        affected.sort_unstable();
        affected.dedup();

        for (r, c) in affected {
            let fresh = TakuzuRules::legal_values(&next, r, c);
            let i = r * next.size + c;
            let old = next.candidates[i];
            next.candidates[i] = fresh;
            if old.count() == 2 && fresh.count() == 1 {
                if let Some(pos) = next.open_cells.iter().position(|&rc| rc == (r, c)) {
                    next.open_cells.remove(pos);
                    next.open_cells.push_front((r, c));
                }
            }
        }

        Ok(next)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at the given coordinates
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Number of cells still unset
    pub fn remaining(&self) -> usize {
        self.open_cells.len()
    }

    pub fn is_complete(&self) -> bool {
        self.open_cells.is_empty()
    }

    /// The most constrained open cell, if any
    pub fn next_open_cell(&self) -> Option<(usize, usize)> {
        self.open_cells.front().copied()
    }

    /// All open cells in queue order
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.open_cells.iter().copied()
    }

    /// Candidate set at the given coordinates (empty for determined cells)
    pub fn candidates_at(&self, row: usize, col: usize) -> Candidates {
        self.candidates[row * self.size + col]
    }

    pub fn row_counts(&self, row: usize) -> LineCounts {
        self.row_counts[row]
    }

    pub fn col_counts(&self, col: usize) -> LineCounts {
        self.col_counts[col]
    }

    pub fn complete_rows(&self) -> &HashSet<Vec<Cell>> {
        &self.complete_rows
    }

    pub fn complete_cols(&self) -> &HashSet<Vec<Cell>> {
        &self.complete_cols
    }

    /// The cells of one row, left to right
    pub fn row_cells(&self, row: usize) -> Vec<Cell> {
        self.cells[row * self.size..(row + 1) * self.size].to_vec()
    }

    /// The cells of one column, top to bottom
    pub fn col_cells(&self, col: usize) -> Vec<Cell> {
        (0..self.size).map(|row| self.get(row, col)).collect()
    }

    /// The grid as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.size).map(|row| self.row_cells(row)).collect()
    }

    /// Whether any open cell has run out of candidates
    pub fn has_dead_end(&self) -> bool {
        self.open_cells
            .iter()
            .any(|&(r, c)| self.candidates_at(r, c).is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
