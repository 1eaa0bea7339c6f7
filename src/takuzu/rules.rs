//! Takuzu rule predicates
//!
//! Pure legality checks for candidate values against the current board,
//! plus whole-grid checks used to validate finished solutions
//! independently of the incremental machinery.

use super::board::{Board, Candidates, Cell};
use itertools::Itertools;
use std::collections::HashSet;

/// Takuzu rules engine
pub struct TakuzuRules;

impl TakuzuRules {
    /// The set of values passing all three rules at an unset cell
    pub fn legal_values(board: &Board, row: usize, col: usize) -> Candidates {
        let mut legal = Candidates::EMPTY;
        for value in Cell::VALUES {
            if Self::balance_allows(board, row, col, value)
                && Self::adjacency_allows(board, row, col, value)
                && Self::uniqueness_allows(board, row, col, value)
            {
                legal.insert(value);
            }
        }
        legal
    }

    /// Placing `value` must not push its row's or column's count of that
    /// value above N/2
    pub fn balance_allows(board: &Board, row: usize, col: usize, value: Cell) -> bool {
        let half = board.size() / 2;
        board.row_counts(row).of(value) < half && board.col_counts(col).of(value) < half
    }

    /// `value` is illegal when either axis already shows two matching
    /// determined neighbors in any window around the cell (covers the
    /// `XX_`, `X_X` and `_XX` triple patterns); out-of-bounds neighbors
    /// never block a placement
    pub fn adjacency_allows(board: &Board, row: usize, col: usize, value: Cell) -> bool {
        let (r, c) = (row as isize, col as isize);
        let pairs = [
            ((r, c - 2), (r, c - 1)),
            ((r, c - 1), (r, c + 1)),
            ((r, c + 1), (r, c + 2)),
            ((r - 2, c), (r - 1, c)),
            ((r - 1, c), (r + 1, c)),
            ((r + 1, c), (r + 2, c)),
        ];
        !pairs.iter().any(|&((r1, c1), (r2, c2))| {
            Self::value_at_is(board, r1, c1, value) && Self::value_at_is(board, r2, c2, value)
        })
    }

    /// When the placement completes its row or column, the resulting full
    /// line must differ from every previously completed parallel line;
    /// partial lines never trigger this check
    pub fn uniqueness_allows(board: &Board, row: usize, col: usize, value: Cell) -> bool {
        let size = board.size();
        if board.row_counts(row).total() + 1 == size {
            let mut line = board.row_cells(row);
            line[col] = value;
            if board.complete_rows().contains(&line) {
                return false;
            }
        }
        if board.col_counts(col).total() + 1 == size {
            let mut line = board.col_cells(col);
            line[row] = value;
            if board.complete_cols().contains(&line) {
                return false;
            }
        }
        true
    }

    fn value_at_is(board: &Board, row: isize, col: isize, value: Cell) -> bool {
        let size = board.size() as isize;
        if row < 0 || col < 0 || row >= size || col >= size {
            return false;
        }
        board.get(row as usize, col as usize) == value
    }

    /// Whether a line holds three consecutive equal determined values
    pub fn line_has_triple(line: &[Cell]) -> bool {
        line.iter()
            .tuple_windows()
            .any(|(a, b, c)| a.is_set() && a == b && b == c)
    }

    /// Whether a line holds equally many zeros and ones and no unset cells
    pub fn line_is_balanced(line: &[Cell]) -> bool {
        let zeros = line.iter().filter(|&&v| v == Cell::Zero).count();
        let ones = line.iter().filter(|&&v| v == Cell::One).count();
        zeros == ones && zeros + ones == line.len()
    }

    /// The columns of a grid as rows
    pub fn transpose(rows: &[Vec<Cell>]) -> Vec<Vec<Cell>> {
        let size = rows.len();
        (0..size)
            .map(|col| rows.iter().map(|row| row[col]).collect())
            .collect()
    }

    /// Whether every cell is determined
    pub fn all_determined(rows: &[Vec<Cell>]) -> bool {
        rows.iter().flatten().all(|v| v.is_set())
    }

    /// Whether all lines of the grid are pairwise distinct, per axis
    pub fn no_duplicate_lines(rows: &[Vec<Cell>]) -> bool {
        let distinct = |lines: &[Vec<Cell>]| {
            let set: HashSet<&Vec<Cell>> = lines.iter().collect();
            set.len() == lines.len()
        };
        distinct(rows) && distinct(&Self::transpose(rows))
    }

    /// Full independent check of all three rules on a finished grid
    pub fn is_valid_solution(rows: &[Vec<Cell>]) -> bool {
        let cols = Self::transpose(rows);
        Self::all_determined(rows)
            && rows.iter().all(|line| Self::line_is_balanced(line))
            && cols.iter().all(|line| Self::line_is_balanced(line))
            && !rows.iter().any(|line| Self::line_has_triple(line))
            && !cols.iter().any(|line| Self::line_has_triple(line))
            && Self::no_duplicate_lines(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(rows: &[&[u32]]) -> Vec<Vec<Cell>> {
        rows.iter()
            .map(|row| row.iter().map(|&d| Cell::from_digit(d).unwrap()).collect())
            .collect()
    }

    #[test]
    fn test_balance_excludes_saturated_value() {
        let board = Board::from_cells(cells(&[
            &[0, 2, 2, 0],
            &[2, 2, 2, 2],
            &[2, 2, 2, 2],
            &[2, 2, 2, 2],
        ]))
        .unwrap();
        // row 0 already holds two zeros
        assert!(!TakuzuRules::balance_allows(&board, 0, 1, Cell::Zero));
        assert!(TakuzuRules::balance_allows(&board, 0, 1, Cell::One));
        // other rows are unconstrained
        assert!(TakuzuRules::balance_allows(&board, 1, 1, Cell::Zero));
    }

    #[test]
    fn test_adjacency_blocks_triple_patterns() {
        let board = Board::from_cells(cells(&[
            &[1, 1, 2, 2],
            &[2, 2, 2, 1],
            &[2, 2, 2, 1],
            &[2, 2, 2, 2],
        ]))
        .unwrap();
        // _XX pattern to the left of (0, 2)
        assert!(!TakuzuRules::adjacency_allows(&board, 0, 2, Cell::One));
        assert!(TakuzuRules::adjacency_allows(&board, 0, 2, Cell::Zero));
        // vertical XX_ pattern above (3, 3)
        assert!(!TakuzuRules::adjacency_allows(&board, 3, 3, Cell::One));
        assert!(TakuzuRules::adjacency_allows(&board, 3, 3, Cell::Zero));
    }

    #[test]
    fn test_adjacency_gap_pattern() {
        let board = Board::from_cells(cells(&[
            &[0, 2, 0, 2],
            &[2, 2, 2, 2],
            &[2, 2, 2, 2],
            &[2, 2, 2, 2],
        ]))
        .unwrap();
        // X_X: placing a zero at (0, 1) would bridge the gap
        assert!(!TakuzuRules::adjacency_allows(&board, 0, 1, Cell::Zero));
        assert!(TakuzuRules::adjacency_allows(&board, 0, 1, Cell::One));
    }

    #[test]
    fn test_adjacency_ignores_out_of_bounds() {
        let board = Board::empty(2).unwrap();
        for value in Cell::VALUES {
            assert!(TakuzuRules::adjacency_allows(&board, 0, 0, value));
        }
    }

    #[test]
    fn test_uniqueness_blocks_duplicate_completion() {
        let board = Board::from_cells(cells(&[
            &[0, 1, 0, 1],
            &[0, 1, 2, 2],
            &[2, 2, 2, 2],
            &[2, 2, 2, 2],
        ]))
        .unwrap();
        // after this placement row 1 reads 0 1 0 _, one step from
        // duplicating row 0
        let board = board.place(1, 2, Cell::Zero).unwrap();
        assert!(!TakuzuRules::uniqueness_allows(&board, 1, 3, Cell::One));
        // a zero would complete it differently (balance rejects it instead)
        assert!(TakuzuRules::uniqueness_allows(&board, 1, 3, Cell::Zero));
        assert!(!TakuzuRules::balance_allows(&board, 1, 3, Cell::Zero));
        // no rule admits a value here: the dead-end signal
        assert!(board.candidates_at(1, 3).is_empty());
        assert!(board.has_dead_end());
    }

    #[test]
    fn test_uniqueness_skips_partial_lines() {
        let board = Board::from_cells(cells(&[
            &[0, 1, 0, 1],
            &[0, 1, 2, 2],
            &[2, 2, 2, 2],
            &[2, 2, 2, 2],
        ]))
        .unwrap();
        // row 1 is two cells from completing, so the rule never fires
        assert!(TakuzuRules::uniqueness_allows(&board, 1, 2, Cell::Zero));
        assert!(TakuzuRules::uniqueness_allows(&board, 1, 2, Cell::One));
    }

    #[test]
    fn test_is_valid_solution() {
        let solved = cells(&[
            &[0, 1, 0, 1],
            &[1, 0, 1, 0],
            &[0, 1, 1, 0],
            &[1, 0, 0, 1],
        ]);
        assert!(TakuzuRules::is_valid_solution(&solved));

        let unbalanced = cells(&[
            &[0, 1, 0, 1],
            &[1, 0, 1, 0],
            &[0, 1, 0, 1],
            &[1, 0, 1, 0],
        ]);
        // balanced and triple-free, but rows 0/2 and 1/3 repeat
        assert!(!TakuzuRules::no_duplicate_lines(&unbalanced));
        assert!(!TakuzuRules::is_valid_solution(&unbalanced));

        let incomplete = cells(&[
            &[0, 1, 0, 1],
            &[1, 0, 1, 0],
            &[0, 1, 1, 0],
            &[1, 0, 0, 2],
        ]);
        assert!(!TakuzuRules::is_valid_solution(&incomplete));
    }

    #[test]
    fn test_line_helpers() {
        let triple = cells(&[&[1, 1, 1, 0]]).remove(0);
        assert!(TakuzuRules::line_has_triple(&triple));

        let unset_run = cells(&[&[2, 2, 2, 0]]).remove(0);
        assert!(!TakuzuRules::line_has_triple(&unset_run));

        let balanced = cells(&[&[0, 1, 1, 0]]).remove(0);
        assert!(TakuzuRules::line_is_balanced(&balanced));

        let with_hole = cells(&[&[0, 1, 2, 0]]).remove(0);
        assert!(!TakuzuRules::line_is_balanced(&with_hole));
    }
}
