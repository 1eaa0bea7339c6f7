//! Independent validation of solved grids
//!
//! Re-checks a finished grid against the three Takuzu rules by direct
//! scanning, without trusting the incremental candidate machinery that
//! produced it.

use crate::takuzu::{Cell, TakuzuRules};

/// Validates solved Takuzu grids
pub struct SolutionValidator;

/// Result of validating one grid
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<RuleViolation>,
}

/// One rule violation found during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    pub rule: RuleKind,
    pub axis: Axis,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Incomplete,
    Unbalanced,
    Triple,
    DuplicateLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl SolutionValidator {
    /// Check a finished grid against all three rules
    pub fn validate(rows: &[Vec<Cell>]) -> ValidationResult {
        let mut violations = Vec::new();
        let cols = TakuzuRules::transpose(rows);

        for (axis, lines) in [(Axis::Row, rows), (Axis::Column, &cols[..])] {
            for (index, line) in lines.iter().enumerate() {
                if line.iter().any(|v| !v.is_set()) {
                    violations.push(RuleViolation {
                        rule: RuleKind::Incomplete,
                        axis,
                        index,
                    });
                    continue;
                }
                if !TakuzuRules::line_is_balanced(line) {
                    violations.push(RuleViolation {
                        rule: RuleKind::Unbalanced,
                        axis,
                        index,
                    });
                }
                if TakuzuRules::line_has_triple(line) {
                    violations.push(RuleViolation {
                        rule: RuleKind::Triple,
                        axis,
                        index,
                    });
                }
            }
            for (index, line) in lines.iter().enumerate() {
                if lines[..index].contains(line) {
                    violations.push(RuleViolation {
                        rule: RuleKind::DuplicateLine,
                        axis,
                        index,
                    });
                }
            }
        }

        ValidationResult {
            is_valid: violations.is_empty(),
            violations,
        }
    }

    /// Whether a solved grid keeps every clue of the puzzle it came from
    pub fn preserves_clues(puzzle: &[Vec<Cell>], solved: &[Vec<Cell>]) -> bool {
        puzzle.len() == solved.len()
            && puzzle.iter().zip(solved).all(|(p_row, s_row)| {
                p_row.len() == s_row.len()
                    && p_row
                        .iter()
                        .zip(s_row)
                        .all(|(&p, &s)| !p.is_set() || p == s)
            })
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
    fn test_valid_solution() {
        let solved = cells(&[
            &[0, 1, 0, 1],
            &[1, 0, 1, 0],
            &[0, 1, 1, 0],
            &[1, 0, 0, 1],
        ]);
        let result = SolutionValidator::validate(&solved);
        assert!(result.is_valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_unset_cells_reported() {
        let grid = cells(&[&[0, 1], &[1, 2]]);
        let result = SolutionValidator::validate(&grid);
        assert!(!result.is_valid);
        assert!(result
            .violations
            .contains(&RuleViolation {
                rule: RuleKind::Incomplete,
                axis: Axis::Row,
                index: 1
            }));
    }

    #[test]
    fn test_duplicate_lines_reported() {
        let grid = cells(&[
            &[0, 1, 0, 1],
            &[1, 0, 1, 0],
            &[0, 1, 0, 1],
            &[1, 0, 1, 0],
        ]);
        let result = SolutionValidator::validate(&grid);
        assert!(!result.is_valid);
        assert!(result.violations.iter().any(|v| v.rule == RuleKind::DuplicateLine));
    }

    #[test]
    fn test_triple_reported() {
        let grid = cells(&[
            &[0, 0, 0, 1],
            &[1, 1, 0, 0],
            &[0, 1, 1, 0],
            &[1, 0, 0, 1],
        ]);
        let result = SolutionValidator::validate(&grid);
        assert!(!result.is_valid);
        assert!(result.violations.iter().any(|v| {
            v.rule == RuleKind::Triple && v.axis == Axis::Row && v.index == 0
        }));
    }

    #[test]
    fn test_preserves_clues() {
        let puzzle = cells(&[&[0, 2], &[2, 2]]);
        let good = cells(&[&[0, 1], &[1, 0]]);
        let bad = cells(&[&[1, 0], &[0, 1]]);
        assert!(SolutionValidator::preserves_clues(&puzzle, &good));
        assert!(!SolutionValidator::preserves_clues(&puzzle, &bad));
    }
}
