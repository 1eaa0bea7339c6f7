//! The solve pipeline: load a puzzle, search, validate, report

use super::{Solution, SolutionValidator, TakuzuProblem};
use crate::config::Settings;
use crate::generator::MultiSolutionProblem;
use crate::search;
use crate::takuzu::{load_board_from_file, Board};
use anyhow::{Context, Result};
use std::time::Instant;

/// Drives a full solve of one puzzle
pub struct PuzzleSolver {
    settings: Settings,
    board: Board,
}

impl PuzzleSolver {
    /// Create a solver from settings, loading the configured puzzle file
    pub fn new(settings: Settings) -> Result<Self> {
        let board = load_board_from_file(&settings.input.puzzle_file)
            .context("Failed to load puzzle file")?;
        Ok(Self { settings, board })
    }

    /// Create a solver with an explicit board (useful for testing)
    pub fn with_board(settings: Settings, board: Board) -> Self {
        Self { settings, board }
    }

    /// Get the puzzle board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Search for up to `max_solutions` distinct solutions.
    ///
    /// An exhausted search space yields an empty result: a definitive
    /// "no solution", never retried.
    pub fn solve(&self) -> Result<Vec<Solution>> {
        let start_time = Instant::now();
        let strategy = self.settings.search.strategy;
        let limit = self.settings.search.max_solutions;

        let mut problem =
            MultiSolutionProblem::new(TakuzuProblem::new(self.board.clone()), limit);
        let outcome = search::run(strategy, &mut problem);
        let stats = outcome.stats;
        let solve_time = start_time.elapsed();

        let puzzle_rows = self.board.to_rows();
        let mut solutions = Vec::new();
        for rows in problem.into_found() {
            let validation = SolutionValidator::validate(&rows);
            if !validation.is_valid {
                eprintln!(
                    "Warning: discarding a search result with rule violations: {:?}",
                    validation.violations
                );
                continue;
            }
            if !SolutionValidator::preserves_clues(&puzzle_rows, &rows) {
                eprintln!("Warning: discarding a search result that alters the puzzle clues");
                continue;
            }
            solutions.push(Solution::new(
                puzzle_rows.clone(),
                rows,
                strategy,
                stats,
                solve_time,
            ));
        }

        Ok(solutions)
    }
}
