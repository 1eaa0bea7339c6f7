//! Puzzle generation: harvest complete grids from an empty board, then
//! carve cells away while a single solution remains

use super::MultiSolutionProblem;
use crate::config::{SearchStrategy, Settings};
use crate::search;
use crate::solver::TakuzuProblem;
use crate::takuzu::{self, Board, Cell};
use anyhow::{ensure, Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// A carved puzzle together with the solved grid it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub size: usize,
    pub puzzle: Vec<Vec<Cell>>,
    pub solution: Vec<Vec<Cell>>,
    pub clue_count: usize,
}

impl GeneratedPuzzle {
    pub fn new(puzzle: Vec<Vec<Cell>>, solution: Vec<Vec<Cell>>) -> Self {
        let size = puzzle.len();
        let clue_count = puzzle
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_set())
            .count();
        Self {
            size,
            puzzle,
            solution,
            clue_count,
        }
    }
}

/// True when the grid admits exactly one solution.
///
/// A search asked for two solutions either finds a second one or
/// exhausts the space, so its tally settles the question.
pub fn has_unique_solution(rows: &[Vec<Cell>], strategy: SearchStrategy) -> bool {
    let board = match Board::from_cells(rows.to_vec()) {
        Ok(board) => board,
        Err(_) => return false,
    };
    let mut problem = MultiSolutionProblem::new(TakuzuProblem::new(board), 2);
    search::run(strategy, &mut problem);
    problem.found().len() == 1
}

/// Carve a solved grid down to a minimal puzzle with a unique solution.
///
/// Raster passes over the grid clear one cell at a time, keeping each
/// clearance only if uniqueness survives. Removing a cell late in a
/// pass can make an earlier cell removable, so passes repeat until one
/// completes without clearing anything.
pub fn carve(solved: &[Vec<Cell>], strategy: SearchStrategy) -> Vec<Vec<Cell>> {
    let size = solved.len();
    let mut rows = solved.to_vec();
    loop {
        let mut progressed = false;
        for idx in 0..size * size {
            let (row, col) = (idx / size, idx % size);
            if rows[row][col] == Cell::Unset {
                continue;
            }
            let kept = rows[row][col];
            rows[row][col] = Cell::Unset;
            if has_unique_solution(&rows, strategy) {
                progressed = true;
            } else {
                rows[row][col] = kept;
            }
        }
        if !progressed {
            break;
        }
    }
    rows
}

/// Generates a batch of puzzles per the configured size and strategy
pub struct PuzzleGenerator {
    settings: Settings,
}

impl PuzzleGenerator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Collect up to `batch_size` distinct solved grids from one search
    /// over the empty board
    fn harvest_solutions(&self) -> Result<Vec<Vec<Vec<Cell>>>> {
        let size = self.settings.generator.board_size;
        let board = Board::empty(size).context("Failed to build the empty board")?;
        let mut problem = MultiSolutionProblem::new(
            TakuzuProblem::new(board),
            self.settings.generator.batch_size,
        );
        search::run(self.settings.generator.strategy, &mut problem);
        let found = problem.into_found();
        ensure!(
            !found.is_empty(),
            "No solved grids found for size {}",
            size
        );
        Ok(found)
    }

    /// Harvest a batch of solved grids and carve each one in parallel
    pub fn generate(&self) -> Result<Vec<GeneratedPuzzle>> {
        let solutions = self.harvest_solutions()?;
        let strategy = self.settings.generator.strategy;
        let puzzles = solutions
            .into_par_iter()
            .map(|solution| {
                let puzzle = carve(&solution, strategy);
                GeneratedPuzzle::new(puzzle, solution)
            })
            .collect();
        Ok(puzzles)
    }

    /// Write each puzzle as a `sizeNN_MM.in` / `sizeNN_MM.out` pair in
    /// the configured output directory, returning the paths written
    pub fn write_pairs(&self, puzzles: &[GeneratedPuzzle]) -> Result<Vec<PathBuf>> {
        let dir = self.settings.generator.output_directory.clone();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

        let mut written = Vec::new();
        for (i, generated) in puzzles.iter().enumerate() {
            let stem = format!("size{:02}_{:02}", generated.size, i + 1);

            let puzzle_path = dir.join(format!("{stem}.in"));
            fs::write(
                &puzzle_path,
                takuzu::rows_to_string_with_header(&generated.puzzle),
            )
            .with_context(|| format!("Failed to write {}", puzzle_path.display()))?;
            written.push(puzzle_path);

            let solution_path = dir.join(format!("{stem}.out"));
            fs::write(
                &solution_path,
                takuzu::rows_to_string_with_header(&generated.solution),
            )
            .with_context(|| format!("Failed to write {}", solution_path.display()))?;
            written.push(solution_path);
        }
        Ok(written)
    }
}
