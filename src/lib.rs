//! Takuzu Puzzle Solver and Generator
//!
//! This library solves Takuzu (Binairo) puzzles with classic uninformed and
//! informed search strategies, and generates new puzzles with a unique
//! solution by carving clues out of solved grids.

pub mod config;
pub mod generator;
pub mod search;
pub mod solver;
pub mod takuzu;
pub mod utils;

pub use config::Settings;
pub use generator::{GeneratedPuzzle, PuzzleGenerator};
pub use solver::{PuzzleSolver, Solution};

use anyhow::Result;

/// Main entry point for solving a configured puzzle
pub fn solve_puzzle(settings: Settings) -> Result<Vec<Solution>> {
    let solver = PuzzleSolver::new(settings)?;
    solver.solve()
}

/// Main entry point for generating a batch of puzzles
pub fn generate_puzzles(settings: Settings) -> Result<Vec<GeneratedPuzzle>> {
    let generator = PuzzleGenerator::new(settings);
    generator.generate()
}
