//! Puzzle generation: multi-solution search and clue carving

pub mod generate;
pub mod multi;

pub use generate::{carve, has_unique_solution, GeneratedPuzzle, PuzzleGenerator};
pub use multi::MultiSolutionProblem;
