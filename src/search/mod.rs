//! Generic tree-search machinery: the problem interface and the engines

pub mod engine;
pub mod problem;

pub use engine::{run, SearchOutcome, SearchStats};
pub use problem::{SearchProblem, SearchState};
