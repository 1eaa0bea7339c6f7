//! Puzzle solving: the search-problem adapter, the solve pipeline,
//! solution records, and rule validation of search results

pub mod adapter;
pub mod solution;
pub mod solve;
pub mod validator;

pub use adapter::{Placement, TakuzuProblem, TakuzuState};
pub use solution::{Solution, SolutionSummary};
pub use solve::PuzzleSolver;
pub use validator::{Axis, RuleKind, RuleViolation, SolutionValidator, ValidationResult};
