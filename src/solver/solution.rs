//! Solution representation for solved Takuzu puzzles

use crate::config::SearchStrategy;
use crate::search::SearchStats;
use crate::takuzu::{io, Cell};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A solved puzzle together with how it was solved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The puzzle as given, holes included
    pub puzzle: Vec<Vec<Cell>>,
    /// The fully determined solved grid
    pub solved: Vec<Vec<Cell>>,
    /// Board side length
    pub size: usize,
    /// Number of determined cells in the puzzle
    pub clue_count: usize,
    /// Engine that produced this solution
    pub strategy: SearchStrategy,
    /// Nodes expanded during the search
    pub expanded: usize,
    /// Nodes generated during the search
    pub generated: usize,
    /// Wall-clock time of the search
    #[serde(skip)]
    pub solve_time: Duration,
}

/// Compact form for summary listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub size: usize,
    pub clue_count: usize,
    pub strategy: SearchStrategy,
    pub expanded: usize,
    pub solve_time_ms: u64,
}

impl Solution {
    pub fn new(
        puzzle: Vec<Vec<Cell>>,
        solved: Vec<Vec<Cell>>,
        strategy: SearchStrategy,
        stats: SearchStats,
        solve_time: Duration,
    ) -> Self {
        let size = puzzle.len();
        let clue_count = puzzle.iter().flatten().filter(|c| c.is_set()).count();
        Self {
            puzzle,
            solved,
            size,
            clue_count,
            strategy,
            expanded: stats.expanded,
            generated: stats.generated,
            solve_time,
        }
    }

    /// The solved grid in the output text format
    pub fn rendered(&self) -> String {
        io::rows_to_string(&self.solved)
    }

    pub fn summary(&self) -> SolutionSummary {
        SolutionSummary {
            size: self.size,
            clue_count: self.clue_count,
            strategy: self.strategy,
            expanded: self.expanded,
            solve_time_ms: self.solve_time.as_millis() as u64,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::takuzu::parse_board_from_string;

    fn sample_solution() -> Solution {
        let puzzle = parse_board_from_string("2\n0\t2\n2\t2\n").unwrap();
        let solved = parse_board_from_string("2\n0\t1\n1\t0\n").unwrap();
        Solution::new(
            puzzle.to_rows(),
            solved.to_rows(),
            SearchStrategy::DepthFirst,
            SearchStats {
                expanded: 3,
                generated: 4,
            },
            Duration::from_millis(5),
        )
    }

    #[test]
    fn test_clue_count() {
        let solution = sample_solution();
        assert_eq!(solution.size, 2);
        assert_eq!(solution.clue_count, 1);
    }

    #[test]
    fn test_rendered_output_format() {
        let solution = sample_solution();
        assert_eq!(solution.rendered(), "0\t1\n1\t0\n");
    }

    #[test]
    fn test_json_round_trip() {
        let solution = sample_solution();
        let json = solution.to_json().unwrap();
        let parsed = Solution::from_json(&json).unwrap();
        assert_eq!(parsed.puzzle, solution.puzzle);
        assert_eq!(parsed.solved, solution.solved);
        assert_eq!(parsed.expanded, solution.expanded);
    }
}
