//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::solver::Solution;
use crate::takuzu::Cell;
use anyhow::Result;
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a single solution for console output
    pub fn format_solution(solution: &Solution, index: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Solution {} ===\n", index + 1));
        output.push_str(&format!("Size: {0}x{0}\n", solution.size));
        output.push_str(&format!("Clues: {}\n", solution.clue_count));
        output.push_str(&format!("Strategy: {:?}\n", solution.strategy));
        output.push_str(&format!("Nodes Expanded: {}\n", solution.expanded));
        output.push_str(&format!("Nodes Generated: {}\n", solution.generated));
        output.push_str(&format!("Solve Time: {:.3}s\n", solution.solve_time.as_secs_f64()));

        output.push('\n');
        output.push_str("Puzzle:\n");
        output.push_str(&Self::format_grid_compact(&solution.puzzle));
        output.push('\n');
        output.push_str("Solved:\n");
        output.push_str(&Self::format_grid_compact(&solution.solved));

        output
    }

    /// Format multiple solutions as a summary table
    pub fn format_solution_summary(solutions: &[Solution]) -> String {
        let mut output = String::new();

        output.push_str("Solutions Summary:\n");
        output.push_str("# | Size | Clues | Expanded | Time(ms) | Strategy\n");
        output.push_str("--|------|-------|----------|----------|----------\n");

        for (i, solution) in solutions.iter().enumerate() {
            output.push_str(&format!(
                "{} | {:4} | {:5} | {:8} | {:8} | {:?}\n",
                i + 1,
                solution.size,
                solution.clue_count,
                solution.expanded,
                solution.solve_time.as_millis(),
                solution.strategy
            ));
        }

        output
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(rows: &[Vec<Cell>]) -> String {
        let mut output = String::new();
        for row in rows {
            for cell in row {
                output.push(match cell {
                    Cell::Zero => '0',
                    Cell::One => '1',
                    Cell::Unset => '·',
                });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(rows: &[Vec<Cell>]) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for col in 0..rows.len() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for (i, row) in rows.iter().enumerate() {
            output.push_str(&format!("{:2} ", i));
            for cell in row {
                output.push_str(match cell {
                    Cell::Zero => " 0",
                    Cell::One => " 1",
                    Cell::Unset => " ·",
                });
            }
            output.push('\n');
        }

        output
    }

    /// Save solutions to files based on output format
    pub fn save_solutions<P: AsRef<Path>>(
        solutions: &[Solution],
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                for (i, solution) in solutions.iter().enumerate() {
                    let filename = format!("solution_{:03}.txt", i + 1);
                    let filepath = output_dir.join(filename);
                    let content = Self::format_solution(solution, i);
                    std::fs::write(filepath, content)?;
                }
            }
            OutputFormat::Json => {
                for (i, solution) in solutions.iter().enumerate() {
                    let filename = format!("solution_{:03}.json", i + 1);
                    let filepath = output_dir.join(filename);
                    solution.save_to_file(filepath)?;
                }

                // Also save a summary file
                let summary_path = output_dir.join("solutions_summary.json");
                let summaries: Vec<_> = solutions.iter().map(|s| s.summary()).collect();
                let summary_json = serde_json::to_string_pretty(&summaries)?;
                std::fs::write(summary_path, summary_json)?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
