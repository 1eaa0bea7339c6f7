//! Configuration settings for the Takuzu solver and generator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub search: SearchConfig,
    pub generator: GeneratorConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Which tree-search engine drives the solve
    pub strategy: SearchStrategy,
    /// Stop after this many distinct solutions (1 = plain solve)
    pub max_solutions: usize,
}

/// Tree-search engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    DepthFirst,
    BreadthFirst,
    Greedy,
    AStar,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Side length of generated boards (must be even)
    pub board_size: usize,
    /// How many solved grids to harvest before carving
    pub batch_size: usize,
    /// Engine used while harvesting and proving uniqueness
    pub strategy: SearchStrategy,
    /// Directory for the generated .in/.out file pairs
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub puzzle_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_solutions: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                strategy: SearchStrategy::DepthFirst,
                max_solutions: 1,
            },
            generator: GeneratorConfig {
                board_size: 6,
                batch_size: 4,
                strategy: SearchStrategy::Greedy,
                output_directory: PathBuf::from("output/puzzles"),
            },
            input: InputConfig {
                puzzle_file: PathBuf::from("input/puzzles/example.txt"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_solutions: true,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.search.max_solutions == 0 {
            anyhow::bail!("Maximum solutions must be positive");
        }

        if self.generator.board_size < 2 || self.generator.board_size % 2 != 0 {
            anyhow::bail!(
                "Generator board size must be even and at least 2, got {}",
                self.generator.board_size
            );
        }

        if self.generator.batch_size == 0 {
            anyhow::bail!("Generator batch size must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(strategy) = cli_overrides.strategy {
            self.search.strategy = strategy;
        }
        if let Some(max_solutions) = cli_overrides.max_solutions {
            self.search.max_solutions = max_solutions;
        }
        if let Some(ref puzzle_file) = cli_overrides.puzzle_file {
            self.input.puzzle_file = puzzle_file.clone();
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if let Some(board_size) = cli_overrides.board_size {
            self.generator.board_size = board_size;
        }
        if let Some(batch_size) = cli_overrides.batch_size {
            self.generator.batch_size = batch_size;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub strategy: Option<SearchStrategy>,
    pub max_solutions: Option<usize>,
    pub puzzle_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub board_size: Option<usize>,
    pub batch_size: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_odd_board_size_rejected() {
        let mut settings = Settings::default();
        settings.generator.board_size = 5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_max_solutions_rejected() {
        let mut settings = Settings::default();
        settings.search.max_solutions = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            strategy: Some(SearchStrategy::AStar),
            max_solutions: Some(3),
            board_size: Some(8),
            ..CliOverrides::default()
        };
        settings.merge_with_cli(&overrides);
        assert_eq!(settings.search.strategy, SearchStrategy::AStar);
        assert_eq!(settings.search.max_solutions, 3);
        assert_eq!(settings.generator.board_size, 8);
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = Settings::default();
        let yaml = serde_yaml::to_string(&settings).unwrap();
        let parsed: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.generator.board_size, settings.generator.board_size);
        assert_eq!(parsed.search.strategy, settings.search.strategy);
    }
}
