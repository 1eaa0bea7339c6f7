//! Main CLI application for the Takuzu solver and generator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use takuzu_solver::{
    config::{CliOverrides, SearchStrategy, Settings},
    generator::PuzzleGenerator,
    solver::{PuzzleSolver, SolutionValidator},
    takuzu::{create_example_puzzles, load_board_from_file},
    utils::{ColorOutput, SolutionFormatter},
};

#[derive(Parser)]
#[command(name = "takuzu_solver")]
#[command(about = "Takuzu Puzzle Solver and Generator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a Takuzu puzzle
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file (overrides config)
        #[arg(short, long)]
        puzzle: Option<PathBuf>,

        /// Search strategy (overrides config)
        #[arg(short, long)]
        strategy: Option<SearchStrategy>,

        /// Maximum solutions to find (overrides config)
        #[arg(short, long)]
        max_solutions: Option<usize>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate a batch of puzzles with unique solutions
    Generate {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board size (overrides config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Number of puzzles to generate (overrides config)
        #[arg(short, long)]
        batch: Option<usize>,

        /// Search strategy for harvesting and carving (overrides config)
        #[arg(long)]
        strategy: Option<SearchStrategy>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a solved grid against a puzzle
    Validate {
        /// Puzzle file
        #[arg(short, long)]
        puzzle: PathBuf,

        /// Candidate solution file
        #[arg(short, long)]
        solution: PathBuf,
    },

    /// Create example configuration and input files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            puzzle,
            strategy,
            max_solutions,
            output,
            verbose,
        } => solve_command(config, puzzle, strategy, max_solutions, output, verbose),
        Commands::Generate {
            config,
            size,
            batch,
            strategy,
            output,
        } => generate_command(config, size, batch, strategy, output),
        Commands::Validate { puzzle, solution } => validate_command(puzzle, solution),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn solve_command(
    config_path: PathBuf,
    puzzle_file: Option<PathBuf>,
    strategy: Option<SearchStrategy>,
    max_solutions: Option<usize>,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("Starting Takuzu solver"));

    let mut settings = load_settings(&config_path)?;

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        strategy,
        max_solutions,
        puzzle_file,
        output_dir,
        ..CliOverrides::default()
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Strategy: {:?}", settings.search.strategy);
        println!("  Max solutions: {}", settings.search.max_solutions);
        println!("  Puzzle file: {}", settings.input.puzzle_file.display());
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let solver = PuzzleSolver::new(settings.clone()).context("Failed to load puzzle")?;

    if verbose {
        println!("Puzzle:");
        println!(
            "{}",
            SolutionFormatter::format_grid_with_coords(&solver.board().to_rows())
        );
    }

    let solutions = solver.solve().context("Failed to solve puzzle")?;
    let total_time = start_time.elapsed();

    if solutions.is_empty() {
        println!("{}", ColorOutput::warning("No solutions found"));
        return Ok(());
    }

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Found {} solution(s) in {:.3}s",
            solutions.len(),
            total_time.as_secs_f64()
        ))
    );

    println!("\n{}", SolutionFormatter::format_solution_summary(&solutions));

    if solutions.len() <= 3 {
        for (i, solution) in solutions.iter().enumerate() {
            println!("\n{}", SolutionFormatter::format_solution(solution, i));
        }
    }

    if settings.output.save_solutions {
        SolutionFormatter::save_solutions(
            &solutions,
            &settings.output.output_directory,
            &settings.output.format,
        )
        .context("Failed to save solutions")?;

        println!(
            "{}",
            ColorOutput::success(&format!(
                "Solutions saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn generate_command(
    config_path: PathBuf,
    size: Option<usize>,
    batch: Option<usize>,
    strategy: Option<SearchStrategy>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    println!("{}", ColorOutput::info("Generating Takuzu puzzles"));

    let mut settings = load_settings(&config_path)?;

    let cli_overrides = CliOverrides {
        board_size: size,
        batch_size: batch,
        ..CliOverrides::default()
    };
    settings.merge_with_cli(&cli_overrides);
    if let Some(strategy) = strategy {
        settings.generator.strategy = strategy;
    }
    if let Some(output_dir) = output_dir {
        settings.generator.output_directory = output_dir;
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let generator = PuzzleGenerator::new(settings);
    let puzzles = generator.generate().context("Failed to generate puzzles")?;
    let written = generator
        .write_pairs(&puzzles)
        .context("Failed to write puzzle files")?;
    let total_time = start_time.elapsed();

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Generated {} puzzle(s) in {:.3}s",
            puzzles.len(),
            total_time.as_secs_f64()
        ))
    );
    for (generated, pair) in puzzles.iter().zip(written.chunks(2)) {
        println!(
            "  {} ({} clues of {})",
            pair[0].display(),
            generated.clue_count,
            generated.size * generated.size
        );
    }

    Ok(())
}

fn validate_command(puzzle_path: PathBuf, solution_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("Validating solution"));

    let puzzle = load_board_from_file(&puzzle_path)
        .with_context(|| format!("Failed to load puzzle from {}", puzzle_path.display()))?;
    let solution = load_board_from_file(&solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    let puzzle_rows = puzzle.to_rows();
    let solution_rows = solution.to_rows();
    let result = SolutionValidator::validate(&solution_rows);

    for violation in &result.violations {
        println!(
            "  {:?} {} violates {:?}",
            violation.axis, violation.index, violation.rule
        );
    }

    if !SolutionValidator::preserves_clues(&puzzle_rows, &solution_rows) {
        println!("{}", ColorOutput::error("Solution alters the puzzle clues"));
        return Ok(());
    }

    if result.is_valid {
        println!("{}", ColorOutput::success("Solution is valid"));
    } else {
        println!("{}", ColorOutput::error("Solution is invalid"));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/puzzles");
    let output_dir = directory.join("output/solutions");
    let puzzles_dir = directory.join("output/puzzles");

    for dir in [&config_dir, &input_dir, &output_dir, &puzzles_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example puzzles
    create_example_puzzles(&input_dir).context("Failed to create example puzzles")?;
    println!("Created example puzzles in: {}", input_dir.display());

    // Create example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut exhaustive_config = Settings::default();
    exhaustive_config.search.strategy = SearchStrategy::BreadthFirst;
    exhaustive_config.search.max_solutions = 10;
    exhaustive_config.input.puzzle_file = PathBuf::from("input/puzzles/tiny.txt");
    exhaustive_config.to_file(&examples_dir.join("exhaustive.yaml"))?;

    let mut generator_config = Settings::default();
    generator_config.generator.board_size = 8;
    generator_config.generator.batch_size = 8;
    generator_config.to_file(&examples_dir.join("generator.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your puzzles to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "takuzu_solver",
            "solve",
            "--config",
            "test.yaml",
            "--strategy",
            "greedy",
            "--max-solutions",
            "2",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_generate_cli_parsing() {
        let cli = Cli::try_parse_from([
            "takuzu_solver",
            "generate",
            "--size",
            "8",
            "--batch",
            "2",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/puzzles/example.txt").exists());
    }
}
