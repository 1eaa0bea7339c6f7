//! Configuration management for the Takuzu solver and generator

pub mod settings;

pub use settings::{
    CliOverrides, GeneratorConfig, InputConfig, OutputConfig, OutputFormat, SearchConfig,
    SearchStrategy, Settings,
};
