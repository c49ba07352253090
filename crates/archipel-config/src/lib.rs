//! Configuration system for the island world generator.
//!
//! Settings are read once at startup and persisted to disk as RON files.
//! Supports CLI overrides via clap, reload detection, and validation of
//! the values the generator cannot run without.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, GenerationConfig, IslandConfig, MAX_ISLAND_DISTANCE, RoundingRule,
    SeedConfig, default_config_dir,
};
pub use error::ConfigError;
