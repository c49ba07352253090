//! Command-line argument parsing for the island generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Island generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "archipel", about = "Island lattice world generator")]
pub struct CliArgs {
    /// Island radius in blocks (lattice spacing).
    #[arg(long)]
    pub distance: Option<i32>,

    /// Lattice X offset in blocks.
    #[arg(long, allow_hyphen_values = true)]
    pub offset_x: Option<i32>,

    /// Lattice Z offset in blocks.
    #[arg(long, allow_hyphen_values = true)]
    pub offset_z: Option<i32>,

    /// Template world seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Island world name.
    #[arg(long)]
    pub world_name: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write the biome map PNG.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Radius, in chunks, of the region generated around the origin.
    #[arg(long, default_value_t = 4)]
    pub radius: i32,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(d) = args.distance {
            self.island.distance = d;
        }
        if let Some(x) = args.offset_x {
            self.island.offset_x = x;
        }
        if let Some(z) = args.offset_z {
            self.island.offset_z = z;
        }
        if let Some(seed) = args.seed {
            self.seed.seed = seed;
        }
        if let Some(ref name) = args.world_name {
            self.seed.world_name = name.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
