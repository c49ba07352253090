//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Largest accepted island distance. The seed cache holds `(2 * distance)²`
/// chunks, so this also caps the cache at 8192 x 8192 chunks.
pub const MAX_ISLAND_DISTANCE: i32 = 4096;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Island lattice settings.
    pub island: IslandConfig,
    /// Template (seed) world settings.
    pub seed: SeedConfig,
    /// Background chunk generation settings.
    pub generation: GenerationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Rounding applied when snapping a coordinate to the nearest lattice multiple.
///
/// Only matters for points exactly halfway between two island centers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundingRule {
    /// `floor(v + 0.5)`: ties go toward positive infinity. Worlds generated
    /// before this setting existed used this rule.
    #[default]
    HalfUp,
    /// Banker's rounding: ties go to the even multiple.
    HalfEven,
}

/// Island lattice configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IslandConfig {
    /// Island radius in blocks. Centers repeat every `2 * distance` blocks, and
    /// the seed cache spans `[-distance, distance)` chunks on each axis.
    pub distance: i32,
    /// Lattice origin shift along X, in blocks.
    pub offset_x: i32,
    /// Lattice origin shift along Z, in blocks.
    pub offset_z: i32,
    /// Tie-break rule for lattice snapping.
    pub rounding: RoundingRule,
    /// Ratio between block coordinates and the host's biome sampling grid.
    pub scale_factor: i32,
}

/// Template world configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    /// Seed of the template world every island is copied from.
    pub seed: u64,
    /// Name of the generated island world.
    pub world_name: String,
    /// Water surface height of the template world.
    pub sea_level: i32,
}

/// Background generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Worker thread count. `0` picks a count from the available cores.
    pub worker_threads: usize,
    /// Maximum in-flight generation tasks.
    pub max_in_flight: usize,
    /// Capacity of the completed-chunk channel.
    pub result_capacity: usize,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            distance: 64,
            offset_x: 0,
            offset_z: 0,
            rounding: RoundingRule::HalfUp,
            scale_factor: 4,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            world_name: "archipel_world".to_string(),
            sea_level: 63,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            max_in_flight: 64,
            result_capacity: 128,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for the generator, e.g. `~/.config/archipel`.
///
/// Falls back to the working directory when the platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("archipel"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Validation ---

impl Config {
    /// Reject settings the generator cannot start with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSetting`] for an island distance outside
    /// `1..=MAX_ISLAND_DISTANCE`, a non-positive scale factor, or an empty
    /// world name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ISLAND_DISTANCE).contains(&self.island.distance) {
            return Err(ConfigError::InvalidSetting {
                field: "island.distance",
                reason: format!(
                    "must be in 1..={MAX_ISLAND_DISTANCE}, got {}",
                    self.island.distance
                ),
            });
        }
        if self.island.scale_factor <= 0 {
            return Err(ConfigError::InvalidSetting {
                field: "island.scale_factor",
                reason: format!("must be positive, got {}", self.island.scale_factor),
            });
        }
        if self.seed.world_name.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                field: "seed.world_name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path,
            source,
        })
    }

    /// Re-read the file: returns `Some(new_config)` if it changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Reloaded settings with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
