//! Template ("seed") worlds that islands are copied from.

use archipel_config::SeedConfig;
use archipel_terrain::{HeightmapParams, HeightmapSampler};

use crate::chunk::{CHUNK_WIDTH, ChunkPos, ChunkSnapshot, ColumnSample, SurfaceBlock};

/// Errors raised while snapshotting a template chunk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// The template world is not loaded or could not be opened.
    #[error("template world `{0}` is unavailable")]
    Unavailable(String),
    /// The requested chunk lies outside the area the template can provide.
    #[error("chunk ({x}, {z}) is outside the template world")]
    OutOfBounds {
        /// Chunk X.
        x: i32,
        /// Chunk Z.
        z: i32,
    },
    /// The template returned a snapshot for a different chunk.
    #[error("asked for chunk {requested:?}, template returned {returned:?}")]
    PositionMismatch {
        /// Chunk that was asked for.
        requested: ChunkPos,
        /// Chunk the snapshot claims to be.
        returned: ChunkPos,
    },
}

/// Source of template chunk snapshots.
pub trait TemplateWorld {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Snapshots the terrain of chunk `pos`.
    fn capture_chunk(&self, pos: ChunkPos) -> Result<ChunkSnapshot, CaptureError>;
}

/// Procedural template world: fBm terrain around a fixed sea level.
pub struct SeedWorld {
    name: String,
    seed: u64,
    sea_level: i32,
    sampler: HeightmapSampler,
}

impl SeedWorld {
    /// Name every seed world is created under.
    pub const NAME: &'static str = "seed";

    /// Height above sea level where stone replaces grass.
    const STONE_LINE: i32 = 24;
    /// Height above sea level where snow caps begin.
    const SNOW_LINE: i32 = 36;

    /// Creates the seed world described by `config`.
    pub fn new(config: &SeedConfig) -> Self {
        let sampler = HeightmapSampler::new(HeightmapParams {
            seed: config.seed,
            base_height: f64::from(config.sea_level) + 4.0,
            ..Default::default()
        });
        tracing::info!(seed = config.seed, "Creating seed world");
        Self {
            name: Self::NAME.to_string(),
            seed: config.seed,
            sea_level: config.sea_level,
            sampler,
        }
    }

    /// Seed the terrain was generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Surface of the column at block `(x, z)`.
    pub fn column_at(&self, x: i64, z: i64) -> ColumnSample {
        let surface_height = self.sampler.surface_height(x, z);
        let above_sea = surface_height - self.sea_level;
        let surface_block = if above_sea < 0 {
            SurfaceBlock::Water
        } else if above_sea <= 2 {
            SurfaceBlock::Sand
        } else if above_sea >= Self::SNOW_LINE {
            SurfaceBlock::Snow
        } else if above_sea >= Self::STONE_LINE {
            SurfaceBlock::Stone
        } else {
            SurfaceBlock::Grass
        };
        ColumnSample {
            surface_height,
            surface_block,
        }
    }
}

impl TemplateWorld for SeedWorld {
    fn name(&self) -> &str {
        &self.name
    }

    fn capture_chunk(&self, pos: ChunkPos) -> Result<ChunkSnapshot, CaptureError> {
        let (min_x, min_z) = pos.min_block();
        let mut columns = Vec::with_capacity(CHUNK_WIDTH * CHUNK_WIDTH);
        for lz in 0..CHUNK_WIDTH as i64 {
            for lx in 0..CHUNK_WIDTH as i64 {
                columns.push(self.column_at(min_x + lx, min_z + lz));
            }
        }
        ChunkSnapshot::new(pos, columns).ok_or(CaptureError::OutOfBounds { x: pos.x, z: pos.z })
    }
}
