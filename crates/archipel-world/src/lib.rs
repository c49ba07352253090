//! Island world assembly: template chunks, the seed chunk cache, the island
//! chunk generator, background generation, and the world lifecycle.
//!
//! The seed cache must be built and installed before any chunk generation
//! runs. [`IslandWorld`] and [`GenerationPool::new`] enforce this by refusing
//! to hand out work until a cache is present.

mod async_generation;
mod chunk;
mod error;
mod generator;
mod lifecycle;
mod seed_cache;
mod template;

pub use async_generation::{GeneratedChunkResult, GenerationPool};
pub use chunk::{BIOME_CELLS, BIOME_CELL_SIZE, CHUNK_WIDTH, ChunkPos, ChunkSnapshot, ColumnSample, SurfaceBlock};
pub use error::WorldError;
pub use generator::{GeneratedChunk, IslandChunkGenerator};
pub use lifecycle::IslandWorld;
pub use seed_cache::{
    CacheBuildError, CacheProgress, ProgressSink, ProgressThrottle, SeedChunkCache,
    TracingProgress, build_cache,
};
pub use template::{CaptureError, SeedWorld, TemplateWorld};
