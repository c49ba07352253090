//! World-level error type.

use archipel_config::ConfigError;
use archipel_terrain::LatticeError;

use crate::chunk::ChunkPos;
use crate::seed_cache::CacheBuildError;

/// Errors surfaced by the island world lifecycle and chunk generation.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// Settings failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The island lattice could not be built.
    #[error("invalid island lattice: {0}")]
    Lattice(#[from] LatticeError),

    /// The seed cache build was abandoned.
    #[error("seed cache build failed: {0}")]
    CacheBuild(#[from] CacheBuildError),

    /// Chunk generation was requested before the seed cache was installed.
    #[error("seed chunk cache has not been built")]
    CacheNotBuilt,

    /// A world chunk maps to a template chunk the cache does not hold.
    #[error("no template chunk {template:?} for world chunk {world:?}")]
    MissingTemplate {
        /// World chunk being generated.
        world: ChunkPos,
        /// Template chunk it maps to.
        template: ChunkPos,
    },

    /// A generation worker thread could not be started.
    #[error("failed to spawn generation worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),
}
