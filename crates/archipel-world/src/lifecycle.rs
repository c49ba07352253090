//! Island world lifecycle: init, cache build, queries, shutdown.

use std::sync::Arc;

use archipel_config::Config;
use archipel_terrain::{IslandBiomeResolver, IslandCenter, TerrainCategory};

use crate::async_generation::GenerationPool;
use crate::chunk::ChunkPos;
use crate::error::WorldError;
use crate::generator::{GeneratedChunk, IslandChunkGenerator};
use crate::seed_cache::{ProgressSink, build_cache};
use crate::template::TemplateWorld;

/// An island world from configuration through teardown.
///
/// Chunk generation is refused until [`build_cache`](Self::build_cache) has
/// succeeded once. Consuming `self` in [`shutdown`](Self::shutdown) makes
/// use after teardown a compile error.
pub struct IslandWorld {
    config: Config,
    generator: Arc<IslandChunkGenerator>,
}

impl IslandWorld {
    /// Validates `config` and sets up the resolver and generator.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Config`] or [`WorldError::Lattice`] for unusable
    /// settings.
    pub fn init(config: &Config) -> Result<Self, WorldError> {
        config.validate()?;
        let resolver = IslandBiomeResolver::from_config(&config.island)?;

        tracing::info!(
            distance = config.island.distance,
            offset_x = config.island.offset_x,
            offset_z = config.island.offset_z,
            scale = config.island.scale_factor,
            "Island world initialized"
        );

        Ok(Self {
            config: config.clone(),
            generator: Arc::new(IslandChunkGenerator::new(resolver)),
        })
    }

    /// Settings the world was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshots the template island from `template` and installs it.
    ///
    /// The cache spans `[-S, S)` chunks on both axes, `S` being the island
    /// distance. On failure the previous cache (if any) stays in place.
    pub fn build_cache<T, P>(&mut self, template: &T, progress: &mut P) -> Result<(), WorldError>
    where
        T: TemplateWorld + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let cache = build_cache(template, self.config.island.distance, progress)?;
        Arc::make_mut(&mut self.generator).install_cache(cache);
        Ok(())
    }

    /// Returns `true` once a seed cache is installed.
    pub fn is_ready(&self) -> bool {
        self.generator.has_cache()
    }

    /// Terrain category at quarter-resolution sample `(x, y, z)`.
    pub fn resolve(&self, x: i32, y: i32, z: i32) -> TerrainCategory {
        self.generator.resolver().resolve(x, y, z)
    }

    /// Center of the island block `(x, z)` belongs to.
    pub fn nearest_island_center(&self, x: i64, z: i64) -> IslandCenter {
        self.generator.resolver().nearest_island_center(x, z)
    }

    /// The shared chunk generator.
    pub fn generator(&self) -> &Arc<IslandChunkGenerator> {
        &self.generator
    }

    /// Generates chunk `pos` on the calling thread.
    pub fn generate_chunk(&self, pos: ChunkPos) -> Result<GeneratedChunk, WorldError> {
        self.generator.generate(pos)
    }

    /// Starts a background generation pool sized by the generation settings.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::CacheNotBuilt`] before the cache is installed.
    pub fn spawn_pool(&self) -> Result<GenerationPool, WorldError> {
        GenerationPool::from_config(Arc::clone(&self.generator), &self.config.generation)
    }

    /// Tears the world down and releases the seed cache.
    pub fn shutdown(self) {
        let cached = self.generator.cache().map_or(0, |cache| cache.len());
        tracing::info!(cached_chunks = cached, "Island world shut down");
    }
}
