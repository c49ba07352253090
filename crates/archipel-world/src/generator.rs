//! Island chunk generator.
//!
//! Every world chunk copies the template chunk at the same offset from its
//! island center as the world chunk has from its own island center, then gets
//! biomes from the island-relative resolver.

use std::sync::Arc;

use archipel_terrain::{IslandBiomeResolver, TerrainCategory};

use crate::chunk::{BIOME_CELL_SIZE, BIOME_CELLS, CHUNK_WIDTH, ChunkPos, ChunkSnapshot};
use crate::error::WorldError;
use crate::seed_cache::SeedChunkCache;

/// A world chunk assembled from a template chunk and island biomes.
#[derive(Clone, Debug)]
pub struct GeneratedChunk {
    /// World position of the chunk.
    pub pos: ChunkPos,
    /// Template chunk the terrain was copied from.
    pub template: ChunkPos,
    /// Shared template terrain.
    pub terrain: Arc<ChunkSnapshot>,
    /// Biome per 4x4 column cell, row-major `(z, x)`.
    pub biomes: [TerrainCategory; BIOME_CELLS * BIOME_CELLS],
}

impl GeneratedChunk {
    /// Biome of the cell containing local column `(x, z)`.
    pub fn biome_at(&self, x: usize, z: usize) -> TerrainCategory {
        self.biomes[(z / BIOME_CELL_SIZE) * BIOME_CELLS + x / BIOME_CELL_SIZE]
    }
}

/// Produces world chunks from the seed cache.
///
/// Cheap to clone; clones share the installed cache.
#[derive(Clone, Debug)]
pub struct IslandChunkGenerator {
    resolver: IslandBiomeResolver,
    cache: Option<Arc<SeedChunkCache>>,
}

impl IslandChunkGenerator {
    /// Creates a generator with no cache installed.
    pub fn new(resolver: IslandBiomeResolver) -> Self {
        Self {
            resolver,
            cache: None,
        }
    }

    /// Installs `cache`, replacing any previous one wholesale.
    pub fn install_cache(&mut self, cache: SeedChunkCache) {
        tracing::info!(chunks = cache.len(), "Installed seed chunk cache");
        self.cache = Some(Arc::new(cache));
    }

    /// Removes and returns the installed cache.
    pub fn take_cache(&mut self) -> Option<Arc<SeedChunkCache>> {
        self.cache.take()
    }

    /// The installed cache, if any.
    pub fn cache(&self) -> Option<&Arc<SeedChunkCache>> {
        self.cache.as_ref()
    }

    /// Returns `true` once a cache has been installed.
    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    /// The biome resolver.
    pub fn resolver(&self) -> &IslandBiomeResolver {
        &self.resolver
    }

    /// Template chunk that world chunk `pos` is copied from.
    ///
    /// The chunk's center column, measured from the nearest lattice point, is
    /// reduced into `[-distance, distance)`; the chunk corner at that offset,
    /// in whole chunks, is the template position relative to the template
    /// island at the origin. The result lies inside the seed cache for any
    /// lattice offset.
    pub fn template_pos(&self, pos: ChunkPos) -> ChunkPos {
        let (min_x, min_z) = pos.min_block();
        let half = (CHUNK_WIDTH / 2) as i64;
        let (offset_x, offset_z) = self.resolver.lattice().offset();
        let rel_x = self.island_residual(min_x + half - i64::from(offset_x));
        let rel_z = self.island_residual(min_z + half - i64::from(offset_z));
        ChunkPos::containing_block(rel_x - half, rel_z - half)
    }

    /// `delta` reduced modulo the lattice pitch into `[-distance, distance)`.
    fn island_residual(&self, delta: i64) -> i64 {
        let lattice = self.resolver.lattice();
        let distance = i64::from(lattice.distance());
        (delta + distance).rem_euclid(lattice.pitch()) - distance
    }

    /// Biomes for every cell of chunk `pos`.
    pub fn chunk_biomes(&self, pos: ChunkPos) -> [TerrainCategory; BIOME_CELLS * BIOME_CELLS] {
        let (min_x, min_z) = pos.min_block();
        let scale = i64::from(self.resolver.scale_factor());
        std::array::from_fn(|i| {
            let cell_x = (i % BIOME_CELLS * BIOME_CELL_SIZE) as i64;
            let cell_z = (i / BIOME_CELLS * BIOME_CELL_SIZE) as i64;
            let qx = (min_x + cell_x).div_euclid(scale) as i32;
            let qz = (min_z + cell_z).div_euclid(scale) as i32;
            self.resolver.resolve(qx, 0, qz)
        })
    }

    /// Assembles world chunk `pos`.
    ///
    /// # Errors
    ///
    /// - [`WorldError::CacheNotBuilt`] before a cache is installed.
    /// - [`WorldError::MissingTemplate`] if the template chunk lies outside the cache.
    pub fn generate(&self, pos: ChunkPos) -> Result<GeneratedChunk, WorldError> {
        let cache = self.cache.as_ref().ok_or(WorldError::CacheNotBuilt)?;
        let template = self.template_pos(pos);
        let terrain = cache
            .get(template)
            .cloned()
            .ok_or(WorldError::MissingTemplate {
                world: pos,
                template,
            })?;

        Ok(GeneratedChunk {
            pos,
            template,
            terrain,
            biomes: self.chunk_biomes(pos),
        })
    }
}
