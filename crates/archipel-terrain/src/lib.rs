//! Island terrain: lattice addressing, quadrant band tables, biome resolution,
//! the fBm heightmap behind the template world, and debug map rendering.

mod heightmap;
mod lattice;

pub mod biome;
pub mod debug_viz;

pub use biome::{
    BANDS_PER_QUADRANT, BAND_EDGES, BandTable, BiomeSample, DEFAULT_CATEGORY,
    IslandBiomeResolver, Quadrant, QuadrantTables, TerrainCategory, quadrant_tables,
};
pub use heightmap::{HeightmapParams, HeightmapSampler};
pub use lattice::{IslandCenter, IslandLattice, LatticeError};
