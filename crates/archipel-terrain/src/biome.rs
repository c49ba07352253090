//! Biome system: quadrant band tables and the island-relative resolver.
//!
//! Every island is wrapped in rings of terrain categories. Ring edges are
//! measured in squared distance from the island center, normalized by the
//! squared island radius, and each compass quadrant uses its own table so
//! the rings do not line up along the diagonals.

mod bands;
mod category;
mod quadrant;
mod resolver;

pub use bands::{
    BANDS_PER_QUADRANT, BAND_EDGES, BandTable, DEFAULT_CATEGORY, QuadrantTables, quadrant_tables,
};
pub use category::TerrainCategory;
pub use quadrant::Quadrant;
pub use resolver::{BiomeSample, IslandBiomeResolver};
