//! Island-relative biome resolver.
//!
//! Queries arrive on the host's downscaled biome grid (one sample per
//! `scale_factor` blocks along each horizontal axis). The resolver scales
//! them back to block space, finds the owning island, and picks a band from
//! the table of the quadrant the point lies in.

use archipel_config::IslandConfig;

use super::{Quadrant, QuadrantTables, TerrainCategory, quadrant_tables};
use crate::lattice::{IslandCenter, IslandLattice, LatticeError};

/// Everything the resolver derived for one query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiomeSample {
    /// Resolved category.
    pub category: TerrainCategory,
    /// Owning island center in block coordinates.
    pub center: IslandCenter,
    /// Quadrant of the point relative to `center`.
    pub quadrant: Quadrant,
    /// Squared distance to `center` divided by the squared island radius.
    pub normalized_distance: f64,
}

/// Maps coordinates to terrain categories around the nearest island.
///
/// Holds no mutable state, so one instance can serve any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct IslandBiomeResolver {
    lattice: IslandLattice,
    scale_factor: i32,
    tables: &'static QuadrantTables,
}

impl IslandBiomeResolver {
    /// Creates a resolver over `lattice`, scaling query coordinates by `scale_factor`.
    pub fn new(lattice: IslandLattice, scale_factor: i32) -> Self {
        Self {
            lattice,
            scale_factor,
            tables: quadrant_tables(),
        }
    }

    /// Builds the lattice and resolver from island settings.
    pub fn from_config(config: &IslandConfig) -> Result<Self, LatticeError> {
        let lattice = IslandLattice::from_config(config)?;
        tracing::debug!(
            distance = lattice.distance(),
            offset_x = config.offset_x,
            offset_z = config.offset_z,
            rounding = ?config.rounding,
            "Island biome resolver ready"
        );
        Ok(Self::new(lattice, config.scale_factor))
    }

    /// The underlying lattice.
    pub fn lattice(&self) -> &IslandLattice {
        &self.lattice
    }

    /// Ratio between block coordinates and query coordinates.
    pub fn scale_factor(&self) -> i32 {
        self.scale_factor
    }

    /// Category at downscaled coordinate `(x, y, z)`.
    ///
    /// `y` is accepted for the host contract; categories do not vary with height.
    pub fn resolve(&self, x: i32, _y: i32, z: i32) -> TerrainCategory {
        let scale = i64::from(self.scale_factor);
        self.sample_block(i64::from(x) * scale, i64::from(z) * scale)
            .category
    }

    /// Full derivation for the block at `(x, z)`, already in block space.
    pub fn sample_block(&self, x: i64, z: i64) -> BiomeSample {
        let center = self.lattice.nearest_island_center(x, z);
        let dx = x - center.x;
        let dz = z - center.z;

        let dist_sq = (dx as f64) * (dx as f64) + (dz as f64) * (dz as f64);
        let radius = i64::from(self.lattice.distance());
        let normalized_distance = dist_sq / (radius * radius) as f64;

        let quadrant = Quadrant::classify(dx, dz);
        BiomeSample {
            category: self.tables.lookup(quadrant, normalized_distance),
            center,
            quadrant,
            normalized_distance,
        }
    }

    /// Center of the island owning block `(x, z)`.
    pub fn nearest_island_center(&self, x: i64, z: i64) -> IslandCenter {
        self.lattice.nearest_island_center(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::{BANDS_PER_QUADRANT, DEFAULT_CATEGORY};
    use archipel_config::RoundingRule;

    fn resolver(distance: i32) -> IslandBiomeResolver {
        let lattice = IslandLattice::new(distance, 0, 0, RoundingRule::HalfUp).unwrap();
        IslandBiomeResolver::new(lattice, 4)
    }

    #[test]
    fn test_reference_query() {
        // x=112 on the biome grid is block 448; the owning island sits at 400.
        let resolver = resolver(100);
        let sample = resolver.sample_block(448, 448);
        assert_eq!(sample.center, IslandCenter::new(400, 400));
        assert_eq!(sample.quadrant, Quadrant::SouthEast);
        // 48² + 48² = 4608, / 100² = 0.4608 -> SE band 0.49 (warped forest).
        assert!((sample.normalized_distance - 0.4608).abs() < 1e-12);
        assert_eq!(sample.category, TerrainCategory::WarpedForest);
        assert_eq!(resolver.resolve(112, 64, 112), TerrainCategory::WarpedForest);
    }

    #[test]
    fn test_center_uses_first_band() {
        let resolver = resolver(100);
        // dx = dz = 0 is the north-west quadrant by the zero convention.
        let sample = resolver.sample_block(400, -200);
        assert_eq!(sample.quadrant, Quadrant::NorthWest);
        assert_eq!(sample.normalized_distance, 0.0);
        let first = quadrant_tables().table(Quadrant::NorthWest).bands()[0].1;
        assert_eq!(sample.category, first);
    }

    #[test]
    fn test_southeast_corner_uses_outermost_band() {
        let resolver = resolver(100);
        // (99, 99) from center: d = 1.9602 -> SE band 1.99 (crimson forest).
        let sample = resolver.sample_block(99, 99);
        assert_eq!(sample.quadrant, Quadrant::SouthEast);
        assert_eq!(sample.category, TerrainCategory::CrimsonForest);
        let table = quadrant_tables().table(Quadrant::SouthEast);
        assert_eq!(table.band_index(sample.normalized_distance), Some(8));
    }

    #[test]
    fn test_point_past_last_band_resolves_to_default() {
        // The offset is applied after rounding, so (0, 0) is owned by the
        // island at (-150, -150): dx = dz = 150, d = 4.5.
        let lattice = IslandLattice::new(100, -150, -150, RoundingRule::HalfUp).unwrap();
        let resolver = IslandBiomeResolver::new(lattice, 4);
        let sample = resolver.sample_block(0, 0);
        assert_eq!(sample.center, IslandCenter::new(-150, -150));
        assert_eq!(sample.quadrant, Quadrant::SouthEast);
        assert!(
            (sample.normalized_distance - 4.5).abs() < 1e-12,
            "d = {}",
            sample.normalized_distance
        );
        assert_eq!(sample.category, DEFAULT_CATEGORY);
        assert_eq!(resolver.resolve(0, 0, 0), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_height_is_ignored() {
        let resolver = resolver(64);
        for y in [-64, 0, 63, 320] {
            assert_eq!(resolver.resolve(13, y, -7), resolver.resolve(13, 0, -7));
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let a = resolver(80);
        let b = resolver(80);
        for x in -100..100 {
            for z in (-100..100).step_by(3) {
                assert_eq!(a.resolve(x, 0, z), b.resolve(x, 0, z), "({x}, {z})");
                assert_eq!(a.resolve(x, 0, z), a.resolve(x, 0, z));
            }
        }
    }

    #[test]
    fn test_every_island_looks_the_same() {
        let resolver = resolver(50);
        let pitch = resolver.lattice().pitch();
        for dx in -49..50_i64 {
            for dz in (-49..50_i64).step_by(7) {
                let home = resolver.sample_block(dx, dz).category;
                let away = resolver.sample_block(3 * pitch + dx, -2 * pitch + dz).category;
                assert_eq!(home, away, "offset ({dx}, {dz})");
            }
        }
    }

    #[test]
    fn test_bands_monotonic_along_ray() {
        let resolver = resolver(100);
        for (sx, sz) in [(1_i64, -1_i64), (-1, -1), (1, 1), (-1, 1)] {
            let tables = quadrant_tables();
            let mut previous = 0;
            for step in 1..100 {
                let sample = resolver.sample_block(sx * step, sz * step);
                let idx = tables
                    .table(sample.quadrant)
                    .band_index(sample.normalized_distance)
                    .unwrap_or(BANDS_PER_QUADRANT);
                assert!(idx >= previous, "ray ({sx}, {sz}) step {step}");
                previous = idx;
            }
        }
    }

    #[test]
    fn test_offset_moves_rings() {
        let lattice = IslandLattice::new(100, 40, 0, RoundingRule::HalfUp).unwrap();
        let shifted = IslandBiomeResolver::new(lattice, 4);
        let plain = resolver(100);
        assert_eq!(shifted.sample_block(40, 0).center, IslandCenter::new(40, 0));
        assert_eq!(
            shifted.sample_block(60, 20).category,
            plain.sample_block(20, 20).category
        );
    }

    #[test]
    fn test_concurrent_reads() {
        let resolver = resolver(64);
        let expected: Vec<_> = (0..256).map(|i| resolver.resolve(i, 0, -i)).collect();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for (i, want) in expected.iter().enumerate() {
                        let i = i as i32;
                        assert_eq!(resolver.resolve(i, 0, -i), *want);
                    }
                });
            }
        });
    }
}
