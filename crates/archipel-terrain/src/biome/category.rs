//! Terrain categories assigned to island rings.

/// Discrete terrain/biome identity of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TerrainCategory {
    /// Bare netherrack plains; the innermost and most common ring.
    NetherWastes,
    /// Crimson nylium with huge red fungi.
    CrimsonForest,
    /// Warped nylium with huge cyan fungi.
    WarpedForest,
    /// Soul sand and soul soil flats with fossils.
    SoulSandValley,
    /// Basalt columns and blackstone.
    BasaltDeltas,
}

impl TerrainCategory {
    /// Every category, in declaration order.
    pub const ALL: [TerrainCategory; 5] = [
        TerrainCategory::NetherWastes,
        TerrainCategory::CrimsonForest,
        TerrainCategory::WarpedForest,
        TerrainCategory::SoulSandValley,
        TerrainCategory::BasaltDeltas,
    ];

    /// Namespaced identifier as used by the host world format.
    pub fn name(self) -> &'static str {
        match self {
            TerrainCategory::NetherWastes => "nether_wastes",
            TerrainCategory::CrimsonForest => "crimson_forest",
            TerrainCategory::WarpedForest => "warped_forest",
            TerrainCategory::SoulSandValley => "soul_sand_valley",
            TerrainCategory::BasaltDeltas => "basalt_deltas",
        }
    }

    /// Map color for debug renders.
    pub fn debug_color(self) -> [u8; 3] {
        match self {
            TerrainCategory::NetherWastes => [112, 34, 34],
            TerrainCategory::CrimsonForest => [200, 40, 60],
            TerrainCategory::WarpedForest => [30, 160, 150],
            TerrainCategory::SoulSandValley => [90, 70, 50],
            TerrainCategory::BasaltDeltas => [70, 70, 80],
        }
    }
}

impl std::fmt::Display for TerrainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
