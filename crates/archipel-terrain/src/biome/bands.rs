//! Per-quadrant distance band tables.
//!
//! Each table maps ascending normalized-distance thresholds to categories and
//! is queried with ceiling semantics: the first threshold `>= d` wins. The
//! four tables share the same nominal edges but shift them by a small
//! per-quadrant amount and order the categories differently.

use std::sync::LazyLock;

use super::{Quadrant, TerrainCategory};
use TerrainCategory::{
    BasaltDeltas as Basalt, CrimsonForest as Crimson, NetherWastes as Wastes,
    SoulSandValley as SoulSand, WarpedForest as Warped,
};

/// Number of bands in every quadrant table.
pub const BANDS_PER_QUADRANT: usize = 9;

/// Nominal band edges in normalized squared distance (`dist² / radius²`).
pub const BAND_EDGES: [f64; BANDS_PER_QUADRANT] =
    [0.03, 0.13, 0.25, 0.5, 0.75, 1.0, 1.25, 1.75, 2.0];

/// Category returned when a distance lies beyond the last threshold.
pub const DEFAULT_CATEGORY: TerrainCategory = TerrainCategory::NetherWastes;

/// `(quadrant, edge shift, categories from innermost to outermost)`.
const BAND_LAYOUT: [(Quadrant, f64, [TerrainCategory; BANDS_PER_QUADRANT]); 4] = [
    (
        Quadrant::NorthEast,
        0.01,
        [Wastes, Crimson, Wastes, Warped, Wastes, Crimson, SoulSand, Basalt, Wastes],
    ),
    (
        Quadrant::NorthWest,
        0.02,
        [Wastes, SoulSand, SoulSand, Basalt, Wastes, Crimson, SoulSand, Warped, Wastes],
    ),
    (
        Quadrant::SouthEast,
        -0.01,
        [Wastes, Basalt, SoulSand, Warped, Wastes, Basalt, SoulSand, Warped, Crimson],
    ),
    (
        Quadrant::SouthWest,
        -0.01,
        [Wastes, SoulSand, Wastes, SoulSand, Wastes, Crimson, Warped, Basalt, Wastes],
    ),
];

static QUADRANT_TABLES: LazyLock<QuadrantTables> = LazyLock::new(QuadrantTables::build);

/// The process-wide band tables. Built on first use, read-only afterwards.
pub fn quadrant_tables() -> &'static QuadrantTables {
    &QUADRANT_TABLES
}

/// One quadrant's ordered `threshold -> category` mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct BandTable {
    /// Strictly ascending thresholds paired with their categories.
    bands: Vec<(f64, TerrainCategory)>,
}

impl BandTable {
    fn from_layout(shift: f64, categories: &[TerrainCategory; BANDS_PER_QUADRANT]) -> Self {
        let bands = BAND_EDGES
            .iter()
            .zip(categories)
            .map(|(&edge, &category)| (edge + shift, category))
            .collect();
        Self { bands }
    }

    /// Index of the band containing `d`: the smallest threshold `>= d`.
    ///
    /// Returns `None` when `d` exceeds every threshold. NaN sorts above every
    /// threshold and also yields `None`.
    pub fn band_index(&self, d: f64) -> Option<usize> {
        let idx = self
            .bands
            .partition_point(|(threshold, _)| threshold.total_cmp(&d).is_lt());
        (idx < self.bands.len()).then_some(idx)
    }

    /// Category for normalized distance `d`, or [`DEFAULT_CATEGORY`] past the last band.
    pub fn lookup(&self, d: f64) -> TerrainCategory {
        self.band_index(d)
            .map_or(DEFAULT_CATEGORY, |idx| self.bands[idx].1)
    }

    /// Thresholds in ascending order.
    pub fn thresholds(&self) -> impl Iterator<Item = f64> + '_ {
        self.bands.iter().map(|(threshold, _)| *threshold)
    }

    /// `(threshold, category)` pairs in ascending order.
    pub fn bands(&self) -> &[(f64, TerrainCategory)] {
        &self.bands
    }
}

/// Band tables for all four quadrants.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadrantTables {
    tables: [BandTable; 4],
}

impl QuadrantTables {
    fn build() -> Self {
        let mut tables: [BandTable; 4] = std::array::from_fn(|_| BandTable { bands: Vec::new() });
        for (quadrant, shift, categories) in &BAND_LAYOUT {
            tables[quadrant.index()] = BandTable::from_layout(*shift, categories);
        }
        Self { tables }
    }

    /// The table for `quadrant`.
    pub fn table(&self, quadrant: Quadrant) -> &BandTable {
        &self.tables[quadrant.index()]
    }

    /// Looks up `d` in the table for `quadrant`.
    pub fn lookup(&self, quadrant: Quadrant, d: f64) -> TerrainCategory {
        self.table(quadrant).lookup(d)
    }
}
