//! Chunk addressing and template snapshots.

/// Side length of a chunk column in blocks.
pub const CHUNK_WIDTH: usize = 16;

/// Side length, in blocks, of one biome cell on the host sampling grid.
pub const BIOME_CELL_SIZE: usize = 4;

/// Biome cells along one side of a chunk.
pub const BIOME_CELLS: usize = CHUNK_WIDTH / BIOME_CELL_SIZE;

/// Horizontal chunk coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkPos {
    /// Chunk-grid X coordinate.
    pub x: i32,
    /// Chunk-grid Z coordinate.
    pub z: i32,
}

impl ChunkPos {
    /// Creates a chunk position.
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The chunk containing block `(x, z)`.
    pub fn containing_block(x: i64, z: i64) -> Self {
        let width = CHUNK_WIDTH as i64;
        Self {
            x: x.div_euclid(width) as i32,
            z: z.div_euclid(width) as i32,
        }
    }

    /// Block coordinates of the chunk's north-west corner.
    pub fn min_block(self) -> (i64, i64) {
        let width = CHUNK_WIDTH as i64;
        (i64::from(self.x) * width, i64::from(self.z) * width)
    }

    /// Squared chunk distance from the origin chunk.
    pub fn distance_sq_from_origin(self) -> u64 {
        let x = i64::from(self.x);
        let z = i64::from(self.z);
        (x * x + z * z) as u64
    }
}

/// Top block of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceBlock {
    /// Grass over dirt.
    Grass,
    /// Beach sand near the waterline.
    Sand,
    /// Exposed stone on high ground.
    Stone,
    /// Snow cap on peaks.
    Snow,
    /// Open water: the column's terrain ends below sea level.
    Water,
}

/// Terrain of a single column inside a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnSample {
    /// Y of the highest solid block.
    pub surface_height: i32,
    /// What sits on top of the column.
    pub surface_block: SurfaceBlock,
}

/// Read-only capture of one template chunk's terrain.
///
/// Biomes are not part of a snapshot; the generator assigns them per island.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkSnapshot {
    pos: ChunkPos,
    columns: Vec<ColumnSample>,
}

impl ChunkSnapshot {
    /// Builds a snapshot from columns in row-major `(z, x)` order.
    ///
    /// Returns `None` unless exactly `CHUNK_WIDTH²` columns are supplied.
    pub fn new(pos: ChunkPos, columns: Vec<ColumnSample>) -> Option<Self> {
        (columns.len() == CHUNK_WIDTH * CHUNK_WIDTH).then_some(Self { pos, columns })
    }

    /// Position the snapshot was taken at.
    pub fn pos(&self) -> ChunkPos {
        self.pos
    }

    /// Column at local `(x, z)`, each in `0..16`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    pub fn column(&self, x: usize, z: usize) -> ColumnSample {
        assert!(x < CHUNK_WIDTH && z < CHUNK_WIDTH, "column ({x}, {z}) outside chunk");
        self.columns[z * CHUNK_WIDTH + x]
    }

    /// All columns in row-major `(z, x)` order.
    pub fn columns(&self) -> &[ColumnSample] {
        &self.columns
    }

    /// Highest surface in the chunk.
    pub fn max_height(&self) -> i32 {
        self.columns
            .iter()
            .map(|c| c.surface_height)
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(pos: ChunkPos, height: i32) -> ChunkSnapshot {
        let column = ColumnSample {
            surface_height: height,
            surface_block: SurfaceBlock::Grass,
        };
        ChunkSnapshot::new(pos, vec![column; CHUNK_WIDTH * CHUNK_WIDTH]).unwrap()
    }

    #[test]
    fn test_containing_block_floors_negatives() {
        assert_eq!(ChunkPos::containing_block(0, 15), ChunkPos::new(0, 0));
        assert_eq!(ChunkPos::containing_block(-1, -16), ChunkPos::new(-1, -1));
        assert_eq!(ChunkPos::containing_block(-17, 16), ChunkPos::new(-2, 1));
    }

    #[test]
    fn test_min_block() {
        assert_eq!(ChunkPos::new(-3, 2).min_block(), (-48, 32));
    }

    #[test]
    fn test_snapshot_requires_full_chunk() {
        let column = ColumnSample {
            surface_height: 64,
            surface_block: SurfaceBlock::Stone,
        };
        assert!(ChunkSnapshot::new(ChunkPos::new(0, 0), vec![column; 10]).is_none());
    }

    #[test]
    fn test_column_indexing() {
        let pos = ChunkPos::new(1, 1);
        let mut columns = flat(pos, 60).columns().to_vec();
        columns[3 * CHUNK_WIDTH + 5].surface_height = 90;
        let snapshot = ChunkSnapshot::new(pos, columns).unwrap();
        assert_eq!(snapshot.column(5, 3).surface_height, 90);
        assert_eq!(snapshot.column(3, 5).surface_height, 60);
        assert_eq!(snapshot.max_height(), 90);
    }
}
