//! Debug visualization: top-down maps of island terrain categories.

mod image;

pub use self::image::DebugImage;

use crate::biome::IslandBiomeResolver;

/// Marks island centers in rendered maps.
const CENTER_MARKER: [u8; 3] = [255, 255, 255];

/// Region of block space covered by a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapRegion {
    /// Block X of the top-left pixel.
    pub min_x: i64,
    /// Block Z of the top-left pixel.
    pub min_z: i64,
    /// Blocks per pixel along each axis.
    pub blocks_per_pixel: i64,
}

/// Render a `width x height` map of terrain categories.
///
/// Pixel `(px, py)` shows block `(min_x + px * step, min_z + py * step)`, so
/// north is up. Pixels that land exactly on an island center are white.
pub fn render_island_map(
    resolver: &IslandBiomeResolver,
    region: MapRegion,
    width: u32,
    height: u32,
) -> DebugImage {
    let mut image = DebugImage::new(width, height);
    let step = region.blocks_per_pixel.max(1);

    for py in 0..height {
        for px in 0..width {
            let x = region.min_x + i64::from(px) * step;
            let z = region.min_z + i64::from(py) * step;
            let sample = resolver.sample_block(x, z);

            let color = if sample.center.x == x && sample.center.z == z {
                CENTER_MARKER
            } else {
                sample.category.debug_color()
            };
            image.put(px, py, color);
        }
    }

    image
}
