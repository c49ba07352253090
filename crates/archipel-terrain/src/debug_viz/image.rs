//! Opaque RGB raster for island maps.

use std::collections::HashSet;

/// Row-major RGB raster. Every pixel is fully opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl DebugImage {
    /// A black `width x height` raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} map",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Paints pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the pixel is outside the raster.
    pub fn put(&mut self, x: u32, y: u32, color: [u8; 3]) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Color of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the pixel is outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Number of pixels painted `color`.
    pub fn count(&self, color: [u8; 3]) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Number of distinct colors on the map.
    pub fn distinct_colors(&self) -> usize {
        self.pixels.iter().collect::<HashSet<_>>().len()
    }

    /// 8-bit RGBA bytes, row-major, ready for an image encoder.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&[r, g, b]| [r, g, b, u8::MAX])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_black() {
        let image = DebugImage::new(5, 3);
        assert_eq!((image.width(), image.height()), (5, 3));
        assert_eq!(image.count([0, 0, 0]), 15);
    }

    #[test]
    fn test_put_addresses_row_major() {
        let mut image = DebugImage::new(4, 4);
        image.put(3, 1, [9, 8, 7]);
        assert_eq!(image.pixel(3, 1), [9, 8, 7]);
        assert_eq!(image.pixel(1, 3), [0, 0, 0]);
        assert_eq!(&image.to_rgba()[(4 + 3) * 4..(4 + 3) * 4 + 4], &[9, 8, 7, 255]);
    }

    #[test]
    fn test_distinct_colors() {
        let mut image = DebugImage::new(3, 1);
        image.put(0, 0, [200, 0, 0]);
        image.put(1, 0, [200, 0, 0]);
        assert_eq!(image.distinct_colors(), 2);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 map")]
    fn test_out_of_range_pixel_panics() {
        DebugImage::new(2, 2).put(2, 0, [1, 1, 1]);
    }
}
