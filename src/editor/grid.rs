use super::color::ColorValue;

/// One addressable cell of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// Row-major position within the grid.
    pub id: usize,
    pub color: ColorValue,
}

/// A square canvas stored as a flat row-major run of pixels.
///
/// `pixels.len() == size * size` and `pixels[i].id == i` hold for every
/// value this type hands out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    pixels: Vec<Pixel>,
}

impl Grid {
    /// Create a `size` x `size` grid filled with `fill`.
    ///
    /// A `size` of zero is raised to one.
    pub fn filled(size: usize, fill: ColorValue) -> Self {
        let size = size.max(1);
        let pixels = (0..size * size).map(|id| Pixel { id, color: fill }).collect();
        Self { size, pixels }
    }

    /// Side length.
    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false: a grid has at least one pixel.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn get(&self, id: usize) -> Option<&Pixel> {
        self.pixels.get(id)
    }

    pub fn pixel_at(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.pixels.get(row * self.size + col)
    }

    pub fn count_color(&self, color: ColorValue) -> usize {
        self.pixels.iter().filter(|p| p.color == color).count()
    }

    /// Recolor a single pixel. Out-of-range ids leave the grid untouched.
    #[must_use]
    pub fn with_pixel(mut self, id: usize, color: ColorValue) -> Self {
        if let Some(pixel) = self.pixels.get_mut(id) {
            pixel.color = color;
        }
        self
    }

    /// Recolor every pixel whose color equals `target`, wherever it is.
    ///
    /// This is a global recolor by equality, not a walk over neighbors:
    /// two separate islands of the same color both change.
    #[must_use]
    pub fn with_recolored(mut self, target: ColorValue, color: ColorValue) -> Self {
        if target == color {
            return self;
        }
        for pixel in self.pixels.iter_mut().filter(|p| p.color == target) {
            pixel.color = color;
        }
        self
    }

    /// Grow the side length by one.
    ///
    /// The `2 * size + 1` new pixels are appended to the end of the flat run
    /// and the whole run is re-wrapped at the new width, so existing pixels
    /// keep their order but shift visually.
    #[must_use]
    pub fn grown(mut self, fill: ColorValue) -> Self {
        let added = 2 * self.size + 1;
        let start = self.pixels.len();
        self.pixels
            .extend((start..start + added).map(|id| Pixel { id, color: fill }));
        self.size += 1;
        self.renumbered()
    }

    /// Shrink the side length by one by dropping the trailing
    /// `2 * size - 1` pixels. A 1x1 grid is returned unchanged.
    #[must_use]
    pub fn shrunk(mut self) -> Self {
        if self.size <= 1 {
            return self;
        }
        let next = self.size - 1;
        self.pixels.truncate(next * next);
        self.size = next;
        self.renumbered()
    }

    fn renumbered(mut self) -> Self {
        for (id, pixel) in self.pixels.iter_mut().enumerate() {
            pixel.id = id;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: ColorValue = ColorValue::rgb(0xff, 0, 0);
    const BLUE: ColorValue = ColorValue::rgb(0, 0, 0xff);

    fn assert_well_formed(grid: &Grid) {
        assert_eq!(grid.len(), grid.size() * grid.size());
        for (i, pixel) in grid.pixels().iter().enumerate() {
            assert_eq!(pixel.id, i);
        }
    }

    #[test]
    fn test_filled_grid_is_uniform() {
        let grid = Grid::filled(4, RED);
        assert_well_formed(&grid);
        assert_eq!(grid.count_color(RED), 16);
    }

    #[test]
    fn test_filled_raises_zero_to_one() {
        let grid = Grid::filled(0, RED);
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_with_pixel_ignores_out_of_range() {
        let grid = Grid::filled(2, RED).with_pixel(4, BLUE);
        assert_eq!(grid.count_color(RED), 4);
    }

    #[test]
    fn test_recolor_hits_disconnected_regions() {
        // R B R
        // B B B
        // R B R
        let grid = Grid::filled(3, BLUE)
            .with_pixel(0, RED)
            .with_pixel(2, RED)
            .with_pixel(6, RED)
            .with_pixel(8, RED);
        let grid = grid.with_recolored(RED, ColorValue::BLACK);
        assert_eq!(grid.count_color(ColorValue::BLACK), 4);
        assert_eq!(grid.count_color(BLUE), 5);
    }

    #[test]
    fn test_grown_appends_and_rewraps() {
        let grid = Grid::filled(2, RED).with_pixel(3, BLUE).grown(ColorValue::WHITE);
        assert_well_formed(&grid);
        assert_eq!(grid.size(), 3);
        // pixel 3 was (1,1) and is now (1,0) after re-wrapping
        assert_eq!(grid.pixel_at(1, 0).map(|p| p.color), Some(BLUE));
        assert!(grid.pixels()[4..].iter().all(|p| p.color == ColorValue::WHITE));
    }

    #[test]
    fn test_shrunk_truncates_tail() {
        let grid = Grid::filled(3, RED).with_pixel(3, BLUE).with_pixel(8, BLUE).shrunk();
        assert_well_formed(&grid);
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.get(3).map(|p| p.color), Some(BLUE));
        assert_eq!(grid.count_color(BLUE), 1);
    }

    #[test]
    fn test_shrunk_stops_at_one() {
        let grid = Grid::filled(1, RED).shrunk();
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_pixel_at_is_row_major() {
        let grid = Grid::filled(3, RED).with_pixel(5, BLUE);
        assert_eq!(grid.pixel_at(1, 2).map(|p| p.color), Some(BLUE));
        assert_eq!(grid.pixel_at(1, 2).map(|p| p.id), Some(5));
        assert!(grid.pixel_at(3, 0).is_none());
    }
}
