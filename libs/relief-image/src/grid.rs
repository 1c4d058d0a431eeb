//! # Pixel Grid
//!
//! Rectangular grid of packed color keys, the quantizer's output as the mesh
//! pipeline consumes it.

use crate::color::ColorKey;
use crate::error::ImageError;

/// Immutable, fully populated W×H grid of color keys, stored row-major.
///
/// Construction validates shape, so every `PixelGrid` that exists is
/// rectangular with non-zero dimensions.
///
/// # Example
///
/// ```rust
/// use relief_image::{ColorKey, PixelGrid};
///
/// let k = ColorKey::from_rgba(10, 20, 30, 255);
/// let grid = PixelGrid::new(2, 2, vec![k; 4]).unwrap();
/// assert_eq!(grid.color_key(1, 1), k);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    keys: Vec<ColorKey>,
}

impl PixelGrid {
    /// Creates a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::ZeroDimension`] when either dimension is zero and
    /// [`ImageError::CellCountMismatch`] when `keys.len() != width * height`.
    pub fn new(width: u32, height: u32, keys: Vec<ColorKey>) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if keys.len() != expected {
            return Err(ImageError::CellCountMismatch {
                expected,
                actual: keys.len(),
            });
        }
        Ok(Self {
            width,
            height,
            keys,
        })
    }

    /// Creates a grid by sampling a function over every cell.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> ColorKey,
    ) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroDimension { width, height });
        }
        let mut keys = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                keys.push(f(x, y));
            }
        }
        Self::new(width, height, keys)
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color key at `(x, y)`; row 0 is the top image row.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates are outside the grid.
    #[inline]
    pub fn color_key(&self, x: u32, y: u32) -> ColorKey {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.keys[y as usize * self.width as usize + x as usize]
    }

    /// Iterates over all cell keys in row-major order.
    pub fn keys(&self) -> impl Iterator<Item = ColorKey> + '_ {
        self.keys.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(v: u8) -> ColorKey {
        ColorKey::from_rgba(v, v, v, 255)
    }

    #[test]
    fn test_grid_new_valid() {
        let grid = PixelGrid::new(3, 2, vec![key(1); 6]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_grid_zero_dimension() {
        assert_eq!(
            PixelGrid::new(0, 4, vec![]).unwrap_err(),
            ImageError::ZeroDimension { width: 0, height: 4 }
        );
    }

    #[test]
    fn test_grid_cell_count_mismatch() {
        assert_eq!(
            PixelGrid::new(2, 2, vec![key(1); 3]).unwrap_err(),
            ImageError::CellCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_grid_row_major_indexing() {
        let keys = vec![key(0), key(1), key(2), key(3), key(4), key(5)];
        let grid = PixelGrid::new(3, 2, keys).unwrap();
        assert_eq!(grid.color_key(0, 0), key(0));
        assert_eq!(grid.color_key(2, 0), key(2));
        assert_eq!(grid.color_key(0, 1), key(3));
        assert_eq!(grid.color_key(2, 1), key(5));
    }

    #[test]
    fn test_grid_from_fn() {
        let grid = PixelGrid::from_fn(2, 2, |x, y| key((y * 2 + x) as u8)).unwrap();
        assert_eq!(grid.color_key(1, 1), key(3));
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn test_grid_out_of_bounds_panics() {
        let grid = PixelGrid::new(2, 2, vec![key(1); 4]).unwrap();
        grid.color_key(2, 0);
    }
}
