//! # Palettes
//!
//! Ordered color sequences with reduction to used colors and luminosity
//! ordering. Palette position drives layering: index 0 is the ground layer.

use crate::color::{ColorKey, PaletteColor};
use crate::grid::PixelGrid;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a palette is reordered before becoming layers, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteSortType {
    /// The ground layer gets the most luminous color.
    DecreasingLuminosity,
    /// The ground layer gets the least luminous color.
    IncreasingLuminosity,
    /// The palette order is applied as given.
    AsGiven,
}

impl PaletteSortType {
    /// Human-readable label, e.g. for option listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DecreasingLuminosity => "Decreasing Luminosity",
            Self::IncreasingLuminosity => "Increasing Luminosity",
            Self::AsGiven => "Keep original",
        }
    }
}

/// Ordered sequence of palette colors, ground (index 0) to top.
///
/// Never mutated after creation; [`Palette::reduce`] and [`Palette::sorted`]
/// return new palettes.
///
/// # Example
///
/// ```rust
/// use relief_image::{Palette, PaletteColor, PaletteSortType};
///
/// let palette = Palette::new(vec![
///     PaletteColor::rgb(255, 255, 255),
///     PaletteColor::rgb(0, 0, 0),
/// ]);
/// let dark_first = palette.sorted(PaletteSortType::IncreasingLuminosity);
/// assert_eq!(dark_first.colors()[0], PaletteColor::rgb(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Palette {
    /// Creates a palette from colors in ground-to-top order.
    pub fn new(colors: Vec<PaletteColor>) -> Self {
        Self { colors }
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette holds no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors in order.
    #[inline]
    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Position of the color with the given key, if present.
    pub fn position(&self, key: ColorKey) -> Option<usize> {
        self.colors.iter().position(|c| c.key() == key)
    }

    /// Hex strings of the colors in order, for caller-facing summaries.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(PaletteColor::to_hex).collect()
    }

    /// Returns the subsequence of colors actually present in `grid`,
    /// preserving this palette's order.
    ///
    /// Colors never used by any pixel would otherwise become zero-height
    /// layers in the model and dead entries in the height-to-color mapping.
    /// An empty result is valid and yields a zero-layer model.
    pub fn reduce(&self, grid: &PixelGrid) -> Palette {
        let used: HashSet<ColorKey> = grid.keys().collect();
        Palette::new(
            self.colors
                .iter()
                .copied()
                .filter(|c| used.contains(&c.key()))
                .collect(),
        )
    }

    /// Returns a palette reordered by the given policy.
    ///
    /// The luminosity variants use a stable sort, so equal-luminosity colors
    /// keep their relative order and sorting already-sorted input is a no-op.
    /// `AsGiven` returns a clone, never an alias.
    pub fn sorted(&self, sort_type: PaletteSortType) -> Palette {
        let mut colors = self.colors.clone();
        match sort_type {
            PaletteSortType::AsGiven => {}
            PaletteSortType::IncreasingLuminosity => {
                colors.sort_by(|a, b| a.luminosity().total_cmp(&b.luminosity()));
            }
            PaletteSortType::DecreasingLuminosity => {
                colors.sort_by(|a, b| b.luminosity().total_cmp(&a.luminosity()));
            }
        }
        Palette::new(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette_bwr() -> Palette {
        Palette::new(vec![
            PaletteColor::rgb(0, 0, 0),
            PaletteColor::rgb(255, 255, 255),
            PaletteColor::rgb(204, 0, 2),
        ])
    }

    #[test]
    fn test_sorted_as_given_is_identity() {
        let palette = palette_bwr();
        assert_eq!(palette.sorted(PaletteSortType::AsGiven), palette);
    }

    #[test]
    fn test_sorted_increasing() {
        let sorted = palette_bwr().sorted(PaletteSortType::IncreasingLuminosity);
        assert_eq!(sorted.colors()[0], PaletteColor::rgb(0, 0, 0));
        assert_eq!(sorted.colors()[2], PaletteColor::rgb(255, 255, 255));
    }

    #[test]
    fn test_sorted_decreasing() {
        let sorted = palette_bwr().sorted(PaletteSortType::DecreasingLuminosity);
        assert_eq!(sorted.colors()[0], PaletteColor::rgb(255, 255, 255));
        assert_eq!(sorted.colors()[2], PaletteColor::rgb(0, 0, 0));
    }

    #[test]
    fn test_sorted_is_idempotent() {
        let once = palette_bwr().sorted(PaletteSortType::IncreasingLuminosity);
        let twice = once.sorted(PaletteSortType::IncreasingLuminosity);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sorted_stable_on_ties() {
        // Two distinct colors with identical luminosity keep their order.
        let a = PaletteColor::rgba(10, 10, 10, 255);
        let b = PaletteColor::rgba(10, 10, 10, 128);
        assert_eq!(a.luminosity(), b.luminosity());
        let sorted = Palette::new(vec![a, b]).sorted(PaletteSortType::IncreasingLuminosity);
        assert_eq!(sorted.colors(), &[a, b]);
    }

    #[test]
    fn test_reduce_keeps_only_used_colors() {
        let palette = palette_bwr();
        let black = PaletteColor::rgb(0, 0, 0);
        let red = PaletteColor::rgb(204, 0, 2);
        let grid = PixelGrid::new(2, 1, vec![red.key(), black.key()]).unwrap();
        let reduced = palette.reduce(&grid);
        // Palette order preserved, white dropped.
        assert_eq!(reduced.colors(), &[black, red]);
    }

    #[test]
    fn test_reduce_can_be_empty() {
        let palette = palette_bwr();
        let stranger = PaletteColor::rgb(1, 2, 3);
        let grid = PixelGrid::new(1, 1, vec![stranger.key()]).unwrap();
        assert!(palette.reduce(&grid).is_empty());
    }

    #[test]
    fn test_position_by_key() {
        let palette = palette_bwr();
        let white = PaletteColor::rgb(255, 255, 255);
        assert_eq!(palette.position(white.key()), Some(1));
        assert_eq!(palette.position(PaletteColor::rgb(9, 9, 9).key()), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(
            palette_bwr().to_hex(),
            vec!["#000000", "#ffffff", "#cc0002"]
        );
    }
}
