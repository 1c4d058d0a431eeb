//! # Relief Image Crate
//!
//! Data model for palette-quantized raster input to the relief mesh pipeline.
//! A quantized image is a rectangular grid of packed color keys; a palette is
//! an ordered list of colors whose position decides the vertical layering of
//! the printed model.
//!
//! ## Architecture
//!
//! ```text
//! quantizer output (keys) → relief-image (PixelGrid + Palette) → relief-mesh
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use relief_image::{Palette, PaletteColor, PaletteSortType, PixelGrid};
//!
//! let black = PaletteColor::rgb(0, 0, 0);
//! let white = PaletteColor::rgb(255, 255, 255);
//! let palette = Palette::new(vec![white, black]);
//!
//! let grid = PixelGrid::new(2, 1, vec![black.key(), white.key()]).unwrap();
//! let layered = palette.reduce(&grid).sorted(PaletteSortType::IncreasingLuminosity);
//! assert_eq!(layered.colors()[0], black);
//! ```
//!
//! ## Design Principles
//!
//! - **Opaque keys**: pixels and palette entries match on a packed `ColorKey`,
//!   never on channel-by-channel comparison
//! - **Immutable inputs**: grids and palettes are never mutated after
//!   construction; reduction and ordering return new palettes
//! - **Validated construction**: a `PixelGrid` that exists is rectangular and
//!   fully populated

pub mod color;
pub mod error;
pub mod grid;
pub mod palette;

// Re-exports for convenience
pub use color::{ColorKey, PaletteColor};
pub use error::ImageError;
pub use grid::PixelGrid;
pub use palette::{Palette, PaletteSortType};
