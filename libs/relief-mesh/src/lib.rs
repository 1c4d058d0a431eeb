//! # Relief Mesh
//!
//! Converts a palette-quantized raster image into a watertight stepped-height
//! triangle mesh suitable for multi-color relief printing. Each palette color
//! becomes one vertical layer; the top surface profile encodes the image.
//!
//! ## Architecture
//!
//! ```text
//! relief-image (PixelGrid + Palette) → relief-mesh (MeshResult)
//! ```
//!
//! The pipeline is a strict linear sequence: validate options, reduce the
//! palette to used colors, reorder it by the configured policy, emit boundary
//! facets with neighbor occlusion culling, and accumulate them into an indexed
//! triangle mesh with exact-coordinate vertex deduplication.
//!
//! ## Usage
//!
//! ```rust
//! use relief_image::{Palette, PaletteColor, PixelGrid};
//! use relief_mesh::{build_relief, BuildOptions};
//!
//! let black = PaletteColor::rgb(0, 0, 0);
//! let white = PaletteColor::rgb(255, 255, 255);
//! let grid = PixelGrid::new(2, 1, vec![black.key(), white.key()]).unwrap();
//! let palette = Palette::new(vec![black, white]);
//!
//! let result = build_relief(&grid, &palette, &BuildOptions::default()).unwrap();
//! assert!(result.mesh().triangle_count() > 0);
//! ```

pub mod builder;
pub mod emit;
pub mod error;
pub mod facet;
pub mod layers;
pub mod mesh;
pub mod options;
pub mod pipeline;
pub mod result;

// Re-exports for convenience
pub use builder::MeshBuilder;
pub use emit::emit_facets;
pub use error::ReliefError;
pub use facet::{Axis, Facet, FacetSink};
pub use layers::LayerHeights;
pub use mesh::Mesh;
pub use options::BuildOptions;
pub use pipeline::build_relief;
pub use result::MeshResult;
