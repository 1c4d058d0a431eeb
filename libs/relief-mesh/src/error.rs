//! # Relief Errors
//!
//! Error types for the mesh generation pipeline.

use relief_image::{ColorKey, ImageError};
use thiserror::Error;

/// Errors that can occur during relief mesh generation.
///
/// Every variant is fatal to the current build request: the pipeline aborts,
/// drops any partially built buffers, and never hands out a partial mesh.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// Grid construction or shape error from the image layer
    #[error("Invalid grid: {0}")]
    InvalidGrid(#[from] ImageError),

    /// A pixel's color key has no match in the supplied palette
    #[error("Pixel color {key:#010x} at ({x}, {y}) not found in palette")]
    ColorNotInPalette { key: u32, x: u32, y: u32 },

    /// A size or height parameter is not strictly positive
    #[error("Invalid parameter {name}: {value} (must be positive)")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl ReliefError {
    /// Creates a color-not-in-palette error for the pixel at `(x, y)`.
    pub fn color_not_in_palette(key: ColorKey, x: u32, y: u32) -> Self {
        Self::ColorNotInPalette {
            key: key.as_u32(),
            x,
            y,
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}
