//! # Image Errors
//!
//! Error types for grid and palette construction.

use thiserror::Error;

/// Errors that can occur while building the pixel/palette data model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// Grid has a zero dimension
    #[error("Grid dimensions must be non-zero: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    /// Cell buffer does not match the declared dimensions
    #[error("Grid cell count mismatch: expected {expected}, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    /// Hex color string could not be parsed
    #[error("Invalid hex color: {text}")]
    InvalidHexColor { text: String },
}

impl ImageError {
    /// Creates an invalid hex color error.
    pub fn invalid_hex(text: impl Into<String>) -> Self {
        Self::InvalidHexColor { text: text.into() }
    }
}
