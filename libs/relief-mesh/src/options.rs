//! # Build Options
//!
//! The fixed configuration consumed by the pipeline, validated once at the
//! pipeline boundary.

use crate::error::ReliefError;
use crate::layers::LayerHeights;
use config::constants::BuildDefaults;
use relief_image::PaletteSortType;
use serde::{Deserialize, Serialize};

/// Parameters of one mesh build request. Immutable per request.
///
/// # Example
///
/// ```rust
/// use relief_mesh::BuildOptions;
/// use relief_image::PaletteSortType;
///
/// let options = BuildOptions {
///     pixel_side_size: 1.0,
///     first_layer_height: 1.0,
///     other_layers_height: 0.2,
///     palette_sort: PaletteSortType::AsGiven,
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Side length of one pixel's square footprint, in millimeters.
    pub pixel_side_size: f64,
    /// Height of the first (ground) layer, in millimeters.
    pub first_layer_height: f64,
    /// Height of every layer after the first, in millimeters.
    pub other_layers_height: f64,
    /// Palette reordering policy applied before layering.
    pub palette_sort: PaletteSortType,
}

impl Default for BuildOptions {
    fn default() -> Self {
        let defaults = BuildDefaults::default();
        Self {
            pixel_side_size: defaults.pixel_side_size,
            first_layer_height: defaults.first_layer_height,
            other_layers_height: defaults.other_layers_height,
            palette_sort: PaletteSortType::DecreasingLuminosity,
        }
    }
}

impl BuildOptions {
    /// Checks that every size and height is strictly positive.
    ///
    /// NaN values fail the check as well, since `NaN > 0.0` is false.
    pub fn validate(&self) -> Result<(), ReliefError> {
        require_positive("pixel_side_size", self.pixel_side_size)?;
        require_positive("first_layer_height", self.first_layer_height)?;
        require_positive("other_layers_height", self.other_layers_height)?;
        Ok(())
    }

    /// The layer height model these options describe.
    pub fn layer_heights(&self) -> LayerHeights {
        LayerHeights::new(self.first_layer_height, self.other_layers_height)
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ReliefError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ReliefError::invalid_parameter(name, value))
    }
}
