//! # Layer Heights
//!
//! Maps discrete layer indices to absolute vertical coordinates. This is the
//! single source of truth for vertical placement: top facets, side walls, and
//! the downstream height-to-color mapping all read from it, so geometry and
//! shading can never diverge in height.

use serde::{Deserialize, Serialize};

/// Layer height parameters: the first (ground) layer may differ from all
/// subsequent layers, as is usual for first-layer adhesion in FDM printing.
///
/// # Example
///
/// ```rust
/// use relief_mesh::LayerHeights;
///
/// let heights = LayerHeights::new(1.0, 0.2);
/// assert_eq!(heights.height_of(0), 0.0);
/// assert_eq!(heights.height_of(1), 1.0);
/// assert_eq!(heights.height_of(2), 1.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerHeights {
    first: f64,
    other: f64,
}

impl LayerHeights {
    /// Creates the model from the first-layer and subsequent-layer heights.
    pub fn new(first: f64, other: f64) -> Self {
        Self { first, other }
    }

    /// Absolute height of the top of layer `layer_index`, with 0 meaning the
    /// ground plane (height exactly 0.0).
    pub fn height_of(&self, layer_index: usize) -> f64 {
        if layer_index == 0 {
            return 0.0;
        }
        self.first + (layer_index - 1) as f64 * self.other
    }

    /// Heights at which the visible color changes for a model of
    /// `layer_count` layers: threshold `i` is the top of layer `i + 1`.
    ///
    /// A renderer or slicer assigns color `i` below `thresholds[i]` and the
    /// next color above it. Empty for models of one layer or fewer.
    pub fn color_thresholds(&self, layer_count: usize) -> Vec<f64> {
        (1..layer_count).map(|n| self.height_of(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ground_is_exactly_zero() {
        let heights = LayerHeights::new(1.0, 0.2);
        assert_eq!(heights.height_of(0), 0.0);
    }

    #[test]
    fn test_first_layer_height() {
        let heights = LayerHeights::new(0.8, 0.16);
        assert_eq!(heights.height_of(1), 0.8);
    }

    #[test]
    fn test_subsequent_layers_are_uniform() {
        let heights = LayerHeights::new(1.0, 0.2);
        assert_relative_eq!(heights.height_of(2), 1.2);
        assert_relative_eq!(heights.height_of(5), 1.8);
    }

    #[test]
    fn test_heights_are_monotonic() {
        let heights = LayerHeights::new(1.0, 0.2);
        for n in 0..10 {
            assert!(heights.height_of(n + 1) > heights.height_of(n));
        }
    }

    #[test]
    fn test_color_thresholds() {
        let heights = LayerHeights::new(1.0, 0.2);
        let thresholds = heights.color_thresholds(3);
        assert_eq!(thresholds.len(), 2);
        assert_relative_eq!(thresholds[0], 1.0);
        assert_relative_eq!(thresholds[1], 1.2);
    }

    #[test]
    fn test_color_thresholds_degenerate() {
        let heights = LayerHeights::new(1.0, 0.2);
        assert!(heights.color_thresholds(0).is_empty());
        assert!(heights.color_thresholds(1).is_empty());
    }
}
