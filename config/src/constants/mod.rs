//! Centralized configuration values shared across the relief mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Rec. 709 luma weight applied to the red channel when deriving a color's
/// luminosity for palette ordering.
///
/// # Examples
/// ```
/// use config::constants::LUMA_WEIGHT_RED;
/// assert!(LUMA_WEIGHT_RED > 0.0 && LUMA_WEIGHT_RED < 1.0);
/// ```
pub const LUMA_WEIGHT_RED: f64 = 0.2126;

/// Rec. 709 luma weight applied to the green channel.
///
/// # Examples
/// ```
/// use config::constants::LUMA_WEIGHT_GREEN;
/// assert!(LUMA_WEIGHT_GREEN > 0.5);
/// ```
pub const LUMA_WEIGHT_GREEN: f64 = 0.7152;

/// Rec. 709 luma weight applied to the blue channel.
///
/// # Examples
/// ```
/// use config::constants::LUMA_WEIGHT_BLUE;
/// assert!(LUMA_WEIGHT_BLUE > 0.0 && LUMA_WEIGHT_BLUE < 0.1);
/// ```
pub const LUMA_WEIGHT_BLUE: f64 = 0.0722;

/// Default height of the first (ground) layer in millimeters.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_FIRST_LAYER_HEIGHT_MM;
/// assert!(DEFAULT_FIRST_LAYER_HEIGHT_MM > 0.0);
/// ```
pub const DEFAULT_FIRST_LAYER_HEIGHT_MM: f64 = 1.0;

/// Default height of every layer after the first, in millimeters.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_OTHER_LAYERS_HEIGHT_MM;
/// assert!(DEFAULT_OTHER_LAYERS_HEIGHT_MM > 0.0);
/// ```
pub const DEFAULT_OTHER_LAYERS_HEIGHT_MM: f64 = 0.2;

/// Default side length of one pixel's square footprint, in millimeters.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PIXEL_SIDE_SIZE_MM;
/// assert!(DEFAULT_PIXEL_SIDE_SIZE_MM > 0.0);
/// ```
pub const DEFAULT_PIXEL_SIDE_SIZE_MM: f64 = 1.4;

/// Immutable snapshot of the build parameter defaults that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::BuildDefaults;
/// let defaults = BuildDefaults::default();
/// assert!(defaults.first_layer_height > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildDefaults {
    /// Height of the first (ground) layer in millimeters.
    pub first_layer_height: f64,
    /// Height of every subsequent layer in millimeters.
    pub other_layers_height: f64,
    /// Side length of one pixel's square footprint in millimeters.
    pub pixel_side_size: f64,
}

impl BuildDefaults {
    /// Builds a defaults snapshot enforcing strict validation of the supplied
    /// heights and pixel size.
    ///
    /// # Examples
    /// ```
    /// use config::constants::BuildDefaults;
    /// let defaults = BuildDefaults::new(0.8, 0.16, 1.0).expect("valid defaults");
    /// assert_eq!(defaults.pixel_side_size, 1.0);
    /// ```
    pub fn new(
        first_layer_height: f64,
        other_layers_height: f64,
        pixel_side_size: f64,
    ) -> Result<Self, ConfigError> {
        if first_layer_height <= 0.0 {
            return Err(ConfigError::InvalidHeight(first_layer_height));
        }
        if other_layers_height <= 0.0 {
            return Err(ConfigError::InvalidHeight(other_layers_height));
        }
        if pixel_side_size <= 0.0 {
            return Err(ConfigError::InvalidPixelSize(pixel_side_size));
        }
        Ok(Self {
            first_layer_height,
            other_layers_height,
            pixel_side_size,
        })
    }
}

impl Default for BuildDefaults {
    fn default() -> Self {
        Self {
            first_layer_height: DEFAULT_FIRST_LAYER_HEIGHT_MM,
            other_layers_height: DEFAULT_OTHER_LAYERS_HEIGHT_MM,
            pixel_side_size: DEFAULT_PIXEL_SIDE_SIZE_MM,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a layer height is zero or negative.
    InvalidHeight(f64),
    /// Raised when the pixel footprint side length is zero or negative.
    InvalidPixelSize(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidHeight(value) => {
                write!(f, "layer height must be positive: {value}")
            }
            ConfigError::InvalidPixelSize(value) => {
                write!(f, "pixel side size must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
