//! # Palette Colors
//!
//! RGBA palette entries and the packed key used to match them to pixels.

use crate::error::ImageError;
use config::constants::{LUMA_WEIGHT_BLUE, LUMA_WEIGHT_GREEN, LUMA_WEIGHT_RED};
use serde::{Deserialize, Serialize};

/// Opaque identity of a quantized color.
///
/// Pixels and palette entries compare equal exactly when their keys compare
/// equal. The packing is byte order `a | b | g | r` from the most significant
/// byte down, matching the layout quantizers commonly hand back for
/// little-endian RGBA pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorKey(u32);

impl ColorKey {
    /// Packs the four channels into a key.
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((u32::from(a) << 24) | (u32::from(b) << 16) | (u32::from(g) << 8) | u32::from(r))
    }

    /// Returns the raw packed value, e.g. for diagnostics.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// One entry of the layer palette: an RGBA color plus derived properties.
///
/// # Example
///
/// ```rust
/// use relief_image::PaletteColor;
///
/// let gold = PaletteColor::rgb(0xf7, 0xc5, 0x00);
/// assert_eq!(gold.to_hex(), "#f7c500");
/// assert!(gold.luminosity() > PaletteColor::rgb(0, 0, 0).luminosity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255); quantized palettes are normally opaque
    pub a: u8,
}

impl PaletteColor {
    /// Creates an opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a `#rrggbb` or `#rgb` hex string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use relief_image::PaletteColor;
    ///
    /// let navy = PaletteColor::from_hex("#0f52ba").unwrap();
    /// assert_eq!((navy.r, navy.g, navy.b), (0x0f, 0x52, 0xba));
    /// assert_eq!(PaletteColor::from_hex("#fff").unwrap(), PaletteColor::rgb(255, 255, 255));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ImageError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let expanded;
        let digits = match digits.len() {
            6 => digits,
            3 => {
                let mut s = String::with_capacity(6);
                for c in digits.chars() {
                    s.push(c);
                    s.push(c);
                }
                expanded = s;
                expanded.as_str()
            }
            _ => return Err(ImageError::invalid_hex(hex)),
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ImageError::invalid_hex(hex))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the color as `#rrggbb` (alpha is not part of the hex form).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the packed key used to match this color to grid pixels.
    #[inline]
    pub fn key(&self) -> ColorKey {
        ColorKey::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Derived luminosity used for palette ordering.
    ///
    /// Fixed Rec. 709 luma on 0-255 channels:
    /// `0.2126 * R + 0.7152 * G + 0.0722 * B`. The weights are constants in
    /// the `config` crate so the resulting layer order is reproducible.
    pub fn luminosity(&self) -> f64 {
        LUMA_WEIGHT_RED * f64::from(self.r)
            + LUMA_WEIGHT_GREEN * f64::from(self.g)
            + LUMA_WEIGHT_BLUE * f64::from(self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_packing() {
        let key = ColorKey::from_rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(key.as_u32(), 0x4433_2211);
    }

    #[test]
    fn test_key_matches_palette_color() {
        let color = PaletteColor::rgb(1, 2, 3);
        assert_eq!(color.key(), ColorKey::from_rgba(1, 2, 3, 255));
    }

    #[test]
    fn test_luminosity_extremes() {
        assert_eq!(PaletteColor::rgb(0, 0, 0).luminosity(), 0.0);
        let white = PaletteColor::rgb(255, 255, 255).luminosity();
        assert!((white - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_luminosity_green_dominates() {
        let green = PaletteColor::rgb(0, 200, 0);
        let red = PaletteColor::rgb(200, 0, 0);
        let blue = PaletteColor::rgb(0, 0, 200);
        assert!(green.luminosity() > red.luminosity());
        assert!(red.luminosity() > blue.luminosity());
    }

    #[test]
    fn test_hex_round_trip() {
        let color = PaletteColor::from_hex("#cc0002").unwrap();
        assert_eq!(color.to_hex(), "#cc0002");
    }

    #[test]
    fn test_hex_short_form() {
        assert_eq!(
            PaletteColor::from_hex("#abc").unwrap(),
            PaletteColor::rgb(0xaa, 0xbb, 0xcc)
        );
    }

    #[test]
    fn test_hex_invalid() {
        assert!(PaletteColor::from_hex("#12345").is_err());
        assert!(PaletteColor::from_hex("nothex").is_err());
    }
}
