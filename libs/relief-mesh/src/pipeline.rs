//! # Build Pipeline
//!
//! The linear build sequence: validate → reduce → order → emit → build.
//! Each request runs to completion synchronously on borrowed, immutable
//! inputs; a failed stage aborts the whole request and no partial mesh ever
//! reaches the caller.

use crate::builder::MeshBuilder;
use crate::emit::emit_facets;
use crate::error::ReliefError;
use crate::options::BuildOptions;
use crate::result::MeshResult;
use relief_image::{Palette, PixelGrid};

/// Builds the stepped-height relief mesh for a quantized image.
///
/// `palette` is the candidate palette in ground-to-top order; colors the grid
/// never uses are dropped, then the remainder is reordered by
/// `options.palette_sort` before becoming layers. Repeated calls with
/// identical inputs yield identical vertex and index sequences.
///
/// # Errors
///
/// - [`ReliefError::InvalidParameter`] when a size or height is not positive
/// - [`ReliefError::ColorNotInPalette`] when a pixel's color is missing from
///   the supplied palette
///
/// # Example
///
/// ```rust
/// use relief_image::{Palette, PaletteColor, PaletteSortType, PixelGrid};
/// use relief_mesh::{build_relief, BuildOptions};
///
/// let a = PaletteColor::rgb(0, 0, 0);
/// let b = PaletteColor::rgb(255, 255, 255);
/// let grid = PixelGrid::new(2, 1, vec![a.key(), b.key()]).unwrap();
/// let palette = Palette::new(vec![a, b]);
/// let options = BuildOptions {
///     pixel_side_size: 1.0,
///     first_layer_height: 1.0,
///     other_layers_height: 0.2,
///     palette_sort: PaletteSortType::AsGiven,
/// };
///
/// let result = build_relief(&grid, &palette, &options).unwrap();
/// assert_eq!(result.palette().len(), 2);
/// assert!(result.mesh().validate());
/// ```
pub fn build_relief(
    grid: &PixelGrid,
    palette: &Palette,
    options: &BuildOptions,
) -> Result<MeshResult, ReliefError> {
    options.validate()?;

    let layered = palette.reduce(grid).sorted(options.palette_sort);

    let mut builder = MeshBuilder::new();
    emit_facets(grid, &layered, options, &mut builder)?;
    let mesh = builder.finish();

    let thresholds = options.layer_heights().color_thresholds(layered.len());
    Ok(MeshResult::new(mesh, layered, thresholds))
}
