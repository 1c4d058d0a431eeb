//! # Facet Emission
//!
//! Walks every pixel of the grid and emits the boundary facets of its stepped
//! column: one bottom, one top, and per-layer side walls. Side walls facing a
//! neighbor that also occupies the same layer would be internal faces, so they
//! are culled by comparing layer counts with the four cardinal neighbors.

use crate::error::ReliefError;
use crate::facet::{Axis, Facet, FacetSink};
use crate::options::BuildOptions;
use glam::DVec3;
use relief_image::{ColorKey, Palette, PixelGrid};
use std::collections::HashMap;

/// Emits every boundary facet of the stepped model into `sink`.
///
/// `palette` must already be reduced and ordered: a pixel's layer count is
/// one more than its color's palette position, so every color present in the
/// grid must appear in the palette. A missing color is a caller contract
/// violation and aborts emission with [`ReliefError::ColorNotInPalette`].
///
/// The model lies in the XZ plane with image row 0 mapped to the far (+Z)
/// edge so the relief reads right-side-up from the front. Both axes are
/// offset by half the image width, so square images center on the origin.
pub fn emit_facets(
    grid: &PixelGrid,
    palette: &Palette,
    options: &BuildOptions,
    sink: &mut impl FacetSink,
) -> Result<(), ReliefError> {
    let layers_by_key: HashMap<ColorKey, usize> = palette
        .colors()
        .iter()
        .enumerate()
        .map(|(i, c)| (c.key(), i + 1))
        .collect();

    let width = grid.width();
    let height = grid.height();
    let side = options.pixel_side_size;
    let heights = options.layer_heights();
    let half_extent = f64::from(width) * side / 2.0;

    // Layer count of a neighbor, with off-grid neighbors at zero so border
    // columns are always exposed.
    let neighbor_layers = |x: Option<u32>, y: Option<u32>| -> usize {
        match (x, y) {
            (Some(x), Some(y)) if x < width && y < height => {
                *layers_by_key.get(&grid.color_key(x, y)).unwrap_or(&0)
            }
            _ => 0,
        }
    };

    for x in 0..width {
        for y in 0..height {
            let key = grid.color_key(x, y);
            let curr_layers = *layers_by_key
                .get(&key)
                .ok_or_else(|| ReliefError::color_not_in_palette(key, x, y))?;

            let north_layers = neighbor_layers(Some(x), y.checked_sub(1));
            let south_layers = neighbor_layers(Some(x), y.checked_add(1));
            let west_layers = neighbor_layers(x.checked_sub(1), Some(y));
            let east_layers = neighbor_layers(x.checked_add(1), Some(y));

            let x1 = f64::from(x) * side - half_extent;
            let x2 = x1 + side;
            let rev_y = height - y - 1;
            let z1 = f64::from(rev_y) * side - half_extent;
            let z2 = z1 + side;

            // bottom (ground plane) facet
            sink.accept(&Facet::new(
                DVec3::new(x1, 0.0, z1),
                DVec3::new(x2, 0.0, z2),
                Axis::Y,
                -1,
            ));
            // top facet
            let top = heights.height_of(curr_layers);
            sink.accept(&Facet::new(
                DVec3::new(x1, top, z1),
                DVec3::new(x2, top, z2),
                Axis::Y,
                1,
            ));

            // side walls per layer, culled against the neighbor sharing them
            for layer in 0..curr_layers {
                let y1 = heights.height_of(layer);
                let y2 = heights.height_of(layer + 1);
                // north (image row above maps to +Z)
                if north_layers <= layer {
                    sink.accept(&Facet::new(
                        DVec3::new(x1, y1, z2),
                        DVec3::new(x2, y2, z2),
                        Axis::Z,
                        1,
                    ));
                }
                // south
                if south_layers <= layer {
                    sink.accept(&Facet::new(
                        DVec3::new(x1, y1, z1),
                        DVec3::new(x2, y2, z1),
                        Axis::Z,
                        -1,
                    ));
                }
                // west
                if west_layers <= layer {
                    sink.accept(&Facet::new(
                        DVec3::new(x1, y1, z1),
                        DVec3::new(x1, y2, z2),
                        Axis::X,
                        -1,
                    ));
                }
                // east
                if east_layers <= layer {
                    sink.accept(&Facet::new(
                        DVec3::new(x2, y1, z1),
                        DVec3::new(x2, y2, z2),
                        Axis::X,
                        1,
                    ));
                }
            }
        }
    }

    Ok(())
}
