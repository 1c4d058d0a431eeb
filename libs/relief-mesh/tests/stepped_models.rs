//! Worked examples: small grids with hand-checked geometry.

use glam::DVec3;
use relief_image::{Palette, PaletteColor, PaletteSortType, PixelGrid};
use relief_mesh::{build_relief, BuildOptions};

fn options_unit() -> BuildOptions {
    BuildOptions {
        pixel_side_size: 1.0,
        first_layer_height: 1.0,
        other_layers_height: 0.2,
        palette_sort: PaletteSortType::AsGiven,
    }
}

/// 2x1 grid, pixel (0,0) = A (one layer), pixel (1,0) = B (two layers).
///
/// Hand count: column A has bottom, top and three outer walls; column B has
/// bottom, top, three outer walls on its first layer and four walls on its
/// second (the wall toward A spans only heights 1.0 to 1.2, the shared
/// 0..1.0 span is culled). 14 facets, 28 triangles, 16 unique vertices.
#[test]
fn two_columns_one_step() {
    let a = PaletteColor::rgb(0, 0, 0);
    let b = PaletteColor::rgb(255, 255, 255);
    let grid = PixelGrid::new(2, 1, vec![a.key(), b.key()]).unwrap();
    let palette = Palette::new(vec![a, b]);

    let result = build_relief(&grid, &palette, &options_unit()).unwrap();
    assert_eq!(result.palette().colors(), &[a, b]);

    let mesh = result.mesh();
    assert_eq!(mesh.triangle_count(), 28);
    assert_eq!(mesh.vertex_count(), 16);
    assert!(mesh.validate());

    // Column tops at 1.0 and 1.2; footprint centered on the origin.
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::new(-1.0, 0.0, -1.0));
    assert_eq!(max, DVec3::new(1.0, 1.2, 0.0));

    let has_height = |h: f64| mesh.vertices().iter().any(|v| v.y == h);
    assert!(has_height(0.0));
    assert!(has_height(1.0));
    assert!(has_height(1.2));

    assert_eq!(result.color_thresholds(), &[1.0]);
}

/// Uniform 3x3 grid: a single flat slab. No internal walls anywhere, only
/// the twelve border walls plus nine tops and nine bottoms.
#[test]
fn uniform_grid_has_no_internal_walls() {
    let color = PaletteColor::rgb(40, 40, 40);
    let grid = PixelGrid::new(3, 3, vec![color.key(); 9]).unwrap();
    let palette = Palette::new(vec![color]);

    let result = build_relief(&grid, &palette, &options_unit()).unwrap();
    let mesh = result.mesh();

    // (9 bottoms + 9 tops + 12 border walls) * 2 triangles.
    assert_eq!(mesh.triangle_count(), 60);
    // 4x4 grid corners on two levels.
    assert_eq!(mesh.vertex_count(), 32);
    assert!(mesh.validate());

    let (min, max) = mesh.bounding_box();
    assert_eq!(min.y, 0.0);
    assert_eq!(max.y, 1.0);
}

/// An unused palette color must not create a layer: the two-color image gets
/// heights 1.0 and 1.2 even though three candidates were supplied.
#[test]
fn unused_color_creates_no_layer() {
    let a = PaletteColor::rgb(0, 0, 0);
    let b = PaletteColor::rgb(255, 255, 255);
    let unused = PaletteColor::rgb(204, 0, 2);
    let grid = PixelGrid::new(2, 1, vec![a.key(), b.key()]).unwrap();
    let palette = Palette::new(vec![a, unused, b]);

    let result = build_relief(&grid, &palette, &options_unit()).unwrap();
    assert_eq!(result.palette().len(), 2);
    let (_, max) = result.mesh().bounding_box();
    assert_eq!(max.y, 1.2);
}

/// Palette ordering decides which color sits on top: with increasing
/// luminosity the bright pixel becomes the tall column.
#[test]
fn sort_type_changes_layer_assignment() {
    let dark = PaletteColor::rgb(10, 10, 10);
    let bright = PaletteColor::rgb(240, 240, 240);
    let grid = PixelGrid::new(2, 1, vec![dark.key(), bright.key()]).unwrap();
    let palette = Palette::new(vec![bright, dark]);

    let increasing = BuildOptions {
        palette_sort: PaletteSortType::IncreasingLuminosity,
        ..options_unit()
    };
    let result = build_relief(&grid, &palette, &increasing).unwrap();
    assert_eq!(result.palette().colors(), &[dark, bright]);

    let decreasing = BuildOptions {
        palette_sort: PaletteSortType::DecreasingLuminosity,
        ..options_unit()
    };
    let result = build_relief(&grid, &palette, &decreasing).unwrap();
    assert_eq!(result.palette().colors(), &[bright, dark]);
}

/// Pixel side size scales the footprint but not the heights.
#[test]
fn pixel_side_size_scales_footprint() {
    let color = PaletteColor::rgb(40, 40, 40);
    let grid = PixelGrid::new(2, 2, vec![color.key(); 4]).unwrap();
    let palette = Palette::new(vec![color]);
    let options = BuildOptions {
        pixel_side_size: 1.4,
        ..options_unit()
    };

    let result = build_relief(&grid, &palette, &options).unwrap();
    let mesh = result.into_mesh();
    let (min, max) = mesh.bounding_box();
    assert_eq!(min.x, -1.4);
    assert_eq!(max.x, 1.4);
    assert_eq!(max.y, 1.0);
}
