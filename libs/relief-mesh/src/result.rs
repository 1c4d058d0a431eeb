//! # Mesh Result
//!
//! The output contract of a build request: the triangulated mesh, the final
//! reduced and ordered palette, and the heights at which the visible color
//! changes. The caller owns the result; the pipeline keeps no reference.

use crate::mesh::Mesh;
use relief_image::Palette;

/// Output of one successful mesh build.
///
/// `palette` is the reduced, ordered palette the geometry was built against:
/// layer `i` of the model carries `palette.colors()[i]`. `color_thresholds`
/// holds the absolute heights where color `i` gives way to color `i + 1`, so
/// a renderer or slicer can reconstruct the height-to-color mapping without
/// re-deriving layer arithmetic.
#[derive(Debug)]
pub struct MeshResult {
    mesh: Mesh,
    palette: Palette,
    color_thresholds: Vec<f64>,
}

impl MeshResult {
    pub(crate) fn new(mesh: Mesh, palette: Palette, color_thresholds: Vec<f64>) -> Self {
        Self {
            mesh,
            palette,
            color_thresholds,
        }
    }

    /// The watertight triangle mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The reduced, ordered palette, ground layer first.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Heights where the visible color changes, one per layer boundary.
    pub fn color_thresholds(&self) -> &[f64] {
        &self.color_thresholds
    }

    /// Consumes the result, handing the mesh to the caller.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}
