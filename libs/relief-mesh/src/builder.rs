//! # Mesh Builder
//!
//! Accumulates emitted facets into an indexed triangle mesh, reusing vertex
//! indices for exactly coincident positions and triangulating each rectangle
//! with a winding order that keeps normals pointing outward.

use crate::facet::{Axis, Facet, FacetSink};
use crate::mesh::Mesh;
use glam::DVec3;
use std::collections::HashMap;

/// Triangle corner orders for the two possible outward-normal senses.
///
/// Corners are gathered in a fixed per-axis order; these two rotations pick
/// which side of the rectangle the normal faces, using the counter-clockwise
/// front-face convention of right-handed coordinates.
const WINDING_POSITIVE: [usize; 6] = [0, 3, 2, 0, 2, 1];
const WINDING_NEGATIVE: [usize; 6] = [0, 2, 3, 0, 1, 2];

/// Builds a [`Mesh`] from rectangular facets with vertex deduplication.
///
/// Vertex identity is exact bit-level coordinate equality, not epsilon
/// matching. This is a deliberate precision contract: every coordinate the
/// emitter produces comes from a small closed set of arithmetic combinations
/// (`pixel index * side size` and layer heights), so identical logical corners
/// always yield identical bit patterns and exact lookup reliably merges them.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use relief_mesh::{Axis, Facet, FacetSink, MeshBuilder};
///
/// let mut builder = MeshBuilder::new();
/// builder.accept(&Facet::new(
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 1.0),
///     Axis::Y,
///     1,
/// ));
/// let mesh = builder.finish();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: Mesh,
    // flat composite key over the three coordinates' bit patterns
    index_by_position: HashMap<[u64; 3], u32>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex, returning the existing index when an exactly equal
    /// position was added before in this build session.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let key = [
            position.x.to_bits(),
            position.y.to_bits(),
            position.z.to_bits(),
        ];
        if let Some(&index) = self.index_by_position.get(&key) {
            return index;
        }
        let index = self.mesh.add_vertex(position);
        self.index_by_position.insert(key, index);
        index
    }

    /// Number of vertices accumulated so far.
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Finalizes the build and returns the mesh.
    pub fn finish(self) -> Mesh {
        self.mesh
    }

    /// Converts one rectangular facet into two triangles.
    ///
    /// The corners are gathered in a fixed order per perpendicular axis, with
    /// the two free coordinates sorted ascending so coincident facets always
    /// produce the same corner sequence. The Z-perpendicular walk runs
    /// opposite to the X/Y ones, so its direction is negated before choosing
    /// the winding.
    fn add_rect_facet(&mut self, facet: &Facet) {
        let Facet {
            a,
            b,
            axis,
            mut direction,
        } = *facet;

        let corners: [DVec3; 4] = match axis {
            Axis::Z => {
                let (x1, x2) = min_max(a.x, b.x);
                let (y1, y2) = min_max(a.y, b.y);
                direction = -direction;
                [
                    DVec3::new(x1, y1, a.z),
                    DVec3::new(x2, y1, a.z),
                    DVec3::new(x2, y2, a.z),
                    DVec3::new(x1, y2, a.z),
                ]
            }
            Axis::X => {
                let (z1, z2) = min_max(a.z, b.z);
                let (y1, y2) = min_max(a.y, b.y);
                [
                    DVec3::new(a.x, y1, z1),
                    DVec3::new(a.x, y1, z2),
                    DVec3::new(a.x, y2, z2),
                    DVec3::new(a.x, y2, z1),
                ]
            }
            Axis::Y => {
                let (x1, x2) = min_max(a.x, b.x);
                let (z1, z2) = min_max(a.z, b.z);
                [
                    DVec3::new(x1, a.y, z1),
                    DVec3::new(x2, a.y, z1),
                    DVec3::new(x2, a.y, z2),
                    DVec3::new(x1, a.y, z2),
                ]
            }
        };

        let indices = corners.map(|c| self.add_vertex(c));
        let winding = if direction < 0 {
            &WINDING_NEGATIVE
        } else {
            &WINDING_POSITIVE
        };
        self.mesh
            .add_triangle(indices[winding[0]], indices[winding[1]], indices[winding[2]]);
        self.mesh
            .add_triangle(indices[winding[3]], indices[winding[4]], indices[winding[5]]);
    }
}

impl FacetSink for MeshBuilder {
    fn accept(&mut self, facet: &Facet) {
        self.add_rect_facet(facet);
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
