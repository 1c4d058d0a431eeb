//! # Facets
//!
//! Axis-aligned rectangular surface patches and the sink trait through which
//! the emitter hands them off. Facets are transient: a sink consumes each one
//! immediately (typically into vertices and indices) and none are retained.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis a facet is perpendicular to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One axis-aligned rectangle of the model boundary, described by two
/// diagonally opposite corners, the axis it is perpendicular to, and the sign
/// of its outward normal along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    /// First diagonal corner
    pub a: DVec3,
    /// Second diagonal corner
    pub b: DVec3,
    /// Axis the rectangle is perpendicular to
    pub axis: Axis,
    /// +1 when the outward normal points along the positive axis, -1 otherwise
    pub direction: i8,
}

impl Facet {
    /// Creates a facet from two diagonal corners.
    ///
    /// Both corners must share the coordinate on the perpendicular axis; the
    /// emitter guarantees this by construction.
    pub fn new(a: DVec3, b: DVec3, axis: Axis, direction: i8) -> Self {
        debug_assert!(direction == 1 || direction == -1);
        debug_assert!(match axis {
            Axis::X => a.x == b.x,
            Axis::Y => a.y == b.y,
            Axis::Z => a.z == b.z,
        });
        Self {
            a,
            b,
            axis,
            direction,
        }
    }
}

/// Consumer of emitted facets.
///
/// Keeping emission behind this boundary leaves the emitter agnostic of how
/// facets are used: the shipped [`crate::MeshBuilder`] triangulates and
/// deduplicates them, but a streaming exporter could implement the same trait.
pub trait FacetSink {
    /// Accepts one facet of the model boundary.
    fn accept(&mut self, facet: &Facet);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_new_keeps_fields() {
        let facet = Facet::new(
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(2.0, 3.0, 1.0),
            Axis::Z,
            1,
        );
        assert_eq!(facet.axis, Axis::Z);
        assert_eq!(facet.direction, 1);
        assert_eq!(facet.a.z, facet.b.z);
    }
}
