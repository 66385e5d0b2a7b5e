//! Axis aligned geometry shared by the free space tracker, the placements and the report.

use crate::Extent;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance used when comparing coordinates. Dimensions are real numbers, so sums of sides
/// rarely land exactly on a container wall.
pub(crate) const EPSILON: f64 = 1e-9;

/// A point inside of the container. The container's origin is `(0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Position { x, y, z }
    }

    /// The coordinates ordered as `[x, y, z]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub(crate) fn from_array(coords: [f64; 3]) -> Self {
        Position::new(coords[0], coords[1], coords[2])
    }

    /// Whether or not two positions are the same within [`EPSILON`].
    pub(crate) fn approx_eq(&self, other: &Position) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= EPSILON)
    }
}

/// Anything that occupies an axis aligned cuboid inside of the container.
pub trait Cuboid {
    /// The corner closest to the container's origin.
    fn origin(&self) -> Position;

    /// The size of the cuboid.
    fn extent(&self) -> Extent;

    /// The corner furthest from the container's origin.
    fn far_corner(&self) -> Position {
        let origin = self.origin();
        let extent = self.extent();

        Position::new(
            origin.x + extent.width,
            origin.y + extent.height,
            origin.z + extent.depth,
        )
    }

    /// The eight vertices of the cuboid, ordered by `x`, then `y`, then `z` bit.
    ///
    /// Useful for drawing the cuboid.
    fn corners(&self) -> [Position; 8] {
        let near = self.origin();
        let far = self.far_corner();
        let mut corners = [Position::default(); 8];

        for (idx, corner) in corners.iter_mut().enumerate() {
            *corner = Position::new(
                if idx & 1 == 0 { near.x } else { far.x },
                if idx & 2 == 0 { near.y } else { far.y },
                if idx & 4 == 0 { near.z } else { far.z },
            );
        }

        corners
    }
}

/// Whether or not the interiors of two cuboids intersect.
///
/// Cuboids that only share a face, an edge or a corner do not overlap.
pub fn overlaps(a: &impl Cuboid, b: &impl Cuboid) -> bool {
    let (a_min, a_max) = (a.origin().to_array(), a.far_corner().to_array());
    let (b_min, b_max) = (b.origin().to_array(), b.far_corner().to_array());

    (0..3).all(|axis| a_min[axis] < b_max[axis] - EPSILON && b_min[axis] < a_max[axis] - EPSILON)
}

/// Whether or not a cuboid of the given extent placed at `position` lies entirely within a
/// container of `container_extent` whose origin is `(0, 0, 0)`.
pub fn contains(container_extent: &Extent, position: &Position, extent: &Extent) -> bool {
    let bounds = container_extent.to_array();
    let start = position.to_array();
    let size = extent.to_array();

    (0..3).all(|axis| {
        start[axis] >= -EPSILON && start[axis] + size[axis] <= bounds[axis] + EPSILON
    })
}

/// Whether or not `inner` lies entirely within `outer`.
pub fn encloses(outer: &impl Cuboid, inner: &impl Cuboid) -> bool {
    let (outer_min, outer_max) = (outer.origin().to_array(), outer.far_corner().to_array());
    let (inner_min, inner_max) = (inner.origin().to_array(), inner.far_corner().to_array());

    (0..3).all(|axis| {
        inner_min[axis] >= outer_min[axis] - EPSILON && inner_max[axis] <= outer_max[axis] + EPSILON
    })
}

/// The volume of an extent.
pub fn volume(extent: &Extent) -> f64 {
    extent.volume()
}
