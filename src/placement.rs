use crate::geometry::{Cuboid, Position};
use crate::Extent;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes where an instance of a box type was placed inside of the container.
///
/// The extent is the box type's extent after it was rotated into `orientation`.
#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement<Id> {
    pub(crate) box_type_id: Id,
    pub(crate) position: Position,
    pub(crate) extent: Extent,
    pub(crate) orientation: Orientation,
}

/// Which of a box type's nominal sides lies along the x, y and z axes, in that order.
///
/// `WidthHeightDepth` is the nominal, unrotated orientation. The remaining variants are only used
/// when rotation is enabled.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
pub enum Orientation {
    WidthHeightDepth,
    WidthDepthHeight,
    HeightWidthDepth,
    HeightDepthWidth,
    DepthWidthHeight,
    DepthHeightWidth,
}

impl Orientation {
    /// Every orientation, in the order that they are tried.
    pub const ALL: [Orientation; 6] = [
        Orientation::WidthHeightDepth,
        Orientation::WidthDepthHeight,
        Orientation::HeightWidthDepth,
        Orientation::HeightDepthWidth,
        Orientation::DepthWidthHeight,
        Orientation::DepthHeightWidth,
    ];

    /// Lay a nominal extent along the axes.
    pub fn apply(&self, nominal: &Extent) -> Extent {
        let (w, h, d) = (nominal.width, nominal.height, nominal.depth);

        let (x, y, z) = match self {
            Orientation::WidthHeightDepth => (w, h, d),
            Orientation::WidthDepthHeight => (w, d, h),
            Orientation::HeightWidthDepth => (h, w, d),
            Orientation::HeightDepthWidth => (h, d, w),
            Orientation::DepthWidthHeight => (d, w, h),
            Orientation::DepthHeightWidth => (d, h, w),
        };

        Extent::new_unchecked(x, y, z)
    }

    /// Whether or not the box was rotated away from its nominal orientation.
    pub fn is_rotated(&self) -> bool {
        *self != Orientation::WidthHeightDepth
    }
}

impl<Id> Placement<Id> {
    pub(crate) fn new(
        box_type_id: Id,
        position: Position,
        extent: Extent,
        orientation: Orientation,
    ) -> Self {
        Placement {
            box_type_id,
            position,
            extent,
            orientation,
        }
    }

    /// The volume that this placement fills.
    pub fn volume(&self) -> f64 {
        self.extent.volume()
    }
}

#[allow(missing_docs)]
impl<Id> Placement<Id> {
    pub fn box_type_id(&self) -> &Id {
        &self.box_type_id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn width(&self) -> f64 {
        self.extent.width
    }

    pub fn height(&self) -> f64 {
        self.extent.height
    }

    pub fn depth(&self) -> f64 {
        self.extent.depth
    }
}

impl<Id> Cuboid for Placement<Id> {
    fn origin(&self) -> Position {
        self.position
    }

    fn extent(&self) -> Extent {
        self.extent
    }
}
