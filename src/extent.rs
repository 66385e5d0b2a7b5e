use crate::placement::Orientation;
use crate::PackError;

use core::convert::TryFrom;
use core::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The width, height and depth of an axis aligned cuboid.
///
/// Width runs along the x axis, height along the y axis and depth along the z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Extent {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) depth: f64,
}

impl Extent {
    /// Create a new extent.
    ///
    /// Returns [`PackError::InvalidDimension`] if any side is zero, negative or not finite.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self, PackError> {
        let extent = Extent::new_unchecked(width, height, depth);
        extent.validate()?;

        Ok(extent)
    }

    /// Free regions are allowed to shrink to nothing while they are being split, so they skip
    /// validation.
    pub(crate) fn new_unchecked(width: f64, height: f64, depth: f64) -> Self {
        Extent {
            width,
            height,
            depth,
        }
    }

    pub(crate) fn from_array(sides: [f64; 3]) -> Self {
        Extent::new_unchecked(sides[0], sides[1], sides[2])
    }

    pub(crate) fn validate(&self) -> Result<(), PackError> {
        let valid = self.to_array().iter().all(|side| side.is_finite() && *side > 0.0);

        if valid {
            Ok(())
        } else {
            Err(PackError::InvalidDimension {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }

    /// The sides ordered as `[width, height, depth]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    /// The volume of the cuboid.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// The longest of the three sides.
    pub fn largest_side(&self) -> f64 {
        self.width.max(self.height).max(self.depth)
    }

    /// Every distinct way of laying this extent along the axes, starting with the nominal one.
    ///
    /// A cube has a single orientation, a box with two equal sides has three and any other box
    /// has six.
    pub fn orientations(&self) -> Vec<(Orientation, Extent)> {
        let mut distinct: Vec<(Orientation, Extent)> = Vec::with_capacity(6);

        for orientation in Orientation::ALL.iter() {
            let oriented = orientation.apply(self);

            if distinct.iter().all(|(_, seen)| *seen != oriented) {
                distinct.push((*orientation, oriented));
            }
        }

        distinct
    }
}

#[allow(missing_docs)]
impl Extent {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }
}

impl TryFrom<[f64; 3]> for Extent {
    type Error = PackError;

    fn try_from(sides: [f64; 3]) -> Result<Self, Self::Error> {
        Extent::new(sides[0], sides[1], sides[2])
    }
}

impl From<Extent> for [f64; 3] {
    fn from(extent: Extent) -> Self {
        extent.to_array()
    }
}

impl Display for Extent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that every side has to be a positive, finite number.
    #[test]
    fn rejects_invalid_sides() {
        let invalid = [
            (0.0, 1.0, 1.0),
            (1.0, -2.0, 1.0),
            (1.0, 1.0, f64::NAN),
            (f64::INFINITY, 1.0, 1.0),
        ];

        for (width, height, depth) in invalid.iter() {
            match Extent::new(*width, *height, *depth) {
                Err(PackError::InvalidDimension { .. }) => {}
                other => panic!("{}x{}x{} was accepted: {:?}", width, height, depth, other),
            }
        }
    }

    #[test]
    fn volume_and_largest_side() {
        let extent = Extent::new(2.0, 3.5, 4.0).unwrap();

        assert_eq!(extent.volume(), 28.0);
        assert_eq!(extent.largest_side(), 4.0);
    }

    /// Verify that orientations which produce the same extent are only listed once.
    #[test]
    fn orientations_are_distinct() {
        assert_eq!(Extent::new(3.0, 3.0, 3.0).unwrap().orientations().len(), 1);
        assert_eq!(Extent::new(1.0, 1.0, 2.0).unwrap().orientations().len(), 3);
        assert_eq!(Extent::new(1.0, 2.0, 3.0).unwrap().orientations().len(), 6);
    }

    /// Verify that the nominal orientation is always tried first.
    #[test]
    fn nominal_orientation_comes_first() {
        let extent = Extent::new(1.0, 2.0, 3.0).unwrap();

        assert_eq!(
            extent.orientations()[0],
            (Orientation::WidthHeightDepth, extent)
        );
    }

    #[test]
    fn displays_as_width_by_height_by_depth() {
        let extent = Extent::new(10.0, 2.5, 7.0).unwrap();

        assert_eq!(extent.to_string(), "10x2.5x7");
    }
}
