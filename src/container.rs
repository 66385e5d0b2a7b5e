use crate::geometry::{Cuboid, Position};
use crate::{Extent, PackError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The space that boxes get packed into. Its origin is fixed at `(0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Container {
    pub(crate) extent: Extent,
}

impl Container {
    /// Returns [`PackError::InvalidDimension`] if any side is zero, negative or not finite.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self, PackError> {
        Ok(Container::from_extent(Extent::new(width, height, depth)?))
    }

    #[allow(missing_docs)]
    pub fn from_extent(extent: Extent) -> Self {
        Container { extent }
    }

    #[allow(missing_docs)]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// The volume available for packing.
    pub fn volume(&self) -> f64 {
        self.extent.volume()
    }
}

impl Cuboid for Container {
    fn origin(&self) -> Position {
        Position::default()
    }

    fn extent(&self) -> Extent {
        self.extent
    }
}
