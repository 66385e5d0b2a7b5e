use crate::{Extent, PackError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A kind of box that we want to place into the container.
///
/// Without a max count as many instances as fit will be placed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxType<Id> {
    pub(crate) id: Id,
    pub(crate) extent: Extent,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) max_count: Option<usize>,
}

impl<Id> BoxType<Id> {
    /// Create a box type with no limit on how many instances get placed.
    ///
    /// Returns [`PackError::InvalidDimension`] if any side is zero, negative or not finite.
    pub fn new(id: Id, width: f64, height: f64, depth: f64) -> Result<Self, PackError> {
        Ok(BoxType::from_extent(id, Extent::new(width, height, depth)?))
    }

    /// Create a box type from an already validated extent.
    pub fn from_extent(id: Id, extent: Extent) -> Self {
        BoxType {
            id,
            extent,
            max_count: None,
        }
    }

    /// Limit the number of instances of this box type that can be placed.
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }
}

#[allow(missing_docs)]
impl<Id> BoxType<Id> {
    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn max_count(&self) -> Option<usize> {
        self.max_count
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
