//! A deterministic 3D bin packer that decides how many boxes fit into a container and where each
//! of them goes.
//!
//! Boxes are placed at exact, non-overlapping, axis aligned positions. Free space is tracked as a
//! set of free regions that get split with guillotine cuts as boxes are placed. Larger box types
//! are placed before smaller ones.
//!
//! The packer does not promise an optimal packing, but the same input always produces the same
//! arrangement.
//!
//! ```
//! use box_fit::{pack, BoxType, Container, PackingOptions};
//!
//! let container = Container::new(10., 10., 10.)?;
//! let box_types = vec![
//!     BoxType::new("large", 6., 6., 6.)?.with_max_count(1),
//!     BoxType::new("small", 4., 4., 4.)?,
//! ];
//!
//! let report = pack(container, box_types, PackingOptions::default())?;
//!
//! assert_eq!(report.placed_count(&"large"), 1);
//! assert_eq!(report.placed_count(&"small"), 7);
//!
//! for placement in report.arrangement() {
//!     assert!(placement.x() + placement.width() <= 10.);
//! }
//! # Ok::<(), box_fit::PackError>(())
//! ```

#![deny(missing_docs)]

pub use crate::box_size_heuristics::{larger_box_first, BoxSizeHeuristicFn};
pub use crate::box_type::BoxType;
pub use crate::container::Container;
pub use crate::engine::{EngineState, PackingEngine};
pub use crate::error::PackError;
pub use crate::extent::Extent;
pub use crate::free_region::FreeRegion;
pub use crate::free_space::{Fit, FreeSpaceTracker};
pub use crate::geometry::{contains, encloses, overlaps, volume, Cuboid, Position};
pub use crate::options::PackingOptions;
pub use crate::placement::{Orientation, Placement};
pub use crate::placement_queue::PlacementQueue;
pub use crate::report::PackingReport;

use core::fmt::Debug;

mod box_size_heuristics;
mod box_type;
mod container;
mod engine;
mod error;
mod extent;
mod free_region;
mod free_space;
mod geometry;
mod options;
mod placement;
mod placement_queue;
mod report;

/// Pack as many boxes as possible into the container.
///
/// Box types are placed largest first. Box types without a max count are placed until they no
/// longer fit.
///
/// Returns an error if the input is invalid. An empty list of box types is not an error and
/// produces an empty report.
pub fn pack<Id>(
    container: Container,
    box_types: Vec<BoxType<Id>>,
    options: PackingOptions,
) -> Result<PackingReport<Id>, PackError>
where
    Id: Debug + Clone + Ord,
{
    let mut engine = PackingEngine::new(container, box_types)?.with_options(options);

    Ok(engine.run())
}
