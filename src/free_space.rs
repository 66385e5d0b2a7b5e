use crate::free_region::FreeRegion;
use crate::geometry::{encloses, overlaps, Position};
use crate::placement::Orientation;
use crate::{Container, Extent};

use core::cmp::Ordering;
use log::trace;

mod coalesce;

/// Where, and in which orientation, a box fits into the free space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// The origin of the free region that the box fits into.
    pub position: Position,
    /// The box's extent after it was laid along the axes in `orientation`.
    pub extent: Extent,
    #[allow(missing_docs)]
    pub orientation: Orientation,
}

/// Keeps track of the free regions of a container that boxes can still be placed into.
///
/// Regions are kept ordered front to back, bottom to top, left to right, i.e. by the `z`, then
/// `y`, then `x` coordinate of their origin. Regions with the same origin keep the order that they
/// were created in.
#[derive(Debug, Clone)]
pub struct FreeSpaceTracker {
    pub(crate) container: Extent,
    pub(crate) regions: Vec<FreeRegion>,
}

impl FreeSpaceTracker {
    /// Start with a single free region that spans the entire container.
    pub fn new(container: &Container) -> Self {
        let regions = vec![FreeRegion::new(Position::default(), container.extent())];

        FreeSpaceTracker {
            container: container.extent(),
            regions,
        }
    }

    /// The free regions, in the order that they are searched.
    pub fn regions(&self) -> &[FreeRegion] {
        &self.regions
    }

    /// The extent of the container that this tracker covers.
    pub fn container(&self) -> Extent {
        self.container
    }

    /// Find the first free region that a box of the given extent fits into with its origin at
    /// the region's origin.
    ///
    /// Regions are searched in order. Within a region the nominal orientation is tried first,
    /// followed by the other orientations when `allow_rotation` is set.
    ///
    /// `None` means that the box can not be placed anywhere right now.
    pub fn find_fit(&self, extent: &Extent, allow_rotation: bool) -> Option<Fit> {
        let orientations = if allow_rotation {
            extent.orientations()
        } else {
            vec![(Orientation::WidthHeightDepth, *extent)]
        };

        for region in self.regions.iter() {
            for (orientation, oriented) in orientations.iter() {
                match region.incoming_can_fit(oriented) {
                    Ok(()) => {
                        return Some(Fit {
                            position: region.origin,
                            extent: *oriented,
                            orientation: *orientation,
                        });
                    }
                    Err(err) => {
                        trace!(
                            "{} {:?} does not fit at {:?}: {}",
                            oriented,
                            orientation,
                            region.origin,
                            err
                        );
                    }
                }
            }
        }

        None
    }

    /// Remove the space taken up by a placed box from the free regions.
    ///
    /// The first region whose origin is the box's position and that fully encloses the box is
    /// split into up to three regions with guillotine cuts. Any other region that the box
    /// overlaps is cut down to the slabs around the box. Afterwards regions with no volume and
    /// regions that are enclosed by another region are dropped.
    pub fn commit(&mut self, position: Position, extent: Extent) {
        let placed = FreeRegion::new(position, extent);
        let previous = std::mem::take(&mut self.regions);

        let mut host_was_split = false;

        for region in previous.into_iter() {
            if !overlaps(&region, &placed) {
                self.regions.push(region);
                continue;
            }

            if !host_was_split && region.origin.approx_eq(&position) && encloses(&region, &placed)
            {
                if let Ok(splits) = region.try_place(&extent) {
                    trace!("Guillotine split of {:?} into {:?}", region, splits);

                    self.add_regions(splits.iter().copied());
                    host_was_split = true;
                    continue;
                }
            }

            // Boxes found by `find_fit` never get here. Only a box committed away from a region
            // origin, or straddling regions, clips a region.
            self.add_regions(region.subtract(&placed));
        }

        self.prune_enclosed();
        self.restore_order();
    }

    /// Add newly created regions, skipping any that have no volume.
    fn add_regions(&mut self, new_regions: impl IntoIterator<Item = FreeRegion>) {
        for new_region in new_regions {
            if !new_region.is_degenerate() {
                self.regions.push(new_region);
            }
        }
    }

    /// Drop every region that lies entirely within another region. Of two identical regions the
    /// one that was created first is kept.
    pub(crate) fn prune_enclosed(&mut self) {
        let regions = &self.regions;

        let keep: Vec<bool> = (0..regions.len())
            .map(|idx| {
                !(0..regions.len()).any(|other| {
                    other != idx
                        && encloses(&regions[other], &regions[idx])
                        && (other < idx || !encloses(&regions[idx], &regions[other]))
                })
            })
            .collect();

        let mut keep = keep.into_iter();
        self.regions.retain(|_| keep.next().unwrap_or(true));
    }

    pub(crate) fn restore_order(&mut self) {
        self.regions.sort_by(scan_order);
    }
}

/// Front to back, then bottom to top, then left to right.
fn scan_order(a: &FreeRegion, b: &FreeRegion) -> Ordering {
    a.origin
        .z
        .total_cmp(&b.origin.z)
        .then_with(|| a.origin.y.total_cmp(&b.origin.y))
        .then_with(|| a.origin.x.total_cmp(&b.origin.x))
}
