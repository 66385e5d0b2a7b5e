use crate::free_region::FreeRegion;
use crate::geometry::{Cuboid, Position, EPSILON};
use crate::{Extent, FreeSpaceTracker};

use core::ops::Range;
use log::trace;

impl FreeSpaceTracker {
    /// Over many placements the free space gets cut into neighboring regions that could be
    /// combined into one larger region.
    ///
    /// Combining regions is desirable because a larger region allows you to place larger boxes
    /// that might not fit into any of the smaller regions.
    ///
    /// Two regions are combined when they share an entire face. The region at
    /// `region_index` is compared against every region in `compare_to_indices` and merged with the
    /// first neighbor found. Returns whether or not a merge happened. A merge re-orders the
    /// regions, so indices from before the call should not be reused afterwards.
    ///
    /// Fully coalescing the tracker is O(n^2) in the number of free regions per merge, so this
    /// method lets you split that work up. See [`FreeSpaceTracker::coalesce`] to do it all at once.
    ///
    /// Coalescing changes which regions later boxes are placed into, so a run that coalesces will
    /// generally produce a different arrangement than one that does not.
    pub fn coalesce_region(
        &mut self,
        region_index: usize,
        compare_to_indices: Range<usize>,
    ) -> bool {
        if region_index >= self.regions.len() {
            return false;
        }

        let end = compare_to_indices.end.min(self.regions.len());

        for other in compare_to_indices.start..end {
            if other == region_index {
                continue;
            }

            if let Some(merged) = merge(&self.regions[region_index], &self.regions[other]) {
                trace!(
                    "Merged {:?} and {:?} into {:?}",
                    self.regions[region_index],
                    self.regions[other],
                    merged
                );

                self.regions[region_index] = merged;
                self.regions.remove(other);

                self.prune_enclosed();
                self.restore_order();

                return true;
            }
        }

        false
    }

    /// Merge neighboring regions until no two regions share an entire face.
    ///
    /// Returns the number of merges that were made.
    pub fn coalesce(&mut self) -> usize {
        let mut merges = 0;
        let mut idx = 0;

        while idx < self.regions.len() {
            let len = self.regions.len();

            if self.coalesce_region(idx, 0..len) {
                merges += 1;
                idx = 0;
            } else {
                idx += 1;
            }
        }

        merges
    }
}

/// Combine two regions if they line up exactly on two axes and touch along the third.
fn merge(a: &FreeRegion, b: &FreeRegion) -> Option<FreeRegion> {
    let (a_min, a_max) = (a.origin().to_array(), a.far_corner().to_array());
    let (b_min, b_max) = (b.origin().to_array(), b.far_corner().to_array());

    let same = |lhs: f64, rhs: f64| (lhs - rhs).abs() <= EPSILON;

    for axis in 0..3 {
        let others_line_up = (0..3)
            .filter(|other| *other != axis)
            .all(|other| same(a_min[other], b_min[other]) && same(a_max[other], b_max[other]));

        if !others_line_up {
            continue;
        }

        if same(a_max[axis], b_min[axis]) || same(b_max[axis], a_min[axis]) {
            let mut origin = a_min;
            let mut extent = a.extent.to_array();

            origin[axis] = a_min[axis].min(b_min[axis]);
            extent[axis] = a_max[axis].max(b_max[axis]) - origin[axis];

            return Some(FreeRegion::new(
                Position::new(origin[0], origin[1], origin[2]),
                Extent::new_unchecked(extent[0], extent[1], extent[2]),
            ));
        }
    }

    None
}
