use crate::geometry::{overlaps, Cuboid, Position, EPSILON};
use crate::Extent;

use core::fmt::{Display, Error as FmtError, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis aligned section of the container that nothing has been placed into yet.
///
/// Free regions are candidates, not a partition. Two regions may cover some of the same space.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreeRegion {
    pub(crate) origin: Position,
    pub(crate) extent: Extent,
}

/// Why a box could not be placed at the origin of a free region.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum RegionFitError {
    PlacementWiderThanRegion,
    PlacementTallerThanRegion,
    PlacementDeeperThanRegion,
}

impl Display for RegionFitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        let err = match self {
            RegionFitError::PlacementWiderThanRegion => {
                "Can not place a box inside of a free region that is narrower than the box."
            }
            RegionFitError::PlacementTallerThanRegion => {
                "Can not place a box inside of a free region that is shorter than the box."
            }
            RegionFitError::PlacementDeeperThanRegion => {
                "Can not place a box inside of a free region that is shallower than the box."
            }
        };

        f.write_str(err)
    }
}

impl FreeRegion {
    /// Create a new FreeRegion
    pub fn new(origin: Position, extent: Extent) -> Self {
        FreeRegion { origin, extent }
    }

    fn from_arrays(origin: [f64; 3], extent: [f64; 3]) -> Self {
        FreeRegion::new(Position::from_array(origin), Extent::from_array(extent))
    }

    #[allow(missing_docs)]
    pub fn origin(&self) -> Position {
        self.origin
    }

    #[allow(missing_docs)]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// A region that is flat along any axis can not hold anything.
    pub(crate) fn is_degenerate(&self) -> bool {
        self.extent.to_array().iter().any(|side| *side <= EPSILON)
    }

    /// See if a box of the given extent fits inside of this region with its origin at the
    /// region's origin.
    pub(crate) fn incoming_can_fit(&self, incoming: &Extent) -> Result<(), RegionFitError> {
        if incoming.width > self.extent.width + EPSILON {
            return Err(RegionFitError::PlacementWiderThanRegion);
        }
        if incoming.height > self.extent.height + EPSILON {
            return Err(RegionFitError::PlacementTallerThanRegion);
        }
        if incoming.depth > self.extent.depth + EPSILON {
            return Err(RegionFitError::PlacementDeeperThanRegion);
        }

        Ok(())
    }

    /// Place a box at this region's origin and return the three regions that the leftover space
    /// gets divided into. Some of them may be degenerate when the box is flush with a wall of the
    /// region.
    ///
    /// The leftover space is cut with full length guillotine cuts. The first cut is made along
    /// the axis whose leftover slab is the largest, and that slab keeps the region's full size
    /// along the other two axes. The remaining space is then trimmed to the box along that axis
    /// and the process repeats for the two axes that are left. Ties go to x, then y, then z.
    pub(crate) fn try_place(&self, incoming: &Extent) -> Result<[FreeRegion; 3], RegionFitError> {
        self.incoming_can_fit(incoming)?;

        let origin = self.origin.to_array();
        let region = self.extent.to_array();
        let placed = incoming.to_array();

        let mut bounds = region;
        let mut cut = [false; 3];
        let mut splits = [FreeRegion::new(self.origin, self.extent); 3];

        for split in splits.iter_mut() {
            let mut best: Option<(usize, f64)> = None;

            for axis in (0..3).filter(|axis| !cut[*axis]) {
                let volume = leftover_slab(&bounds, &region, &placed, axis)
                    .iter()
                    .product::<f64>();

                if best.map_or(true, |(_, best_volume)| volume > best_volume) {
                    best = Some((axis, volume));
                }
            }

            // Every pass cuts exactly one uncut axis, so there is always one left.
            let axis = match best {
                Some((axis, _)) => axis,
                None => break,
            };

            let mut slab_origin = origin;
            slab_origin[axis] += placed[axis];

            *split = FreeRegion::from_arrays(
                slab_origin,
                leftover_slab(&bounds, &region, &placed, axis),
            );

            bounds[axis] = placed[axis];
            cut[axis] = true;
        }

        Ok(splits)
    }

    /// Remove the space taken up by `placed` from this region.
    ///
    /// Used for regions that a placement only partially covers. We return the largest slab on
    /// either side of the placement along each axis, so up to six regions that may overlap each
    /// other. Sides that the placement is flush with produce nothing.
    pub(crate) fn subtract(&self, placed: &impl Cuboid) -> Vec<FreeRegion> {
        if !overlaps(self, placed) {
            return vec![*self];
        }

        let region_min = self.origin.to_array();
        let region_max = self.far_corner().to_array();
        let placed_min = placed.origin().to_array();
        let placed_max = placed.far_corner().to_array();
        let sides = self.extent.to_array();

        let mut remaining = Vec::with_capacity(6);

        for axis in 0..3 {
            if placed_min[axis] > region_min[axis] + EPSILON {
                let mut extent = sides;
                extent[axis] = placed_min[axis] - region_min[axis];

                remaining.push(FreeRegion::from_arrays(region_min, extent));
            }

            if placed_max[axis] < region_max[axis] - EPSILON {
                let mut origin = region_min;
                origin[axis] = placed_max[axis];

                let mut extent = sides;
                extent[axis] = region_max[axis] - placed_max[axis];

                remaining.push(FreeRegion::from_arrays(origin, extent));
            }
        }

        remaining
    }
}

/// The space left over beyond the placed box along `axis`, given the current bounds of the
/// space that still has to be divided.
fn leftover_slab(
    bounds: &[f64; 3],
    region: &[f64; 3],
    placed: &[f64; 3],
    axis: usize,
) -> [f64; 3] {
    let mut slab = *bounds;
    slab[axis] = (region[axis] - placed[axis]).max(0.0);
    slab
}

impl Cuboid for FreeRegion {
    fn origin(&self) -> Position {
        self.origin
    }

    fn extent(&self) -> Extent {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIGGEST: f64 = 50.;
    const MIDDLE: f64 = 25.;
    const SMALLEST: f64 = 10.;

    const FULL: f64 = 100.;

    /// If we're trying to place a box that is wider than the region we return an error
    #[test]
    fn error_if_placement_is_wider_than_region() {
        let region = region_width_height_depth(5., 20., 1.);
        let placement = extent(6., 20., 1.);

        assert_eq!(
            region.try_place(&placement).unwrap_err(),
            RegionFitError::PlacementWiderThanRegion
        );
    }

    /// If we're trying to place a box that is taller than the region we return an error
    #[test]
    fn error_if_placement_is_taller_than_region() {
        let region = region_width_height_depth(5., 20., 1.);
        let placement = extent(5., 21., 1.);

        assert_eq!(
            region.try_place(&placement).unwrap_err(),
            RegionFitError::PlacementTallerThanRegion
        );
    }

    /// If we're trying to place a box that is deeper than the region we return an error
    #[test]
    fn error_if_placement_is_deeper_than_region() {
        let region = region_width_height_depth(5., 20., 1.);
        let placement = extent(5., 20., 2.);

        assert_eq!(
            region.try_place(&placement).unwrap_err(),
            RegionFitError::PlacementDeeperThanRegion
        );
    }

    /// Sums of real numbers can land a hair past a wall, which should still count as a fit.
    #[test]
    fn fits_within_tolerance() {
        let region = region_width_height_depth(0.3, 1., 1.);
        let placement = extent(0.1 + 0.2, 1., 1.);

        assert!(region.try_place(&placement).is_ok());
    }

    /// Verify that the first cut is made along the axis with the largest leftover slab, which
    /// keeps the full size of the region along the other axes.
    #[test]
    fn cuts_the_largest_leftover_first() {
        test_splits(
            FULL,
            extent(BIGGEST, MIDDLE, SMALLEST),
            [
                region_at(0., 0., SMALLEST, FULL, FULL, FULL - SMALLEST),
                region_at(0., MIDDLE, 0., FULL, FULL - MIDDLE, SMALLEST),
                region_at(BIGGEST, 0., 0., FULL - BIGGEST, MIDDLE, SMALLEST),
            ],
        );

        test_splits(
            FULL,
            extent(SMALLEST, MIDDLE, BIGGEST),
            [
                region_at(SMALLEST, 0., 0., FULL - SMALLEST, FULL, FULL),
                region_at(0., MIDDLE, 0., SMALLEST, FULL - MIDDLE, FULL),
                region_at(0., 0., BIGGEST, SMALLEST, MIDDLE, FULL - BIGGEST),
            ],
        );

        test_splits(
            FULL,
            extent(MIDDLE, BIGGEST, SMALLEST),
            [
                region_at(0., 0., SMALLEST, FULL, FULL, FULL - SMALLEST),
                region_at(MIDDLE, 0., 0., FULL - MIDDLE, FULL, SMALLEST),
                region_at(0., BIGGEST, 0., MIDDLE, FULL - BIGGEST, SMALLEST),
            ],
        );
    }

    /// Verify that equally sized leftovers are cut in x, y, z order.
    #[test]
    fn ties_are_cut_along_x_then_y_then_z() {
        let region = region_width_height_depth(10., 10., 10.);

        assert_eq!(
            region.try_place(&extent(5., 5., 5.)).unwrap(),
            [
                region_at(5., 0., 0., 5., 10., 10.),
                region_at(0., 5., 0., 5., 5., 10.),
                region_at(0., 0., 5., 5., 5., 5.),
            ]
        );
    }

    /// A box that fills the region along an axis leaves a flat region along that axis.
    #[test]
    fn flush_placement_produces_degenerate_split() {
        let region = region_width_height_depth(4., 10., 10.);
        let splits = region.try_place(&extent(4., 4., 4.)).unwrap();

        assert_eq!(splits.iter().filter(|s| s.is_degenerate()).count(), 1);
        assert_eq!(splits[0], region_at(0., 4., 0., 4., 6., 10.));
    }

    /// Verify that subtracting a cuboid from the middle of a region leaves a slab on both sides
    /// of every axis.
    #[test]
    fn subtract_leaves_six_slabs_around_an_inner_cuboid() {
        let region = region_width_height_depth(10., 10., 10.);
        let inner = region_at(4., 4., 4., 2., 2., 2.);

        let remaining = region.subtract(&inner);

        assert_eq!(remaining.len(), 6);
        assert!(remaining.iter().all(|r| !overlaps(r, &inner)));
        assert_eq!(remaining[0], region_at(0., 0., 0., 4., 10., 10.));
        assert_eq!(remaining[1], region_at(6., 0., 0., 4., 10., 10.));
    }

    #[test]
    fn subtract_leaves_a_region_that_does_not_overlap_untouched() {
        let region = region_width_height_depth(10., 10., 10.);
        let outside = region_at(10., 0., 0., 2., 2., 2.);

        assert_eq!(region.subtract(&outside), vec![region]);
    }

    fn test_splits(
        container_dimensions: f64,
        box_to_place: Extent,
        mut expected: [FreeRegion; 3],
    ) {
        let dim = container_dimensions;
        let region = region_width_height_depth(dim, dim, dim);

        let mut splits = region.try_place(&box_to_place).unwrap();

        splits.sort_by(|a, b| region_sort_key(a).partial_cmp(&region_sort_key(b)).unwrap());
        expected.sort_by(|a, b| region_sort_key(a).partial_cmp(&region_sort_key(b)).unwrap());

        assert_eq!(splits, expected);
    }

    fn region_sort_key(region: &FreeRegion) -> [f64; 3] {
        region.origin.to_array()
    }

    fn region_at(x: f64, y: f64, z: f64, width: f64, height: f64, depth: f64) -> FreeRegion {
        FreeRegion::new(Position::new(x, y, z), extent(width, height, depth))
    }

    fn region_width_height_depth(width: f64, height: f64, depth: f64) -> FreeRegion {
        region_at(0., 0., 0., width, height, depth)
    }

    fn extent(width: f64, height: f64, depth: f64) -> Extent {
        Extent::new_unchecked(width, height, depth)
    }
}
