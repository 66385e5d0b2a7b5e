use crate::box_size_heuristics::BoxSizeHeuristicFn;
use crate::{BoxType, FreeSpaceTracker, Placement};

use core::fmt::Debug;
use log::trace;

/// The box types of a packing run, in the order that they are placed, along with how many more
/// instances of each may still be placed.
#[derive(Debug)]
pub struct PlacementQueue<'a, Id> {
    pub(crate) candidates: Vec<Candidate<'a, Id>>,
}

/// A box type waiting to be placed.
#[derive(Debug)]
pub(crate) struct Candidate<'a, Id> {
    pub(crate) box_type: &'a BoxType<Id>,
    /// `None` if there is no limit.
    pub(crate) remaining: Option<usize>,
    /// Set once the box type failed to fit. Placing boxes only ever shrinks the free space, so it
    /// stays set until free regions are merged.
    pub(crate) abandoned: bool,
}

/// The box did not fit anywhere in the remaining free space.
#[derive(Debug, PartialEq)]
pub(crate) struct NoFit;

impl<'a, Id> PlacementQueue<'a, Id>
where
    Id: Debug + Clone,
{
    /// Order the box types with the heuristic. Box types that the heuristic considers equal keep
    /// the order that they were declared in.
    pub fn new(box_types: &'a [BoxType<Id>], heuristic: &BoxSizeHeuristicFn) -> Self {
        let mut candidates: Vec<Candidate<'a, Id>> = box_types
            .iter()
            .map(|box_type| Candidate {
                box_type,
                remaining: box_type.max_count,
                abandoned: false,
            })
            .collect();

        candidates.sort_by(|a, b| heuristic(&a.box_type.extent, &b.box_type.extent));

        PlacementQueue { candidates }
    }

    /// The box types in the order that they get placed.
    pub fn box_types(&self) -> impl Iterator<Item = &'a BoxType<Id>> + '_ {
        self.candidates.iter().map(|candidate| candidate.box_type)
    }

    /// Whether or not there are any box types left that might still be placed.
    pub fn is_exhausted(&self) -> bool {
        !self.candidates.iter().any(Candidate::is_live)
    }

    /// Attempt to place one instance of every box type that is still live, in order.
    ///
    /// Returns the placements that were made. An empty list means that nothing more can be
    /// placed.
    pub fn run_pass(
        &mut self,
        free_space: &mut FreeSpaceTracker,
        allow_rotation: bool,
    ) -> Vec<Placement<Id>> {
        let mut placed = Vec::new();

        for candidate in self.candidates.iter_mut().filter(|c| c.is_live()) {
            match candidate.try_place(free_space, allow_rotation) {
                Ok(placement) => placed.push(placement),
                Err(NoFit) => {
                    trace!("Abandoning box type {:?}", candidate.box_type.id);
                    candidate.abandoned = true;
                }
            }
        }

        placed
    }

    /// Give abandoned box types another chance. Call this after the free space grew, which only
    /// happens when free regions are merged.
    ///
    /// Returns how many box types were revived.
    pub fn reconsider_abandoned(&mut self) -> usize {
        let mut revived = 0;

        for candidate in self.candidates.iter_mut() {
            if candidate.abandoned && candidate.remaining != Some(0) {
                candidate.abandoned = false;
                revived += 1;
            }
        }

        revived
    }

    /// Whether or not any live box type fits somewhere in the free space right now.
    pub fn can_place_any(&self, free_space: &FreeSpaceTracker, allow_rotation: bool) -> bool {
        self.candidates
            .iter()
            .filter(|c| c.is_live())
            .any(|c| free_space.find_fit(&c.box_type.extent, allow_rotation).is_some())
    }
}

impl<'a, Id> Candidate<'a, Id>
where
    Id: Debug + Clone,
{
    fn is_live(&self) -> bool {
        !self.abandoned && self.remaining != Some(0)
    }

    fn try_place(
        &mut self,
        free_space: &mut FreeSpaceTracker,
        allow_rotation: bool,
    ) -> Result<Placement<Id>, NoFit> {
        let fit = free_space
            .find_fit(&self.box_type.extent, allow_rotation)
            .ok_or(NoFit)?;

        free_space.commit(fit.position, fit.extent);

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }

        trace!(
            "Placed {:?} at {:?} as {} ({:?})",
            self.box_type.id,
            fit.position,
            fit.extent,
            fit.orientation
        );

        Ok(Placement::new(
            self.box_type.id.clone(),
            fit.position,
            fit.extent,
            fit.orientation,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_size_heuristics::larger_box_first;
    use crate::geometry::Position;
    use crate::Container;

    /// Verify that box types are ordered by volume, then by their longest side, then by the order
    /// that they were declared in.
    #[test]
    fn orders_box_types_for_placement() {
        let box_types = vec![
            box_type(BoxId::One, 1., 1., 1.),
            box_type(BoxId::Two, 2., 2., 2.),
            box_type(BoxId::Three, 1., 1., 8.),
            box_type(BoxId::Four, 2., 2., 2.),
        ];

        let queue = PlacementQueue::new(&box_types, &larger_box_first);
        let order: Vec<BoxId> = queue.box_types().map(|b| b.id).collect();

        assert_eq!(order, vec![BoxId::Three, BoxId::Two, BoxId::Four, BoxId::One]);
    }

    /// Each pass places at most one instance of every box type.
    #[test]
    fn one_placement_per_box_type_per_pass() {
        let box_types = vec![
            box_type(BoxId::One, 1., 1., 1.),
            box_type(BoxId::Two, 2., 2., 2.),
        ];
        let mut free_space = free_space(10., 10., 10.);
        let mut queue = PlacementQueue::new(&box_types, &larger_box_first);

        let placed = queue.run_pass(&mut free_space, false);

        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].box_type_id(), &BoxId::Two);
        assert_eq!(placed[0].position(), Position::new(0., 0., 0.));
        assert_eq!(placed[1].box_type_id(), &BoxId::One);
        assert_eq!(placed[1].position(), Position::new(2., 0., 0.));
    }

    /// Verify that a box type stops being placed once its max count was reached.
    #[test]
    fn respects_max_count() {
        let box_types = vec![box_type(BoxId::One, 1., 1., 1.).with_max_count(2)];
        let mut free_space = free_space(10., 10., 10.);
        let mut queue = PlacementQueue::new(&box_types, &larger_box_first);

        assert_eq!(queue.run_pass(&mut free_space, false).len(), 1);
        assert_eq!(queue.run_pass(&mut free_space, false).len(), 1);
        assert!(queue.is_exhausted());
        assert_eq!(queue.run_pass(&mut free_space, false).len(), 0);
    }

    /// A box type that does not fit is abandoned and never tried again.
    #[test]
    fn abandons_box_types_that_do_not_fit() {
        let box_types = vec![
            box_type(BoxId::One, 20., 1., 1.),
            box_type(BoxId::Two, 1., 1., 1.).with_max_count(1),
        ];
        let mut free_space = free_space(10., 10., 10.);
        let mut queue = PlacementQueue::new(&box_types, &larger_box_first);

        let placed = queue.run_pass(&mut free_space, false);

        assert_eq!(placed.len(), 1);
        assert!(queue.candidates[0].abandoned);
        assert!(queue.is_exhausted());
    }

    /// Verify that abandoned box types are revived unless they already reached their max count.
    #[test]
    fn reconsider_abandoned_skips_exhausted_box_types() {
        let box_types = vec![
            box_type(BoxId::One, 20., 1., 1.),
            box_type(BoxId::Two, 30., 1., 1.).with_max_count(0),
        ];
        let mut free_space = free_space(10., 10., 10.);
        let mut queue = PlacementQueue::new(&box_types, &larger_box_first);

        queue.run_pass(&mut free_space, false);
        queue.candidates[0].abandoned = true;
        assert!(queue.is_exhausted());

        assert_eq!(queue.reconsider_abandoned(), 1);
        assert!(queue.candidates[0].abandoned);
        assert!(!queue.is_exhausted());
        assert!(!queue.can_place_any(&free_space, false));
    }

    /// Verify that checking for room places nothing.
    #[test]
    fn can_place_any_does_not_commit() {
        let box_types = vec![box_type(BoxId::One, 5., 5., 5.)];
        let free_space = free_space(10., 10., 10.);
        let queue = PlacementQueue::new(&box_types, &larger_box_first);

        assert!(queue.can_place_any(&free_space, false));
        assert_eq!(free_space.regions().len(), 1);
    }

    fn box_type(id: BoxId, width: f64, height: f64, depth: f64) -> BoxType<BoxId> {
        BoxType::new(id, width, height, depth).unwrap()
    }

    fn free_space(width: f64, height: f64, depth: f64) -> FreeSpaceTracker {
        FreeSpaceTracker::new(&Container::new(width, height, depth).unwrap())
    }

    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
    enum BoxId {
        One,
        Two,
        Three,
        Four,
    }
}
