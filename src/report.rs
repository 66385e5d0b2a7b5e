use crate::{BoxType, Container, Extent, Placement};

use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The outcome of a packing run.
///
/// Everything in the report is derived from the arrangement and the container, so a text
/// reporter or a renderer only ever needs the report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PackingReport<Id: Ord> {
    pub(crate) container: Extent,
    pub(crate) arrangement: Vec<Placement<Id>>,
    pub(crate) filled_volume: f64,
    pub(crate) per_type: BTreeMap<Id, usize>,
    pub(crate) passes: usize,
    pub(crate) stopped_early: bool,
}

impl<Id> PackingReport<Id>
where
    Id: Ord + Clone,
{
    pub(crate) fn new(
        container: &Container,
        box_types: &[BoxType<Id>],
        arrangement: Vec<Placement<Id>>,
        passes: usize,
        stopped_early: bool,
    ) -> Self {
        let mut per_type: BTreeMap<Id, usize> = box_types
            .iter()
            .map(|box_type| (box_type.id.clone(), 0))
            .collect();

        let mut filled_volume = 0.0;

        for placement in arrangement.iter() {
            *per_type.entry(placement.box_type_id.clone()).or_insert(0) += 1;
            filled_volume += placement.volume();
        }

        PackingReport {
            container: container.extent(),
            arrangement,
            filled_volume,
            per_type,
            passes,
            stopped_early,
        }
    }

    /// The placed boxes, in the order that they were placed.
    pub fn arrangement(&self) -> &[Placement<Id>] {
        &self.arrangement
    }

    /// The extent of the container that was packed.
    pub fn container(&self) -> Extent {
        self.container
    }

    /// How many boxes were placed.
    pub fn total_placed(&self) -> usize {
        self.arrangement.len()
    }

    /// The sum of the volumes of every placed box.
    pub fn filled_volume(&self) -> f64 {
        self.filled_volume
    }

    /// The percentage of the container's volume that is filled, between `0` and `100`.
    ///
    /// A container without volume is reported as 0% filled.
    pub fn fill_percent(&self) -> f64 {
        let container_volume = self.container.volume();

        if container_volume <= 0.0 {
            return 0.0;
        }

        (self.filled_volume / container_volume * 100.0).clamp(0.0, 100.0)
    }

    /// The container volume that is left empty.
    pub fn unused_volume(&self) -> f64 {
        (self.container.volume() - self.filled_volume).max(0.0)
    }

    /// How many instances of each box type were placed. Every box type that was requested is
    /// present, including the ones that were never placed.
    pub fn per_type(&self) -> &BTreeMap<Id, usize> {
        &self.per_type
    }

    /// How many instances of a box type were placed.
    pub fn placed_count(&self, box_type_id: &Id) -> usize {
        self.per_type.get(box_type_id).copied().unwrap_or(0)
    }

    /// The box types that did not fit a single time.
    pub fn unplaced_types(&self) -> Vec<Id> {
        self.per_type
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// How many passes over the box types the run made.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether the run was cut short by a pass limit or a stop request before it ran out of
    /// boxes that could be placed.
    pub fn stopped_early(&self) -> bool {
        self.stopped_early
    }
}

impl<Id> Display for PackingReport<Id>
where
    Id: Ord + Clone + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Container dimensions: {}", self.container)?;
        writeln!(
            f,
            "Total boxes that fit in the container: {}",
            self.total_placed()
        )?;
        writeln!(
            f,
            "Percentage of container filled: {:.2}%",
            self.fill_percent()
        )?;

        for (id, count) in self.per_type.iter() {
            writeln!(f, "  {:?}: {}", id, count)?;
        }

        Ok(())
    }
}
