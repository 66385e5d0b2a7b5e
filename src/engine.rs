use crate::box_size_heuristics::larger_box_first;
use crate::placement_queue::PlacementQueue;
use crate::{
    BoxType, Container, FreeSpaceTracker, PackError, PackingOptions, PackingReport, Placement,
};

use core::fmt::Debug;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Where a [`PackingEngine`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// The input was validated and nothing has been placed yet.
    Ready,
    /// Passes are being made over the box types.
    Packing,
    /// The run finished. This state is terminal.
    Done,
}

/// Packs one container with a list of box types.
///
/// Each engine owns its free space and arrangement, so separate engines can run on separate
/// threads without any locking.
///
/// ```
/// # use box_fit::{BoxType, Container, PackingEngine};
/// let container = Container::new(10., 10., 10.)?;
/// let box_types = vec![BoxType::new("cube", 5., 5., 5.)?];
///
/// let mut engine = PackingEngine::new(container, box_types)?;
/// let report = engine.run();
///
/// assert_eq!(report.total_placed(), 8);
/// # Ok::<(), box_fit::PackError>(())
/// ```
#[derive(Debug)]
pub struct PackingEngine<Id> {
    container: Container,
    box_types: Vec<BoxType<Id>>,
    options: PackingOptions,
    state: EngineState,
    stop_requested: Arc<AtomicBool>,
    arrangement: Vec<Placement<Id>>,
    passes: usize,
    stopped_early: bool,
}

impl<Id> PackingEngine<Id>
where
    Id: Debug + Clone + Ord,
{
    /// Validate the input and create an engine in the [`EngineState::Ready`] state.
    ///
    /// Fails if the container or any box type has an invalid dimension, or if two box types share
    /// an id.
    pub fn new(container: Container, box_types: Vec<BoxType<Id>>) -> Result<Self, PackError> {
        container.extent.validate()?;

        let mut seen = BTreeSet::new();

        for box_type in box_types.iter() {
            box_type.extent.validate()?;

            if !seen.insert(&box_type.id) {
                return Err(PackError::DuplicateBoxTypeId(format!("{:?}", box_type.id)));
            }
        }

        Ok(PackingEngine {
            container,
            box_types,
            options: PackingOptions::default(),
            state: EngineState::Ready,
            stop_requested: Arc::new(AtomicBool::new(false)),
            arrangement: Vec::new(),
            passes: 0,
            stopped_early: false,
        })
    }

    #[allow(missing_docs)]
    pub fn with_options(mut self, options: PackingOptions) -> Self {
        self.options = options;
        self
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[allow(missing_docs)]
    pub fn options(&self) -> &PackingOptions {
        &self.options
    }

    /// A flag that can be set from another thread to end the run once the current pass is
    /// finished. The report then holds everything that was placed up to that point.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_requested)
    }

    /// Place boxes until a pass places nothing, the pass limit is reached or a stop is requested.
    ///
    /// Each pass tries to place one instance of every box type that can still be placed, largest
    /// box types first. A box type that did not fit is skipped in later passes, unless merging
    /// free regions made room for it.
    ///
    /// The report is only marked as stopped early if the pass limit or a stop request ended the
    /// run while there was still a box that fit.
    ///
    /// The run never fails. Once the engine is [`EngineState::Done`] calling this again returns
    /// the same report without placing anything.
    pub fn run(&mut self) -> PackingReport<Id> {
        if self.state == EngineState::Done {
            return self.report();
        }

        if self.box_types.is_empty() {
            warn!("No box types were supplied, nothing will be packed");
            self.state = EngineState::Done;
            return self.report();
        }

        self.state = EngineState::Packing;

        let mut free_space = FreeSpaceTracker::new(&self.container);
        let mut queue = PlacementQueue::new(&self.box_types, &larger_box_first);

        loop {
            if queue.is_exhausted() {
                break;
            }

            let stop_requested = self.stop_requested.load(Ordering::Relaxed);
            let pass_limit_reached = self
                .options
                .max_passes
                .map_or(false, |max_passes| self.passes >= max_passes);

            if stop_requested || pass_limit_reached {
                // A run whose next pass would place nothing finished on its own.
                if queue.can_place_any(&free_space, self.options.allow_rotation) {
                    warn!(
                        "Stopping after {} passes (stop requested: {}, pass limit reached: {})",
                        self.passes, stop_requested, pass_limit_reached
                    );
                    self.stopped_early = true;
                }
                break;
            }

            let placed = queue.run_pass(&mut free_space, self.options.allow_rotation);
            self.passes += 1;

            debug!(
                "Pass {} placed {} boxes, {} free regions remain",
                self.passes,
                placed.len(),
                free_space.regions().len()
            );

            if placed.is_empty() {
                break;
            }

            self.arrangement.extend(placed);

            if self.options.coalesce_regions && free_space.coalesce() > 0 {
                let revived = queue.reconsider_abandoned();
                debug!("Merged free regions, {} box types get another try", revived);
            }
        }

        self.state = EngineState::Done;

        let report = self.report();

        debug!(
            "Placed {} boxes in {} passes, {:.2}% filled",
            report.total_placed(),
            report.passes(),
            report.fill_percent()
        );

        report
    }

    fn report(&self) -> PackingReport<Id> {
        PackingReport::new(
            &self.container,
            &self.box_types,
            self.arrangement.clone(),
            self.passes,
            self.stopped_early,
        )
    }
}
