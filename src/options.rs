#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for a packing run.
///
/// ```
/// # use box_fit::PackingOptions;
/// let options = PackingOptions::default()
///     .with_rotation(true)
///     .with_max_passes(100);
///
/// assert!(options.allow_rotation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PackingOptions {
    /// Try all six axis aligned orientations of a box instead of only its nominal orientation.
    ///
    /// More boxes tend to fit, at up to six times the search cost per box.
    pub allow_rotation: bool,
    /// Stop after this many passes and report whatever was placed so far.
    pub max_passes: Option<usize>,
    /// Merge neighboring free regions after every pass.
    ///
    /// Larger regions can hold larger boxes, so this can increase the fill. It changes the
    /// arrangement compared to a run without merging.
    pub coalesce_regions: bool,
}

#[allow(missing_docs)]
impl PackingOptions {
    pub fn with_rotation(mut self, allow_rotation: bool) -> Self {
        self.allow_rotation = allow_rotation;
        self
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    pub fn with_coalesced_regions(mut self, coalesce_regions: bool) -> Self {
        self.coalesce_regions = coalesce_regions;
        self
    }
}
