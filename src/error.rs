use thiserror::Error;

/// An error that prevents a packing run from starting.
///
/// Every error is detected while validating input. Once a run has started it always finishes and
/// produces a report, even if that report places nothing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    /// A container or box type had a side that was zero, negative, NaN or infinite.
    #[error("Invalid dimension {width}x{height}x{depth}: every side must be a positive, finite number.")]
    InvalidDimension {
        #[allow(missing_docs)]
        width: f64,
        #[allow(missing_docs)]
        height: f64,
        #[allow(missing_docs)]
        depth: f64,
    },
    /// Two box types were given the same identifier.
    #[error("The box type id {0} was supplied more than once.")]
    DuplicateBoxTypeId(String),
}
