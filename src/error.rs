//! Error types for the point-density crate.
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ReductionError {
    /// The priority sequence does not have one entry per point.
    #[error("got {priorities} priorities for {points} points, lengths must match")]
    PriorityLengthMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of priorities supplied.
        priorities: usize,
    },
    /// The separation radius was less than zero.
    #[error("separation radius must not be negative")]
    NegativeRadius,
    /// The separation radius was NaN or infinite.
    #[error("separation radius must be finite")]
    InvalidRadius,
    /// The point at this index has a coordinate that is NaN or infinite.
    #[error("point {0} has a non-finite coordinate")]
    InvalidCoordinate(usize),
    /// A selection mask was applied to a sequence of a different length.
    #[error("mask of length {mask} cannot select from {values} values")]
    MaskLengthMismatch {
        /// Number of values supplied.
        values: usize,
        /// Length of the mask.
        mask: usize,
    },
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, ReductionError>;
