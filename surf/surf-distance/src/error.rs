//! Error types for distance computations.

use thiserror::Error;

/// Errors that can occur during distance computations.
///
/// Degenerate input is always reported explicitly; no computation in this
/// crate returns NaN or a sentinel value for an error state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// Source point set has no points where at least one is required.
    #[error("source point set is empty")]
    EmptySourceSet,

    /// Target point set has no points; distance to an empty set is undefined.
    #[error("target point set is empty; distance to an empty set is undefined")]
    EmptyTargetSet,
}

/// Result type for distance computations.
pub type DistanceResult<T> = Result<T, DistanceError>;
