//! Error types for control-point operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for control-point operations.
pub type CpResult<T> = Result<T, CpError>;

/// Errors that can occur while loading, saving or merging control points.
#[derive(Debug, Error)]
pub enum CpError {
    /// Control-point file not found.
    #[error("control point file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The two files declare incompatible coordinate conventions and must
    /// not be merged.
    #[error("useRealRAS flags differ: first file declares {first}, second declares {second}")]
    ConventionMismatch {
        /// RAS flag of the first file.
        first: bool,
        /// RAS flag of the second file.
        second: bool,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Distance computation failed.
    #[error(transparent)]
    Distance(#[from] surf_distance::DistanceError),
}
