use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while constructing a duct model or its inputs.
#[derive(Debug, Error)]
pub enum DuctError {
    /// A duct span was zero, negative, or NaN.
    #[error("invalid duct geometry: {dimension} must be strictly positive")]
    InvalidGeometry {
        /// Which span failed validation.
        dimension: &'static str,

        /// Underlying constraint violation.
        #[source]
        source: ConstraintError,
    },

    /// The requested truncation order retains no terms.
    #[error("truncation order must be at least 1, got {0}")]
    InvalidTruncationOrder(u32),
}
