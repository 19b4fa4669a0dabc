//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TurfTypesError {
    /// A polygon ring has fewer than 4 positions or its first and last positions differ.
    #[error("invalid linear ring: {0}")]
    InvalidRing(String),
    /// A polygon was constructed without any ring.
    #[error("polygon must have an outer ring")]
    EmptyPolygon,
    /// A position must have 2 or 3 dimensions.
    #[error("position must have 2 or 3 dimensions, got {0}")]
    InvalidPosition(usize),
    /// A bounding box must have exactly 4 values.
    #[error("bounding box must have 4 values, got {0}")]
    InvalidBoundingBox(usize),
}
