//! Error types used by the crate.

use thiserror::Error;
use turf_types::{GeometryType, TurfTypesError};

/// Turf error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TurfError {
    /// Invalid geometry, e.g. a polygon ring that is not closed.
    #[error("invalid geometry: {0}")]
    Geometry(#[from] TurfTypesError),
    /// Unit name is not recognized.
    #[error("unknown unit: {0}")]
    InvalidUnit(String),
    /// A distance must not be negative.
    #[error("distance must not be negative, got {0}")]
    NegativeDistance(f64),
    /// Input is degenerate: equal start and stop values or not enough coordinates.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    /// The slice start lies beyond the end of the line.
    #[error("start distance {start} is beyond the line of length {length}")]
    StartBeyondLine {
        /// Requested start distance.
        start: f64,
        /// Total length of the line.
        length: f64,
    },
    /// Number of steps for a circle must be at least 1.
    #[error("number of steps must be at least 1, got {0}")]
    InvalidSteps(usize),
    /// Input collection has no elements.
    #[error("collection is empty")]
    EmptyCollection,
    /// The input does not hold the geometry the operation works with.
    #[error("invalid input to {context}: must be a {expected}, given {found}")]
    WrongGeometryKind {
        /// Name of the operation or argument that rejected the input.
        context: String,
        /// Expected geometry type.
        expected: GeometryType,
        /// What was given instead.
        found: GeometryKind,
    },
}

/// Geometry kind found in a rejected input, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    /// A feature without a geometry.
    Null,
    /// A geometry of the given type.
    Geometry(GeometryType),
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryKind::Null => f.write_str("null geometry"),
            GeometryKind::Geometry(t) => write!(f, "{t}"),
        }
    }
}

impl From<Option<GeometryType>> for GeometryKind {
    fn from(value: Option<GeometryType>) -> Self {
        match value {
            Some(t) => GeometryKind::Geometry(t),
            None => GeometryKind::Null,
        }
    }
}

/// Result type of the crate.
pub type Result<T> = std::result::Result<T, TurfError>;
