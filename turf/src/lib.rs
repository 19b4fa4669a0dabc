//! Turf is a set of geospatial algorithms working on GeoJSON geometries on a spherical Earth.
//!
//! The geometry model lives in the [`turf_types`] crate, which is re-exported from here. Algorithms are grouped into
//! modules by what they do:
//!
//! * [`units`] - units of length and conversions between them,
//! * [`measurement`] - distances, bearings, lengths, areas and bounding boxes,
//! * [`misc`] - projecting points onto lines and slicing lines,
//! * [`joins`] - point in polygon tests,
//! * [`conversion`] - exploding, combining and converting geometries,
//! * [`transformation`] - circles around a point,
//! * [`classification`] - the nearest of a set of points,
//! * [`invariant`] - checks of input geometry kinds.
//!
//! All algorithms are pure functions of their arguments. Everything that can fail returns [`Result`] with a
//! [`TurfError`] describing the problem.
//!
//! ```no_run
//! use turf::measurement::{distance, length};
//! use turf::turf_types::{LineString, Point, Position};
//! use turf::Unit;
//!
//! let from = Point::from_lng_lat(-75.343, 39.984);
//! let to = Point::from_lng_lat(-75.534, 39.123);
//! println!("{} miles", distance(&from, &to, Unit::Miles));
//!
//! let line: LineString = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]
//!     .into_iter()
//!     .map(Position::from)
//!     .collect();
//! println!("{} km", length(&line, Unit::Kilometers));
//! ```

pub mod classification;
pub mod conversion;
pub mod error;
pub mod invariant;
pub mod joins;
pub mod measurement;
pub mod misc;
pub mod transformation;
pub mod units;

pub use error::{GeometryKind, Result, TurfError};
pub use units::Unit;

// Reexport turf_types
pub use turf_types;
