//! Measurements on the sphere: distances, bearings, lengths, areas and bounding boxes.

mod area;
pub use area::*;

mod bbox;
pub use bbox::*;

mod distance;
pub use distance::*;

mod line;
pub use line::*;

/// Earth radius in meters used to calculate areas.
pub const EARTH_RADIUS: f64 = 6_378_137.0;
