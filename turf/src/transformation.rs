//! Polygons built around points.

use turf_types::{GeoPoint, Polygon};

use crate::error::{Result, TurfError};
use crate::measurement::destination;
use crate::units::Unit;

/// Number of vertices [`circle`] is usually built with.
pub const DEFAULT_STEPS: usize = 64;

/// Approximates a circle on the Earth surface by a polygon with `steps` vertices.
///
/// The vertices are placed at the given radius from the center at evenly spaced bearings, starting from the north and
/// going clockwise. The ring of the result has `steps + 1` positions.
///
/// Fails with [`TurfError::InvalidSteps`] if `steps` is 0. One or two steps do not give a valid ring, so the polygon
/// construction fails for them.
pub fn circle(center: &impl GeoPoint, radius: f64, steps: usize, unit: Unit) -> Result<Polygon> {
    if steps < 1 {
        return Err(TurfError::InvalidSteps(steps));
    }

    let mut ring = Vec::with_capacity(steps + 1);
    for step in 0..steps {
        let bearing = step as f64 * 360.0 / steps as f64;
        ring.push(*destination(center, radius, bearing, unit)?.coordinates());
    }
    ring.push(ring[0]);

    Ok(Polygon::new(vec![ring])?)
}
