use turf_types::{Contour, PolygonEach, Position};

use crate::measurement::EARTH_RADIUS;
use crate::units::degrees_to_radians;

/// Area of all polygons of the value on the sphere, in square meters.
///
/// Area of a polygon is the area of its outer ring minus the areas of its holes. Ring winding does not matter.
pub fn area(value: &impl PolygonEach) -> f64 {
    let mut total = 0.0;
    value.polygon_each(&mut |polygon| {
        let holes: f64 = polygon
            .inner()
            .iter()
            .map(|ring| ring_area(ring.positions()).abs())
            .sum();
        total += ring_area(polygon.outer().positions()).abs() - holes;
    });

    total
}

/// Signed area of a ring on the sphere, in square meters.
///
/// Computed with the spherical excess approximation by Chamberlain and Duquette. The sign depends on the ring
/// winding: clockwise rings have positive area. Rings with fewer than 3 positions have zero area.
pub fn ring_area(positions: &[Position]) -> f64 {
    let len = positions.len();
    if len <= 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..len {
        let lower = &positions[i];
        let middle = &positions[(i + 1) % len];
        let upper = &positions[(i + 2) % len];

        total += (degrees_to_radians(upper.lon()) - degrees_to_radians(lower.lon()))
            * degrees_to_radians(middle.lat()).sin();
    }

    total * EARTH_RADIUS * EARTH_RADIUS / 2.0
}
