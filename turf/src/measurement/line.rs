use turf_types::segment::Segment;
use turf_types::{Contour, LineEach, LineString, Point};

use crate::error::{Result, TurfError};
use crate::measurement::{bearing, destination, distance};
use crate::units::Unit;

/// Point at the given distance along the line.
///
/// Distances not greater than zero give the first position of the line, distances beyond its end give the last one.
/// Fails if the line has no positions.
pub fn along(line: &LineString, distance_along: f64, unit: Unit) -> Result<Point> {
    let (Some(first), Some(last)) = (line.coordinates().first(), line.coordinates().last()) else {
        return Err(TurfError::DegenerateInput(
            "line must have at least one position".to_string(),
        ));
    };

    if distance_along <= 0.0 {
        return Ok(Point::new(*first));
    }

    let mut travelled = 0.0;
    for Segment(start, end) in line.iter_segments() {
        let segment_length = distance(start, end, unit);
        if travelled + segment_length >= distance_along {
            let overshoot = distance_along - travelled;
            if overshoot == segment_length {
                return Ok(Point::new(*end));
            }

            return destination(start, overshoot, bearing(start, end), unit);
        }

        travelled += segment_length;
    }

    Ok(Point::new(*last))
}

/// Total length of all lines and polygon rings of the value.
///
/// Points have zero length, as does a line with a single position.
pub fn length(value: &impl LineEach, unit: Unit) -> f64 {
    let mut total = 0.0;
    value.line_each(&mut |positions| {
        total += positions
            .iter_segments()
            .map(|Segment(start, end)| distance(start, end, unit))
            .sum::<f64>();
    });

    total
}
