//! Projection of points onto lines and slicing of lines.

use turf_types::segment::Segment;
use turf_types::{Contour, Feature, GeoPoint, Geometry, GeometryType, LineString, Point, Position};

use crate::error::{Result, TurfError};
use crate::measurement::{bearing, destination, distance};
use crate::units::Unit;

/// Name of the property holding the segment index in [`NearestPointOnLine`] features.
pub const INDEX_KEY: &str = "index";
/// Name of the property holding the distance in [`NearestPointOnLine`] features.
pub const DISTANCE_KEY: &str = "dist";

/// Result of [`nearest_point_on_line`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPointOnLine {
    /// Closest point of the line.
    pub point: Point,
    /// Index of the first position of the segment the point lies on.
    pub index: usize,
    /// Distance from the input point to the closest point.
    pub distance: f64,
}

impl From<NearestPointOnLine> for Feature {
    fn from(value: NearestPointOnLine) -> Self {
        Feature::new(value.point)
            .with_property(INDEX_KEY, value.index)
            .with_property(DISTANCE_KEY, value.distance)
    }
}

/// Finds the point of the line closest to the given point.
///
/// For every segment the candidates are its end positions and the intersection of the segment with the perpendicular
/// drawn through the point. The first closest candidate wins, so a point equally far from two segments is projected
/// onto the one with the smaller index.
///
/// Fails with [`TurfError::DegenerateInput`] if the line has less than 2 positions.
pub fn nearest_point_on_line(
    point: &impl GeoPoint,
    line: &[Position],
    unit: Unit,
) -> Result<NearestPointOnLine> {
    if line.len() < 2 {
        return Err(TurfError::DegenerateInput(format!(
            "nearest point on line requires at least 2 positions, got {}",
            line.len()
        )));
    }

    let mut closest = NearestPointOnLine {
        point: Point::from_lng_lat(f64::INFINITY, f64::INFINITY),
        index: 0,
        distance: f64::INFINITY,
    };

    for (index, segment) in line.iter_segments().enumerate() {
        let Segment(start, stop) = segment;
        let start_distance = distance(point, start, unit);
        let stop_distance = distance(point, stop, unit);

        let height = start_distance.max(stop_distance);
        let direction = bearing(start, stop);
        let perpendicular_1 = destination(point, height, direction + 90.0, unit)?;
        let perpendicular_2 = destination(point, height, direction - 90.0, unit)?;

        let intersection = Segment(perpendicular_1.coordinates(), perpendicular_2.coordinates())
            .intersection(&segment)
            .map(|p| (Point::new(p), distance(point, &p, unit)));

        let candidates = [
            Some((Point::new(*start), start_distance)),
            Some((Point::new(*stop), stop_distance)),
            intersection,
        ];
        for (candidate, candidate_distance) in candidates.into_iter().flatten() {
            if candidate_distance < closest.distance {
                closest = NearestPointOnLine {
                    point: candidate,
                    index,
                    distance: candidate_distance,
                };
            }
        }

        log::trace!(
            "Segment {index}: start {start_distance}, stop {stop_distance}, perpendicular hit: {}",
            intersection.is_some()
        );
    }

    Ok(closest)
}

/// Part of the line between the projections of the start and stop points onto it.
///
/// The result starts at the projection that lies on the segment with the smaller index, so the line is never reversed.
/// Fails with [`TurfError::DegenerateInput`] if the line has less than 2 positions or if the start and stop points
/// are equal.
pub fn line_slice(
    start: &impl GeoPoint,
    stop: &impl GeoPoint,
    line: &LineString,
) -> Result<LineString> {
    let positions = line.coordinates();
    if positions.len() < 2 {
        return Err(TurfError::DegenerateInput(
            "line slice requires a line with at least 2 positions".to_string(),
        ));
    }

    if start.position() == stop.position() {
        return Err(TurfError::DegenerateInput(
            "start and stop points of a line slice must differ".to_string(),
        ));
    }

    let start = nearest_point_on_line(start, positions, Unit::Kilometers)?;
    let stop = nearest_point_on_line(stop, positions, Unit::Kilometers)?;
    let (first, last) = if stop.index < start.index {
        (stop, start)
    } else {
        (start, stop)
    };

    let mut sliced = Vec::with_capacity(last.index - first.index + 2);
    sliced.push(*first.point.coordinates());
    sliced.extend_from_slice(&positions[first.index + 1..=last.index]);
    sliced.push(*last.point.coordinates());

    Ok(LineString::new(sliced))
}

/// Same as [`line_slice`], but takes the line from a feature.
///
/// Fails with [`TurfError::WrongGeometryKind`] if the feature does not hold a line string.
pub fn line_slice_feature(
    start: &impl GeoPoint,
    stop: &impl GeoPoint,
    line: &Feature,
) -> Result<LineString> {
    line_slice(start, stop, feature_line(line, "line_slice")?)
}

/// Part of the line between two distances measured along it from its first position.
///
/// Positions at the exact distances are interpolated on the segments they fall on. If the stop distance is beyond the
/// end of the line, the result continues to the end. Fails if the start distance is negative, if the stop distance
/// is not positive or equals the start distance, if the line has less than 2 positions, and with
/// [`TurfError::StartBeyondLine`] if the start distance is beyond the end of the line.
pub fn line_slice_along(
    line: &LineString,
    start_distance: f64,
    stop_distance: f64,
    unit: Unit,
) -> Result<LineString> {
    if start_distance < 0.0 {
        return Err(TurfError::NegativeDistance(start_distance));
    }
    if stop_distance < 0.0 {
        return Err(TurfError::NegativeDistance(stop_distance));
    }
    if stop_distance == 0.0 {
        return Err(TurfError::DegenerateInput(
            "stop distance must be greater than 0".to_string(),
        ));
    }

    let positions = line.coordinates();
    if positions.len() < 2 {
        return Err(TurfError::DegenerateInput(
            "line slice requires a line with at least 2 positions".to_string(),
        ));
    }
    if start_distance == stop_distance {
        return Err(TurfError::DegenerateInput(
            "start and stop distances of a line slice must differ".to_string(),
        ));
    }

    let mut travelled = 0.0;
    let mut sliced = vec![];
    for (index, position) in positions.iter().enumerate() {
        if travelled >= start_distance {
            if sliced.is_empty() && travelled > start_distance && index > 0 {
                let overshoot = travelled - start_distance;
                sliced.push(step_back(position, &positions[index - 1], overshoot, unit)?);
            }

            if travelled >= stop_distance {
                if travelled == stop_distance || index == 0 {
                    sliced.push(*position);
                } else {
                    let overshoot = travelled - stop_distance;
                    sliced.push(step_back(position, &positions[index - 1], overshoot, unit)?);
                }

                break;
            }

            sliced.push(*position);
        }

        if let Some(next) = positions.get(index + 1) {
            travelled += distance(position, next, unit);
        }
    }

    if travelled < start_distance {
        return Err(TurfError::StartBeyondLine {
            start: start_distance,
            length: travelled,
        });
    }

    Ok(LineString::new(sliced))
}

/// Same as [`line_slice_along`], but takes the line from a feature.
///
/// Fails with [`TurfError::WrongGeometryKind`] if the feature does not hold a line string.
pub fn line_slice_along_feature(
    line: &Feature,
    start_distance: f64,
    stop_distance: f64,
    unit: Unit,
) -> Result<LineString> {
    line_slice_along(
        feature_line(line, "line_slice_along")?,
        start_distance,
        stop_distance,
        unit,
    )
}

// Moves from `position` towards `previous` by `overshoot`.
fn step_back(
    position: &Position,
    previous: &Position,
    overshoot: f64,
    unit: Unit,
) -> Result<Position> {
    let point = destination(position, overshoot, bearing(position, previous), unit)?;
    Ok(*point.coordinates())
}

fn feature_line<'a>(feature: &'a Feature, context: &str) -> Result<&'a LineString> {
    match feature.geometry() {
        Some(Geometry::LineString(line)) => Ok(line),
        other => Err(TurfError::WrongGeometryKind {
            context: context.to_string(),
            expected: GeometryType::LineString,
            found: other.map(Geometry::geometry_type).into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryKind;
    use crate::measurement::length;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn positions(coords: &[(f64, f64)]) -> Vec<Position> {
        coords.iter().copied().map(Position::from).collect()
    }

    fn equator() -> Vec<Position> {
        positions(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)])
    }

    fn dc_line() -> LineString {
        LineString::new(positions(&[
            (-77.0316696166992, 38.878605901789236),
            (-77.02960968017578, 38.88194668656296),
            (-77.02033996582031, 38.88408470638821),
            (-77.02566146850586, 38.885821800123196),
            (-77.02188491821289, 38.88956308852534),
            (-77.01982498168944, 38.89236892551996),
            (-77.02291488647461, 38.89370499941828),
            (-77.02703475952148, 38.89596877223328),
        ]))
    }

    #[test]
    fn nearest_on_vertical_line() {
        let line = positions(&[(-122.457175, 37.720033), (-122.457175, 37.718242)]);
        let point = Point::from_lng_lat(-122.457025, 37.71881);

        let nearest = nearest_point_on_line(&point, &line, Unit::Kilometers).unwrap();
        assert_abs_diff_eq!(nearest.point.longitude(), -122.457175, epsilon = 1e-9);
        assert_abs_diff_eq!(nearest.point.latitude(), 37.718809989809856, epsilon = 1e-9);
        assert_eq!(nearest.index, 0);
        assert_abs_diff_eq!(nearest.distance, 0.013197798970576326, epsilon = 1e-9);
    }

    #[test]
    fn nearest_on_segment_interior() {
        let line = equator();

        let nearest = nearest_point_on_line(&Position::new(1.5, 1.0), &line, Unit::Kilometers)
            .unwrap();
        assert_abs_diff_eq!(nearest.point.longitude(), 1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(nearest.point.latitude(), 0.0, epsilon = 1e-9);
        assert_eq!(nearest.index, 1);
        assert_abs_diff_eq!(nearest.distance, 111.22983322959863, epsilon = 1e-6);

        let nearest = nearest_point_on_line(&Position::new(2.5, -1.0), &line, Unit::Kilometers)
            .unwrap();
        assert_abs_diff_eq!(nearest.point.longitude(), 2.5, epsilon = 1e-9);
        assert_eq!(nearest.index, 2);
    }

    #[test]
    fn nearest_before_line_start() {
        let nearest =
            nearest_point_on_line(&Position::new(-1.0, -1.0), &equator(), Unit::Kilometers)
                .unwrap();
        assert_eq!(nearest.point, Point::from_lng_lat(0.0, 0.0));
        assert_eq!(nearest.index, 0);
        assert_abs_diff_eq!(nearest.distance, 157.2987453847275, epsilon = 1e-6);
    }

    #[test]
    fn nearest_vertex_prefers_first_segment() {
        let nearest =
            nearest_point_on_line(&Position::new(1.0, 5.0), &equator(), Unit::Kilometers)
                .unwrap();
        assert_eq!(nearest.point, Point::from_lng_lat(1.0, 0.0));
        assert_eq!(nearest.index, 0);
        assert_abs_diff_eq!(nearest.distance, 556.1491661479931, epsilon = 1e-6);
    }

    #[test]
    fn nearest_to_vertex_itself() {
        let line = dc_line();
        for (i, position) in line.coordinates().iter().enumerate() {
            let nearest = nearest_point_on_line(position, line.coordinates(), Unit::Meters)
                .unwrap();
            assert_eq!(nearest.distance, 0.0);
            assert_eq!(nearest.point, Point::new(*position));
            assert_eq!(nearest.index, i.saturating_sub(1));
        }
    }

    #[test]
    fn nearest_on_short_line() {
        let point = Position::new(0.0, 0.0);
        assert_matches!(
            nearest_point_on_line(&point, &positions(&[(1.0, 1.0)]), Unit::Kilometers),
            Err(TurfError::DegenerateInput(_))
        );
        assert_matches!(
            nearest_point_on_line(&point, &[], Unit::Kilometers),
            Err(TurfError::DegenerateInput(_))
        );
    }

    #[test]
    fn nearest_into_feature() {
        let nearest =
            nearest_point_on_line(&Position::new(1.5, 1.0), &equator(), Unit::Kilometers)
                .unwrap();
        let feature = Feature::from(nearest);

        assert_eq!(feature.i64_property(INDEX_KEY), Some(1));
        assert_eq!(feature.f64_property(DISTANCE_KEY), Some(nearest.distance));
        assert_eq!(feature.geometry(), Some(&Geometry::Point(nearest.point)));
    }

    #[test]
    fn slice_between_points() {
        let line = LineString::new(equator());
        let sliced = line_slice(
            &Position::new(1.5, 1.0),
            &Position::new(2.5, -1.0),
            &line,
        )
        .unwrap();

        let coords = sliced.coordinates();
        assert_eq!(coords.len(), 3);
        assert_abs_diff_eq!(coords[0].lon(), 1.5, epsilon = 1e-9);
        assert_eq!(coords[1], Position::new(2.0, 0.0));
        assert_abs_diff_eq!(coords[2].lon(), 2.5, epsilon = 1e-9);
    }

    #[test]
    fn slice_is_never_reversed() {
        let line = LineString::new(equator());
        let forward = line_slice(&Position::new(1.5, 1.0), &Position::new(2.5, -1.0), &line)
            .unwrap();
        let backward = line_slice(&Position::new(2.5, -1.0), &Position::new(1.5, 1.0), &line)
            .unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn slice_within_one_segment() {
        let line = LineString::new(equator());
        let sliced = line_slice(&Position::new(1.2, 1.0), &Position::new(1.8, 1.0), &line)
            .unwrap();

        let coords = sliced.coordinates();
        assert_eq!(coords.len(), 2);
        assert_abs_diff_eq!(coords[0].lon(), 1.2, epsilon = 1e-9);
        assert_abs_diff_eq!(coords[1].lon(), 1.8, epsilon = 1e-9);
    }

    #[test]
    fn slice_degenerate() {
        let line = LineString::new(equator());
        let point = Position::new(1.0, 1.0);
        assert_matches!(
            line_slice(&point, &point, &line),
            Err(TurfError::DegenerateInput(_))
        );
        assert_matches!(
            line_slice(&point, &Position::new(2.0, 1.0), &LineString::new(vec![point])),
            Err(TurfError::DegenerateInput(_))
        );
    }

    #[test]
    fn slice_feature_requires_line() {
        let feature = Feature::new(Point::from_lng_lat(1.0, 1.0));
        assert_matches!(
            line_slice_feature(&Position::new(0.0, 0.0), &Position::new(1.0, 0.0), &feature),
            Err(TurfError::WrongGeometryKind {
                expected: GeometryType::LineString,
                found: GeometryKind::Geometry(GeometryType::Point),
                ..
            })
        );
        assert_matches!(
            line_slice_feature(
                &Position::new(0.0, 0.0),
                &Position::new(1.0, 0.0),
                &Feature::empty()
            ),
            Err(TurfError::WrongGeometryKind {
                found: GeometryKind::Null,
                ..
            })
        );

        let feature = Feature::new(LineString::new(equator()));
        assert!(
            line_slice_feature(&Position::new(0.5, 0.0), &Position::new(1.5, 0.0), &feature)
                .is_ok()
        );
    }

    #[test]
    fn slice_along_middle() {
        let sliced = line_slice_along(&dc_line(), 0.5, 1.2, Unit::Miles).unwrap();
        assert_eq!(sliced.len(), 4);
        assert_abs_diff_eq!(length(&sliced, Unit::Miles), 0.7, epsilon = 1e-6);
    }

    #[test]
    fn slice_along_from_start() {
        let line = dc_line();
        let sliced = line_slice_along(&line, 0.0, 0.3, Unit::Miles).unwrap();
        assert_eq!(sliced.len(), 3);
        assert_eq!(sliced.coordinates()[0], line.coordinates()[0]);
        assert_abs_diff_eq!(length(&sliced, Unit::Miles), 0.3, epsilon = 1e-6);
    }

    #[test]
    fn slice_along_past_the_end() {
        let line = dc_line();
        let total = length(&line, Unit::Miles);
        let sliced = line_slice_along(&line, 1.0, 5.0, Unit::Miles).unwrap();

        assert_eq!(sliced.len(), 6);
        assert_eq!(sliced.coordinates().last(), line.coordinates().last());
        assert_abs_diff_eq!(length(&sliced, Unit::Miles), total - 1.0, epsilon = 1e-6);
    }

    #[test]
    fn slice_along_within_one_segment() {
        let sliced = line_slice_along(&dc_line(), 0.1, 0.15, Unit::Miles).unwrap();
        assert_eq!(sliced.len(), 2);
        assert_abs_diff_eq!(length(&sliced, Unit::Miles), 0.05, epsilon = 1e-6);
    }

    #[test]
    fn slice_along_invalid_distances() {
        let line = dc_line();
        assert_matches!(
            line_slice_along(&line, -1.0, 1.0, Unit::Miles),
            Err(TurfError::NegativeDistance(_))
        );
        assert_matches!(
            line_slice_along(&line, 0.0, -1.0, Unit::Miles),
            Err(TurfError::NegativeDistance(_))
        );
        assert_matches!(
            line_slice_along(&line, 0.0, 0.0, Unit::Miles),
            Err(TurfError::DegenerateInput(_))
        );
        assert_matches!(
            line_slice_along(&line, 0.5, 0.5, Unit::Miles),
            Err(TurfError::DegenerateInput(_))
        );
        assert_matches!(
            line_slice_along(&LineString::new(positions(&[(1.0, 1.0)])), 0.0, 1.0, Unit::Miles),
            Err(TurfError::DegenerateInput(_))
        );
    }

    #[test]
    fn slice_along_start_beyond_line() {
        assert_matches!(
            line_slice_along(&dc_line(), 3.0, 4.0, Unit::Miles),
            Err(TurfError::StartBeyondLine { start, length })
                if start == 3.0 && (length - 2.1003530084165414).abs() < 1e-9
        );
    }

    #[test]
    fn slice_along_feature_requires_line() {
        let feature = Feature::new(Point::from_lng_lat(1.0, 1.0));
        assert_matches!(
            line_slice_along_feature(&feature, 0.0, 1.0, Unit::Miles),
            Err(TurfError::WrongGeometryKind { .. })
        );

        let feature = Feature::new(dc_line());
        let sliced = line_slice_along_feature(&feature, 0.5, 1.2, Unit::Miles).unwrap();
        assert_eq!(sliced.len(), 4);
    }
}
