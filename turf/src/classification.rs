//! Selection of points by their distance to a target.

use turf_types::{Feature, FeatureCollection, GeoPoint, Geometry, GeometryType, Point};

use crate::error::{Result, TurfError};
use crate::measurement::distance;
use crate::units::Unit;

/// Point of the list closest to the target.
///
/// If several points are equally close, the first of them is returned. Fails with [`TurfError::EmptyCollection`] if
/// the list is empty.
pub fn nearest_point(target: &impl GeoPoint, points: &[Point]) -> Result<Point> {
    closest(target, points.iter().map(|point| (point, point)))
        .copied()
        .ok_or(TurfError::EmptyCollection)
}

/// Point feature of the collection closest to the target.
///
/// Fails with [`TurfError::EmptyCollection`] if the collection is empty and with [`TurfError::WrongGeometryKind`] if
/// one of its features is not a point.
pub fn nearest_point_feature<'a>(
    target: &impl GeoPoint,
    points: &'a FeatureCollection,
) -> Result<&'a Feature> {
    let mut candidates = Vec::with_capacity(points.len());
    for feature in points.features() {
        match feature.geometry() {
            Some(Geometry::Point(point)) => candidates.push((feature, point)),
            other => {
                return Err(TurfError::WrongGeometryKind {
                    context: "nearest_point".to_string(),
                    expected: GeometryType::Point,
                    found: other.map(Geometry::geometry_type).into(),
                })
            }
        }
    }

    closest(target, candidates).ok_or(TurfError::EmptyCollection)
}

fn closest<'a, T>(
    target: &impl GeoPoint,
    candidates: impl IntoIterator<Item = (&'a T, &'a Point)>,
) -> Option<&'a T> {
    let mut best: Option<(&T, f64)> = None;
    for (item, point) in candidates {
        let candidate_distance = distance(target, point, Unit::Kilometers);
        let is_closer = match best {
            Some((_, best_distance)) => candidate_distance < best_distance,
            None => true,
        };
        if is_closer {
            best = Some((item, candidate_distance));
        }
    }

    best.map(|(item, _)| item)
}
