//! Spatial joins between points and polygons.

use turf_types::segment::Segment;
use turf_types::{
    Contour, FeatureCollection, GeoPoint, Geometry, GeometryType, Polygon, PolygonEach, Position,
};

use crate::error::{Result, TurfError};

/// Returns true if the point lies inside one of the polygons of the value, or on the edge of one of its rings.
///
/// A polygon contains the point if its outer ring contains it and none of its holes do. Ring containment uses the
/// even-odd rule, so the winding order of the rings does not matter. Values without polygons contain nothing.
pub fn inside(point: &impl GeoPoint, polygons: &impl PolygonEach) -> bool {
    let mut is_inside = false;
    polygons.polygon_each(&mut |polygon| {
        is_inside = is_inside || polygon_contains(polygon, point);
    });

    is_inside
}

/// Selects point features lying inside any of the polygon features.
///
/// Every point feature is included at most once and in its original order. Fails with
/// [`TurfError::WrongGeometryKind`] if a feature of `points` is not a point or a feature of `polygons` is neither a
/// polygon nor a multipolygon.
pub fn points_within_polygon(
    points: &FeatureCollection,
    polygons: &FeatureCollection,
) -> Result<FeatureCollection> {
    for feature in polygons.features() {
        match feature.geometry() {
            Some(Geometry::Polygon(_)) | Some(Geometry::MultiPolygon(_)) => {}
            other => {
                return Err(TurfError::WrongGeometryKind {
                    context: "points_within_polygon".to_string(),
                    expected: GeometryType::Polygon,
                    found: other.map(Geometry::geometry_type).into(),
                })
            }
        }
    }

    let mut within = vec![];
    for feature in points.features() {
        let point = match feature.geometry() {
            Some(Geometry::Point(point)) => point,
            other => {
                return Err(TurfError::WrongGeometryKind {
                    context: "points_within_polygon".to_string(),
                    expected: GeometryType::Point,
                    found: other.map(Geometry::geometry_type).into(),
                })
            }
        };

        if polygons.features().iter().any(|polygon| inside(point, polygon)) {
            within.push(feature.clone());
        }
    }

    Ok(FeatureCollection::new(within))
}

fn polygon_contains(polygon: &Polygon, point: &impl GeoPoint) -> bool {
    let on_boundary = polygon
        .rings()
        .iter()
        .flat_map(|ring| ring.iter_segments())
        .any(|segment| segment.contains(point));
    if on_boundary {
        return true;
    }

    ring_contains(polygon.outer().positions(), point)
        && !polygon
            .inner()
            .iter()
            .any(|hole| ring_contains(hole.positions(), point))
}

fn ring_contains(ring: &[Position], point: &impl GeoPoint) -> bool {
    let (x, y) = (point.lon(), point.lat());
    let mut is_inside = false;
    for Segment(a, b) in ring.iter_segments() {
        if (a.lat() > y) != (b.lat() > y)
            && x < (b.lon() - a.lon()) * (y - a.lat()) / (b.lat() - a.lat()) + a.lon()
        {
            is_inside = !is_inside;
        }
    }

    is_inside
}
