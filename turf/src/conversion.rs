//! Conversions between geometry kinds.

use turf_types::{
    CoordEach, Feature, FeatureCollection, Geometry, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Position, Properties,
};

use crate::error::{Result, TurfError};

/// Creates a point feature for every position of the value, in encounter order.
///
/// The closing position of polygon rings is skipped, so every ring vertex gives exactly one point.
pub fn explode(value: &impl CoordEach) -> FeatureCollection {
    value
        .coord_all(true)
        .into_iter()
        .map(|position| Feature::new(Point::new(position)))
        .collect()
}

/// Merges the geometries of the collection into at most three multi-geometry features.
///
/// Points and multipoints are combined into one [`MultiPoint`], line strings and multi line strings into one
/// [`MultiLineString`], polygons and multipolygons into one [`MultiPolygon`]. The resulting features go in this order,
/// and only families present in the input get a feature. Features without geometry and geometry collections are
/// skipped. If nothing was combined, a copy of the input collection is returned.
///
/// Fails with [`TurfError::EmptyCollection`] if the collection has no features.
pub fn combine(collection: &FeatureCollection) -> Result<FeatureCollection> {
    if collection.is_empty() {
        return Err(TurfError::EmptyCollection);
    }

    let mut points: Vec<Position> = vec![];
    let mut lines: Vec<LineString> = vec![];
    let mut polygons: Vec<Polygon> = vec![];

    for (index, feature) in collection.features().iter().enumerate() {
        match feature.geometry() {
            Some(Geometry::Point(point)) => points.push(*point.coordinates()),
            Some(Geometry::MultiPoint(multi)) => points.extend_from_slice(multi.coordinates()),
            Some(Geometry::LineString(line)) => lines.push(line.clone()),
            Some(Geometry::MultiLineString(multi)) => lines.extend_from_slice(multi.lines()),
            Some(Geometry::Polygon(polygon)) => polygons.push(polygon.clone()),
            Some(Geometry::MultiPolygon(multi)) => polygons.extend_from_slice(multi.polygons()),
            Some(Geometry::GeometryCollection(_)) => {
                log::debug!("Skipping geometry collection of feature {index} while combining");
            }
            None => log::debug!("Skipping feature {index} without geometry while combining"),
        }
    }

    let mut combined = vec![];
    if !points.is_empty() {
        combined.push(Feature::new(MultiPoint::new(points)));
    }
    if !lines.is_empty() {
        combined.push(Feature::new(MultiLineString::new(lines)));
    }
    if !polygons.is_empty() {
        combined.push(Feature::new(MultiPolygon::new(polygons)));
    }

    if combined.is_empty() {
        return Ok(collection.clone());
    }

    Ok(FeatureCollection::new(combined))
}

/// Converts the rings of the polygon into a line feature.
///
/// A polygon without holes gives a [`LineString`], otherwise the result is a [`MultiLineString`] with the outer ring
/// first.
pub fn polygon_to_line(polygon: &Polygon, properties: Option<Properties>) -> Feature {
    let mut lines = polygon.inner_lines();
    let feature = if lines.is_empty() {
        Feature::new(polygon.outer_line())
    } else {
        lines.insert(0, polygon.outer_line());
        Feature::new(MultiLineString::new(lines))
    };

    match properties {
        Some(properties) => feature.with_properties(properties),
        None => feature,
    }
}

/// Converts every polygon of the multipolygon with [`polygon_to_line`].
pub fn multi_polygon_to_line(
    multi_polygon: &MultiPolygon,
    properties: Option<Properties>,
) -> FeatureCollection {
    multi_polygon
        .polygons()
        .iter()
        .map(|polygon| polygon_to_line(polygon, properties.clone()))
        .collect()
}

/// Same as [`polygon_to_line`], but takes the polygon from a feature.
///
/// If no properties are given, the properties of the feature are used. Fails with
/// [`TurfError::WrongGeometryKind`] if the feature does not hold a polygon.
pub fn polygon_feature_to_line(
    feature: &Feature,
    properties: Option<Properties>,
) -> Result<Feature> {
    match feature.geometry() {
        Some(Geometry::Polygon(polygon)) => Ok(polygon_to_line(
            polygon,
            properties.or_else(|| feature.properties.clone()),
        )),
        other => Err(TurfError::WrongGeometryKind {
            context: "polygon_to_line".to_string(),
            expected: GeometryType::Polygon,
            found: other.map(Geometry::geometry_type).into(),
        }),
    }
}

/// Same as [`multi_polygon_to_line`], but takes the multipolygon from a feature.
///
/// If no properties are given, the properties of the feature are used. Fails with
/// [`TurfError::WrongGeometryKind`] if the feature does not hold a multipolygon.
pub fn multi_polygon_feature_to_line(
    feature: &Feature,
    properties: Option<Properties>,
) -> Result<FeatureCollection> {
    match feature.geometry() {
        Some(Geometry::MultiPolygon(multi_polygon)) => Ok(multi_polygon_to_line(
            multi_polygon,
            properties.or_else(|| feature.properties.clone()),
        )),
        other => Err(TurfError::WrongGeometryKind {
            context: "multi_polygon_to_line".to_string(),
            expected: GeometryType::MultiPolygon,
            found: other.map(Geometry::geometry_type).into(),
        }),
    }
}
