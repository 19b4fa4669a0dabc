//! Checks that inputs hold the expected kind of geometry.
//!
//! Every check takes the name of the calling operation to put into the error.

use turf_types::{Feature, FeatureCollection, Geometry, GeometryType, Position};

use crate::error::{GeometryKind, Result, TurfError};

/// Position of a point feature.
pub fn get_coord(feature: &Feature) -> Result<Position> {
    match feature.geometry() {
        Some(Geometry::Point(point)) => Ok(*point.coordinates()),
        other => Err(wrong_kind(
            "get_coord",
            GeometryType::Point,
            other.map(Geometry::geometry_type).into(),
        )),
    }
}

/// Checks that the geometry is of the expected type.
pub fn geojson_type(geometry: &Geometry, expected: GeometryType, name: &str) -> Result<()> {
    let found = geometry.geometry_type();
    if found != expected {
        return Err(wrong_kind(name, expected, GeometryKind::Geometry(found)));
    }

    Ok(())
}

/// Checks that the feature has a geometry of the expected type.
pub fn feature_of(feature: &Feature, expected: GeometryType, name: &str) -> Result<()> {
    match feature.geometry() {
        Some(geometry) => geojson_type(geometry, expected, name),
        None => Err(wrong_kind(name, expected, GeometryKind::Null)),
    }
}

/// Checks that the collection is not empty and every feature of it has a geometry of the expected type.
pub fn collection_of(
    collection: &FeatureCollection,
    expected: GeometryType,
    name: &str,
) -> Result<()> {
    if collection.is_empty() {
        return Err(TurfError::EmptyCollection);
    }

    collection
        .features()
        .iter()
        .try_for_each(|feature| feature_of(feature, expected, name))
}

fn wrong_kind(context: &str, expected: GeometryType, found: GeometryKind) -> TurfError {
    TurfError::WrongGeometryKind {
        context: context.to_string(),
        expected,
        found,
    }
}
