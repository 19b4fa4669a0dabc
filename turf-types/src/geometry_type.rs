use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Tag of a geometry, matching the GeoJSON `type` member.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    /// Single position.
    Point,
    /// Set of positions.
    MultiPoint,
    /// Open contour.
    LineString,
    /// Set of open contours.
    MultiLineString,
    /// Polygon with optional holes.
    Polygon,
    /// Set of polygons.
    MultiPolygon,
    /// Heterogeneous set of geometries.
    GeometryCollection,
}

impl GeometryType {
    /// GeoJSON name of the geometry type.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
