use serde::{Deserialize, Serialize};

use crate::error::TurfTypesError;
use crate::geometry_type::GeometryType;
use crate::line_string::{LineString, MultiLineString};
use crate::point::{MultiPoint, Point};
use crate::polygon::{MultiPolygon, Polygon};
use crate::position::Position;

/// Any GeoJSON geometry.
///
/// Deserialization validates polygon rings, so a successfully parsed `Geometry` always upholds the model invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometryRepr", into = "GeometryRepr")]
pub enum Geometry {
    /// Point geometry.
    Point(Point),
    /// Multipoint geometry.
    MultiPoint(MultiPoint),
    /// Line string geometry.
    LineString(LineString),
    /// Multi line string geometry.
    MultiLineString(MultiLineString),
    /// Polygon geometry.
    Polygon(Polygon),
    /// Multipolygon geometry.
    MultiPolygon(MultiPolygon),
    /// Collection of geometries.
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Type tag of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns the point if this is a point geometry.
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the line string if this is a line string geometry.
    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the polygon if this is a polygon geometry.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the multipolygon if this is a multipolygon geometry.
    pub fn as_multi_polygon(&self) -> Option<&MultiPolygon> {
        match self {
            Geometry::MultiPolygon(v) => Some(v),
            _ => None,
        }
    }
}

/// Heterogeneous collection of geometries. Collections can be nested.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Creates a new collection.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }

    /// Members of the collection.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// Consumes the collection returning its members.
    pub fn into_geometries(self) -> Vec<Geometry> {
        self.geometries
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

macro_rules! impl_from_geometry {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Geometry::$variant(value)
                }
            }
        )*
    };
}

impl_from_geometry!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection
);

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum GeometryRepr {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

impl TryFrom<GeometryRepr> for Geometry {
    type Error = TurfTypesError;

    fn try_from(value: GeometryRepr) -> Result<Self, Self::Error> {
        Ok(match value {
            GeometryRepr::Point { coordinates } => Point::new(coordinates).into(),
            GeometryRepr::MultiPoint { coordinates } => MultiPoint::new(coordinates).into(),
            GeometryRepr::LineString { coordinates } => LineString::new(coordinates).into(),
            GeometryRepr::MultiLineString { coordinates } => {
                MultiLineString::from_coordinates(coordinates).into()
            }
            GeometryRepr::Polygon { coordinates } => Polygon::new(coordinates)?.into(),
            GeometryRepr::MultiPolygon { coordinates } => {
                MultiPolygon::from_coordinates(coordinates)?.into()
            }
            GeometryRepr::GeometryCollection { geometries } => {
                GeometryCollection::new(geometries).into()
            }
        })
    }
}

impl From<Geometry> for GeometryRepr {
    fn from(value: Geometry) -> Self {
        match value {
            Geometry::Point(v) => GeometryRepr::Point {
                coordinates: *v.coordinates(),
            },
            Geometry::MultiPoint(v) => GeometryRepr::MultiPoint {
                coordinates: v.coordinates().to_vec(),
            },
            Geometry::LineString(v) => GeometryRepr::LineString {
                coordinates: v.into_coordinates(),
            },
            Geometry::MultiLineString(v) => GeometryRepr::MultiLineString {
                coordinates: v
                    .into_lines()
                    .into_iter()
                    .map(LineString::into_coordinates)
                    .collect(),
            },
            Geometry::Polygon(v) => GeometryRepr::Polygon {
                coordinates: v.coordinates(),
            },
            Geometry::MultiPolygon(v) => GeometryRepr::MultiPolygon {
                coordinates: v.coordinates(),
            },
            Geometry::GeometryCollection(v) => GeometryRepr::GeometryCollection {
                geometries: v.into_geometries(),
            },
        }
    }
}
