//! GeoJSON-shaped geometry model used by the `turf` algorithms.
//!
//! The model consists of immutable value types: [`Position`], the geometry types ([`Point`], [`LineString`],
//! [`Polygon`] and their multi- counterparts), the [`Geometry`] union over them, [`Feature`]s and
//! [`FeatureCollection`]s. Polygons validate their rings on construction, so every algorithm may rely on rings being
//! closed and having at least 4 positions.
//!
//! All types can be (de)serialized with `serde` in the GeoJSON representation:
//!
//! ```
//! use turf_types::{Geometry, GeometryType};
//!
//! let geometry: Geometry =
//!     serde_json::from_str(r#"{"type": "Point", "coordinates": [125.6, 10.1]}"#).unwrap();
//! assert_eq!(geometry.geometry_type(), GeometryType::Point);
//! ```

pub mod error;
pub use error::TurfTypesError;

mod bounding_box;
pub use bounding_box::BoundingBox;

pub mod contour;
pub use contour::{Contour, LinearRing};

mod feature;
pub use feature::{Feature, FeatureCollection, Properties};

mod geo_point;
pub use geo_point::GeoPoint;

mod geometry;
pub use geometry::{Geometry, GeometryCollection};

mod geometry_type;
pub use geometry_type::GeometryType;

mod line_string;
pub use line_string::{LineString, MultiLineString};

pub mod meta;
pub use meta::{CoordEach, LineEach, PolygonEach};

mod point;
pub use point::{MultiPoint, Point};

mod polygon;
pub use polygon::{MultiPolygon, Polygon};

mod position;
pub use position::Position;

pub mod orient;
pub mod segment;
