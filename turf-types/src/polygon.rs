use crate::bounding_box::BoundingBox;
use crate::contour::{Contour, LinearRing};
use crate::error::TurfTypesError;
use crate::line_string::LineString;
use crate::position::Position;

/// Polygon geometry. Polygon consists of one outer ring, and zero or more inner rings.
///
/// Inner rings represent *holes* in the polygon. GeoJSON recommends counterclockwise outer rings and clockwise holes,
/// but the winding is not checked and none of the algorithms depend on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a new polygon from ring coordinates, validating every ring.
    pub fn new(rings: Vec<Vec<Position>>) -> Result<Self, TurfTypesError> {
        Self::from_rings(
            rings
                .into_iter()
                .map(LinearRing::new)
                .collect::<Result<Vec<_>, _>>()?,
        )
    }

    /// Creates a new polygon from already validated rings. The first ring is the outer one.
    pub fn from_rings(rings: Vec<LinearRing>) -> Result<Self, TurfTypesError> {
        if rings.is_empty() {
            return Err(TurfTypesError::EmptyPolygon);
        }

        Ok(Self { rings })
    }

    /// Creates a polygon from the outer ring and holes.
    pub fn from_outer_inner(outer: LinearRing, inner: Vec<LinearRing>) -> Self {
        let mut rings = Vec::with_capacity(inner.len() + 1);
        rings.push(outer);
        rings.extend(inner);
        Self { rings }
    }

    /// Creates a rectangular polygon covering the bounding box.
    ///
    /// The ring starts at the south-west corner and goes through south-east, north-east and north-west corners.
    pub fn from_bounding_box(bbox: &BoundingBox) -> Self {
        let (west, south, east, north) = (bbox.west(), bbox.south(), bbox.east(), bbox.north());
        let ring = LinearRing {
            positions: vec![
                Position::new(west, south),
                Position::new(east, south),
                Position::new(east, north),
                Position::new(west, north),
                Position::new(west, south),
            ],
        };

        Self { rings: vec![ring] }
    }

    /// Outer ring of the polygon.
    pub fn outer(&self) -> &LinearRing {
        &self.rings[0]
    }

    /// Inner rings (holes) of the polygon.
    pub fn inner(&self) -> &[LinearRing] {
        &self.rings[1..]
    }

    /// All rings of the polygon starting with the outer one.
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    /// Outer ring as a line string.
    pub fn outer_line(&self) -> LineString {
        LineString::new(self.outer().positions().to_vec())
    }

    /// Holes as line strings.
    pub fn inner_lines(&self) -> Vec<LineString> {
        self.inner()
            .iter()
            .map(|ring| LineString::new(ring.positions().to_vec()))
            .collect()
    }

    /// Ring coordinates of the polygon.
    pub fn coordinates(&self) -> Vec<Vec<Position>> {
        self.rings
            .iter()
            .map(|ring| ring.positions().to_vec())
            .collect()
    }

    /// Consumes the polygon returning its rings.
    pub fn into_rings(self) -> Vec<LinearRing> {
        self.rings
    }
}

/// Geometry consisting of several polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a new multipolygon.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Creates a new multipolygon from polygon coordinates, validating every ring.
    pub fn from_coordinates(coordinates: Vec<Vec<Vec<Position>>>) -> Result<Self, TurfTypesError> {
        Ok(Self::new(
            coordinates
                .into_iter()
                .map(Polygon::new)
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }

    /// Polygons of the geometry.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Polygon coordinates of the geometry.
    pub fn coordinates(&self) -> Vec<Vec<Vec<Position>>> {
        self.polygons.iter().map(Polygon::coordinates).collect()
    }

    /// Consumes the geometry returning its polygons.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
