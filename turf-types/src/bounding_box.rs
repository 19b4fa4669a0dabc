use serde::{Deserialize, Serialize};

use crate::error::TurfTypesError;
use crate::geo_point::GeoPoint;
use crate::position::Position;

/// Axis-aligned rectangle in lon/lat space.
///
/// Serialized as a GeoJSON `bbox` array `[west, south, east, north]`. Boxes crossing the antimeridian are not
/// supported: `west` is always expected to be not greater than `east`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct BoundingBox {
    southwest: Position,
    northeast: Position,
}

impl BoundingBox {
    /// Creates a bounding box from its corners.
    pub fn from_corners(southwest: Position, northeast: Position) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// Creates a bounding box from the edge values in degrees.
    pub fn from_lng_lats(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::from_corners(Position::new(west, south), Position::new(east, north))
    }

    /// Returns the smallest box containing all the given points, or `None` if the iterator is empty.
    pub fn from_positions<P: GeoPoint>(mut positions: impl Iterator<Item = P>) -> Option<Self> {
        let first = positions.next()?;
        let mut bbox = Self::from_lng_lats(first.lon(), first.lat(), first.lon(), first.lat());
        for p in positions {
            bbox.extend(&p);
        }

        Some(bbox)
    }

    /// Grows the box to include the point.
    pub fn extend(&mut self, point: &impl GeoPoint) {
        self.southwest = Position::new(
            self.west().min(point.lon()),
            self.south().min(point.lat()),
        );
        self.northeast = Position::new(
            self.east().max(point.lon()),
            self.north().max(point.lat()),
        );
    }

    /// Returns the smallest box containing both `self` and `other`.
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_lng_lats(
            self.west().min(other.west()),
            self.south().min(other.south()),
            self.east().max(other.east()),
            self.north().max(other.north()),
        )
    }

    /// Returns true if the point is inside the box or on its edge.
    pub fn contains(&self, point: &impl GeoPoint) -> bool {
        point.lon() >= self.west()
            && point.lon() <= self.east()
            && point.lat() >= self.south()
            && point.lat() <= self.north()
    }

    /// South-west corner.
    pub fn southwest(&self) -> Position {
        self.southwest
    }

    /// North-east corner.
    pub fn northeast(&self) -> Position {
        self.northeast
    }

    /// Minimum longitude.
    pub fn west(&self) -> f64 {
        self.southwest.lon()
    }

    /// Minimum latitude.
    pub fn south(&self) -> f64 {
        self.southwest.lat()
    }

    /// Maximum longitude.
    pub fn east(&self) -> f64 {
        self.northeast.lon()
    }

    /// Maximum latitude.
    pub fn north(&self) -> f64 {
        self.northeast.lat()
    }

    /// Extent along the longitude axis in degrees.
    pub fn width(&self) -> f64 {
        self.east() - self.west()
    }

    /// Extent along the latitude axis in degrees.
    pub fn height(&self) -> f64 {
        self.north() - self.south()
    }

    /// Center of the box in lon/lat space.
    pub fn center(&self) -> Position {
        Position::new(
            (self.west() + self.east()) / 2.0,
            (self.south() + self.north()) / 2.0,
        )
    }

    /// Returns the box as `[west, south, east, north]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.west(), self.south(), self.east(), self.north()]
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        Self::from_lng_lats(west, south, east, north)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(value: BoundingBox) -> Self {
        value.to_array()
    }
}

impl TryFrom<Vec<f64>> for BoundingBox {
    type Error = TurfTypesError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        match value[..] {
            [west, south, east, north] => Ok(Self::from_lng_lats(west, south, east, north)),
            _ => Err(TurfTypesError::InvalidBoundingBox(value.len())),
        }
    }
}

impl From<BoundingBox> for Vec<f64> {
    fn from(value: BoundingBox) -> Self {
        value.to_array().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_positions() {
        let positions = [
            Position::new(102.0, -10.0),
            Position::new(130.0, 4.0),
            Position::new(110.0, 1.0),
        ];
        let bbox = BoundingBox::from_positions(positions.iter()).expect("not empty");
        assert_eq!(bbox.to_array(), [102.0, -10.0, 130.0, 4.0]);
        assert_eq!(bbox.width(), 28.0);
        assert_eq!(bbox.height(), 14.0);

        assert!(BoundingBox::from_positions(Vec::<Position>::new().into_iter()).is_none());
    }

    #[test]
    fn merge() {
        let a = BoundingBox::from_lng_lats(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::from_lng_lats(-1.0, 0.5, 0.5, 3.0);
        assert_eq!(a.merge(&b).to_array(), [-1.0, 0.0, 1.0, 3.0]);
    }

    #[test]
    fn contains() {
        let bbox = BoundingBox::from_lng_lats(0.0, 0.0, 10.0, 10.0);
        assert!(bbox.contains(&Position::new(5.0, 5.0)));
        assert!(bbox.contains(&Position::new(10.0, 0.0)));
        assert!(!bbox.contains(&Position::new(10.1, 5.0)));
    }

    #[test]
    fn serialization() {
        let bbox = BoundingBox::from_lng_lats(-10.0, -20.0, 10.0, 20.0);
        let json = serde_json::to_string(&bbox).expect("serializable");
        assert_eq!(json, "[-10.0,-20.0,10.0,20.0]");
        assert_eq!(
            serde_json::from_str::<BoundingBox>(&json).expect("valid bbox"),
            bbox
        );
        assert!(serde_json::from_str::<BoundingBox>("[1.0,2.0,3.0]").is_err());
    }
}
