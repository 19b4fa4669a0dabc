use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::geo_point::GeoPoint;

/// Orientation of a triplet of points in the lon/lat plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    ///
    /// Triplets containing `NaN` coordinates are reported as collinear.
    pub fn triplet(p: &impl GeoPoint, q: &impl GeoPoint, r: &impl GeoPoint) -> Self {
        let value = (q.lat() - p.lat()) * (r.lon() - q.lon())
            - (q.lon() - p.lon()) * (r.lat() - q.lat());
        match value.partial_cmp(&0.0) {
            Some(Ordering::Greater) => Self::Clockwise,
            Some(Ordering::Less) => Self::Counterclockwise,
            Some(Ordering::Equal) | None => Self::Collinear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn triplet() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(1.0, 1.0);
        assert_eq!(
            Orientation::triplet(&a, &b, &Position::new(2.0, 2.0)),
            Orientation::Collinear
        );
        assert_eq!(
            Orientation::triplet(&a, &b, &Position::new(2.0, 0.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            Orientation::triplet(&a, &b, &Position::new(0.0, 2.0)),
            Orientation::Counterclockwise
        );
    }
}
