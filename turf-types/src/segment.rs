use crate::geo_point::GeoPoint;
use crate::orient::Orientation;
use crate::position::Position;

/// A straight line segment between two positions, treated in the planar lon/lat space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a>(pub &'a Position, pub &'a Position);

impl Segment<'_> {
    /// Returns true if the `point` lies exactly on the segment, including its endpoints.
    pub fn contains(&self, point: &impl GeoPoint) -> bool {
        if Orientation::triplet(self.0, point, self.1) != Orientation::Collinear {
            return false;
        }

        let (x_min, x_max) = min_max(self.0.lon(), self.1.lon());
        let (y_min, y_max) = min_max(self.0.lat(), self.1.lat());

        point.lon() >= x_min && point.lon() <= x_max && point.lat() >= y_min && point.lat() <= y_max
    }

    /// Intersection point of two segments.
    ///
    /// Both segments are parametrized from their first to their second point. The segments intersect only if the
    /// crossing point of their supporting lines lies strictly inside both of them (`0 < t < 1` and `0 < u < 1`), so
    /// touching at an endpoint and parallel or collinear segments give `None`.
    pub fn intersection(&self, other: &Segment) -> Option<Position> {
        let (x1, y1) = (self.0.lon(), self.0.lat());
        let (x2, y2) = (self.1.lon(), self.1.lat());
        let (x3, y3) = (other.0.lon(), other.0.lat());
        let (x4, y4) = (other.1.lon(), other.1.lat());

        let denominator = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
        if denominator == 0.0 {
            return None;
        }

        let dy = y1 - y3;
        let dx = x1 - x3;
        let t = ((x4 - x3) * dy - (y4 - y3) * dx) / denominator;
        let u = ((x2 - x1) * dy - (y2 - y1) * dx) / denominator;

        let inside = |v: f64| v > 0.0 && v < 1.0;
        if inside(t) && inside(u) {
            Some(Position::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
        } else {
            None
        }
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(2.0, 2.0);
        let segment = Segment(&a, &b);

        assert!(segment.contains(&Position::new(0.0, 0.0)));
        assert!(segment.contains(&Position::new(1.0, 1.0)));
        assert!(segment.contains(&Position::new(2.0, 2.0)));
        assert!(!segment.contains(&Position::new(3.0, 3.0)));
        assert!(!segment.contains(&Position::new(1.0, 0.0)));
    }

    #[test]
    fn intersection() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(2.0, 2.0);
        let c = Position::new(0.0, 2.0);
        let d = Position::new(2.0, 0.0);

        assert_eq!(
            Segment(&a, &b).intersection(&Segment(&c, &d)),
            Some(Position::new(1.0, 1.0))
        );

        let e = Position::new(1.0, 3.0);
        let f = Position::new(3.0, 1.0);
        assert_eq!(Segment(&a, &b).intersection(&Segment(&e, &f)), None);
    }

    #[test]
    fn intersection_of_parallel_segments() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(2.0, 0.0);
        let c = Position::new(0.0, 1.0);
        let d = Position::new(2.0, 1.0);

        assert_eq!(Segment(&a, &b).intersection(&Segment(&c, &d)), None);
        assert_eq!(Segment(&a, &b).intersection(&Segment(&a, &b)), None);
    }

    #[test]
    fn touching_segments_do_not_intersect() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(2.0, 2.0);
        let c = Position::new(2.0, 0.0);

        assert_eq!(Segment(&a, &b).intersection(&Segment(&b, &c)), None);
    }
}
