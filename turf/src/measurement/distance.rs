use turf_types::{GeoPoint, Point};

use crate::error::Result;
use crate::units::{
    degrees_to_radians, distance_to_radians, radians_to_degrees, radians_to_distance, Unit,
};

/// Great-circle distance between two points calculated with the haversine formula.
pub fn distance(from: &impl GeoPoint, to: &impl GeoPoint, unit: Unit) -> f64 {
    radians_to_distance(central_angle(from, to), unit)
}

/// Initial bearing from one point to another along the great circle, in degrees within `(-180, 180]`.
pub fn bearing(from: &impl GeoPoint, to: &impl GeoPoint) -> f64 {
    let lon1 = degrees_to_radians(from.lon());
    let lon2 = degrees_to_radians(to.lon());
    let lat1 = degrees_to_radians(from.lat());
    let lat2 = degrees_to_radians(to.lat());

    let a = (lon2 - lon1).sin() * lat2.cos();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lon2 - lon1).cos();

    radians_to_degrees(a.atan2(b))
}

/// Point located at the given distance from the origin in the direction of `bearing` (degrees clockwise from north).
///
/// Fails if the distance is negative.
pub fn destination(
    origin: &impl GeoPoint,
    distance: f64,
    bearing: f64,
    unit: Unit,
) -> Result<Point> {
    Ok(destination_radians(
        origin,
        distance_to_radians(distance, unit)?,
        bearing,
    ))
}

/// Point halfway between two points along the great circle.
pub fn midpoint(from: &impl GeoPoint, to: &impl GeoPoint) -> Point {
    destination_radians(from, central_angle(from, to) / 2.0, bearing(from, to))
}

pub(crate) fn central_angle(from: &impl GeoPoint, to: &impl GeoPoint) -> f64 {
    let d_lat = degrees_to_radians(to.lat() - from.lat());
    let d_lon = degrees_to_radians(to.lon() - from.lon());
    let lat1 = degrees_to_radians(from.lat());
    let lat2 = degrees_to_radians(to.lat());

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

pub(crate) fn destination_radians(origin: &impl GeoPoint, radians: f64, bearing: f64) -> Point {
    let lon1 = degrees_to_radians(origin.lon());
    let lat1 = degrees_to_radians(origin.lat());
    let bearing = degrees_to_radians(bearing);

    let lat2 = (lat1.sin() * radians.cos() + lat1.cos() * radians.sin() * bearing.cos()).asin();
    let y = bearing.sin() * radians.sin() * lat1.cos();
    let x = radians.cos() - lat1.sin() * lat2.sin();
    let lon2 = lon1 + y.atan2(x);

    Point::from_lng_lat(radians_to_degrees(lon2), radians_to_degrees(lat2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TurfError;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    const DELTA: f64 = 1e-10;

    fn pt1() -> Point {
        Point::from_lng_lat(-75.343, 39.984)
    }

    fn pt2() -> Point {
        Point::from_lng_lat(-75.534, 39.123)
    }

    #[test]
    fn distance_in_units() {
        assert_abs_diff_eq!(
            distance(&pt1(), &pt2(), Unit::Miles),
            60.37218405837491,
            epsilon = DELTA
        );
        assert_abs_diff_eq!(
            distance(&pt1(), &pt2(), Unit::NauticalMiles),
            52.461979624130436,
            epsilon = DELTA
        );
        assert_abs_diff_eq!(
            distance(&pt1(), &pt2(), Unit::Kilometers),
            97.15957803131901,
            epsilon = DELTA
        );
        assert_abs_diff_eq!(
            distance(&pt1(), &pt2(), Unit::Radians),
            0.015245501024842149,
            epsilon = DELTA
        );
        assert_abs_diff_eq!(
            distance(&pt1(), &pt2(), Unit::Degrees),
            0.8735028650863799,
            epsilon = DELTA
        );
        assert_abs_diff_eq!(
            distance(&pt1(), &pt2(), Unit::default()),
            97.15957803131901,
            epsilon = DELTA
        );
    }

    #[test]
    fn distance_is_symmetric() {
        for unit in [Unit::Miles, Unit::Meters, Unit::Radians, Unit::Feet] {
            assert_abs_diff_eq!(
                distance(&pt1(), &pt2(), unit),
                distance(&pt2(), &pt1(), unit),
                epsilon = DELTA
            );
        }
        assert_eq!(distance(&pt1(), &pt1(), Unit::Meters), 0.0);
    }

    #[test]
    fn bearing_between_points() {
        let a = Point::from_lng_lat(-75.4, 39.4);
        let b = Point::from_lng_lat(-75.534, 39.123);
        assert_ne!(bearing(&a, &b), 0.0);

        let origin = Point::from_lng_lat(0.0, 0.0);
        assert_abs_diff_eq!(
            bearing(&origin, &Point::from_lng_lat(0.0, 10.0)),
            0.0,
            epsilon = DELTA
        );
        assert_abs_diff_eq!(
            bearing(&origin, &Point::from_lng_lat(10.0, 0.0)),
            90.0,
            epsilon = DELTA
        );
        assert_abs_diff_eq!(
            bearing(&origin, &Point::from_lng_lat(0.0, -10.0)),
            180.0,
            epsilon = DELTA
        );
        assert_abs_diff_eq!(
            bearing(&origin, &Point::from_lng_lat(-10.0, 0.0)),
            -90.0,
            epsilon = DELTA
        );
    }

    #[test]
    fn destination_is_at_distance() {
        let origin = Point::from_lng_lat(-75.0, 39.0);
        for bearing in [-135.0, -90.0, 0.0, 45.0, 180.0] {
            for unit in [Unit::Kilometers, Unit::Miles, Unit::Degrees] {
                let result = destination(&origin, 100.0, bearing, unit).unwrap();
                let measured = distance(&origin, &result, unit);
                assert!(
                    (measured - 100.0).abs() <= 100.0 * 1e-9,
                    "bearing {bearing}, unit {unit}: {measured}"
                );
            }
        }
    }

    #[test]
    fn destination_to_the_south() {
        let origin = Point::from_lng_lat(-75.0, 39.0);
        let result = destination(&origin, 100.0, 180.0, Unit::Kilometers).unwrap();
        assert_abs_diff_eq!(result.longitude(), -75.0, epsilon = DELTA);
        assert!(result.latitude() < 39.0);
    }

    #[test]
    fn destination_with_negative_distance() {
        assert_matches!(
            destination(&pt1(), -1.0, 0.0, Unit::Kilometers),
            Err(TurfError::NegativeDistance(_))
        );
    }

    #[test]
    fn midpoint_is_halfway() {
        let cases = [
            ((0.0, 0.0), (10.0, 0.0)),
            ((0.0, 0.0), (0.0, 10.0)),
            ((0.0, 10.0), (0.0, 0.0)),
            ((-1.0, 10.0), (1.0, -1.0)),
            ((-5.0, -1.0), (5.0, 10.0)),
            ((22.5, 21.94304553343818), (92.10937499999999, 46.800059446787316)),
        ];

        for ((lon1, lat1), (lon2, lat2)) in cases {
            let a = Point::from_lng_lat(lon1, lat1);
            let b = Point::from_lng_lat(lon2, lat2);
            let mid = midpoint(&a, &b);

            assert_abs_diff_eq!(
                distance(&a, &mid, Unit::Miles),
                distance(&b, &mid, Unit::Miles),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn accepts_positions() {
        let a = *pt1().coordinates();
        let b = *pt2().coordinates();
        assert_abs_diff_eq!(
            distance(&a, &b, Unit::Miles),
            60.37218405837491,
            epsilon = DELTA
        );
    }
}
