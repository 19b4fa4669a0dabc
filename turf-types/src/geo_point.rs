use crate::point::Point;
use crate::position::Position;

/// A point on the surface of the Earth given by longitude and latitude in degrees.
///
/// All spherical algorithms accept any `GeoPoint`, so both bare [`Position`]s and [`Point`] geometries can be passed
/// to them.
pub trait GeoPoint {
    /// Longitude in degrees.
    fn lon(&self) -> f64;
    /// Latitude in degrees.
    fn lat(&self) -> f64;

    /// Longitude in radians.
    fn lon_rad(&self) -> f64 {
        self.lon().to_radians()
    }

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    /// 2d position of the point.
    fn position(&self) -> Position {
        Position::new(self.lon(), self.lat())
    }
}

impl GeoPoint for Position {
    fn lon(&self) -> f64 {
        Position::lon(self)
    }

    fn lat(&self) -> f64 {
        Position::lat(self)
    }

    fn position(&self) -> Position {
        *self
    }
}

impl GeoPoint for Point {
    fn lon(&self) -> f64 {
        self.coordinates().lon()
    }

    fn lat(&self) -> f64 {
        self.coordinates().lat()
    }

    fn position(&self) -> Position {
        *self.coordinates()
    }
}

impl<T: GeoPoint + ?Sized> GeoPoint for &T {
    fn lon(&self) -> f64 {
        (**self).lon()
    }

    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn position(&self) -> Position {
        (**self).position()
    }
}
