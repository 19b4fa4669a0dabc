use crate::position::Position;

/// Point geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    coordinates: Position,
}

impl Point {
    /// Creates a new point wrapping the given position.
    pub const fn new(coordinates: Position) -> Self {
        Self { coordinates }
    }

    /// Creates a point from longitude and latitude in degrees.
    pub const fn from_lng_lat(lon: f64, lat: f64) -> Self {
        Self::new(Position::new(lon, lat))
    }

    /// Creates a point with an altitude.
    pub const fn from_lng_lat_alt(lon: f64, lat: f64, alt: f64) -> Self {
        Self::new(Position::with_altitude(lon, lat, alt))
    }

    /// Position of the point.
    pub fn coordinates(&self) -> &Position {
        &self.coordinates
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.coordinates.lon()
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.coordinates.lat()
    }

    /// Altitude of the point, if set.
    pub fn altitude(&self) -> Option<f64> {
        self.coordinates.alt()
    }
}

impl From<Position> for Point {
    fn from(value: Position) -> Self {
        Self::new(value)
    }
}

impl From<Point> for Position {
    fn from(value: Point) -> Self {
        value.coordinates
    }
}

/// A set of positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPoint {
    coordinates: Vec<Position>,
}

impl MultiPoint {
    /// Creates a new multipoint.
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }

    /// Positions of the multipoint.
    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    /// Iterates over the positions as [`Point`]s.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.coordinates.iter().copied().map(Point::new)
    }
}

impl FromIterator<Position> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
