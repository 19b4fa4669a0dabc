use crate::contour::Contour;
use crate::point::Point;
use crate::position::Position;

/// Sequence of positions connected by straight segments.
///
/// Any number of positions is allowed, although most algorithms need at least 2 of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString {
    coordinates: Vec<Position>,
}

impl LineString {
    /// Creates a new line string.
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }

    /// Creates a new line string from a list of points.
    pub fn from_points(points: &[Point]) -> Self {
        Self::new(points.iter().map(|p| *p.coordinates()).collect())
    }

    /// Positions of the line.
    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    /// Number of positions in the line.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns true if the line has no positions.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Consumes the line returning its positions.
    pub fn into_coordinates(self) -> Vec<Position> {
        self.coordinates
    }
}

impl Contour for LineString {
    fn positions(&self) -> &[Position] {
        &self.coordinates
    }
}

impl FromIterator<Position> for LineString {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A set of line strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiLineString {
    lines: Vec<LineString>,
}

impl MultiLineString {
    /// Creates a new multi line string from its lines.
    pub fn new(lines: Vec<LineString>) -> Self {
        Self { lines }
    }

    /// Creates a new multi line string from coordinate sequences.
    pub fn from_coordinates(coordinates: Vec<Vec<Position>>) -> Self {
        Self::new(coordinates.into_iter().map(LineString::new).collect())
    }

    /// Lines of the geometry.
    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    /// Consumes the geometry returning its lines.
    pub fn into_lines(self) -> Vec<LineString> {
        self.lines
    }
}

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<T: IntoIterator<Item = LineString>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
