//! Contour is a sequence of positions connected by straight segments.
//!
//! Contours can be:
//! * **open** - the first and the last positions are not connected. A [`LineString`](crate::LineString) is an open
//!   contour unless its ends happen to coincide.
//! * **closed** - the last position repeats the first one. Rings of a [`Polygon`](crate::Polygon) are always closed
//!   and are represented by [`LinearRing`].
//!
//! Unlike some geometry libraries, closed contours here follow GeoJSON and store the closing position explicitly, so
//! [`Contour::iter_segments`] never has to synthesize the segment back to the first position.

use crate::error::TurfTypesError;
use crate::position::Position;
use crate::segment::Segment;

/// Sequence of positions. See module level documentation for details.
pub trait Contour {
    /// All positions of the contour, including the closing one for closed contours.
    fn positions(&self) -> &[Position];

    /// Whether the last position repeats the first one.
    fn is_closed(&self) -> bool {
        let positions = self.positions();
        positions.len() > 1 && positions.first() == positions.last()
    }

    /// Positions of the contour without the closing one.
    ///
    /// For open contours this is the same as [`Contour::positions`].
    fn distinct_positions(&self) -> &[Position] {
        let positions = self.positions();
        if self.is_closed() {
            &positions[..positions.len() - 1]
        } else {
            positions
        }
    }

    /// Iterates over the segments between consecutive positions.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.positions()
            .windows(2)
            .map(|pair| Segment(&pair[0], &pair[1]))
    }
}

impl Contour for [Position] {
    fn positions(&self) -> &[Position] {
        self
    }
}

/// Closed ring of at least 4 positions with the last position equal to the first one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearRing {
    pub(crate) positions: Vec<Position>,
}

impl LinearRing {
    /// Minimal number of positions in a ring, including the closing one.
    pub const MIN_POSITIONS: usize = 4;

    /// Creates a new ring, checking that it has enough positions and is closed.
    pub fn new(positions: Vec<Position>) -> Result<Self, TurfTypesError> {
        if positions.len() < Self::MIN_POSITIONS {
            return Err(TurfTypesError::InvalidRing(format!(
                "ring must have at least {} positions, got {}",
                Self::MIN_POSITIONS,
                positions.len()
            )));
        }

        if positions.first() != positions.last() {
            return Err(TurfTypesError::InvalidRing(
                "first and last positions of a ring must be identical".to_string(),
            ));
        }

        Ok(Self { positions })
    }

    /// Consumes the ring returning its positions.
    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}

impl Contour for LinearRing {
    fn positions(&self) -> &[Position] {
        &self.positions
    }

    fn is_closed(&self) -> bool {
        true
    }
}

impl TryFrom<Vec<Position>> for LinearRing {
    type Error = TurfTypesError;

    fn try_from(value: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
