use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::TurfTypesError;

/// A single coordinate: longitude and latitude in degrees with an optional altitude.
///
/// Serialized as a GeoJSON position array `[lon, lat]` or `[lon, lat, alt]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Position {
    lon: f64,
    lat: f64,
    alt: Option<f64>,
}

impl Position {
    /// Creates a 2d position.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: None,
        }
    }

    /// Creates a position with altitude.
    pub const fn with_altitude(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            lon,
            lat,
            alt: Some(alt),
        }
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Altitude, if the position has one.
    pub fn alt(&self) -> Option<f64> {
        self.alt
    }

    /// Returns the coordinates as a vector of 2 or 3 values.
    pub fn to_vec(&self) -> Vec<f64> {
        match self.alt {
            Some(alt) => vec![self.lon, self.lat, alt],
            None => vec![self.lon, self.lat],
        }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = TurfTypesError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        match value[..] {
            [lon, lat] => Ok(Self::new(lon, lat)),
            [lon, lat, alt] => Ok(Self::with_altitude(lon, lat, alt)),
            _ => Err(TurfTypesError::InvalidPosition(value.len())),
        }
    }
}

impl From<Position> for Vec<f64> {
    fn from(value: Position) -> Self {
        value.to_vec()
    }
}

impl From<[f64; 2]> for Position {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<(f64, f64)> for Position {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl AbsDiffEq for Position {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon)
            && self.lat.abs_diff_eq(&other.lat, epsilon)
            && match (self.alt, other.alt) {
                (Some(a), Some(b)) => a.abs_diff_eq(&b, epsilon),
                (None, None) => true,
                _ => false,
            }
    }
}

impl RelativeEq for Position {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lon.relative_eq(&other.lon, epsilon, max_relative)
            && self.lat.relative_eq(&other.lat, epsilon, max_relative)
            && match (self.alt, other.alt) {
                (Some(a), Some(b)) => a.relative_eq(&b, epsilon, max_relative),
                (None, None) => true,
                _ => false,
            }
    }
}
