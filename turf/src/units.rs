//! Units of length and conversions between them.
//!
//! All conversions go through radians on a sphere: a distance is converted into the central angle it spans on the
//! Earth surface and back. The Earth radius used for that is given by [`Unit::factor`].

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::error::{Result, TurfError};

/// Unit of length.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Statute miles.
    Miles,
    /// Nautical miles.
    NauticalMiles,
    /// Degrees of arc on the Earth surface.
    Degrees,
    /// Radians of arc on the Earth surface.
    Radians,
    /// Inches.
    Inches,
    /// Yards.
    Yards,
    /// Meters.
    Meters,
    /// Centimeters.
    Centimeters,
    /// Kilometers.
    #[default]
    Kilometers,
    /// Feet.
    Feet,
}

lazy_static! {
    static ref UNIT_NAMES: HashMap<&'static str, Unit> = HashMap::from([
        ("miles", Unit::Miles),
        ("nauticalmiles", Unit::NauticalMiles),
        ("degrees", Unit::Degrees),
        ("radians", Unit::Radians),
        ("inches", Unit::Inches),
        ("yards", Unit::Yards),
        ("meters", Unit::Meters),
        ("metres", Unit::Meters),
        ("centimeters", Unit::Centimeters),
        ("centimetres", Unit::Centimeters),
        ("kilometers", Unit::Kilometers),
        ("kilometres", Unit::Kilometers),
        ("feet", Unit::Feet),
    ]);
}

impl Unit {
    /// Earth radius expressed in this unit.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Miles => 3960.0,
            Unit::NauticalMiles => 3441.145,
            Unit::Degrees => 57.2957795,
            Unit::Radians => 1.0,
            Unit::Inches => 250_905_600.0,
            Unit::Yards => 6_969_600.0,
            Unit::Meters => 6_373_000.0,
            Unit::Centimeters => 6.373e8,
            Unit::Kilometers => 6373.0,
            Unit::Feet => 20_908_792.65,
        }
    }

    /// Canonical name of the unit.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Miles => "miles",
            Unit::NauticalMiles => "nauticalmiles",
            Unit::Degrees => "degrees",
            Unit::Radians => "radians",
            Unit::Inches => "inches",
            Unit::Yards => "yards",
            Unit::Meters => "meters",
            Unit::Centimeters => "centimeters",
            Unit::Kilometers => "kilometers",
            Unit::Feet => "feet",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = TurfError;

    fn from_str(s: &str) -> Result<Self> {
        UNIT_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| TurfError::InvalidUnit(s.to_string()))
    }
}

/// Converts a central angle in radians into a distance on the Earth surface.
pub fn radians_to_distance(radians: f64, unit: Unit) -> f64 {
    radians * unit.factor()
}

/// Converts a distance on the Earth surface into the central angle in radians.
pub fn distance_to_radians(distance: f64, unit: Unit) -> Result<f64> {
    if distance < 0.0 {
        return Err(TurfError::NegativeDistance(distance));
    }

    Ok(distance / unit.factor())
}

/// Converts a distance on the Earth surface into the central angle in degrees.
pub fn distance_to_degrees(distance: f64, unit: Unit) -> Result<f64> {
    Ok(radians_to_degrees(distance_to_radians(distance, unit)?))
}

/// Converts an angle in degrees into radians. The angle is first reduced modulo 360.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees % 360.0) * PI / 180.0
}

/// Converts an angle in radians into degrees. The angle is first reduced modulo 2π.
pub fn radians_to_degrees(radians: f64) -> f64 {
    (radians % (2.0 * PI)) * 180.0 / PI
}

/// Converts a distance from one unit into another.
pub fn convert_distance(distance: f64, from: Unit, to: Unit) -> Result<f64> {
    Ok(radians_to_distance(distance_to_radians(distance, from)?, to))
}
