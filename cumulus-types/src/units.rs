use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CumulusTypesError;

/// Unit of measure for elevations and radii.
///
/// Values are always stored in metres internally; this enum records which unit
/// a caller supplied and performs the conversion both ways.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LengthUnit {
    /// Metres, the internal unit.
    #[default]
    Metres,
    /// International feet.
    Feet,
    /// Kilometres.
    Kilometres,
    /// Statute miles.
    StatuteMiles,
    /// Nautical miles.
    NauticalMiles,
}

impl LengthUnit {
    /// Number of metres in one of this unit.
    pub fn metres_per_unit(&self) -> f64 {
        match self {
            LengthUnit::Metres => 1.0,
            LengthUnit::Feet => 0.3048,
            LengthUnit::Kilometres => 1000.0,
            LengthUnit::StatuteMiles => 1609.344,
            LengthUnit::NauticalMiles => 1852.0,
        }
    }

    /// Converts a value in this unit to metres.
    pub fn to_metres(&self, value: f64) -> f64 {
        value * self.metres_per_unit()
    }

    /// Converts a value in metres to this unit.
    pub fn from_metres(&self, metres: f64) -> f64 {
        metres / self.metres_per_unit()
    }
}

impl FromStr for LengthUnit {
    type Err = CumulusTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("m") => Ok(LengthUnit::Metres),
            v if v.eq_ignore_ascii_case("ft") => Ok(LengthUnit::Feet),
            v if v.eq_ignore_ascii_case("km") => Ok(LengthUnit::Kilometres),
            v if v.eq_ignore_ascii_case("mi") => Ok(LengthUnit::StatuteMiles),
            v if v.eq_ignore_ascii_case("nm") => Ok(LengthUnit::NauticalMiles),
            other => Err(CumulusTypesError::UnknownUnit(other.to_string())),
        }
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            LengthUnit::Metres => "M",
            LengthUnit::Feet => "FT",
            LengthUnit::Kilometres => "KM",
            LengthUnit::StatuteMiles => "MI",
            LengthUnit::NauticalMiles => "NM",
        };
        write!(f, "{token}")
    }
}
