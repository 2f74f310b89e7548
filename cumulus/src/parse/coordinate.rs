//! Parsing of plain coordinate tokens.
//!
//! A token holds a latitude field, a longitude field and an optional bare
//! elevation field, separated by whitespace or commas. Latitude and longitude
//! are either both decimal degrees or both DMS; mixing formats in one token
//! is an error, never a guess.

use cumulus_types::{GeodeticPoint, LengthUnit};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::parse::dms::{dms_to_decimal, Axis};

/// Encoding of a latitude or longitude field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CoordinateFormat {
    /// A single signed floating point number of degrees.
    DecimalDegrees,
    /// A packed degrees-minutes-seconds digit run, e.g. `551206.00N`.
    DegreesMinutesSeconds,
}

impl CoordinateFormat {
    /// Classifies one latitude or longitude field.
    ///
    /// With any trailing hemisphere letter removed, a field whose integer
    /// part runs five or more digits is DMS (degrees, minutes and seconds
    /// packed into one digit run); anything shorter reads as decimal
    /// degrees.
    pub fn detect(field: &str) -> Self {
        let body = field.strip_suffix(['N', 'S', 'E', 'W']).unwrap_or(field);
        let unsigned = body.strip_prefix(['+', '-']).unwrap_or(body);
        let int_len = unsigned.split('.').next().map(str::len).unwrap_or(0);
        if int_len >= 5 {
            CoordinateFormat::DegreesMinutesSeconds
        } else {
            CoordinateFormat::DecimalDegrees
        }
    }
}

/// Options applied while parsing coordinate tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ParseOptions {
    /// Unit applied to bare elevation fields and overrides. Defaults to
    /// metres.
    pub elevation_unit: LengthUnit,
    /// When set, replaces the elevation of every point produced by a build,
    /// expressed in `elevation_unit`.
    pub elevation_override: Option<f64>,
}

impl ParseOptions {
    /// Options using the given elevation unit and no override.
    pub fn with_unit(elevation_unit: LengthUnit) -> Self {
        Self {
            elevation_unit,
            elevation_override: None,
        }
    }

    /// Options replacing every elevation with `elevation`, expressed in
    /// `elevation_unit`.
    pub fn with_override(elevation_unit: LengthUnit, elevation: f64) -> Self {
        Self {
            elevation_unit,
            elevation_override: Some(elevation),
        }
    }
}

fn parse_number(token: &str, field: &str) -> Result<f64, ParseError> {
    field
        .parse()
        .map_err(|_| ParseError::MalformedCoordinate(token.to_string()))
}

/// Parses one plain coordinate token into a point.
///
/// The elevation field is optional and read in `options.elevation_unit`;
/// points without one sit at zero elevation.
pub fn parse_coordinate(token: &str, options: &ParseOptions) -> Result<GeodeticPoint, ParseError> {
    let fields: Vec<&str> = token
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();

    let (lat_field, lon_field, elevation_field) = match fields.as_slice() {
        [lat, lon] => (*lat, *lon, None),
        [lat, lon, elevation] => (*lat, *lon, Some(*elevation)),
        _ => return Err(ParseError::MalformedCoordinate(token.to_string())),
    };

    let format = CoordinateFormat::detect(lat_field);
    if CoordinateFormat::detect(lon_field) != format {
        return Err(ParseError::InconsistentFormat(token.to_string()));
    }

    let (lat, lon) = match format {
        CoordinateFormat::DecimalDegrees => (
            parse_number(token, lat_field)?,
            parse_number(token, lon_field)?,
        ),
        CoordinateFormat::DegreesMinutesSeconds => (
            dms_to_decimal(lat_field, Axis::Latitude)?,
            dms_to_decimal(lon_field, Axis::Longitude)?,
        ),
    };

    let elevation = match elevation_field {
        Some(field) => parse_number(token, field)?,
        None => 0.0,
    };

    Ok(GeodeticPoint::new(
        lat,
        lon,
        elevation,
        options.elevation_unit,
    ))
}
