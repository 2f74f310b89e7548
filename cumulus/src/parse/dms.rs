//! Degrees-minutes-seconds codec.
//!
//! A DMS field packs degrees, minutes and seconds into one digit run, e.g.
//! `551206.00N` for latitude or `0045206.23W` for longitude, with an optional
//! fractional seconds part and either a trailing hemisphere letter or a
//! leading sign.

use crate::error::ParseError;

/// Which coordinate a DMS field encodes.
///
/// Latitude fields carry 2 degree digits, longitude fields 3. The hemisphere
/// letter decides when present; the axis decides for signed letterless
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/south coordinate, 2 degree digits.
    Latitude,
    /// East/west coordinate, 3 degree digits.
    Longitude,
}

/// Decodes a DMS field into decimal degrees.
///
/// The value is `degrees + minutes/60 + seconds/3600`, negated for the S and
/// W hemispheres or for an explicit leading minus. A sign combined with a
/// hemisphere letter is rejected.
pub fn dms_to_decimal(field: &str, axis: Axis) -> Result<f64, ParseError> {
    let malformed = || ParseError::MalformedDms(field.to_string());

    let (body, hemisphere) = match field.chars().last() {
        Some(letter @ ('N' | 'S' | 'E' | 'W')) => (&field[..field.len() - 1], Some(letter)),
        Some(_) => (field, None),
        None => return Err(malformed()),
    };

    let (digits, negative) = match hemisphere {
        Some(letter) => {
            if body.starts_with(['+', '-']) {
                return Err(malformed());
            }
            (body, matches!(letter, 'S' | 'W'))
        }
        None => {
            if let Some(rest) = body.strip_prefix('-') {
                (rest, true)
            } else if let Some(rest) = body.strip_prefix('+') {
                (rest, false)
            } else {
                (body, false)
            }
        }
    };

    let degree_digits = match hemisphere {
        Some('N' | 'S') => 2,
        Some('E' | 'W') => 3,
        _ => match axis {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        },
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    if int_part.len() < degree_digits + 3 || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let degrees: f64 = int_part[..degree_digits].parse().map_err(|_| malformed())?;
    let minutes: f64 = int_part[degree_digits..degree_digits + 2]
        .parse()
        .map_err(|_| malformed())?;
    let seconds: f64 = match frac_part {
        Some(frac) => format!("{}.{frac}", &int_part[degree_digits + 2..]),
        None => int_part[degree_digits + 2..].to_string(),
    }
    .parse()
    .map_err(|_| malformed())?;

    let value = degrees + minutes / 60.0 + seconds / 3600.0;
    Ok(if negative { -value } else { value })
}

/// Encodes decimal degrees as a DMS field with a hemisphere letter and
/// seconds rounded to two decimal places.
pub fn decimal_to_dms(value: f64, axis: Axis) -> String {
    let hemisphere = match (axis, value < 0.0) {
        (Axis::Latitude, false) => 'N',
        (Axis::Latitude, true) => 'S',
        (Axis::Longitude, false) => 'E',
        (Axis::Longitude, true) => 'W',
    };

    let magnitude = value.abs();
    let mut degrees = magnitude.trunc();
    let mut minutes = (magnitude * 60.0).trunc() % 60.0;
    let mut seconds =
        ((magnitude * 3600.0 - degrees * 3600.0 - minutes * 60.0) * 100.0).round() / 100.0;
    // Carry over when seconds round up to 60.00.
    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1.0;
    }
    if minutes >= 60.0 {
        minutes -= 60.0;
        degrees += 1.0;
    }
    let degrees = degrees as u32;
    let minutes = minutes as u32;

    match axis {
        Axis::Latitude => format!("{degrees:02}{minutes:02}{seconds:05.2}{hemisphere}"),
        Axis::Longitude => format!("{degrees:03}{minutes:02}{seconds:05.2}{hemisphere}"),
    }
}
