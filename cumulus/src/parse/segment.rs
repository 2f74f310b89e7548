//! Parsing of curved segment descriptor tokens.
//!
//! A segment token is a comma separated list of `key=value` pairs, e.g.
//! `start=551206N 0045206W, end=552100N 0044500W, direction=anticlockwise`.
//! The `start`, `end` and `centre` values are plain coordinate tokens with
//! space separated fields.

use cumulus_types::GeodeticPoint;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::parse::coordinate::{parse_coordinate, ParseOptions};

/// Number of intermediate arc points sampled when a segment token does not
/// say otherwise.
pub const DEFAULT_SAMPLE: u32 = 100;

/// Rotational direction of a curved segment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ArcDirection {
    /// Bearings increase from start to end.
    #[default]
    Clockwise,
    /// Bearings decrease from start to end.
    Anticlockwise,
}

/// A parsed curved segment description with all defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SegmentDescriptor {
    /// First point of the arc.
    pub start: GeodeticPoint,
    /// Last point of the arc.
    pub end: GeodeticPoint,
    /// Centre the arc is swept around. Defaults to the planar midpoint of
    /// `start` and `end`.
    pub centre: GeodeticPoint,
    /// Rotational direction. Defaults to clockwise.
    pub direction: ArcDirection,
    /// Number of intermediate points to sample, at least 1. Defaults to
    /// [`DEFAULT_SAMPLE`].
    pub sample: u32,
}

/// Parses one segment token into a descriptor.
///
/// `start` and `end` are required; unknown keys are ignored so new keys can
/// be introduced without breaking existing callers.
pub fn parse_segment(token: &str, options: &ParseOptions) -> Result<SegmentDescriptor, ParseError> {
    let mut start = None;
    let mut end = None;
    let mut centre = None;
    let mut direction = None;
    let mut sample = None;

    for pair in token.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "start" => start = Some(parse_coordinate(value, options)?),
            "end" => end = Some(parse_coordinate(value, options)?),
            "centre" => centre = Some(parse_coordinate(value, options)?),
            "direction" => {
                direction = Some(match value {
                    "clockwise" => ArcDirection::Clockwise,
                    "anticlockwise" => ArcDirection::Anticlockwise,
                    other => {
                        return Err(ParseError::InvalidValue {
                            key: "direction",
                            value: other.to_string(),
                        })
                    }
                })
            }
            "sample" => {
                let count: u32 = value.parse().map_err(|_| ParseError::InvalidValue {
                    key: "sample",
                    value: value.to_string(),
                })?;
                if count == 0 {
                    return Err(ParseError::InvalidValue {
                        key: "sample",
                        value: value.to_string(),
                    });
                }
                sample = Some(count);
            }
            _ => {}
        }
    }

    let start = start.ok_or(ParseError::MissingKey("start"))?;
    let end = end.ok_or(ParseError::MissingKey("end"))?;
    Ok(SegmentDescriptor {
        start,
        end,
        centre: centre.unwrap_or_else(|| start.midpoint(&end)),
        direction: direction.unwrap_or_default(),
        sample: sample.unwrap_or(DEFAULT_SAMPLE),
    })
}

#[cfg(test)]
mod tests {
    use cumulus_types::GeoPoint;

    use super::*;

    #[test]
    fn fills_defaults() {
        let descriptor = parse_segment(
            "start=55.1 -4.1, end=55.2 -4.2",
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(descriptor.direction, ArcDirection::Clockwise);
        assert_eq!(descriptor.sample, DEFAULT_SAMPLE);
        // Centre defaults to the planar midpoint of start and end.
        assert_eq!(descriptor.centre.lat(), 55.150000000000006);
        assert_eq!(descriptor.centre.lon(), -4.15);
    }

    #[test]
    fn parses_all_recognized_keys() {
        let descriptor = parse_segment(
            "start=521447N 0015012W, centre=522722N 0014502W, end=521423N 0014442W, \
             direction=anticlockwise, sample=40",
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(descriptor.direction, ArcDirection::Anticlockwise);
        assert_eq!(descriptor.sample, 40);
        assert!(descriptor.centre.lat() > descriptor.start.lat());
    }

    #[test]
    fn ignores_unknown_keys() {
        let descriptor = parse_segment(
            "start=55.1 -4.1, end=55.2 -4.2, color=red",
            &ParseOptions::default(),
        );
        assert!(descriptor.is_ok());
    }

    #[test]
    fn requires_start_and_end() {
        assert!(matches!(
            parse_segment("end=55.2 -4.2", &ParseOptions::default()),
            Err(ParseError::MissingKey("start"))
        ));
        assert!(matches!(
            parse_segment("start=55.1 -4.1", &ParseOptions::default()),
            Err(ParseError::MissingKey("end"))
        ));
    }

    #[test]
    fn rejects_unknown_directions() {
        assert!(matches!(
            parse_segment(
                "start=55.1 -4.1, end=55.2 -4.2, direction=widdershins",
                &ParseOptions::default()
            ),
            Err(ParseError::InvalidValue { key: "direction", .. })
        ));
    }

    #[test]
    fn rejects_unusable_sample_counts() {
        for token in [
            "start=55.1 -4.1, end=55.2 -4.2, sample=0",
            "start=55.1 -4.1, end=55.2 -4.2, sample=many",
            "start=55.1 -4.1, end=55.2 -4.2, sample=-3",
        ] {
            assert!(matches!(
                parse_segment(token, &ParseOptions::default()),
                Err(ParseError::InvalidValue { key: "sample", .. })
            ));
        }
    }

    #[test]
    fn propagates_coordinate_errors() {
        assert!(parse_segment("start=bogus, end=55.2 -4.2", &ParseOptions::default()).is_err());
    }

    #[test]
    fn descriptors_round_trip_through_serde() {
        let descriptor = parse_segment(
            "start=55.1 -4.1 800, end=55.2 -4.2, direction=anticlockwise, sample=25",
            &ParseOptions::with_unit(cumulus_types::LengthUnit::Feet),
        )
        .unwrap();
        let json = serde_json::to_string(&descriptor).unwrap();
        let decoded: SegmentDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, descriptor);
    }
}
