//! Orchestration of mixed token lists into flat point sequences.

use cumulus_types::GeodeticPoint;

use crate::arc::sample_arc;
use crate::error::ParseError;
use crate::parse::{parse_coordinate, parse_segment, ParseOptions};

/// Whether a token describes a curved segment rather than a plain point.
pub fn is_segment_token(token: &str) -> bool {
    token.contains("start=")
}

/// Builds an ordered point sequence from a mixed list of plain coordinate
/// tokens and curved segment tokens.
///
/// Segment tokens expand into their sampled arcs; results concatenate in
/// token order. When `options.elevation_override` is set, it replaces the
/// elevation of every point of the flattened list after parsing and sampling
/// have run. The first bad token aborts the whole build.
pub fn build_point_list<S: AsRef<str>>(
    tokens: &[S],
    options: &ParseOptions,
) -> Result<Vec<GeodeticPoint>, ParseError> {
    let mut points = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        if is_segment_token(token) {
            let descriptor = parse_segment(token, options)?;
            points.extend(sample_arc(&descriptor));
        } else {
            points.push(parse_coordinate(token, options)?);
        }
    }

    if let Some(elevation) = options.elevation_override {
        for point in &mut points {
            *point = point.with_elevation(elevation, options.elevation_unit);
        }
    }

    log::debug!("built {} points from {} tokens", points.len(), tokens.len());
    Ok(points)
}

#[cfg(test)]
mod tests {
    use cumulus_types::{GeoPoint, LengthUnit};

    use super::*;

    #[test]
    fn classifies_segment_tokens() {
        assert!(is_segment_token("start=55.1 -4.1, end=55.2 -4.2"));
        assert!(!is_segment_token("55.1 -4.1"));
    }

    #[test]
    fn concatenates_points_in_token_order() {
        let tokens = [
            "55.0 -4.0",
            "start=55.1 -4.2, end=55.1 -4.0, centre=55.0 -4.1, sample=4",
            "55.2 -4.3",
        ];
        let points = build_point_list(&tokens, &ParseOptions::default()).unwrap();
        // One plain point, a six point arc, one plain point.
        assert_eq!(points.len(), 8);
        assert_eq!(points[0].lat(), 55.0);
        assert_eq!(points[7].lat(), 55.2);
    }

    #[test]
    fn override_replaces_every_elevation() {
        let tokens = [
            "55.0 -4.0 1200",
            "start=55.1 -4.2 300, end=55.1 -4.0 900, centre=55.0 -4.1, sample=2",
        ];
        let options = ParseOptions::with_override(LengthUnit::Feet, 1500.0);
        let points = build_point_list(&tokens, &options).unwrap();
        assert_eq!(points.len(), 5);
        for point in &points {
            assert_eq!(point.elevation(), 1500.0 * 0.3048);
            assert_eq!(point.elevation_unit(), LengthUnit::Feet);
        }
    }

    #[test]
    fn first_bad_token_aborts_the_build() {
        let tokens = ["55.0 -4.0", "not a coordinate", "55.2 -4.3"];
        assert!(build_point_list(&tokens, &ParseOptions::default()).is_err());
    }

    #[test]
    fn empty_token_list_builds_empty_point_list() {
        let tokens: [&str; 0] = [];
        let points = build_point_list(&tokens, &ParseOptions::default()).unwrap();
        assert!(points.is_empty());
    }
}
