//! Sampling of curved segments into ordered point sequences.

use cumulus_types::{geodesy, GeodeticPoint};

use crate::parse::{ArcDirection, SegmentDescriptor};

/// Samples the arc described by `descriptor` into an ordered point sequence.
///
/// The sweep runs from the centre-to-start bearing to the centre-to-end
/// bearing in the descriptor's rotational direction, always taking the full
/// `(0..360]` way around rather than the shorter arc. `sample + 1` points are
/// projected at the constant centre-to-start radius, then the declared end
/// point is appended verbatim so the arc closes exactly regardless of
/// floating point drift, for `sample + 2` points in total.
///
/// Elevations interpolate linearly from the start to the end elevation. A
/// zero sweep is a legitimate degenerate circle request and still produces
/// the full point count.
pub fn sample_arc(descriptor: &SegmentDescriptor) -> Vec<GeodeticPoint> {
    let start_bearing = geodesy::bearing(&descriptor.centre, &descriptor.start);
    let end_bearing = geodesy::bearing(&descriptor.centre, &descriptor.end);

    let sweep = match descriptor.direction {
        ArcDirection::Clockwise => (end_bearing - start_bearing).rem_euclid(360.0),
        ArcDirection::Anticlockwise => (start_bearing - end_bearing).rem_euclid(360.0),
    };
    let increment = sweep / f64::from(descriptor.sample + 1);
    let radius = geodesy::distance(&descriptor.centre, &descriptor.start);
    let height_increment = height_increment(
        descriptor.start.elevation(),
        descriptor.end.elevation(),
        descriptor.sample,
    );

    let mut points = Vec::with_capacity(descriptor.sample as usize + 2);
    for n in 0..=descriptor.sample {
        let step = f64::from(n) * increment;
        let bearing = match descriptor.direction {
            ArcDirection::Clockwise => start_bearing + step,
            ArcDirection::Anticlockwise => start_bearing - step,
        };
        let elevation = descriptor.start.elevation() + f64::from(n) * height_increment;
        points.push(
            geodesy::destination(&descriptor.centre, bearing.rem_euclid(360.0), radius)
                .with_elevation_metres(elevation),
        );
    }
    points.push(descriptor.end);

    points
}

/// Per-step elevation change, signed towards the end elevation.
fn height_increment(start: f64, end: f64, sample: u32) -> f64 {
    let difference = (start - end).abs() / f64::from(sample);
    if start > end {
        -difference
    } else {
        difference
    }
}

/// Samples a full circle of `sample + 1` points around `centre` at the given
/// radius in metres, swept anticlockwise from true north.
///
/// Every point sits at `elevation` metres. The last point lands back at the
/// starting bearing, closing the ring up to floating point drift.
pub fn sample_circle(
    centre: &GeodeticPoint,
    radius: f64,
    sample: u32,
    elevation: f64,
) -> Vec<GeodeticPoint> {
    let increment = 360.0 / f64::from(sample);
    (0..=sample)
        .map(|n| {
            let bearing = (-f64::from(n) * increment).rem_euclid(360.0);
            geodesy::destination(centre, bearing, radius).with_elevation_metres(elevation)
        })
        .collect()
}
