//! Circles and cylinders around a centre point.

use cumulus_types::{GeodeticPoint, LengthUnit};
use serde::{Deserialize, Serialize};

use crate::arc::sample_circle;
use crate::error::{CumulusError, GeometryError};
use crate::parse::{parse_coordinate, ParseOptions, DEFAULT_SAMPLE};
use crate::shapes::polygon::Polygon;
use crate::shapes::polyhedron::side_walls;

/// Options for building a [`Circle`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CircleOptions {
    /// Unit the radius value is given in. Defaults to nautical miles.
    pub radius_unit: LengthUnit,
    /// Elevation applied to every ring point, in `elevation_unit`.
    pub elevation: f64,
    /// Unit of `elevation`. Defaults to metres.
    pub elevation_unit: LengthUnit,
    /// Ring sample count, at least 1. Defaults to [`DEFAULT_SAMPLE`].
    pub sample: u32,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            radius_unit: LengthUnit::NauticalMiles,
            elevation: 0.0,
            elevation_unit: LengthUnit::Metres,
            sample: DEFAULT_SAMPLE,
        }
    }
}

/// A sampled circular ring around a centre point.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Circle {
    centre: GeodeticPoint,
    radius: f64,
    points: Vec<GeodeticPoint>,
}

impl Circle {
    /// Samples a circle around the centre described by a plain coordinate
    /// token.
    ///
    /// The ring holds `sample + 1` points swept anticlockwise from true
    /// north, the last landing back at the starting bearing.
    pub fn new(centre: &str, radius: f64, options: &CircleOptions) -> Result<Self, CumulusError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GeometryError::InvalidRadius(radius).into());
        }
        if options.sample == 0 {
            return Err(GeometryError::InvalidSample.into());
        }

        let centre = parse_coordinate(centre, &ParseOptions::with_unit(options.elevation_unit))?;
        let radius = options.radius_unit.to_metres(radius);
        let elevation = options.elevation_unit.to_metres(options.elevation);
        let points = sample_circle(&centre, radius, options.sample, elevation);
        Ok(Self {
            centre,
            radius,
            points,
        })
    }

    /// The parsed centre point.
    pub fn centre(&self) -> &GeodeticPoint {
        &self.centre
    }

    /// The radius in metres.
    pub fn radius_metres(&self) -> f64 {
        self.radius
    }

    /// Points of the ring.
    pub fn points(&self) -> &[GeodeticPoint] {
        &self.points
    }

    /// Number of ring points, `sample + 1`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the ring holds no points. Always false for constructed
    /// circles.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinate triples in `(longitude, latitude, elevation_metres)`
    /// order.
    pub fn coords(&self) -> Vec<(f64, f64, f64)> {
        self.points.iter().map(GeodeticPoint::coords).collect()
    }
}

/// Options for building a [`Cylinder`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CylinderOptions {
    /// Unit both radius values are given in. Defaults to nautical miles.
    pub radius_unit: LengthUnit,
    /// Elevation of the lower ring, in `elevation_unit`.
    pub lower_elevation: f64,
    /// Elevation of the upper ring, in `elevation_unit`.
    pub upper_elevation: f64,
    /// Unit of the elevations. Defaults to metres.
    pub elevation_unit: LengthUnit,
    /// Sample count shared by both rings, at least 1. Defaults to
    /// [`DEFAULT_SAMPLE`].
    pub sample: u32,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius_unit: LengthUnit::NauticalMiles,
            lower_elevation: 0.0,
            upper_elevation: 0.0,
            elevation_unit: LengthUnit::Metres,
            sample: DEFAULT_SAMPLE,
        }
    }
}

/// Two stacked circles joined by quadrilateral side walls.
///
/// Both rings share one sample count, so their point counts always match and
/// the side-wall rule of [`Polyhedron`](crate::shapes::Polyhedron) applies
/// unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Cylinder {
    lower: Circle,
    upper: Circle,
    sides: Vec<Polygon>,
}

impl Cylinder {
    /// Builds the two rings from `(centre_token, radius)` pairs and joins
    /// them with side walls.
    pub fn new(
        lower: (&str, f64),
        upper: (&str, f64),
        options: &CylinderOptions,
    ) -> Result<Self, CumulusError> {
        let lower = Circle::new(
            lower.0,
            lower.1,
            &CircleOptions {
                radius_unit: options.radius_unit,
                elevation: options.lower_elevation,
                elevation_unit: options.elevation_unit,
                sample: options.sample,
            },
        )?;
        let upper = Circle::new(
            upper.0,
            upper.1,
            &CircleOptions {
                radius_unit: options.radius_unit,
                elevation: options.upper_elevation,
                elevation_unit: options.elevation_unit,
                sample: options.sample,
            },
        )?;
        let sides = side_walls(lower.points(), upper.points());
        Ok(Self {
            lower,
            upper,
            sides,
        })
    }

    /// The lower ring.
    pub fn lower_circle(&self) -> &Circle {
        &self.lower
    }

    /// The upper ring.
    pub fn upper_circle(&self) -> &Circle {
        &self.upper
    }

    /// The generated side walls, one per ring edge.
    pub fn sides(&self) -> &[Polygon] {
        &self.sides
    }

    /// The `(lower, upper, sides)` coordinate triples for serialization.
    #[allow(clippy::type_complexity)]
    pub fn coords(
        &self,
    ) -> (
        Vec<(f64, f64, f64)>,
        Vec<(f64, f64, f64)>,
        Vec<Vec<(f64, f64, f64)>>,
    ) {
        (
            self.lower.coords(),
            self.upper.coords(),
            self.sides.iter().map(Polygon::coords).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use cumulus_types::geodesy;

    use super::*;

    #[test]
    fn samples_ring_at_requested_radius() {
        let options = CircleOptions {
            radius_unit: LengthUnit::NauticalMiles,
            elevation: 2000.0,
            elevation_unit: LengthUnit::Feet,
            sample: 24,
        };
        let circle = Circle::new("55.0 -4.0", 5.0, &options).unwrap();
        assert_eq!(circle.len(), 25);
        assert_eq!(circle.radius_metres(), 9260.0);
        for point in circle.points() {
            assert_abs_diff_eq!(
                geodesy::distance(circle.centre(), point),
                9260.0,
                epsilon = 1e-3
            );
            assert_eq!(point.elevation(), 2000.0 * 0.3048);
        }
    }

    #[test]
    fn rejects_non_positive_radii() {
        assert!(matches!(
            Circle::new("55.0 -4.0", 0.0, &CircleOptions::default()),
            Err(CumulusError::Geometry(GeometryError::InvalidRadius(_)))
        ));
        assert!(Circle::new("55.0 -4.0", -2.5, &CircleOptions::default()).is_err());
    }

    #[test]
    fn rejects_zero_sample_counts() {
        let options = CircleOptions {
            sample: 0,
            ..CircleOptions::default()
        };
        assert!(matches!(
            Circle::new("55.0 -4.0", 5.0, &options),
            Err(CumulusError::Geometry(GeometryError::InvalidSample))
        ));
    }

    #[test]
    fn propagates_centre_parse_errors() {
        assert!(matches!(
            Circle::new("not a centre", 5.0, &CircleOptions::default()),
            Err(CumulusError::Parse(_))
        ));
    }

    #[test]
    fn cylinder_joins_rings_with_side_walls() {
        let options = CylinderOptions {
            radius_unit: LengthUnit::NauticalMiles,
            lower_elevation: 1000.0,
            upper_elevation: 3000.0,
            elevation_unit: LengthUnit::Feet,
            sample: 12,
        };
        let cylinder = Cylinder::new(("55.0 -4.0", 2.0), ("55.0 -4.0", 2.0), &options).unwrap();
        assert_eq!(cylinder.lower_circle().len(), 13);
        assert_eq!(cylinder.upper_circle().len(), 13);
        assert_eq!(cylinder.sides().len(), 12);
        for side in cylinder.sides() {
            assert_eq!(side.len(), 5);
        }
        let (lower, upper, sides) = cylinder.coords();
        assert_eq!(lower.len(), 13);
        assert_eq!(upper.len(), 13);
        assert_eq!(sides.len(), 12);
    }
}
