//! End-to-end assembly of real airspace volumes from published boundary
//! descriptions.

use approx::assert_abs_diff_eq;
use cumulus::cumulus_types::{geodesy, GeoPoint, LengthUnit};
use cumulus::parse::{parse_coordinate, ParseOptions};
use cumulus::shapes::{Cylinder, CylinderOptions, Polyhedron};
use cumulus::CumulusError;

/// Birmingham CTA 10 boundary: six straight legs and one anticlockwise arc
/// around the Birmingham DME.
const BIRMINGHAM_CTA_10: [&str; 8] = [
    "521803N 0021116W",
    "521544N 0020755W",
    "521634N 0015214W",
    "start=521447N 0015012W, centre=522722N 0014502W, end=521423N 0014442W, \
     direction=anticlockwise, sample=10",
    "520711N 0014056W",
    "520648N 0020148W",
    "521702N 0021251W",
    "521803N 0021116W",
];

#[test]
fn builds_a_controlled_airspace_volume() -> Result<(), CumulusError> {
    let volume = Polyhedron::from_layers(
        &BIRMINGHAM_CTA_10,
        &BIRMINGHAM_CTA_10,
        4500.0,
        10500.0,
        LengthUnit::Feet,
    )?;

    // Seven plain points plus a twelve point arc; the boundary list already
    // repeats its first point, so closure adds nothing.
    assert_eq!(volume.lower_layer().len(), 19);
    assert_eq!(volume.upper_layer().len(), 19);
    assert_eq!(volume.sides().len(), 18);

    for point in volume.lower_layer().points() {
        assert_eq!(point.elevation(), 4500.0 * 0.3048);
    }
    for point in volume.upper_layer().points() {
        assert_eq!(point.elevation(), 10500.0 * 0.3048);
    }
    for side in volume.sides() {
        assert_eq!(side.len(), 5);
    }
    Ok(())
}

#[test]
fn arc_legs_end_exactly_on_the_declared_point() -> Result<(), CumulusError> {
    let volume = Polyhedron::from_layers(
        &BIRMINGHAM_CTA_10,
        &BIRMINGHAM_CTA_10,
        4500.0,
        10500.0,
        LengthUnit::Feet,
    )?;

    let arc_end = parse_coordinate("521423N 0014442W", &ParseOptions::default())?;
    // Tokens 0..2 are plain, the arc occupies indices 3..=14 and its last
    // point is the declared end, byte-identical in latitude and longitude.
    let sampled = &volume.lower_layer().points()[14];
    assert_eq!(sampled.lat(), arc_end.lat());
    assert_eq!(sampled.lon(), arc_end.lon());
    Ok(())
}

#[test]
fn open_boundaries_are_closed_at_construction() -> Result<(), CumulusError> {
    let open = &BIRMINGHAM_CTA_10[..7];
    let volume = Polyhedron::from_layers(open, open, 4500.0, 10500.0, LengthUnit::Feet)?;
    let points = volume.lower_layer().points();
    assert!(points[0].coords_eq(&points[points.len() - 1]));
    Ok(())
}

#[test]
fn builds_a_danger_area_cylinder() -> Result<(), CumulusError> {
    let centre = "522612N 0013710E";
    let options = CylinderOptions {
        radius_unit: LengthUnit::NauticalMiles,
        lower_elevation: 0.0,
        upper_elevation: 5000.0,
        elevation_unit: LengthUnit::Feet,
        sample: 40,
    };
    let cylinder = Cylinder::new((centre, 2.0), (centre, 2.0), &options)?;

    assert_eq!(cylinder.lower_circle().len(), 41);
    assert_eq!(cylinder.sides().len(), 40);

    let centre_point = parse_coordinate(centre, &ParseOptions::default())?;
    for point in cylinder.upper_circle().points() {
        assert_abs_diff_eq!(
            geodesy::distance(&centre_point, point),
            3704.0,
            epsilon = 1e-3
        );
        assert_eq!(point.elevation(), 5000.0 * 0.3048);
    }
    Ok(())
}
