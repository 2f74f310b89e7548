//! Closed polygon rings.

use cumulus_types::{geodesy, GeoPoint, GeodeticPoint};
use serde::{Deserialize, Serialize};

use crate::error::{CumulusError, GeometryError};
use crate::factory::build_point_list;
use crate::parse::ParseOptions;

/// A closed ring of geodetic points.
///
/// The stored sequence always ends with a copy of its first point; an open
/// input ring is closed at construction. The ring is never mutated after
/// closure except through the explicit bearing sort.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    points: Vec<GeodeticPoint>,
}

impl Polygon {
    /// Builds a polygon from parsed points, closing the ring when the last
    /// point does not already equal the first.
    ///
    /// Closure uses exact coordinate equality, no epsilon: the parsing
    /// pipeline produces byte-identical doubles when start and end were
    /// meant to coincide.
    pub fn from_points(mut points: Vec<GeodeticPoint>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewVertices(points.len()));
        }
        let first = points[0];
        if !points[points.len() - 1].coords_eq(&first) {
            points.push(first);
        }
        Ok(Self { points })
    }

    /// Parses a token list and builds the closed ring from it.
    pub fn from_tokens<S: AsRef<str>>(
        tokens: &[S],
        options: &ParseOptions,
    ) -> Result<Self, CumulusError> {
        let points = build_point_list(tokens, options)?;
        Ok(Self::from_points(points)?)
    }

    /// Wraps a ring that is closed by construction.
    pub(crate) fn from_closed_ring(points: Vec<GeodeticPoint>) -> Self {
        Self { points }
    }

    /// Points of the ring, closing duplicate included.
    pub fn points(&self) -> &[GeodeticPoint] {
        &self.points
    }

    /// Number of stored points, closing duplicate included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the ring holds no points. Always false for constructed
    /// polygons.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Planar centroid: the arithmetic mean of all stored latitudes and
    /// longitudes, closing duplicate included, at zero elevation.
    pub fn centroid(&self) -> GeodeticPoint {
        let count = self.points.len() as f64;
        let (lat_total, lon_total) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat(), lon + p.lon()));
        GeodeticPoint::latlon(lat_total / count, lon_total / count)
    }

    /// Reorders the vertices in descending order of bearing from the
    /// centroid, so they wind counter-clockwise as seen from above.
    ///
    /// The rendering target draws faces correctly only for that winding.
    /// This is an explicit step rather than part of construction because
    /// sampled arcs are already ordered and must not be resorted.
    pub fn sort_by_bearing_from_centroid(&mut self) {
        let centroid = self.centroid();
        self.points.pop();

        let mut keyed: Vec<(f64, GeodeticPoint)> = self
            .points
            .drain(..)
            .map(|p| (geodesy::bearing(&centroid, &p), p))
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));

        self.points = keyed.into_iter().map(|(_, p)| p).collect();
        let first = self.points[0];
        self.points.push(first);
    }

    /// Coordinate triples in `(longitude, latitude, elevation_metres)`
    /// order, the contract the downstream serializer depends on.
    pub fn coords(&self) -> Vec<(f64, f64, f64)> {
        self.points.iter().map(GeodeticPoint::coords).collect()
    }
}
