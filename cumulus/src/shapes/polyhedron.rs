//! Layered solids built from two polygon footprints.

use cumulus_types::{GeodeticPoint, LengthUnit};
use serde::{Deserialize, Serialize};

use crate::error::{CumulusError, GeometryError};
use crate::parse::ParseOptions;
use crate::shapes::polygon::Polygon;

/// A solid bounded by a lower and an upper polygon layer and the
/// quadrilateral side walls joining them.
///
/// Both layers must hold the same number of points; this is checked once,
/// eagerly, at construction. The solid is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Polyhedron {
    lower: Polygon,
    upper: Polygon,
    sides: Vec<Polygon>,
}

impl Polyhedron {
    /// Builds both layers from token lists and joins them with side walls.
    ///
    /// The common case passes the same token list twice so one footprint is
    /// extruded between two altitudes; independently shaped layers work as
    /// long as the vertex counts match after closure. Elevations are read in
    /// `elevation_unit` and override every point of their layer.
    pub fn from_layers<S: AsRef<str>>(
        lower_tokens: &[S],
        upper_tokens: &[S],
        lower_elevation: f64,
        upper_elevation: f64,
        elevation_unit: LengthUnit,
    ) -> Result<Self, CumulusError> {
        let lower = Polygon::from_tokens(
            lower_tokens,
            &ParseOptions::with_override(elevation_unit, lower_elevation),
        )?;
        let upper = Polygon::from_tokens(
            upper_tokens,
            &ParseOptions::with_override(elevation_unit, upper_elevation),
        )?;
        Ok(Self::from_polygons(lower, upper)?)
    }

    /// Joins two prebuilt layers with side walls.
    pub fn from_polygons(lower: Polygon, upper: Polygon) -> Result<Self, GeometryError> {
        if lower.len() != upper.len() {
            return Err(GeometryError::LayerMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        let sides = side_walls(lower.points(), upper.points());
        log::debug!(
            "assembled polyhedron: {} points per layer, {} side walls",
            lower.len(),
            sides.len()
        );
        Ok(Self {
            lower,
            upper,
            sides,
        })
    }

    /// The lower layer.
    pub fn lower_layer(&self) -> &Polygon {
        &self.lower
    }

    /// The upper layer.
    pub fn upper_layer(&self) -> &Polygon {
        &self.upper
    }

    /// The generated side walls, one per edge of the lower layer.
    pub fn sides(&self) -> &[Polygon] {
        &self.sides
    }

    /// The `(lower, upper, sides)` coordinate triples for serialization,
    /// each triple in `(longitude, latitude, elevation_metres)` order.
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

/// Generates one quadrilateral wall per edge of the closed rings.
///
/// The rings close themselves, so the loop stops one short of the length and
/// the last edge wraps through the closing duplicate. The fixed vertex order
/// `[lower_i, lower_i1, upper_i1, upper_i, lower_i]` is what makes adjoining
/// walls share their edges consistently.
pub(crate) fn side_walls(lower: &[GeodeticPoint], upper: &[GeodeticPoint]) -> Vec<Polygon> {
    (0..lower.len().saturating_sub(1))
        .map(|i| {
            Polygon::from_closed_ring(vec![
                lower[i],
                lower[i + 1],
                upper[i + 1],
                upper[i],
                lower[i],
            ])
        })
        .collect()
}
