//! Open paths of geodetic points.

use cumulus_types::GeodeticPoint;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::factory::build_point_list;
use crate::parse::ParseOptions;

/// An open ordered path built from the same token grammar as polygons.
///
/// Unlike [`Polygon`](crate::shapes::Polygon) there is no closure invariant
/// and no minimum point count.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LineString {
    points: Vec<GeodeticPoint>,
}

impl LineString {
    /// Parses a token list into an open path.
    pub fn from_tokens<S: AsRef<str>>(
        tokens: &[S],
        options: &ParseOptions,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            points: build_point_list(tokens, options)?,
        })
    }

    /// Points of the path, in token order.
    pub fn points(&self) -> &[GeodeticPoint] {
        &self.points
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Coordinate triples in `(longitude, latitude, elevation_metres)`
    /// order.
    pub fn coords(&self) -> Vec<(f64, f64, f64)> {
        self.points.iter().map(GeodeticPoint::coords).collect()
    }
}
