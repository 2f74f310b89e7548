//! Error types used by the engine.

use cumulus_types::CumulusTypesError;
use thiserror::Error;

/// Errors raised while parsing coordinate or segment tokens.
///
/// Every variant names the offending token or field; the parsers never guess
/// their way past bad input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A coordinate token with the wrong field count or an unparseable
    /// numeric field.
    #[error("malformed coordinate token `{0}`")]
    MalformedCoordinate(String),
    /// Latitude and longitude fields of one token resolved to different
    /// formats.
    #[error("latitude and longitude of `{0}` use different coordinate formats")]
    InconsistentFormat(String),
    /// A degrees-minutes-seconds field that could not be decoded.
    #[error("malformed DMS field `{0}`")]
    MalformedDms(String),
    /// An elevation or radius unit token outside the conversion table.
    #[error(transparent)]
    UnknownUnit(#[from] CumulusTypesError),
    /// A segment token without one of its required keys.
    #[error("segment token is missing required key `{0}`")]
    MissingKey(&'static str),
    /// A segment key with an unusable value.
    #[error("invalid value `{value}` for segment key `{key}`")]
    InvalidValue {
        /// The segment key.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Errors raised while assembling polygons and polyhedra.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Too few vertices to close a polygon.
    #[error("cannot build a polygon from {0} points, at least 3 are required")]
    TooFewVertices(usize),
    /// Layer vertex counts differ.
    #[error("lower and upper layers must contain the same number of points: lower {lower}, upper {upper}")]
    LayerMismatch {
        /// Vertex count of the lower layer.
        lower: usize,
        /// Vertex count of the upper layer.
        upper: usize,
    },
    /// A circle radius that is not a positive finite number.
    #[error("circle radius must be positive, got {0}")]
    InvalidRadius(f64),
    /// A sample count of zero.
    #[error("sample count must be at least 1")]
    InvalidSample,
}

/// Umbrella error for operations that both parse tokens and assemble
/// geometry.
#[derive(Debug, Error)]
pub enum CumulusError {
    /// Token parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Geometry assembly failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
