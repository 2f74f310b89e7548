//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum CumulusTypesError {
    /// A unit of measure token that is not in the conversion table.
    #[error("unrecognized unit of measure: {0}")]
    UnknownUnit(String),
}
