//! Geodetic data model shared by the cumulus airspace engine.
//!
//! The crate provides the [`GeodeticPoint`] type and the [`GeoPoint`] trait it
//! implements, the [`LengthUnit`] conversion table used for elevations and
//! radii, and the [`geodesy`] module with bearing, distance and
//! destination-point computations on the WGS84 ellipsoid.

mod error;
pub use error::*;

pub mod geodesy;

mod point;
pub use point::*;

mod units;
pub use units::*;
