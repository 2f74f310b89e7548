//! Cumulus is a geometry engine that turns textual geodetic coordinate
//! descriptions into three-dimensional volumes suitable for rendering as
//! floating solids, such as aviation airspace.
//!
//! The pipeline runs strictly upward:
//!
//! * [`parse`] turns plain coordinate tokens (`"55.1 -4.1 800"`,
//!   `"551206.00N 0045206.23W"`) and curved segment tokens
//!   (`"start=..., end=..., direction=anticlockwise"`) into typed points and
//!   descriptors;
//! * [`arc`] samples curved segments into ordered point sequences on the
//!   WGS84 ellipsoid;
//! * [`factory`] flattens mixed token lists into one ordered point sequence;
//! * [`shapes`] assembles point sequences into closed [`Polygon`]s, layered
//!   [`Polyhedron`]s, [`Circle`]s, [`Cylinder`]s and open [`LineString`]s.
//!
//! A typical airspace volume extrudes one footprint between two altitudes:
//!
//! ```
//! use cumulus::shapes::Polyhedron;
//! use cumulus::cumulus_types::LengthUnit;
//!
//! let footprint = [
//!     "524025N 0021135W",
//!     "523708N 0020748W",
//!     "523442N 0020900W",
//!     "523847N 0021444W",
//! ];
//! let volume = Polyhedron::from_layers(
//!     &footprint,
//!     &footprint,
//!     1500.0,
//!     5500.0,
//!     LengthUnit::Feet,
//! )?;
//! let (lower, upper, sides) = volume.coords();
//! # Ok::<(), cumulus::CumulusError>(())
//! ```
//!
//! The engine is a pure computation library: no I/O, no global state, no
//! logging beyond a `log` facade at orchestration points. Errors surface
//! eagerly as [`ParseError`] or [`GeometryError`]; malformed input is never
//! silently corrected.

pub use cumulus_types;

pub mod arc;
mod error;
pub mod factory;
pub mod parse;
pub mod shapes;

pub use error::{CumulusError, GeometryError, ParseError};

#[doc(inline)]
pub use shapes::{Circle, Cylinder, LineString, Polygon, Polyhedron};
