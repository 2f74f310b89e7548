//! Parsing of the two token grammars accepted by the engine: plain
//! coordinate tokens and curved segment descriptors.

mod coordinate;
mod dms;
mod segment;

pub use coordinate::{parse_coordinate, CoordinateFormat, ParseOptions};
pub use dms::{decimal_to_dms, dms_to_decimal, Axis};
pub use segment::{parse_segment, ArcDirection, SegmentDescriptor, DEFAULT_SAMPLE};
