//! Assembly of point sequences into renderable shapes: closed polygons,
//! layered polyhedra, circles, cylinders and open paths.

mod circle;
mod linestring;
mod polygon;
mod polyhedron;

pub use circle::{Circle, CircleOptions, Cylinder, CylinderOptions};
pub use linestring::LineString;
pub use polygon::Polygon;
pub use polyhedron::Polyhedron;
