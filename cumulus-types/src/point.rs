use approx::AbsDiffEq;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::units::LengthUnit;

/// A point on the surface of a celestial body.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;

    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// 3d point on the surface of a celestial body.
///
/// Latitude and longitude are stored in decimal degrees and the elevation in
/// metres, whatever encoding and unit the caller supplied. The supplied unit
/// is retained so values can be round-tripped back out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct GeodeticPoint {
    lat: f64,
    lon: f64,
    elevation: f64,
    elevation_unit: LengthUnit,
}

impl GeoPoint for GeodeticPoint {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl GeodeticPoint {
    /// Creates a new point at zero elevation.
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            elevation: 0.0,
            elevation_unit: LengthUnit::Metres,
        }
    }

    /// Creates a new point with the elevation given in `unit`.
    pub fn new(lat: f64, lon: f64, elevation: f64, unit: LengthUnit) -> Self {
        Self {
            lat,
            lon,
            elevation: unit.to_metres(elevation),
            elevation_unit: unit,
        }
    }

    /// Elevation in metres.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// The unit the elevation was supplied in.
    pub fn elevation_unit(&self) -> LengthUnit {
        self.elevation_unit
    }

    /// Returns a copy of the point with the elevation replaced by a value
    /// given in `unit`.
    pub fn with_elevation(&self, elevation: f64, unit: LengthUnit) -> Self {
        Self {
            elevation: unit.to_metres(elevation),
            elevation_unit: unit,
            ..*self
        }
    }

    /// Returns a copy of the point with the elevation replaced by a computed
    /// value in metres.
    pub fn with_elevation_metres(&self, metres: f64) -> Self {
        Self {
            elevation: metres,
            elevation_unit: LengthUnit::Metres,
            ..*self
        }
    }

    /// Midpoint of two points by arithmetic mean of latitudes and longitudes,
    /// at zero elevation.
    ///
    /// This is a planar approximation, not a geodesic midpoint. It is only
    /// suitable for the short spans this crate targets.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::latlon((self.lat + other.lat) / 2.0, (self.lon + other.lon) / 2.0)
    }

    /// Whether two points have exactly equal coordinates and elevation.
    ///
    /// Exact comparison, no epsilon. Closure checks rely on byte-identical
    /// doubles produced by the parsing pipeline.
    pub fn coords_eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lon == other.lon && self.elevation == other.elevation
    }

    /// The point as a `(longitude, latitude, elevation_metres)` triple.
    ///
    /// This x/y swap relative to the internal latitude-first storage is the
    /// order downstream serializers consume.
    pub fn coords(&self) -> (f64, f64, f64) {
        (self.lon, self.lat, self.elevation)
    }
}

impl AbsDiffEq for GeodeticPoint {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon)
            && self.lon.abs_diff_eq(&other.lon, epsilon)
            && self.elevation.abs_diff_eq(&other.elevation, epsilon)
    }
}
