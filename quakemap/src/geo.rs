//! Geographic points and the Web Mercator projection used to place them on screen.

use std::f64::consts::PI;

/// Largest latitude representable in Web Mercator, in degrees.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Geographic point in degrees on the WGS84 ellipsoid.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LatLon {
    lat: f64,
    lon: f64,
}

impl LatLon {
    /// Creates a new point.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Creates a point from a GeoJSON position (`[lon, lat, ...]`). Returns `None` if there are
    /// fewer than two components.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lon, lat, ..] => Some(Self::new(*lat, *lon)),
            _ => None,
        }
    }

    /// Projects the point into normalized Web Mercator coordinates: `x` grows eastwards from 0 at
    /// the antimeridian to 1, `y` grows southwards from 0 at [`MAX_LATITUDE`] to 1.
    ///
    /// Latitudes beyond the projection limit are clamped.
    pub fn project(&self) -> Point2 {
        let lat = self.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (self.lon + 180.0) / 360.0;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;

        Point2::new(x, y)
    }

    /// Inverse of [`LatLon::project`].
    pub fn unproject(point: Point2) -> Self {
        let lon = point.x * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * point.y)).sinh().atan().to_degrees();

        Self::new(lat, lon)
    }
}

/// Creates a [`LatLon`] from latitude and longitude.
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geo::LatLon::new($lat, $lon)
    };
}

/// Cartesian point.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2 {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to the other point.
    pub fn distance(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
