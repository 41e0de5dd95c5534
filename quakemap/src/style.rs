//! Rules that turn earthquake attributes into marker appearance.
//!
//! The depth scale is split into six bands. [`DEPTH_BANDS`] is the single source for both the
//! marker colors and the legend, so the two cannot drift apart.

use crate::color::Color;

/// Marker radius in pixels per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 4.0;

/// One band of the depth color scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthBand {
    floor: f64,
    color: Color,
}

impl DepthBand {
    const fn new(floor: f64, color: Color) -> Self {
        Self { floor, color }
    }

    /// Lower bound of the band, in km. A depth belongs to the band if it is strictly greater
    /// than the floor and not greater than the floor of the next band. The floor of the first
    /// band is only used for the legend label, every depth not covered by the other bands
    /// falls into the first one.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Fill color of markers in this band.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Depth bands ordered from the shallowest to the deepest.
pub const DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand::new(-10.0, Color::from_hex("#00ff00")),
    DepthBand::new(10.0, Color::from_hex("#66ff66")),
    DepthBand::new(30.0, Color::from_hex("#ccff33")),
    DepthBand::new(50.0, Color::from_hex("#ffcc00")),
    DepthBand::new(70.0, Color::from_hex("#ff6600")),
    DepthBand::new(90.0, Color::from_hex("#ff0000")),
];

/// Returns the band the depth (km) falls into.
///
/// Bands are checked from the deepest one. Depths of 10 km or less, including negative values
/// and NaN, end up in the shallowest band.
pub fn depth_band(depth: f64) -> &'static DepthBand {
    DEPTH_BANDS[1..]
        .iter()
        .rev()
        .find(|band| depth > band.floor)
        .unwrap_or(&DEPTH_BANDS[0])
}

/// Fill color for an earthquake at the given depth (km).
pub fn depth_color(depth: f64) -> Color {
    depth_band(depth).color
}

/// Marker radius for an earthquake of the given magnitude. Not clamped: zero and negative
/// magnitudes give non-positive radii.
pub fn magnitude_radius(magnitude: f64) -> f64 {
    magnitude * RADIUS_PER_MAGNITUDE
}

/// Appearance of an earthquake circle marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    /// Radius in pixels.
    pub radius: f64,
    /// Fill color.
    pub fill_color: Color,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f32,
    /// Outline color.
    pub stroke_color: Color,
    /// Outline width in pixels.
    pub stroke_weight: f32,
    /// Outline opacity in `[0, 1]`.
    pub stroke_opacity: f32,
}

impl MarkerStyle {
    /// Style of the marker for an earthquake with the given magnitude and depth (km).
    pub fn for_earthquake(magnitude: f64, depth: f64) -> Self {
        Self {
            radius: magnitude_radius(magnitude),
            fill_color: depth_color(depth),
            fill_opacity: 0.8,
            stroke_color: Color::BLACK,
            stroke_weight: 0.5,
            stroke_opacity: 1.0,
        }
    }
}

/// Appearance of a line path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathStyle {
    /// Line color.
    pub color: Color,
    /// Line width in pixels.
    pub weight: f32,
}

/// Style of the tectonic plate boundaries.
pub const PLATE_BOUNDARY_STYLE: PathStyle = PathStyle {
    color: Color::ORANGE,
    weight: 2.0,
};
