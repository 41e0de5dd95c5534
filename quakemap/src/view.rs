use crate::geo::{LatLon, Point2, MAX_LATITUDE};

/// Size of a tile side in pixels at integer zoom levels.
pub const TILE_SIZE: f64 = 256.0;
/// Minimum zoom level a viewport can be set to.
pub const MIN_ZOOM: f64 = 1.0;
/// Maximum zoom level a viewport can be set to.
pub const MAX_ZOOM: f64 = 18.0;

/// Size of a rectangular area in pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Half of the width.
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half of the height.
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Returns true if either dimension is zero.
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Part of the Web Mercator plane visible on screen.
///
/// The viewport is defined by its center point, a fractional zoom level and the pixel size of
/// the screen area. At zoom `z` the whole world is `256 * 2^z` pixels wide. Screen coordinates
/// start at the top left corner of the area with `y` growing downwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: LatLon,
    zoom: f64,
    size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: LatLon::default(),
            zoom: MIN_ZOOM,
            size: Size::default(),
        }
    }
}

impl Viewport {
    /// Creates a new viewport. The zoom level is clamped to `[MIN_ZOOM, MAX_ZOOM]`, the latitude
    /// of the center to `±MAX_LATITUDE`.
    pub fn new(center: LatLon, zoom: f64) -> Self {
        Self {
            center: clamp_center(center),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size: Size::default(),
        }
    }

    /// Center of the viewport.
    pub fn center(&self) -> LatLon {
        self.center
    }

    /// Fractional zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Pixel size of the viewport.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns a copy of the viewport with the given size.
    pub fn with_size(&self, size: Size) -> Self {
        Self { size, ..*self }
    }

    /// Returns a copy of the viewport with the given zoom level (clamped).
    pub fn with_zoom(&self, zoom: f64) -> Self {
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            ..*self
        }
    }

    /// Returns a copy of the viewport centered at the given point (latitude clamped).
    pub fn with_center(&self, center: LatLon) -> Self {
        Self {
            center: clamp_center(center),
            ..*self
        }
    }

    /// Width of the whole world in pixels at the current zoom.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Pixel coordinates of the top left corner of the viewport in the world pixel space.
    pub(crate) fn origin(&self) -> Point2 {
        let center = self.to_world(self.center);
        Point2::new(
            center.x - self.size.half_width(),
            center.y - self.size.half_height(),
        )
    }

    fn to_world(&self, point: LatLon) -> Point2 {
        let projected = point.project();
        let world_size = self.world_size();
        Point2::new(projected.x * world_size, projected.y * world_size)
    }

    /// Screen position of the given geographic point.
    pub fn latlon_to_screen(&self, point: LatLon) -> Point2 {
        let world = self.to_world(point);
        let origin = self.origin();
        Point2::new(world.x - origin.x, world.y - origin.y)
    }

    /// Geographic point at the given screen position.
    pub fn screen_to_latlon(&self, point: Point2) -> LatLon {
        let origin = self.origin();
        let world_size = self.world_size();
        LatLon::unproject(Point2::new(
            (origin.x + point.x) / world_size,
            (origin.y + point.y) / world_size,
        ))
    }

    /// Moves the viewport by the given number of pixels. Positive `dx` moves the view east,
    /// positive `dy` moves it south.
    pub fn pan(&self, dx: f64, dy: f64) -> Self {
        let center = Point2::new(self.size.half_width() + dx, self.size.half_height() + dy);
        let new_center = self.screen_to_latlon(center);

        self.with_center(LatLon::new(
            new_center.lat(),
            wrap_longitude(new_center.lon()),
        ))
    }

    /// Changes the zoom by `delta` levels keeping the geographic point under `anchor` at the same
    /// screen position.
    pub fn zoom_at(&self, delta: f64, anchor: Point2) -> Self {
        let target_zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        if target_zoom == self.zoom {
            return *self;
        }

        let anchor_geo = self.screen_to_latlon(anchor);
        let zoomed = self.with_zoom(target_zoom);
        let drifted = zoomed.latlon_to_screen(anchor_geo);

        zoomed.pan(drifted.x - anchor.x, drifted.y - anchor.y)
    }
}

fn clamp_center(center: LatLon) -> LatLon {
    LatLon::new(
        center.lat().clamp(-MAX_LATITUDE, MAX_LATITUDE),
        center.lon(),
    )
}

fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::latlon;

    fn viewport() -> Viewport {
        Viewport::new(latlon!(20.0, 0.0), 2.0).with_size(Size::new(800.0, 600.0))
    }

    #[test]
    fn center_is_in_the_middle_of_the_screen() {
        let view = viewport();
        let screen = view.latlon_to_screen(view.center());
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn screen_roundtrip() {
        let view = viewport();
        let geo = view.screen_to_latlon(Point2::new(123.0, 456.0));
        let screen = view.latlon_to_screen(geo);
        assert_relative_eq!(screen.x, 123.0, epsilon = 1e-6);
        assert_relative_eq!(screen.y, 456.0, epsilon = 1e-6);
    }

    #[test]
    fn pan_moves_center() {
        let view = viewport();
        let panned = view.pan(256.0, 0.0);
        // One tile width at z2 is a quarter of the world.
        assert_relative_eq!(panned.center().lon(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(panned.center().lat(), 20.0, epsilon = 1e-9);

        let wrapped = view.pan(1024.0, 0.0);
        assert_relative_eq!(wrapped.center().lon(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn pan_stops_at_projection_limit() {
        let view = Viewport::new(latlon!(80.0, 0.0), 1.0).with_size(Size::new(800.0, 600.0));

        let north = view.pan(0.0, -2000.0);
        assert_relative_eq!(north.center().lat(), MAX_LATITUDE);

        // Dragging back moves the map right away.
        let back = north.pan(0.0, 100.0);
        assert!(back.center().lat() < MAX_LATITUDE - 1.0);

        let south = view.pan(0.0, 5000.0);
        assert_relative_eq!(south.center().lat(), -MAX_LATITUDE);
    }

    #[test]
    fn center_latitude_is_clamped() {
        assert_eq!(
            Viewport::new(latlon!(90.0, 10.0), 2.0).center(),
            latlon!(MAX_LATITUDE, 10.0)
        );
        assert_eq!(
            Viewport::default().with_center(latlon!(-89.0, 0.0)).center(),
            latlon!(-MAX_LATITUDE, 0.0)
        );
    }

    #[test]
    fn zoom_keeps_anchor_in_place() {
        let view = viewport();
        let anchor = Point2::new(600.0, 200.0);
        let anchor_geo = view.screen_to_latlon(anchor);

        let zoomed = view.zoom_at(1.5, anchor);
        assert_relative_eq!(zoomed.zoom(), 3.5);

        let screen = zoomed.latlon_to_screen(anchor_geo);
        assert_relative_eq!(screen.x, anchor.x, epsilon = 1e-6);
        assert_relative_eq!(screen.y, anchor.y, epsilon = 1e-6);
    }

    #[test]
    fn zoom_is_clamped() {
        let view = viewport();
        assert_eq!(view.zoom_at(-10.0, Point2::new(0.0, 0.0)).zoom(), MIN_ZOOM);
        assert_eq!(Viewport::new(latlon!(0.0, 0.0), 40.0).zoom(), MAX_ZOOM);
    }
}
