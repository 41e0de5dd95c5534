//! Addressing of the standard Web Mercator tile pyramid: which tiles cover a [`Viewport`] and
//! where on screen each of them goes.

use crate::geo::Point2;
use crate::view::{Viewport, TILE_SIZE};

/// Tile index.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct TileIndex {
    /// X index.
    pub x: i32,
    /// Y index.
    pub y: i32,
    /// Z index.
    pub z: u32,
}

impl TileIndex {
    /// Create a new index instance.
    pub fn new(x: i32, y: i32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// Tile index with additional virtual `display_x` index that can be used to wrap tiles
/// over 180 longitude line.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct WrappingTileIndex {
    /// Z index.
    pub z: u32,
    /// X index, always in `[0, 2^z)`.
    pub x: i32,
    /// Y index.
    pub y: i32,
    /// Virtual X index the tile is displayed at. Differs from `x` for world copies.
    pub display_x: i32,
}

impl From<WrappingTileIndex> for TileIndex {
    fn from(value: WrappingTileIndex) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

/// Integer level of the tiles to draw for the viewport.
pub fn tile_level(view: &Viewport, max_z: u32) -> u32 {
    (view.zoom().round().max(0.0) as u32).min(max_z)
}

/// Returns indices of all tiles of the level [`tile_level`] that intersect the viewport.
///
/// Tiles repeat horizontally, so a wide viewport at a low zoom gets several copies of the same
/// tile with different `display_x`. Rows outside of the world are skipped.
pub fn visible_tiles(view: &Viewport, max_z: u32) -> Vec<WrappingTileIndex> {
    let size = view.size();
    if size.is_zero() {
        return vec![];
    }

    let z = tile_level(view, max_z);
    let tile_size = displayed_tile_size(view, z);
    let tiles_per_side = 1i64 << z;
    let origin = view.origin();

    let x_min = (origin.x / tile_size).floor() as i64;
    let x_max = ((origin.x + size.width()) / tile_size).ceil() as i64 - 1;
    let y_min = ((origin.y / tile_size).floor() as i64).max(0);
    let y_max = (((origin.y + size.height()) / tile_size).ceil() as i64 - 1).min(tiles_per_side - 1);

    let mut tiles = vec![];
    for y in y_min..=y_max {
        for display_x in x_min..=x_max {
            tiles.push(WrappingTileIndex {
                z,
                x: display_x.rem_euclid(tiles_per_side) as i32,
                y: y as i32,
                display_x: display_x as i32,
            });
        }
    }

    tiles
}

/// Screen position of the top left corner of the tile and the length of its side in pixels.
pub fn tile_screen_rect(view: &Viewport, index: &WrappingTileIndex) -> (Point2, f64) {
    let tile_size = displayed_tile_size(view, index.z);
    let origin = view.origin();
    let min = Point2::new(
        index.display_x as f64 * tile_size - origin.x,
        index.y as f64 * tile_size - origin.y,
    );

    (min, tile_size)
}

fn displayed_tile_size(view: &Viewport, z: u32) -> f64 {
    TILE_SIZE * (view.zoom() - z as f64).exp2()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::latlon;
    use crate::view::Size;

    #[test]
    fn whole_world_at_zoom_one() {
        let view = Viewport::new(latlon!(0.0, 0.0), 1.0).with_size(Size::new(512.0, 512.0));
        let tiles = visible_tiles(&view, 18);

        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|t| t.z == 1 && t.x == t.display_x));

        let (min, size) = tile_screen_rect(&view, &tiles[0]);
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(size, 256.0);
    }

    #[test]
    fn wide_viewport_wraps_tiles() {
        let view = Viewport::new(latlon!(0.0, 0.0), 1.0).with_size(Size::new(1024.0, 512.0));
        let tiles = visible_tiles(&view, 18);

        // Two world copies side by side, each 2x2 tiles.
        assert_eq!(tiles.len(), 8);
        let wrapped: Vec<_> = tiles.iter().filter(|t| t.x != t.display_x).collect();
        assert_eq!(wrapped.len(), 4);
        assert!(wrapped.iter().all(|t| (0..2).contains(&t.x)));
    }

    #[test]
    fn level_is_limited_by_layer() {
        let view = Viewport::new(latlon!(45.0, 10.0), 17.6).with_size(Size::new(300.0, 200.0));
        assert_eq!(tile_level(&view, 19), 18);
        assert_eq!(tile_level(&view, 17), 17);

        let tiles = visible_tiles(&view, 17);
        assert!(!tiles.is_empty());
        let (_, size) = tile_screen_rect(&view, &tiles[0]);
        assert_relative_eq!(size, 256.0 * 0.6f64.exp2(), epsilon = 1e-9);
    }

    #[test]
    fn empty_viewport_has_no_tiles() {
        let view = Viewport::new(latlon!(0.0, 0.0), 3.0);
        assert!(visible_tiles(&view, 18).is_empty());
    }
}
