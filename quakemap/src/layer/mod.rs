//! Layers of the map: switchable raster base layers and togglable overlays of vector shapes.

mod attribution;
mod marker;
mod path;
mod raster_tile_layer;

pub use attribution::Attribution;
pub use marker::{CircleMarker, Popup};
pub use path::PlatePath;
pub use raster_tile_layer::RasterTileLayer;

/// Identifies one of the two overlays of the map.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Earthquake markers.
    Earthquakes,
    /// Tectonic plate boundaries.
    TectonicPlates,
}

/// Group of shapes that is shown or hidden as a whole.
///
/// An overlay is created empty and detached. It gets attached to the map once its data is
/// loaded, after that the user can detach and attach it again with the layer control.
#[derive(Debug, Clone)]
pub struct Overlay<T> {
    items: Vec<T>,
    attached: bool,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            attached: false,
        }
    }
}

impl<T> Overlay<T> {
    /// Number of shapes in the overlay.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the overlay has no shapes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Shapes in the order they were added, which is also the drawing order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }

    /// Returns the shape at the given position.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Whether the overlay is currently shown on the map.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Shows or hides the overlay.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }
}

impl<T> Extend<T> for Overlay<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_starts_empty_and_detached() {
        let overlay = Overlay::<u8>::default();
        assert!(overlay.is_empty());
        assert!(!overlay.is_attached());
    }

    #[test]
    fn extending_keeps_order_and_attachment() {
        let mut overlay = Overlay::default();
        overlay.set_attached(true);
        overlay.extend([1, 2, 3]);
        overlay.extend([4]);

        assert_eq!(overlay.len(), 4);
        assert_eq!(overlay.get(3), Some(&4));
        assert_eq!(overlay.iter().rev().next(), Some(&4));
        assert!(overlay.is_attached());
    }
}
