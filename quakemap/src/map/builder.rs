use super::{BaseLayerEntry, MapView};
use crate::geo::LatLon;
use crate::layer::RasterTileLayer;
use crate::messenger::Messenger;
use crate::view::Viewport;

const DEFAULT_ZOOM: f64 = 2.0;

/// Convenience type to initialize a [`MapView`].
///
/// ```
/// use quakemap::layer::RasterTileLayer;
/// use quakemap::MapViewBuilder;
///
/// let map = MapViewBuilder::default()
///     .with_latlon(20.0, 0.0)
///     .with_zoom(2.0)
///     .with_base_layer("Street Map", RasterTileLayer::open_street_map())
///     .build();
///
/// assert_eq!(map.active_base_layer_label(), Some("Street Map"));
/// ```
#[derive(Default)]
pub struct MapViewBuilder {
    center: Option<LatLon>,
    zoom: Option<f64>,
    base_layers: Vec<BaseLayerEntry>,
    messenger: Option<Box<dyn Messenger>>,
}

impl MapViewBuilder {
    /// Sets the center point of the map.
    ///
    /// Defaults to [0, 0].
    pub fn with_position(mut self, center: LatLon) -> Self {
        self.center = Some(center);
        self
    }

    /// Sets the center point of the map to the given coordinates.
    ///
    /// Defaults to [0, 0].
    pub fn with_latlon(self, lat: f64, lon: f64) -> Self {
        self.with_position(LatLon::new(lat, lon))
    }

    /// Sets the initial zoom level. Defaults to 2.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Adds a base layer under the given label. The first added layer is active after the map
    /// is built.
    pub fn with_base_layer(mut self, label: impl Into<String>, layer: RasterTileLayer) -> Self {
        self.base_layers.push(BaseLayerEntry {
            label: label.into(),
            layer,
        });
        self
    }

    /// Sets a [messenger](Messenger) the map notifies when it needs to be redrawn.
    pub fn with_messenger(mut self, messenger: impl Messenger + 'static) -> Self {
        self.messenger = Some(Box::new(messenger));
        self
    }

    /// Builds the map.
    pub fn build(self) -> MapView {
        let viewport = Viewport::new(
            self.center.unwrap_or_default(),
            self.zoom.unwrap_or(DEFAULT_ZOOM),
        );

        MapView::new(viewport, self.base_layers, self.messenger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let map = MapViewBuilder::default().build();
        assert_eq!(map.viewport().center(), LatLon::new(0.0, 0.0));
        assert_eq!(map.viewport().zoom(), DEFAULT_ZOOM);
        assert_eq!(map.active_base_layer(), None);
    }

    #[test]
    fn first_base_layer_is_active() {
        let map = MapViewBuilder::default()
            .with_base_layer("Topo", RasterTileLayer::open_topo_map())
            .with_base_layer("Streets", RasterTileLayer::open_street_map())
            .build();

        assert_eq!(map.active_base_layer_label(), Some("Topo"));
        assert_eq!(map.base_layer_labels().count(), 2);
    }
}
