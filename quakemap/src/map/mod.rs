//! [`MapView`] and the controls attached to it.

use log::{debug, info};

use crate::error::QuakeMapError;
use crate::feed::{EarthquakeFeature, PlateBoundaryFeature};
use crate::geo::Point2;
use crate::layer::{CircleMarker, Overlay, OverlayKind, PlatePath, RasterTileLayer};
use crate::legend::Legend;
use crate::loader::FeedUpdate;
use crate::messenger::Messenger;
use crate::view::Viewport;

mod builder;
mod layer_control;

pub use builder::MapViewBuilder;
pub use layer_control::LayerControl;

/// Label of the OpenStreetMap base layer.
pub const STREET_MAP: &str = "Street Map";
/// Label of the OpenTopoMap base layer.
pub const TOPOGRAPHIC_MAP: &str = "Topographic Map";
/// Label of the earthquakes overlay.
pub const EARTHQUAKES: &str = "Earthquakes";
/// Label of the tectonic plates overlay.
pub const TECTONIC_PLATES: &str = "Tectonic Plates";

pub(crate) struct BaseLayerEntry {
    label: String,
    layer: RasterTileLayer,
}

/// The map: what is shown and where.
///
/// `MapView` owns the current [`Viewport`], the labeled base layers of which exactly one is
/// active, the earthquake and tectonic plate overlays, and the optional layer control and
/// legend. It is created once and lives as long as the application. Loaders never touch it
/// directly: they produce [`FeedUpdate`]s which are applied with [`MapView::apply_update`].
pub struct MapView {
    viewport: Viewport,
    base_layers: Vec<BaseLayerEntry>,
    active_base_layer: usize,
    earthquakes: Overlay<CircleMarker>,
    tectonic_plates: Overlay<PlatePath>,
    layer_control: Option<LayerControl>,
    legend: Option<Legend>,
    messenger: Option<Box<dyn Messenger>>,
}

impl MapView {
    pub(crate) fn new(
        viewport: Viewport,
        base_layers: Vec<BaseLayerEntry>,
        messenger: Option<Box<dyn Messenger>>,
    ) -> Self {
        Self {
            viewport,
            base_layers,
            active_base_layer: 0,
            earthquakes: Overlay::default(),
            tectonic_plates: Overlay::default(),
            layer_control: None,
            legend: None,
            messenger,
        }
    }

    /// The earthquake map: centered at (20°, 0°) on zoom level 2 with the
    /// [Street Map](STREET_MAP) active, the [Topographic Map](TOPOGRAPHIC_MAP) available, and a
    /// layer control listing both base layers and both overlays.
    pub fn earthquake_map() -> Self {
        let mut map = MapViewBuilder::default()
            .with_latlon(20.0, 0.0)
            .with_zoom(2.0)
            .with_base_layer(STREET_MAP, RasterTileLayer::open_street_map())
            .with_base_layer(TOPOGRAPHIC_MAP, RasterTileLayer::open_topo_map())
            .build();

        map.add_layer_control([
            (EARTHQUAKES, OverlayKind::Earthquakes),
            (TECTONIC_PLATES, OverlayKind::TectonicPlates),
        ]);

        map
    }

    /// Current view of the map.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Changes the view of the map to the given one.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.redraw();
        }
    }

    /// Labels of the base layers in the order they were added.
    pub fn base_layer_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.base_layers.iter().map(|entry| entry.label.as_str())
    }

    /// The base layer currently shown, `None` if the map has no base layers.
    pub fn active_base_layer(&self) -> Option<&RasterTileLayer> {
        self.base_layers
            .get(self.active_base_layer)
            .map(|entry| &entry.layer)
    }

    /// Label of the base layer currently shown.
    pub fn active_base_layer_label(&self) -> Option<&str> {
        self.base_layers
            .get(self.active_base_layer)
            .map(|entry| entry.label.as_str())
    }

    /// Makes the base layer with the given label the only one shown. Overlays are not affected.
    pub fn select_base_layer(&mut self, label: &str) -> Result<(), QuakeMapError> {
        let index = self
            .base_layers
            .iter()
            .position(|entry| entry.label == label)
            .ok_or_else(|| QuakeMapError::NotFound(format!("base layer `{label}`")))?;

        if index != self.active_base_layer {
            debug!("Switching base layer to {label}");
            self.active_base_layer = index;
            self.redraw();
        }

        Ok(())
    }

    /// Earthquake markers.
    pub fn earthquakes(&self) -> &Overlay<CircleMarker> {
        &self.earthquakes
    }

    /// Tectonic plate boundaries.
    pub fn tectonic_plates(&self) -> &Overlay<PlatePath> {
        &self.tectonic_plates
    }

    /// Whether the overlay is shown.
    pub fn is_overlay_attached(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Earthquakes => self.earthquakes.is_attached(),
            OverlayKind::TectonicPlates => self.tectonic_plates.is_attached(),
        }
    }

    /// Shows or hides the overlay.
    pub fn set_overlay_attached(&mut self, kind: OverlayKind, attached: bool) {
        if self.is_overlay_attached(kind) == attached {
            return;
        }

        match kind {
            OverlayKind::Earthquakes => self.earthquakes.set_attached(attached),
            OverlayKind::TectonicPlates => self.tectonic_plates.set_attached(attached),
        }
        self.redraw();
    }

    /// Adds a layer control listing every base layer of the map and the given labeled overlays.
    /// Replaces the previous control, if any.
    pub fn add_layer_control<L: Into<String>>(
        &mut self,
        overlays: impl IntoIterator<Item = (L, OverlayKind)>,
    ) {
        let base_layers = self.base_layer_labels().map(String::from).collect();
        let overlays = overlays
            .into_iter()
            .map(|(label, kind)| (label.into(), kind))
            .collect();

        self.layer_control = Some(LayerControl::new(base_layers, overlays));
    }

    /// Layer control of the map.
    pub fn layer_control(&self) -> Option<&LayerControl> {
        self.layer_control.as_ref()
    }

    /// Depth legend. Appears once earthquakes are rendered.
    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Adds a marker for every earthquake to the earthquake overlay, attaches the overlay and
    /// shows the depth legend.
    pub fn render_earthquakes(&mut self, features: &[EarthquakeFeature]) {
        self.earthquakes
            .extend(features.iter().map(CircleMarker::for_earthquake));
        self.earthquakes.set_attached(true);
        self.legend = Some(Legend::depth());
        self.redraw();
    }

    /// Adds a path for every boundary to the tectonic plates overlay and attaches the overlay.
    pub fn render_plate_boundaries(&mut self, features: &[PlateBoundaryFeature]) {
        self.tectonic_plates
            .extend(features.iter().map(PlatePath::for_boundary));
        self.tectonic_plates.set_attached(true);
        self.redraw();
    }

    /// Renders the result of a feed load. A failed load leaves its overlay untouched.
    pub fn apply_update(&mut self, update: FeedUpdate) {
        match update {
            FeedUpdate::Earthquakes(Ok(features)) => {
                info!("Rendering {} earthquakes", features.len());
                self.render_earthquakes(&features);
            }
            FeedUpdate::TectonicPlates(Ok(features)) => {
                info!("Rendering {} plate boundaries", features.len());
                self.render_plate_boundaries(&features);
            }
            FeedUpdate::Earthquakes(Err(_)) | FeedUpdate::TectonicPlates(Err(_)) => {
                debug!("Feed failed, its overlay stays detached");
            }
        }
    }

    /// Index of the top-most earthquake marker containing the screen point. Markers of a
    /// detached overlay are never hit.
    pub fn earthquake_at(&self, point: Point2) -> Option<usize> {
        if !self.earthquakes.is_attached() {
            return None;
        }

        self.earthquakes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, marker)| marker.contains(&self.viewport, point))
            .map(|(index, _)| index)
    }

    /// Request redraw of the map.
    pub fn redraw(&self) {
        if let Some(messenger) = &self.messenger {
            messenger.request_redraw();
        }
    }

    /// Sets the new event messenger for the map.
    pub fn set_messenger(&mut self, messenger: Option<impl Messenger + 'static>) {
        self.messenger = messenger.map(|m| Box::new(m) as Box<dyn Messenger>);
    }
}
