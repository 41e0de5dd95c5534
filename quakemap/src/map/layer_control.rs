use crate::layer::OverlayKind;
use crate::legend::ControlPosition;

/// Widget that lets the user pick exactly one base layer and toggle each overlay independently.
///
/// The control only holds labels. The state it displays (the active base layer and the attached
/// overlays) is owned by the [`MapView`](super::MapView).
#[derive(Debug, Clone, PartialEq)]
pub struct LayerControl {
    position: ControlPosition,
    base_layers: Vec<String>,
    overlays: Vec<(String, OverlayKind)>,
}

impl LayerControl {
    pub(super) fn new(base_layers: Vec<String>, overlays: Vec<(String, OverlayKind)>) -> Self {
        Self {
            position: ControlPosition::TopRight,
            base_layers,
            overlays,
        }
    }

    /// Corner the control is anchored to.
    pub fn position(&self) -> ControlPosition {
        self.position
    }

    /// Labels of the base layers in the order they are listed.
    pub fn base_layers(&self) -> &[String] {
        &self.base_layers
    }

    /// Labels of the overlays with the overlay each of them toggles.
    pub fn overlays(&self) -> &[(String, OverlayKind)] {
        &self.overlays
    }
}
