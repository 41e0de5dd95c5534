use egui::{Align2, Context, Id, Sense, Vec2};
use quakemap::{ControlPosition, MapView};

use crate::egui_map::to_color32;

const CONTROL_MARGIN: f32 = 10.0;
const SWATCH_SIZE: f32 = 14.0;

fn anchor(position: ControlPosition) -> (Align2, [f32; 2]) {
    match position {
        ControlPosition::TopLeft => (Align2::LEFT_TOP, [CONTROL_MARGIN, CONTROL_MARGIN]),
        ControlPosition::TopRight => (Align2::RIGHT_TOP, [-CONTROL_MARGIN, CONTROL_MARGIN]),
        ControlPosition::BottomLeft => (Align2::LEFT_BOTTOM, [CONTROL_MARGIN, -CONTROL_MARGIN]),
        ControlPosition::BottomRight => {
            (Align2::RIGHT_BOTTOM, [-CONTROL_MARGIN, -CONTROL_MARGIN])
        }
    }
}

/// Radio buttons for the base layers and checkboxes for the overlays.
pub(crate) fn layer_control(ctx: &Context, map: &mut MapView) {
    let Some(control) = map.layer_control().cloned() else {
        return;
    };

    let (align, offset) = anchor(control.position());
    egui::Window::new("Layers")
        .id(Id::new("layer_control"))
        .title_bar(false)
        .resizable(false)
        .anchor(align, offset)
        .show(ctx, |ui| {
            for label in control.base_layers() {
                let active = map.active_base_layer_label() == Some(label.as_str());
                if ui.radio(active, label.as_str()).clicked() && !active {
                    if let Err(err) = map.select_base_layer(label) {
                        log::warn!("Cannot switch base layer: {err}");
                    }
                }
            }

            if !control.overlays().is_empty() {
                ui.separator();
            }

            for (label, kind) in control.overlays() {
                let mut attached = map.is_overlay_attached(*kind);
                if ui.checkbox(&mut attached, label.as_str()).changed() {
                    map.set_overlay_attached(*kind, attached);
                }
            }
        });
}

/// Depth color scale.
pub(crate) fn legend(ctx: &Context, map: &MapView) {
    let Some(legend) = map.legend() else {
        return;
    };

    let (align, offset) = anchor(legend.position());
    egui::Area::new(Id::new("depth_legend"))
        .anchor(align, offset)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                for entry in legend.entries() {
                    ui.horizontal(|ui| {
                        let (swatch, _) =
                            ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::hover());
                        ui.painter()
                            .rect_filled(swatch, 0.0, to_color32(entry.color()));
                        ui.label(entry.label());
                    });
                }
            });
        });
}

/// Attribution of the active base layer.
pub(crate) fn attribution(ctx: &Context, map: &MapView) {
    let Some(attribution) = map.active_base_layer().and_then(|layer| layer.attribution()) else {
        return;
    };

    egui::Area::new(Id::new("attribution"))
        .anchor(Align2::LEFT_BOTTOM, [CONTROL_MARGIN, -CONTROL_MARGIN])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| match attribution.url() {
                Some(url) => ui.hyperlink_to(attribution.text(), url),
                None => ui.label(attribution.text()),
            });
        });
}
