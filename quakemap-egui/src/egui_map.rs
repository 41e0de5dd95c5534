use egui::{
    pos2, vec2, Align2, Color32, Event, Id, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2,
};
use quakemap::geo::Point2;
use quakemap::layer::OverlayKind;
use quakemap::platform::HttpService;
use quakemap::tile_schema::{tile_screen_rect, visible_tiles};
use quakemap::{Color, FeedUpdate, MapView, Messenger, Size};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::controls;
use crate::tile_store::TileStore;

const TILE_PLACEHOLDER: Color32 = Color32::from_gray(221);
const POINT_WHEEL_STEP: f64 = 50.0;

/// Widget that shows an [`EguiMapState`] in the given ui.
pub struct EguiMap<'a> {
    state: &'a mut EguiMapState,
}

impl<'a> EguiMap<'a> {
    /// Creates a widget for the state.
    pub fn new(state: &'a mut EguiMapState) -> Self {
        Self { state }
    }

    /// Renders the map with its controls.
    pub fn show_ui(&mut self, ui: &mut Ui) {
        self.state.render(ui);
    }
}

/// Map together with everything needed to draw it between frames.
pub struct EguiMapState {
    map: MapView,
    tiles: TileStore,
    updates: UnboundedReceiver<FeedUpdate>,
    selected: Option<usize>,
}

impl EguiMapState {
    /// Creates the state. Feed updates sent into the channel are applied to the map at the start
    /// of the next frame.
    pub fn new(
        mut map: MapView,
        ctx: egui::Context,
        http: HttpService,
        runtime: Handle,
        updates: UnboundedReceiver<FeedUpdate>,
    ) -> Self {
        let messenger = MapStateMessenger { context: ctx };
        map.set_messenger(Some(messenger.clone()));

        Self {
            map,
            tiles: TileStore::new(http, runtime, messenger),
            updates,
            selected: None,
        }
    }

    /// The map being shown.
    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Mutable access to the map being shown.
    pub fn map_mut(&mut self) -> &mut MapView {
        &mut self.map
    }

    /// Index of the earthquake whose popup is open.
    pub fn selected_earthquake(&self) -> Option<usize> {
        self.selected
    }

    /// Draws the map into all the space available in the ui.
    pub fn render(&mut self, ui: &mut Ui) {
        self.receive_updates();

        let available_size = ui.available_size().floor();
        let (rect, response) = ui.allocate_exact_size(available_size, Sense::click_and_drag());

        self.resize_map(available_size);
        self.handle_input(ui, rect, &response);

        let painter = ui.painter_at(rect);
        self.paint_base_layer(&painter, rect.min);
        if self.map.is_overlay_attached(OverlayKind::TectonicPlates) {
            self.paint_plate_boundaries(&painter, rect.min);
        }
        if self.map.is_overlay_attached(OverlayKind::Earthquakes) {
            self.paint_earthquakes(&painter, rect.min);
        }

        let ctx = ui.ctx().clone();
        self.show_popup(&ctx, rect.min);
        controls::layer_control(&ctx, &mut self.map);
        controls::legend(&ctx, &self.map);
        controls::attribution(&ctx, &self.map);
    }

    fn receive_updates(&mut self) {
        while let Ok(update) = self.updates.try_recv() {
            if matches!(update, FeedUpdate::Earthquakes(_)) {
                self.selected = None;
            }

            self.map.apply_update(update);
        }
    }

    fn resize_map(&mut self, size: Vec2) {
        let size = Size::new(size.x as f64, size.y as f64);
        if self.map.viewport().size() != size {
            log::trace!("Resizing map to size: {size:?}");
            let viewport = self.map.viewport().with_size(size);
            self.map.set_viewport(viewport);
        }
    }

    fn handle_input(&mut self, ui: &Ui, rect: Rect, response: &egui::Response) {
        if response.dragged() {
            let delta = response.drag_delta();
            if delta != Vec2::ZERO {
                let viewport = self.map.viewport().pan(-delta.x as f64, -delta.y as f64);
                self.map.set_viewport(viewport);
            }
        }

        if let Some(pointer) = response.hover_pos() {
            let events = ui.input(|input_state| input_state.events.clone());
            let zoom_delta: f64 = events.iter().filter_map(wheel_zoom).sum();
            let pinch = ui.input(|input_state| input_state.zoom_delta()) as f64;
            let zoom_delta = zoom_delta + if pinch != 1.0 { pinch.log2() } else { 0.0 };

            if zoom_delta != 0.0 {
                let anchor = to_point(pointer - rect.min);
                let viewport = self.map.viewport().zoom_at(zoom_delta, anchor);
                self.map.set_viewport(viewport);
            }
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                self.selected = self.map.earthquake_at(to_point(pointer - rect.min));
            }
        }
    }

    fn paint_base_layer(&self, painter: &Painter, origin: Pos2) {
        let Some(layer) = self.map.active_base_layer() else {
            return;
        };

        let viewport = self.map.viewport();
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        for index in visible_tiles(viewport, layer.max_zoom()) {
            let (min, size) = tile_screen_rect(viewport, &index);
            let tile_rect = Rect::from_min_size(
                origin + vec2(min.x as f32, min.y as f32),
                Vec2::splat(size as f32),
            );

            match self.tiles.texture(&layer.tile_url(index.into())) {
                Some(texture) => painter.image(texture.id(), tile_rect, uv, Color32::WHITE),
                None => painter.rect_filled(tile_rect, 0.0, TILE_PLACEHOLDER),
            };
        }
    }

    fn paint_plate_boundaries(&self, painter: &Painter, origin: Pos2) {
        let viewport = self.map.viewport();
        for path in self.map.tectonic_plates().iter() {
            let style = path.style();
            let stroke = Stroke::new(style.weight, to_color32(style.color));
            for line in path.lines() {
                let points: Vec<Pos2> = line
                    .iter()
                    .map(|&position| to_pos(origin, viewport.latlon_to_screen(position)))
                    .collect();
                painter.add(Shape::line(points, stroke));
            }
        }
    }

    fn paint_earthquakes(&self, painter: &Painter, origin: Pos2) {
        let viewport = self.map.viewport();
        let visible = painter.clip_rect();
        for marker in self.map.earthquakes().iter() {
            let style = marker.style();
            if style.radius <= 0.0 {
                continue;
            }

            let radius = style.radius as f32;
            let center = to_pos(origin, viewport.latlon_to_screen(marker.position()));
            if !visible.expand(radius).contains(center) {
                continue;
            }

            let fill = style.fill_color.with_opacity(style.fill_opacity);
            let stroke_color = style.stroke_color.with_opacity(style.stroke_opacity);
            painter.circle(
                center,
                radius,
                to_color32(fill),
                Stroke::new(style.stroke_weight, to_color32(stroke_color)),
            );
        }
    }

    fn show_popup(&mut self, ctx: &egui::Context, origin: Pos2) {
        let Some(index) = self.selected else {
            return;
        };

        let marker = match self.map.earthquakes().get(index) {
            Some(marker) if self.map.is_overlay_attached(OverlayKind::Earthquakes) => marker,
            _ => {
                self.selected = None;
                return;
            }
        };

        let center = to_pos(origin, self.map.viewport().latlon_to_screen(marker.position()));
        let anchor = center - vec2(0.0, marker.style().radius.max(0.0) as f32);
        let popup = marker.popup();

        let mut open = true;
        egui::Window::new(popup.title())
            .id(Id::new("earthquake_popup"))
            .pivot(Align2::CENTER_BOTTOM)
            .fixed_pos(anchor)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                for line in popup.lines() {
                    ui.label(line.as_str());
                }
            });

        if !open {
            self.selected = None;
        }
    }
}

/// Repaints the egui context when the map asks for a redraw.
#[derive(Debug, Clone)]
pub struct MapStateMessenger {
    /// Context of the ui the map is shown in.
    pub context: egui::Context,
}

impl Messenger for MapStateMessenger {
    fn request_redraw(&self) {
        log::trace!("Redraw requested");
        self.context.request_repaint();
    }
}

pub(crate) fn to_color32(color: Color) -> Color32 {
    let [r, g, b, a] = color.to_u8_array();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn to_point(offset: Vec2) -> Point2 {
    Point2::new(offset.x as f64, offset.y as f64)
}

fn to_pos(origin: Pos2, point: Point2) -> Pos2 {
    origin + vec2(point.x as f32, point.y as f32)
}

/// Number of zoom levels a wheel event scrolls by. Scrolling up zooms in.
fn wheel_zoom(event: &Event) -> Option<f64> {
    let Event::MouseWheel { delta, unit, .. } = event else {
        return None;
    };

    let zoom = match unit {
        egui::MouseWheelUnit::Point => delta.y as f64 / POINT_WHEEL_STEP,
        egui::MouseWheelUnit::Line | egui::MouseWheelUnit::Page => delta.y as f64,
    };

    if zoom.abs() < 0.0001 {
        return None;
    }

    Some(zoom)
}
