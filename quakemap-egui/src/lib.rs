//! Egui widget that draws a [`quakemap::MapView`]: raster base layer, plate boundaries,
//! earthquake markers with popups, the layer control and the depth legend.

mod controls;
mod egui_map;
mod init;
mod tile_store;

pub use egui_map::{EguiMap, EguiMapState, MapStateMessenger};
pub use init::InitBuilder;
