//! Quakemap is a map model of recent earthquakes drawn over tectonic plate boundaries.
//!
//! The crate knows nothing about windows or GPUs. It contains
//!
//! * [`MapView`], which owns the switchable [base layers](layer::RasterTileLayer), the two
//!   togglable [overlays](layer::Overlay), the [layer control](map::LayerControl) and the
//!   depth [`Legend`],
//! * [style rules](style) that derive the marker radius from an earthquake magnitude and the
//!   fill color from its depth,
//! * [feed](feed) parsing and the asynchronous [`FeedLoader`] that fetches both GeoJSON feeds
//!   independently of each other,
//! * [`Viewport`] and [tile addressing](tile_schema) math used by a front end to draw the
//!   model.
//!
//! A front end (see the `quakemap-egui` crate) creates the map once, spawns the loader and
//! applies every [`FeedUpdate`] it receives:
//!
//! ```no_run
//! use quakemap::feed::{FeedConfig, UrlFeedSource};
//! use quakemap::platform::HttpService;
//! use quakemap::{FeedLoader, MapView};
//!
//! # async fn run() -> Result<(), quakemap::error::QuakeMapError> {
//! let mut map = MapView::earthquake_map();
//! let config = FeedConfig::default();
//! let http = HttpService::new()?;
//!
//! let loader = FeedLoader::new(
//!     UrlFeedSource::new(&config.earthquake_url, http.clone()),
//!     UrlFeedSource::new(&config.plates_url, http),
//! );
//! let (sender, mut receiver) = tokio::sync::mpsc::unbounded_channel();
//! loader.spawn(&tokio::runtime::Handle::current(), sender, None);
//!
//! while let Some(update) = receiver.recv().await {
//!     map.apply_update(update);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

mod color;
pub mod decoded_image;
pub mod error;
pub mod feed;
pub mod geo;
pub mod layer;
mod legend;
mod loader;
pub mod map;
mod messenger;
pub mod platform;
pub mod style;
pub mod tile_schema;
mod view;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use legend::{ControlPosition, Legend, LegendEntry};
pub use loader::{load_earthquakes, load_plate_boundaries, FeedLoader, FeedUpdate};
pub use map::{MapView, MapViewBuilder};
pub use messenger::{DummyMessenger, Messenger};
pub use view::{Size, Viewport};
