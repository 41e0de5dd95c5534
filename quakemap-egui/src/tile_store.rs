use std::collections::HashSet;
use std::sync::Arc;

use egui::{ColorImage, TextureHandle, TextureOptions};
use log::{trace, warn};
use parking_lot::Mutex;
use quakemap::platform::HttpService;
use quakemap::Messenger;
use quick_cache::sync::Cache;
use tokio::runtime::Handle;

use crate::MapStateMessenger;

const TEXTURE_CACHE_CAPACITY: usize = 512;

/// Loads raster tiles in the background and keeps the most recently used ones as textures.
///
/// A tile that failed to load is not requested again.
pub(crate) struct TileStore {
    http: HttpService,
    runtime: Handle,
    messenger: MapStateMessenger,
    textures: Arc<Cache<String, TextureHandle>>,
    requested: Arc<Mutex<HashSet<String>>>,
}

impl TileStore {
    pub(crate) fn new(http: HttpService, runtime: Handle, messenger: MapStateMessenger) -> Self {
        Self {
            http,
            runtime,
            messenger,
            textures: Arc::new(Cache::new(TEXTURE_CACHE_CAPACITY)),
            requested: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Returns the texture of the tile if it is loaded, otherwise starts loading it.
    pub(crate) fn texture(&self, url: &str) -> Option<TextureHandle> {
        if let Some(texture) = self.textures.get(url) {
            return Some(texture);
        }

        if self.requested.lock().insert(url.to_owned()) {
            self.spawn_load(url.to_owned());
        }

        None
    }

    fn spawn_load(&self, url: String) {
        let http = self.http.clone();
        let messenger = self.messenger.clone();
        let textures = self.textures.clone();
        let requested = self.requested.clone();

        self.runtime.spawn(async move {
            let image = match http.load_image(&url).await {
                Ok(image) => image,
                Err(err) => {
                    warn!("Failed to load tile {url}: {err}");
                    return;
                }
            };

            let (width, height) = image.dimensions();
            let color_image =
                ColorImage::from_rgba_unmultiplied([width as usize, height as usize], image.bytes());
            let texture =
                messenger
                    .context
                    .load_texture(&url, color_image, TextureOptions::LINEAR);
            trace!("Tile {url} is ready");

            textures.insert(url.clone(), texture);
            requested.lock().remove(&url);
            messenger.request_redraw();
        });
    }
}
