//! Access to the network and the local tile cache.

use std::sync::Arc;

use bytes::Bytes;
use log::{debug, info};

use crate::decoded_image::DecodedImage;
use crate::error::QuakeMapError;

mod file_cache;

pub use file_cache::FileCacheController;

const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by feed sources and tile loaders.
///
/// Cloning the service is cheap: clones share the connection pool and the tile cache.
#[derive(Debug, Clone)]
pub struct HttpService {
    http_client: reqwest::Client,
    cache_controller: Option<Arc<FileCacheController>>,
}

impl HttpService {
    /// Creates a new service without a tile cache.
    pub fn new() -> Result<Self, QuakeMapError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            cache_controller: None,
        })
    }

    /// Stores loaded images in the given cache and serves them from it on subsequent requests.
    pub fn with_file_cache(mut self, cache_controller: FileCacheController) -> Self {
        self.cache_controller = Some(Arc::new(cache_controller));
        self
    }

    /// Loads a byte array from the given url. The response is never cached.
    pub async fn load_bytes(&self, url: &str) -> Result<Bytes, QuakeMapError> {
        self.load_from_web(url).await
    }

    /// Loads and decodes an image from the given url, going through the file cache if it is
    /// configured.
    pub async fn load_image(&self, url: &str) -> Result<DecodedImage, QuakeMapError> {
        if let Some(cached) = self.load_from_cache(url) {
            match DecodedImage::new(&cached) {
                Ok(image) => return Ok(image),
                Err(err) => debug!("Ignoring corrupted cache entry for {url}: {err}"),
            }
        }

        let loaded = self.load_from_web(url).await?;
        let image = DecodedImage::new(&loaded)?;

        if let Some(cache) = &self.cache_controller {
            if let Err(err) = cache.insert(url, &loaded) {
                log::warn!("Failed to write persistent cache entry: {err}");
            }
        }

        Ok(image)
    }

    fn load_from_cache(&self, url: &str) -> Option<Bytes> {
        let result = self.cache_controller.as_ref()?.get(url);
        if result.is_some() {
            debug!("Loaded {url} from cache");
        }

        result
    }

    async fn load_from_web(&self, url: &str) -> Result<Bytes, QuakeMapError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            info!("Failed to load {url}: {status}");
            return Err(QuakeMapError::HttpStatus {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?)
    }
}
