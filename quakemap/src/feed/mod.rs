//! GeoJSON feeds the map is built from.
//!
//! A [`FeedSource`] provides the raw payload of a feed. The payload is then parsed into
//! [`EarthquakeFeature`]s or [`PlateBoundaryFeature`]s, whichever the feed contains.

use async_trait::async_trait;
use bytes::Bytes;
use geojson::{FeatureCollection, GeoJson};

use crate::error::QuakeMapError;
use crate::platform::HttpService;

mod config;
mod earthquake;
mod plates;

pub use config::FeedConfig;
pub use earthquake::{parse_earthquakes, EarthquakeFeature};
pub use plates::{parse_plate_boundaries, PlateBoundaryFeature};

/// All earthquakes of the past week, updated every minute by the USGS.
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// Plate boundaries of the PB2002 model.
pub const TECTONIC_PLATES_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Provider of a raw GeoJSON payload.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches the whole payload.
    async fn fetch(&self) -> Result<Bytes, QuakeMapError>;

    /// Human readable name of the source used in log messages.
    fn name(&self) -> &str;
}

/// Feed downloaded with a single unauthenticated GET request.
#[derive(Debug, Clone)]
pub struct UrlFeedSource {
    url: String,
    http: HttpService,
}

impl UrlFeedSource {
    /// Creates a source for the url.
    pub fn new(url: impl Into<String>, http: HttpService) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    /// Url of the feed.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for UrlFeedSource {
    async fn fetch(&self) -> Result<Bytes, QuakeMapError> {
        self.http.load_bytes(&self.url).await
    }

    fn name(&self) -> &str {
        &self.url
    }
}

/// Feed with a payload that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticFeedSource {
    name: String,
    payload: Bytes,
}

impl StaticFeedSource {
    /// Creates a source that returns the payload on every fetch.
    pub fn new(name: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch(&self) -> Result<Bytes, QuakeMapError> {
        Ok(self.payload.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses the payload as a GeoJSON `FeatureCollection`.
pub(crate) fn parse_feature_collection(payload: &[u8]) -> Result<FeatureCollection, QuakeMapError> {
    let text = std::str::from_utf8(payload)?;
    let geojson: GeoJson = text.parse()?;
    Ok(FeatureCollection::try_from(geojson)?)
}
