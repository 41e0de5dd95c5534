//! Error types used by the crate.

use thiserror::Error;

/// Quakemap error type.
#[derive(Debug, Error)]
pub enum QuakeMapError {
    /// The request could not be sent or the response body could not be read.
    #[error("network request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    HttpStatus {
        /// Requested url.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// Payload is not valid UTF-8.
    #[error("payload is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
    /// Payload is not a GeoJSON feature collection.
    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] Box<geojson::Error>),
    /// A feature of the collection lacks a required field.
    #[error("feature #{index} is malformed: {reason}")]
    MalformedFeature {
        /// Position of the feature in the collection.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },
    /// Geometry type that cannot be drawn by the layer.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(&'static str),
    /// Image decoding error.
    #[error("image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),
    /// Error reading/writing data to the FS.
    #[error("file system error: {0}")]
    FsIo(#[from] std::io::Error),
    /// Item not found.
    #[error("{0} not found")]
    NotFound(String),
}

impl From<reqwest::Error> for QuakeMapError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.to_string())
    }
}

impl From<geojson::Error> for QuakeMapError {
    fn from(value: geojson::Error) -> Self {
        Self::GeoJson(Box::new(value))
    }
}
