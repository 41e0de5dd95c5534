use std::path::{Path, PathBuf};

use bytes::Bytes;
use log::debug;

use crate::error::QuakeMapError;

/// Stores downloaded tiles as a set of files in the specified folder. File names are generated
/// from the urls of the tiles.
///
/// There is no eviction mechanism.
#[derive(Debug)]
pub struct FileCacheController {
    folder_path: PathBuf,
}

impl FileCacheController {
    /// Creates a new instance. The folder is created if it does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, QuakeMapError> {
        std::fs::create_dir_all(path.as_ref())?;
        Ok(Self {
            folder_path: path.as_ref().into(),
        })
    }

    /// Returns the cached data for the url, if there is any.
    pub fn get(&self, url: &str) -> Option<Bytes> {
        std::fs::read(self.get_file_path(url)).ok().map(Bytes::from)
    }

    /// Writes the data for the url into the cache.
    pub fn insert(&self, url: &str, data: &Bytes) -> Result<(), QuakeMapError> {
        let file_path = self.get_file_path(url);
        let Some(folder) = file_path.parent() else {
            return Err(QuakeMapError::NotFound(format!(
                "parent folder of {}",
                file_path.display()
            )));
        };

        std::fs::create_dir_all(folder)?;
        std::fs::write(&file_path, data)?;
        debug!("Entry {url} saved to cache file {file_path:?}");

        Ok(())
    }

    /// Path of the cache file for the url: scheme and query are dropped, `{host}/{path}` is kept.
    fn get_file_path(&self, url: &str) -> PathBuf {
        let stripped = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        let stripped = stripped.split('?').next().unwrap_or(stripped);

        let relative: PathBuf = stripped
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
            .collect();

        self.folder_path.join(relative)
    }
}
