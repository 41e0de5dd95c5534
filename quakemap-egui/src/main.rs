use quakemap::feed::{FeedConfig, UrlFeedSource};
use quakemap::platform::{FileCacheController, HttpService};
use quakemap::{FeedLoader, MapView};
use quakemap_egui::InitBuilder;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = FeedConfig::from_env();
    log::debug!("Starting with {config:?}");

    let mut http = HttpService::new()?;
    if let Some(folder) = &config.tile_cache {
        match FileCacheController::new(folder) {
            Ok(cache) => http = http.with_file_cache(cache),
            Err(err) => log::warn!("Tile cache is disabled: {err}"),
        }
    }

    let loader = FeedLoader::new(
        UrlFeedSource::new(config.earthquake_url, http.clone()),
        UrlFeedSource::new(config.plates_url, http.clone()),
    );

    InitBuilder::new(MapView::earthquake_map(), loader, http).init()
}
