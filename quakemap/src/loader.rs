use std::sync::Arc;

use log::{error, info};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::error::QuakeMapError;
use crate::feed::{
    parse_earthquakes, parse_plate_boundaries, EarthquakeFeature, FeedSource,
    PlateBoundaryFeature,
};
use crate::messenger::Messenger;

/// Result of loading one of the feeds.
#[derive(Debug)]
pub enum FeedUpdate {
    /// Earthquake feed was loaded or failed.
    Earthquakes(Result<Vec<EarthquakeFeature>, QuakeMapError>),
    /// Plate boundaries feed was loaded or failed.
    TectonicPlates(Result<Vec<PlateBoundaryFeature>, QuakeMapError>),
}

/// Fetches and parses the earthquake feed.
pub async fn load_earthquakes(
    source: &dyn FeedSource,
) -> Result<Vec<EarthquakeFeature>, QuakeMapError> {
    let payload = source.fetch().await?;
    parse_earthquakes(&payload)
}

/// Fetches and parses the plate boundaries feed.
pub async fn load_plate_boundaries(
    source: &dyn FeedSource,
) -> Result<Vec<PlateBoundaryFeature>, QuakeMapError> {
    let payload = source.fetch().await?;
    parse_plate_boundaries(&payload)
}

/// Loads both feeds of the map.
///
/// The feeds are loaded by two independent tasks. Each task sends exactly one [`FeedUpdate`]
/// when it finishes and asks the messenger for a redraw. The updates can arrive in any order.
/// There are no retries and no timeouts.
#[derive(Clone)]
pub struct FeedLoader {
    earthquakes: Arc<dyn FeedSource>,
    tectonic_plates: Arc<dyn FeedSource>,
}

impl FeedLoader {
    /// Creates a loader for the given sources.
    pub fn new(
        earthquakes: impl FeedSource + 'static,
        tectonic_plates: impl FeedSource + 'static,
    ) -> Self {
        Self {
            earthquakes: Arc::new(earthquakes),
            tectonic_plates: Arc::new(tectonic_plates),
        }
    }

    /// Spawns both load tasks on the runtime.
    pub fn spawn(
        &self,
        runtime: &Handle,
        updates: UnboundedSender<FeedUpdate>,
        messenger: Option<Arc<dyn Messenger>>,
    ) -> [JoinHandle<()>; 2] {
        let earthquakes = {
            let source = self.earthquakes.clone();
            let updates = updates.clone();
            let messenger = messenger.clone();
            runtime.spawn(async move {
                let result = load_earthquakes(source.as_ref()).await;
                log_result(source.name(), result.as_ref().map(Vec::len));
                deliver(FeedUpdate::Earthquakes(result), &updates, messenger.as_deref());
            })
        };

        let tectonic_plates = {
            let source = self.tectonic_plates.clone();
            runtime.spawn(async move {
                let result = load_plate_boundaries(source.as_ref()).await;
                log_result(source.name(), result.as_ref().map(Vec::len));
                deliver(
                    FeedUpdate::TectonicPlates(result),
                    &updates,
                    messenger.as_deref(),
                );
            })
        };

        [earthquakes, tectonic_plates]
    }
}

fn log_result(source: &str, result: Result<usize, &QuakeMapError>) {
    match result {
        Ok(count) => info!("Loaded {count} features from {source}"),
        Err(err) => error!("Failed to load {source}: {err}"),
    }
}

fn deliver(
    update: FeedUpdate,
    updates: &UnboundedSender<FeedUpdate>,
    messenger: Option<&dyn Messenger>,
) {
    if updates.send(update).is_err() {
        info!("Map was closed before the feed was loaded");
        return;
    }

    if let Some(messenger) = messenger {
        messenger.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use bytes::Bytes;
    use tokio::sync::mpsc;

    use super::*;
    use crate::feed::StaticFeedSource;
    use crate::layer::OverlayKind;
    use crate::map::MapView;
    use crate::tests::{earthquakes_payload, plates_payload};
    use crate::DummyMessenger;

    struct FailingSource;

    #[async_trait]
    impl FeedSource for FailingSource {
        async fn fetch(&self) -> Result<Bytes, QuakeMapError> {
            Err(QuakeMapError::Network("connection refused".into()))
        }

        fn name(&self) -> &str {
            "unreachable"
        }
    }

    struct SlowSource(StaticFeedSource);

    #[async_trait]
    impl FeedSource for SlowSource {
        async fn fetch(&self) -> Result<Bytes, QuakeMapError> {
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            self.0.fetch().await
        }

        fn name(&self) -> &str {
            self.0.name()
        }
    }

    #[test]
    fn loads_from_static_source() {
        let source = StaticFeedSource::new("quakes", earthquakes_payload());
        let quakes = tokio_test::block_on(load_earthquakes(&source)).expect("valid feed");
        assert_eq!(quakes.len(), 3);

        let source = StaticFeedSource::new("plates", plates_payload());
        let plates = tokio_test::block_on(load_plate_boundaries(&source)).expect("valid feed");
        assert_eq!(plates.len(), 2);
    }

    #[test]
    fn network_error_is_propagated() {
        assert_matches!(
            tokio_test::block_on(load_earthquakes(&FailingSource)),
            Err(QuakeMapError::Network(_))
        );
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let source = StaticFeedSource::new("broken", &b"<html>502 Bad Gateway</html>"[..]);
        assert_matches!(
            tokio_test::block_on(load_plate_boundaries(&source)),
            Err(QuakeMapError::GeoJson(_))
        );
    }

    #[tokio::test]
    async fn both_feeds_are_delivered() {
        let loader = FeedLoader::new(
            SlowSource(StaticFeedSource::new("quakes", earthquakes_payload())),
            StaticFeedSource::new("plates", plates_payload()),
        );
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let messenger: Arc<dyn Messenger> = Arc::new(DummyMessenger);

        let handles = loader.spawn(&Handle::current(), sender, Some(messenger));
        for handle in handles {
            handle.await.expect("task panicked");
        }

        let mut map = MapView::earthquake_map();
        while let Some(update) = receiver.recv().await {
            map.apply_update(update);
        }

        assert_eq!(map.earthquakes().len(), 3);
        assert_eq!(map.tectonic_plates().len(), 2);
        assert!(map.is_overlay_attached(OverlayKind::Earthquakes));
        assert!(map.is_overlay_attached(OverlayKind::TectonicPlates));
    }

    #[tokio::test]
    async fn one_failing_feed_does_not_affect_the_other() {
        let loader = FeedLoader::new(
            FailingSource,
            StaticFeedSource::new("plates", plates_payload()),
        );
        let (sender, mut receiver) = mpsc::unbounded_channel();
        loader.spawn(&Handle::current(), sender, None);

        let mut map = MapView::earthquake_map();
        let mut received = 0;
        while let Some(update) = receiver.recv().await {
            if let FeedUpdate::Earthquakes(result) = &update {
                assert_matches!(result, Err(QuakeMapError::Network(_)));
            }
            map.apply_update(update);
            received += 1;
        }

        assert_eq!(received, 2);
        assert!(!map.is_overlay_attached(OverlayKind::Earthquakes));
        assert!(map.is_overlay_attached(OverlayKind::TectonicPlates));
    }
}
