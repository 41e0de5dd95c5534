use super::Attribution;
use crate::tile_schema::TileIndex;

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// Background layer of raster tiles from a REST tile service.
///
/// Tile urls are built from a template with the `{s}`, `{z}`, `{x}` and `{y}` placeholders.
/// `{s}` is replaced by one of the subdomains, picked from the tile coordinates so that a tile
/// always goes to the same server.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterTileLayer {
    url_template: String,
    max_zoom: u32,
    attribution: Option<Attribution>,
}

impl RasterTileLayer {
    /// Creates a layer with the `a`, `b`, `c` subdomains and maximum zoom 18.
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            max_zoom: 18,
            attribution: None,
        }
    }

    /// Standard OpenStreetMap tiles.
    pub fn open_street_map() -> Self {
        Self::new("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
            .with_max_zoom(19)
            .with_attribution(Attribution::new(
                "© OpenStreetMap contributors",
                Some("https://www.openstreetmap.org/copyright".into()),
            ))
    }

    /// OpenTopoMap topographic tiles.
    pub fn open_topo_map() -> Self {
        Self::new("https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png")
            .with_max_zoom(17)
            .with_attribution(Attribution::new(
                "© OpenTopoMap contributors",
                Some("https://opentopomap.org/about".into()),
            ))
    }

    /// Sets the maximum zoom level the service has tiles for.
    pub fn with_max_zoom(mut self, max_zoom: u32) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the attribution shown while the layer is active.
    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = Some(attribution);
        self
    }

    /// Maximum zoom level the service has tiles for.
    pub fn max_zoom(&self) -> u32 {
        self.max_zoom
    }

    /// Attribution of the layer.
    pub fn attribution(&self) -> Option<&Attribution> {
        self.attribution.as_ref()
    }

    /// Url of the tile with the given index.
    pub fn tile_url(&self, index: TileIndex) -> String {
        let sum = (index.x as i64 + index.y as i64).unsigned_abs() as usize;
        let subdomain = SUBDOMAINS[sum % SUBDOMAINS.len()];

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &index.z.to_string())
            .replace("{x}", &index.x.to_string())
            .replace("{y}", &index.y.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_osm_urls() {
        let layer = RasterTileLayer::open_street_map();
        assert_eq!(
            layer.tile_url(TileIndex::new(1, 2, 3)),
            "https://a.tile.openstreetmap.org/3/1/2.png"
        );
        assert_eq!(
            layer.tile_url(TileIndex::new(2, 2, 3)),
            "https://b.tile.openstreetmap.org/3/2/2.png"
        );
        assert_eq!(
            layer.attribution().map(Attribution::text),
            Some("© OpenStreetMap contributors")
        );
    }

    #[test]
    fn subdomain_cycles_with_coordinates() {
        let layer = RasterTileLayer::new("https://{s}.example.com/{z}/{x}/{y}.png");
        assert_eq!(
            layer.tile_url(TileIndex::new(0, 2, 2)),
            "https://c.example.com/2/0/2.png"
        );
        assert_eq!(
            layer.tile_url(TileIndex::new(3, 3, 2)),
            "https://a.example.com/2/3/3.png"
        );
        assert_eq!(layer.max_zoom(), 18);
    }

    #[test]
    fn topo_map_is_limited_to_z17() {
        let layer = RasterTileLayer::open_topo_map();
        assert_eq!(layer.max_zoom(), 17);
        assert!(layer.tile_url(TileIndex::new(0, 0, 0)).contains("opentopomap.org"));
    }
}
