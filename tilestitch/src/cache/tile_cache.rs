//! Cache-backed tile retrieval.

use std::sync::Arc;

use tracing::{debug, warn};

use super::key::CacheKey;
use super::stats::{CacheCounters, CacheStats};
use super::store::TileStore;
use crate::coord::TileIndex;
use crate::provider::{HttpClient, ProviderError, TileServerTemplate};
use crate::tile::RasterTile;

/// Resolves tile indices to decoded tiles, store first, network second.
///
/// Every failure on the way (timeout, HTTP error, undecodable payload) is
/// logged and reported as `None`; nothing is propagated to the caller. A tile
/// fetched from the network is written back to the store before it is
/// returned, and a failed write only costs the next caller a refetch.
pub struct TileCache<C: HttpClient> {
    store: Arc<dyn TileStore>,
    client: C,
    counters: CacheCounters,
}

impl<C: HttpClient> TileCache<C> {
    pub fn new(store: Arc<dyn TileStore>, client: C) -> Self {
        Self {
            store,
            client,
            counters: CacheCounters::default(),
        }
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }

    /// Looks up one tile.
    ///
    /// # Returns
    ///
    /// - `Some(tile)` from the store, or freshly fetched and stored
    /// - `None` if the tile could not be obtained
    pub fn get(&self, tile: &TileIndex, template: &TileServerTemplate) -> Option<RasterTile> {
        let key = CacheKey::new(template, tile);

        if let Some(raster) = self.load(&key) {
            self.counters.record_hit();
            debug!(tile = %tile, "Cache hit");
            return Some(raster);
        }

        debug!(tile = %tile, "Cache miss, fetching");
        match self.fetch(tile, template) {
            Ok(raster) => {
                self.counters.record_fetch();
                self.save(&key, &raster);
                Some(raster)
            }
            Err(e) => {
                self.counters.record_failure();
                warn!(tile = %tile, error = %e, "Tile unavailable");
                None
            }
        }
    }

    fn load(&self, key: &CacheKey) -> Option<RasterTile> {
        let data = match self.store.get(key) {
            Ok(Some(data)) => data,
            Ok(None) => return None,
            Err(e) => {
                self.counters.record_store_error();
                warn!(key = %key, error = %e, "Failed to read cached tile");
                return None;
            }
        };

        match RasterTile::decode(*key.tile(), &data) {
            Ok(raster) => Some(raster),
            Err(e) => {
                // Treated as a miss; the refetched tile overwrites the entry
                warn!(key = %key, error = %e, "Discarding undecodable cached tile");
                None
            }
        }
    }

    fn fetch(
        &self,
        tile: &TileIndex,
        template: &TileServerTemplate,
    ) -> Result<RasterTile, ProviderError> {
        let url = template.url_for(tile);
        let data = self.client.get(&url)?;
        RasterTile::decode(*tile, &data)
            .map_err(|e| ProviderError::InvalidResponse(format!("{}: {}", url, e)))
    }

    fn save(&self, key: &CacheKey, raster: &RasterTile) {
        let result = raster
            .encode_png()
            .map_err(|e| super::CacheError::Encode(e.to_string()))
            .and_then(|png| self.store.put(key, &png));

        if let Err(e) = result {
            self.counters.record_store_error();
            warn!(key = %key, error = %e, "Failed to store tile");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheError, MemoryTileStore};
    use crate::provider::MockHttpClient;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    const TEMPLATE: &str = "http://tiles.test/{z}/{x}/{y}.png";

    fn template() -> TileServerTemplate {
        TileServerTemplate::new(TEMPLATE).unwrap()
    }

    fn png(color: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_fn(256, 256, |_, _| Rgba(color));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn cache_with(
        store: Arc<MemoryTileStore>,
        client: MockHttpClient,
    ) -> TileCache<Arc<MockHttpClient>> {
        TileCache::new(store, Arc::new(client))
    }

    struct ReadOnlyStore;

    impl TileStore for ReadOnlyStore {
        fn get(&self, _key: &CacheKey) -> Result<Option<Vec<u8>>, CacheError> {
            Ok(None)
        }

        fn put(&self, _key: &CacheKey, _data: &[u8]) -> Result<(), CacheError> {
            Err(CacheError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn contains(&self, _key: &CacheKey) -> bool {
            false
        }
    }

    #[test]
    fn test_miss_fetches_and_stores() {
        let store = Arc::new(MemoryTileStore::new());
        let client = Arc::new(MockHttpClient::ok(png([10, 20, 30, 255])));
        let cache = TileCache::new(store.clone(), client.clone());

        let tile = TileIndex::new(31, 20, 6);
        let raster = cache.get(&tile, &template()).unwrap();

        assert_eq!(raster.index, tile);
        assert_eq!(raster.image.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
        assert_eq!(client.requests(), vec!["http://tiles.test/6/31/20.png".to_string()]);
        assert!(store.contains(&CacheKey::new(&template(), &tile)));
    }

    #[test]
    fn test_second_get_is_served_from_store() {
        let store = Arc::new(MemoryTileStore::new());
        let client = Arc::new(MockHttpClient::ok(png([1, 2, 3, 255])));
        let cache = TileCache::new(store, client.clone());

        let tile = TileIndex::new(1, 1, 2);
        cache.get(&tile, &template()).unwrap();
        cache.get(&tile, &template()).unwrap();

        assert_eq!(client.requests().len(), 1);
        let stats = cache.stats();
        assert_eq!(stats.fetched, 1);
        assert_eq!(stats.store_hits, 1);
    }

    #[test]
    fn test_fetch_failure_is_none() {
        let cache = cache_with(
            Arc::new(MemoryTileStore::new()),
            MockHttpClient::failing(ProviderError::Timeout("http://tiles.test".into())),
        );

        assert!(cache.get(&TileIndex::new(0, 0, 0), &template()).is_none());
        assert_eq!(cache.stats().fetch_failures, 1);
    }

    #[test]
    fn test_non_image_payload_is_none_and_not_stored() {
        let store = Arc::new(MemoryTileStore::new());
        let cache = cache_with(store.clone(), MockHttpClient::ok(b"<html>".to_vec()));

        assert!(cache.get(&TileIndex::new(0, 0, 0), &template()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_failure_is_not_remembered() {
        let store = Arc::new(MemoryTileStore::new());
        let client = Arc::new(MockHttpClient::failing(ProviderError::HttpStatus {
            status: 503,
            url: "http://tiles.test/0/0/0.png".into(),
        }));
        let cache = TileCache::new(store, client.clone());

        let tile = TileIndex::new(0, 0, 0);
        assert!(cache.get(&tile, &template()).is_none());
        assert!(cache.get(&tile, &template()).is_none());
        assert_eq!(client.requests().len(), 2);
    }

    #[test]
    fn test_corrupt_cache_entry_is_refetched() {
        let store = Arc::new(MemoryTileStore::new());
        let tile = TileIndex::new(3, 4, 5);
        let key = CacheKey::new(&template(), &tile);
        store.put(&key, b"truncated").unwrap();

        let client = Arc::new(MockHttpClient::ok(png([9, 9, 9, 255])));
        let cache = TileCache::new(store.clone(), client.clone());

        assert!(cache.get(&tile, &template()).is_some());
        assert_eq!(client.requests().len(), 1);

        let repaired = store.get(&key).unwrap().unwrap();
        assert!(RasterTile::decode(tile, &repaired).is_ok());
    }

    #[test]
    fn test_store_write_failure_still_returns_tile() {
        let cache = TileCache::new(
            Arc::new(ReadOnlyStore),
            MockHttpClient::ok(png([0, 0, 0, 255])),
        );

        assert!(cache.get(&TileIndex::new(0, 0, 1), &template()).is_some());
        assert_eq!(cache.stats().store_errors, 1);
        assert_eq!(cache.stats().fetched, 1);
    }

    #[test]
    fn test_templates_do_not_share_entries() {
        let store = Arc::new(MemoryTileStore::new());
        let client = Arc::new(MockHttpClient::ok(png([5, 5, 5, 255])));
        let cache = TileCache::new(store.clone(), client.clone());

        let other = TileServerTemplate::new("http://other.test/{z}/{x}/{y}.png").unwrap();
        let tile = TileIndex::new(2, 2, 3);
        cache.get(&tile, &template()).unwrap();
        cache.get(&tile, &other).unwrap();

        assert_eq!(client.requests().len(), 2);
        assert_eq!(store.len(), 2);
    }
}
