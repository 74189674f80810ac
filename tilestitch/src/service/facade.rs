//! Mosaic rendering facade.

use std::sync::Arc;

use tracing::info;

use super::config::ServiceConfig;
use super::error::ServiceError;
use crate::cache::{CacheStats, DiskTileStore, TileCache, TileStore};
use crate::coord::{validate_bbox, BoundingBox, TileIndex};
use crate::mosaic::{Mosaic, MosaicAssembler};
use crate::provider::{HttpClient, ReqwestClient};
use crate::tile::{tiles_for_bbox, TileRange};
use crate::zoom::zoom_for_bbox;

/// Renders bounding boxes into stitched mosaics.
///
/// Wires a [`TileCache`] over a [`DiskTileStore`] and an HTTP client into a
/// [`MosaicAssembler`], and runs the full request:
/// validate → select zoom → enumerate tiles → assemble.
pub struct MosaicService<C: HttpClient = ReqwestClient> {
    config: ServiceConfig,
    assembler: MosaicAssembler<C>,
}

impl MosaicService<ReqwestClient> {
    /// Creates a service with a disk-backed cache and a real HTTP client.
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let client = ReqwestClient::with_options(config.timeout(), config.user_agent())?;
        let store = Arc::new(DiskTileStore::new(config.cache_directory().clone()));
        Ok(Self::with_parts(config, client, store))
    }
}

impl<C: HttpClient> MosaicService<C> {
    /// Creates a service from explicit collaborators.
    pub fn with_parts(config: ServiceConfig, client: C, store: Arc<dyn TileStore>) -> Self {
        let assembler = MosaicAssembler::new(TileCache::new(store, client));
        Self { config, assembler }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Cache counters accumulated by this service.
    pub fn cache_stats(&self) -> CacheStats {
        self.assembler.cache_stats()
    }

    /// Zoom level at which `bbox` fills `width` x `height` pixels, clamped
    /// into the configured zoom range.
    pub fn select_zoom(
        &self,
        bbox: &BoundingBox,
        width: u32,
        height: u32,
    ) -> Result<u8, ServiceError> {
        if width == 0 || height == 0 {
            return Err(ServiceError::InvalidSize { width, height });
        }
        validate_bbox(bbox)?;

        let raw = zoom_for_bbox(bbox, width, height);
        let zoom = self.config.zoom_range().clamp(raw);
        if i32::from(zoom) != raw {
            info!(selected = raw, clamped = zoom, "Zoom clamped to provider range");
        }
        Ok(zoom)
    }

    /// Tile rectangle covering `bbox` at `zoom`, checked against the
    /// configured limits.
    pub fn plan(&self, bbox: &BoundingBox, zoom: u8) -> Result<TileRange, ServiceError> {
        validate_bbox(bbox)?;

        let zoom_range = self.config.zoom_range();
        if !zoom_range.contains(zoom) {
            return Err(ServiceError::InvalidZoom {
                zoom,
                min: zoom_range.min,
                max: zoom_range.max,
            });
        }

        let range = tiles_for_bbox(bbox, zoom);
        let limit = self.config.max_tiles();
        if range.len() > limit {
            return Err(ServiceError::TooManyTiles {
                count: range.len(),
                limit,
            });
        }
        Ok(range)
    }

    /// Renders `bbox` at the zoom that best fills `width` x `height` pixels.
    pub fn render(
        &self,
        bbox: &BoundingBox,
        width: u32,
        height: u32,
    ) -> Result<Mosaic, ServiceError> {
        let zoom = self.select_zoom(bbox, width, height)?;
        self.render_at_zoom(bbox, zoom)
    }

    /// Renders `bbox` at an explicit zoom level.
    pub fn render_at_zoom(&self, bbox: &BoundingBox, zoom: u8) -> Result<Mosaic, ServiceError> {
        let range = self.plan(bbox, zoom)?;
        let tiles: Vec<TileIndex> = range.tiles().collect();

        info!(bbox = %bbox, zoom, range = %range, tiles = tiles.len(), "Rendering mosaic");
        Ok(self.assembler.assemble(&tiles, self.config.template()))
    }
}
