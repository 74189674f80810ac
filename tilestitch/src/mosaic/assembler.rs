//! Tile grid assembly.

use image::{imageops, RgbaImage};
use tracing::{debug, info};

use super::types::Mosaic;
use crate::cache::{CacheStats, TileCache};
use crate::coord::{tile_to_bbox, BoundingBox, TileIndex};
use crate::provider::{HttpClient, TileServerTemplate};
use crate::tile::{TileRange, TILE_SIZE};

/// Stitches tiles fetched through a [`TileCache`] into one image.
pub struct MosaicAssembler<C: HttpClient> {
    cache: TileCache<C>,
}

impl<C: HttpClient> MosaicAssembler<C> {
    pub fn new(cache: TileCache<C>) -> Self {
        Self { cache }
    }

    /// Cache counters accumulated across all assemblies.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Builds the mosaic for the rectangle spanned by `tiles`.
    ///
    /// Every tile of the bounding rectangle is requested, one at a time in
    /// column-major order. Tiles the cache cannot provide stay transparent
    /// black; the image size depends only on the rectangle.
    ///
    /// # Panics
    ///
    /// Panics if `tiles` is empty, if the tiles do not share one zoom level,
    /// or if the mosaic would be wider or taller than `u32::MAX` pixels.
    pub fn assemble(&self, tiles: &[TileIndex], template: &TileServerTemplate) -> Mosaic {
        let range = TileRange::from_tiles(tiles);
        let (width, height) = canvas_size(&range);

        let mut canvas = RgbaImage::new(width, height);
        let mut tiles_present = 0;
        let mut tiles_missing = 0;

        for tile in range.tiles() {
            let x_offset = (tile.x - range.min_x) * TILE_SIZE as i64;
            let y_offset = (tile.y - range.min_y) * TILE_SIZE as i64;

            match self.cache.get(&tile, template) {
                Some(raster) => {
                    imageops::replace(&mut canvas, &raster.image, x_offset, y_offset);
                    tiles_present += 1;
                }
                None => {
                    debug!(tile = %tile, "Leaving tile blank");
                    tiles_missing += 1;
                }
            }
        }

        let bbox = tiles_to_bbox(tiles);

        info!(
            zoom = range.zoom,
            tiles = range.len(),
            missing = tiles_missing,
            width,
            height,
            "Assembled mosaic"
        );

        Mosaic {
            image: canvas,
            range,
            bbox,
            tiles_present,
            tiles_missing,
        }
    }
}

fn canvas_size(range: &TileRange) -> (u32, u32) {
    let to_px = |tiles: u64| {
        tiles
            .checked_mul(TILE_SIZE as u64)
            .and_then(|px| u32::try_from(px).ok())
    };
    match (to_px(range.width()), to_px(range.height())) {
        (Some(w), Some(h)) => (w, h),
        _ => panic!("mosaic for {} exceeds the maximum image size", range),
    }
}

/// Geographic rectangle covered by a set of tiles.
///
/// Use [`BoundingBox::to_nw_se`] for the `(xmin, ymax, xmax, ymin)` corner
/// ordering; rows grow southward, so the north edge comes from the smallest
/// row index.
///
/// # Panics
///
/// Panics if `tiles` is empty.
pub fn tiles_to_bbox(tiles: &[TileIndex]) -> BoundingBox {
    tiles
        .iter()
        .map(|t| tile_to_bbox(t.x, t.y, t.zoom))
        .reduce(|acc, b| acc.union(&b))
        .unwrap_or_else(|| panic!("a tile range needs at least one tile"))
}
