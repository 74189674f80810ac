//! Zoom level selection
//!
//! Chooses the pyramid level at which a bounding box best fills a target
//! pixel size, and clamps that choice into the range a tile server supports.

use serde::Serialize;

use crate::coord::BoundingBox;
use crate::tile::TILE_SIZE;

/// Longitude span of the world in degrees.
const WORLD_LON_SPAN: f64 = 360.0;

/// Latitude span covered by Web Mercator tiles in degrees.
const WORLD_LAT_SPAN: f64 = 170.1022;

/// Default lowest zoom level requested from a tile server.
pub const DEFAULT_MIN_ZOOM: u8 = 0;

/// Default highest zoom level requested from a tile server.
pub const DEFAULT_MAX_ZOOM: u8 = 19;

/// Selects the coarsest zoom at which `bbox` covers the target pixel area
/// without undersampling.
///
/// The number of tiles needed to cover the whole world at the requested
/// resolution is computed per axis; the larger one is `n = 2^zoom`.
///
/// The result is not clamped. Very large boxes or tiny targets give negative
/// zooms, and a box with zero span on an axis saturates to `i32::MAX`.
pub fn zoom_for_bbox(bbox: &BoundingBox, target_width_px: u32, target_height_px: u32) -> i32 {
    // How many tiles fit in the target image
    let tiles_x = target_width_px as f64 / TILE_SIZE as f64;
    let tiles_y = target_height_px as f64 / TILE_SIZE as f64;

    // How many copies of the box fit in the world
    let extents_x = WORLD_LON_SPAN / bbox.width().abs();
    let extents_y = WORLD_LAT_SPAN / bbox.height().abs();

    let n = (tiles_x * extents_x).max(tiles_y * extents_y);

    n.log2().floor() as i32
}

/// Inclusive range of zoom levels a tile server provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoomRange {
    pub min: u8,
    pub max: u8,
}

impl ZoomRange {
    /// Creates a range, swapping the bounds if given in reverse.
    pub fn new(min: u8, max: u8) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Clamps an unclamped zoom selection into this range.
    pub fn clamp(&self, zoom: i32) -> u8 {
        zoom.clamp(self.min as i32, self.max as i32) as u8
    }

    pub fn contains(&self, zoom: u8) -> bool {
        (self.min..=self.max).contains(&zoom)
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }
}
