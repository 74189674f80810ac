//! Tile ranges and decoded tile rasters.
//!
//! Tiles are addressed in the XYZ ("slippy map") scheme: at zoom `z` the
//! world is a `2^z` x `2^z` grid, columns increase eastward from the
//! antimeridian and rows increase southward from the northern limit.

mod range;
mod raster;

pub use range::{tiles_for_bbox, TileRange, TileRangeIterator};
pub use raster::RasterTile;

/// Edge length of a tile in pixels.
pub const TILE_SIZE: u32 = 256;
