//! Mosaic result types.

use image::RgbaImage;
use serde::Serialize;

use crate::coord::BoundingBox;
use crate::tile::TileRange;

/// A stitched image built from one rectangle of same-zoom tiles.
#[derive(Debug, Clone)]
pub struct Mosaic {
    /// Stitched pixels, `range.width() * 256` by `range.height() * 256`.
    pub image: RgbaImage,
    /// Tile rectangle the image was built from.
    pub range: TileRange,
    /// Geographic area covered by the tile rectangle.
    pub bbox: BoundingBox,
    /// Tiles that were pasted.
    pub tiles_present: u64,
    /// Tiles that could not be obtained and were left blank.
    pub tiles_missing: u64,
}

impl Mosaic {
    pub fn zoom(&self) -> u8 {
        self.range.zoom
    }

    /// Corner-ordered extent `(xmin, ymax, xmax, ymin)`: the north-west
    /// corner followed by the south-east corner.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        self.bbox.to_nw_se()
    }

    /// True when every tile in the rectangle was obtained.
    pub fn is_complete(&self) -> bool {
        self.tiles_missing == 0
    }

    /// Serializable summary of everything but the pixels.
    pub fn metadata(&self) -> MosaicMetadata {
        MosaicMetadata {
            zoom: self.range.zoom,
            width_px: self.image.width(),
            height_px: self.image.height(),
            range: self.range,
            bbox: self.bbox,
            extent: self.extent(),
            tiles_present: self.tiles_present,
            tiles_missing: self.tiles_missing,
        }
    }
}

/// Sidecar description of a rendered mosaic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MosaicMetadata {
    pub zoom: u8,
    pub width_px: u32,
    pub height_px: u32,
    pub range: TileRange,
    pub bbox: BoundingBox,
    /// `(xmin, ymax, xmax, ymin)`
    pub extent: (f64, f64, f64, f64),
    pub tiles_present: u64,
    pub tiles_missing: u64,
}
