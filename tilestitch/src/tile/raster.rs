//! Decoded tile images.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};

use super::TILE_SIZE;
use crate::coord::TileIndex;

/// A fetched tile decoded to RGBA pixels.
///
/// The image is always `TILE_SIZE` x `TILE_SIZE`; sources that serve other
/// sizes (512px retina tiles, for instance) are resampled on decode.
#[derive(Debug, Clone)]
pub struct RasterTile {
    pub index: TileIndex,
    pub image: RgbaImage,
}

impl RasterTile {
    /// Decodes encoded image bytes (PNG, JPEG, WebP, ...) into a tile.
    pub fn decode(index: TileIndex, data: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(data)?;
        let image = if decoded.width() == TILE_SIZE && decoded.height() == TILE_SIZE {
            decoded.into_rgba8()
        } else {
            decoded
                .resize_exact(TILE_SIZE, TILE_SIZE, FilterType::Triangle)
                .into_rgba8()
        };
        Ok(Self { index, image })
    }

    /// Encodes the tile as PNG, the on-disk cache format.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut buffer = Cursor::new(Vec::new());
        self.image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }
}
