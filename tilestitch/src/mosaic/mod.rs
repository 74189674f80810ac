//! Mosaic assembly
//!
//! Composes a rectangle of same-zoom tiles into one RGBA image and reports
//! the geographic area the image covers. Tiles the cache cannot provide are
//! left blank; the image size depends only on the tile rectangle.

mod assembler;
mod types;

pub use assembler::{tiles_to_bbox, MosaicAssembler};
pub use types::{Mosaic, MosaicMetadata};
