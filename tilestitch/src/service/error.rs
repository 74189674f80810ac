//! Service error types.

use thiserror::Error;

use crate::cache::CacheError;
use crate::coord::CoordError;
use crate::provider::ProviderError;

/// Errors that can occur while planning or rendering a mosaic.
///
/// Individual tile failures are not errors; they show up as blank regions
/// and in [`Mosaic::tiles_missing`](crate::mosaic::Mosaic::tiles_missing).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request coordinates outside the Web Mercator range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(#[from] CoordError),

    /// HTTP client or template error
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Tile store error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Explicit zoom level outside the configured range
    #[error("Invalid zoom level {zoom}: must be between {min} and {max}")]
    InvalidZoom { zoom: u8, min: u8, max: u8 },

    /// Target image has no pixels
    #[error("Invalid target size {width}x{height}: both dimensions must be positive")]
    InvalidSize { width: u32, height: u32 },

    /// Mosaic would need more tiles than allowed
    #[error("Request needs {count} tiles, more than the limit of {limit}")]
    TooManyTiles { count: u64, limit: u64 },
}
