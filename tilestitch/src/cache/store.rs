//! Storage backends for fetched tiles.
//!
//! A `TileStore` is a flat, append-only map from [`CacheKey`] to encoded tile
//! bytes. Stores never evict or delete: once written, an entry is served for
//! every later request with the same key.

use std::path::PathBuf;

use thiserror::Error;

use super::key::CacheKey;

/// Errors that can occur while reading or writing a tile store.
#[derive(Debug, Error)]
pub enum CacheError {
    /// I/O error during store operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file.
    #[error("I/O error at {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cached bytes could not be encoded for storage.
    #[error("Failed to encode tile: {0}")]
    Encode(String),
}

/// Key-value storage for encoded tiles.
///
/// Implementations must be `Send + Sync` so one store can back several
/// caches. Writes for a single key must be atomic: a concurrent reader sees
/// either nothing or the complete value.
pub trait TileStore: Send + Sync {
    /// Retrieve the bytes stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(data))` if the key exists
    /// - `Ok(None)` if the key is not found
    /// - `Err(_)` if the store could not be read
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `data` under `key`, replacing any previous value.
    fn put(&self, key: &CacheKey, data: &[u8]) -> Result<(), CacheError>;

    /// Check if a key exists without reading its value.
    fn contains(&self, key: &CacheKey) -> bool;
}

impl<S: TileStore + ?Sized> TileStore for std::sync::Arc<S> {
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn put(&self, key: &CacheKey, data: &[u8]) -> Result<(), CacheError> {
        (**self).put(key, data)
    }

    fn contains(&self, key: &CacheKey) -> bool {
        (**self).contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cache_err: CacheError = io_err.into();
        assert!(matches!(cache_err, CacheError::Io(_)));
    }

    #[test]
    fn test_file_error_display_includes_path() {
        let err = CacheError::File {
            path: PathBuf::from("/cache/tile_cache_ab_x1_y2_z3.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/cache/tile_cache_ab_x1_y2_z3.png"));
        assert!(msg.contains("denied"));
    }
}
