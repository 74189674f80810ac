//! On-disk tile store.
//!
//! Tiles live in one flat directory, one file per key:
//!
//! ```text
//! <cache_dir>/tile_cache_<sha256(template)>_x<x>_y<y>_z<z>.png
//! ```
//!
//! The directory is created on first write. Each write lands in a temporary
//! file that is renamed over the final name, so readers never observe a
//! partially written tile.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::key::{CacheKey, CACHE_FILE_EXTENSION, CACHE_FILE_PREFIX};
use super::store::{CacheError, TileStore};

/// Persistent store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct DiskTileStore {
    root: PathBuf,
}

impl DiskTileStore {
    /// Create a store rooted at `root`.
    ///
    /// Nothing is touched on disk until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file holding `key`.
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    /// Count the tiles currently stored and their total size.
    pub fn stats(&self) -> Result<DiskStoreStats, CacheError> {
        disk_cache_stats(&self.root)
    }
}

impl TileStore for DiskTileStore {
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::File { path, source }),
        }
    }

    fn put(&self, key: &CacheKey, data: &[u8]) -> Result<(), CacheError> {
        fs::create_dir_all(&self.root).map_err(|source| CacheError::File {
            path: self.root.clone(),
            source,
        })?;

        let path = self.path_for(key);
        let tmp = self
            .root
            .join(format!(".{}.{}.tmp", key.file_name(), std::process::id()));

        fs::write(&tmp, data).map_err(|source| CacheError::File {
            path: tmp.clone(),
            source,
        })?;

        if let Err(source) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(CacheError::File { path, source });
        }

        trace!(path = %path.display(), bytes = data.len(), "Stored tile");
        Ok(())
    }

    fn contains(&self, key: &CacheKey) -> bool {
        self.path_for(key).is_file()
    }
}

/// Size summary of an on-disk tile cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskStoreStats {
    /// Number of cached tile files.
    pub files: u64,
    /// Total size of those files in bytes.
    pub bytes: u64,
}

/// Count the cached tile files under `cache_dir`.
///
/// A missing directory is an empty cache. Files that do not follow the
/// cache naming scheme are ignored.
pub fn disk_cache_stats(cache_dir: &Path) -> Result<DiskStoreStats, CacheError> {
    let entries = match fs::read_dir(cache_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DiskStoreStats::default()),
        Err(source) => {
            return Err(CacheError::File {
                path: cache_dir.to_path_buf(),
                source,
            })
        }
    };

    let mut stats = DiskStoreStats::default();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !is_cache_file_name(&name) {
            continue;
        }
        let metadata = entry.metadata()?;
        if metadata.is_file() {
            stats.files += 1;
            stats.bytes += metadata.len();
        }
    }
    Ok(stats)
}

fn is_cache_file_name(name: &str) -> bool {
    name.starts_with(CACHE_FILE_PREFIX)
        && Path::new(name)
            .extension()
            .is_some_and(|ext| ext == CACHE_FILE_EXTENSION)
}
