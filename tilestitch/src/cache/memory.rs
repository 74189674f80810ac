//! In-memory tile store.
//!
//! Holds encoded tiles in a `HashMap` for the lifetime of the process. Useful
//! for tests and for one-shot runs that should not touch the disk.

use std::collections::HashMap;
use std::sync::Mutex;

use super::key::CacheKey;
use super::store::{CacheError, TileStore};

/// Unbounded in-memory store.
#[derive(Debug, Default)]
pub struct MemoryTileStore {
    entries: Mutex<HashMap<CacheKey, Vec<u8>>>,
}

impl MemoryTileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tiles.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total size of all stored tiles in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.lock().values().map(|v| v.len() as u64).sum()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, Vec<u8>>> {
        // A poisoned map is still a valid map; entries are replaced whole
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TileStore for MemoryTileStore {
    fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.lock().get(key).cloned())
    }

    fn put(&self, key: &CacheKey, data: &[u8]) -> Result<(), CacheError> {
        self.lock().insert(key.clone(), data.to_vec());
        Ok(())
    }

    fn contains(&self, key: &CacheKey) -> bool {
        self.lock().contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::TileIndex;
    use crate::provider::TileServerTemplate;

    fn key(x: i64) -> CacheKey {
        let template = TileServerTemplate::new("http://t/{z}/{x}/{y}.png").unwrap();
        CacheKey::new(&template, &TileIndex::new(x, 0, 4))
    }

    #[test]
    fn test_put_then_get() {
        let store = MemoryTileStore::new();
        assert!(store.is_empty());

        store.put(&key(1), &[1, 2, 3]).unwrap();
        assert_eq!(store.get(&key(1)).unwrap(), Some(vec![1, 2, 3]));
        assert!(store.contains(&key(1)));
        assert_eq!(store.get(&key(2)).unwrap(), None);
    }

    #[test]
    fn test_put_replaces_value() {
        let store = MemoryTileStore::new();
        store.put(&key(1), &[1]).unwrap();
        store.put(&key(1), &[2, 2]).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.size_bytes(), 2);
        assert_eq!(store.get(&key(1)).unwrap(), Some(vec![2, 2]));
    }
}
