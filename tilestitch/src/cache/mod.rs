//! Persistent tile cache
//!
//! Tiles are stored by [`CacheKey`], a digest of the tile server template
//! combined with the tile index, so one store can hold tiles from any number
//! of servers. The store is unbounded and append-only: entries are never
//! evicted or deleted.
//!
//! [`TileCache`] sits in front of a [`TileStore`] and an
//! [`HttpClient`](crate::provider::HttpClient):
//!
//! ```text
//! get(tile, template)
//!   ├─ store hit, decodes   → Some(tile)
//!   ├─ fetch ok, decodes    → store.put(png), Some(tile)
//!   └─ anything else        → None
//! ```

mod disk;
mod key;
mod memory;
mod stats;
mod store;
mod tile_cache;

pub use disk::{disk_cache_stats, DiskStoreStats, DiskTileStore};
pub use key::{template_hash, CacheKey, CACHE_FILE_EXTENSION, CACHE_FILE_PREFIX};
pub use memory::MemoryTileStore;
pub use stats::CacheStats;
pub use store::{CacheError, TileStore};
pub use tile_cache::TileCache;
