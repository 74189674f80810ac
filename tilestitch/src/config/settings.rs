//! Configuration settings structs and their defaults.

use std::path::PathBuf;

use crate::provider::{DEFAULT_TEMPLATE, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::zoom::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};

/// Default per-tile request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();

/// Name of the default cache directory under the system temp directory.
pub const DEFAULT_CACHE_DIR_NAME: &str = "tilestitch_tile_cache";

/// Default cache directory: `<system temp>/tilestitch_tile_cache`.
pub fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_CACHE_DIR_NAME)
}

/// Complete contents of `config.ini`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub provider: ProviderSettings,
    pub cache: CacheSettings,
    pub zoom: ZoomSettings,
}

/// `[provider]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub template: String,
    /// Per-tile request timeout in seconds.
    pub timeout: u64,
    pub user_agent: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// `[cache]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSettings {
    pub directory: PathBuf,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            directory: default_cache_dir(),
        }
    }
}

/// `[zoom]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomSettings {
    pub min: u8,
    pub max: u8,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
        }
    }
}
