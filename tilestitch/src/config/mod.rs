//! User configuration
//!
//! Settings are read from `~/.tilestitch/config.ini`. A missing file means
//! defaults; values present in the file replace the defaults one by one.
//!
//! ```ini
//! [provider]
//! template = https://tile.openstreetmap.org/{z}/{x}/{y}.png
//! timeout = 1
//!
//! [cache]
//! directory = ~/tile-cache
//!
//! [zoom]
//! min = 0
//! max = 19
//! ```

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    default_cache_dir, CacheSettings, ConfigFile, ProviderSettings, ZoomSettings,
    DEFAULT_CACHE_DIR_NAME, DEFAULT_TIMEOUT_SECS,
};
