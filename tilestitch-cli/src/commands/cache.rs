//! Cache inspection CLI commands.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use tilestitch::cache::disk_cache_stats;

use super::common::{format_size, load_config};
use crate::error::CliError;

/// Cache action subcommands.
#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show disk cache statistics
    Stats {
        /// Cache directory (defaults to the configured one)
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },
    /// Print the cache directory
    Path,
}

/// Run a cache subcommand.
pub fn run(action: CacheAction, config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;

    match action {
        CacheAction::Stats { cache_dir } => {
            let cache_dir = cache_dir.unwrap_or(config.cache.directory);
            println!("Disk cache: {}", cache_dir.display());

            let stats = disk_cache_stats(&cache_dir).map_err(CliError::CacheStats)?;
            println!("  Files: {}", stats.files);
            println!("  Size:  {}", format_size(stats.bytes));
            Ok(())
        }
        CacheAction::Path => {
            println!("{}", config.cache.directory.display());
            Ok(())
        }
    }
}
