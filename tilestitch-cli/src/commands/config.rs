//! Configuration management CLI commands.

use std::path::Path;

use clap::Subcommand;
use tilestitch::config::{config_file_path, ConfigFile};

use super::common::load_config;
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Create the configuration file with defaults if it does not exist
    Init,

    /// Print the effective configuration
    Show,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path);

    match command {
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Init => {
            if ConfigFile::ensure_exists_at(&path)? {
                println!("Created {}", path.display());
            } else {
                println!("{} already exists", path.display());
            }
        }
        ConfigCommands::Show => {
            let config = load_config(Some(&path))?;
            println!("[provider]");
            println!("template = {}", config.provider.template);
            println!("timeout = {}", config.provider.timeout);
            println!("user_agent = {}", config.provider.user_agent);
            println!();
            println!("[cache]");
            println!("directory = {}", config.cache.directory.display());
            println!();
            println!("[zoom]");
            println!("min = {}", config.zoom.min);
            println!("max = {}", config.zoom.max);
        }
    }
    Ok(())
}
