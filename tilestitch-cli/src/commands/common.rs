//! Common types and utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use clap::Args;
use tilestitch::config::{config_file_path, ConfigFile};
use tilestitch::coord::BoundingBox;
use tilestitch::service::ServiceConfig;

use crate::error::CliError;

/// Bounding box argument shared by the render, zoom and tiles commands.
#[derive(Debug, Clone, Args)]
pub struct BboxArg {
    /// Bounding box in degrees; corners may be given in either order
    #[arg(
        long,
        num_args = 4,
        value_names = ["WEST", "SOUTH", "EAST", "NORTH"],
        allow_negative_numbers = true,
        required = true
    )]
    pub bbox: Vec<f64>,
}

impl BboxArg {
    pub fn to_bbox(&self) -> Result<BoundingBox, CliError> {
        match self.bbox.as_slice() {
            [west, south, east, north] => Ok(BoundingBox::new(*west, *south, *east, *north)),
            values => Err(CliError::Config(format!(
                "--bbox takes 4 values, got {}",
                values.len()
            ))),
        }
    }
}

/// Load the config file from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
    Ok(ConfigFile::load_from(&path)?)
}

/// Build the service configuration: config file values, then CLI overrides.
pub fn service_config(
    file: &ConfigFile,
    template: Option<&str>,
    cache_dir: Option<PathBuf>,
) -> Result<ServiceConfig, CliError> {
    let mut file = file.clone();
    if let Some(template) = template {
        file.provider.template = template.to_string();
    }
    if let Some(dir) = cache_dir {
        file.cache.directory = dir;
    }
    ServiceConfig::from_config_file(&file).map_err(CliError::ServiceCreation)
}

/// Human-readable byte count, e.g. `1.5 MB`.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}
