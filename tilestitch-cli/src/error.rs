//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use tilestitch::cache::CacheError;
use tilestitch::config::ConfigFileError;
use tilestitch::service::ServiceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Config file could not be read or written
    ConfigFile(ConfigFileError),
    /// Failed to create service
    ServiceCreation(ServiceError),
    /// Failed to render the mosaic
    Render(ServiceError),
    /// Tile listing rejected before enumeration
    Plan(ServiceError),
    /// Failed to write output file
    FileWrite { path: PathBuf, error: String },
    /// Failed to read cache statistics
    CacheStats(CacheError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Render(ServiceError::TooManyTiles { .. })
        | CliError::Plan(ServiceError::TooManyTiles { .. }) = self
        {
            eprintln!();
            eprintln!("Try a smaller target size, a lower --zoom, or a smaller --bbox.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::ServiceCreation(e) => write!(f, "Failed to create service: {}", e),
            CliError::Render(e) => write!(f, "Failed to render mosaic: {}", e),
            CliError::Plan(e) => write!(f, "Failed to list tiles: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path.display(), error)
            }
            CliError::CacheStats(e) => write!(f, "Failed to read cache statistics: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::ServiceCreation(e) => Some(e),
            CliError::Render(e) => Some(e),
            CliError::Plan(e) => Some(e),
            CliError::CacheStats(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        CliError::Render(e)
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_file_write() {
        let err = CliError::FileWrite {
            path: PathBuf::from("/out/map.png"),
            error: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to write file '/out/map.png': disk full");
    }

    #[test]
    fn test_service_error_converts_to_render() {
        let err: CliError = ServiceError::InvalidSize {
            width: 0,
            height: 10,
        }
        .into();
        assert!(matches!(err, CliError::Render(_)));
        assert!(err.to_string().starts_with("Failed to render mosaic"));
    }
}
