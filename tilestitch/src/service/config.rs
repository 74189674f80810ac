//! Service configuration types.

use std::path::PathBuf;
use std::time::Duration;

use super::error::ServiceError;
use crate::config::{default_cache_dir, ConfigFile};
use crate::provider::{TileServerTemplate, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::zoom::ZoomRange;

/// Default upper bound on tiles in one mosaic (a 64 x 64 grid).
pub const DEFAULT_MAX_TILES: u64 = 4096;

/// Configuration for [`MosaicService`](super::MosaicService).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tilestitch::provider::TileServerTemplate;
/// use tilestitch::service::ServiceConfig;
/// use tilestitch::zoom::ZoomRange;
///
/// let config = ServiceConfig::builder()
///     .template(TileServerTemplate::new("https://tiles.example.com/{z}/{x}/{y}.png")?)
///     .timeout(Duration::from_secs(2))
///     .zoom_range(ZoomRange::new(0, 17))
///     .build();
///
/// assert_eq!(config.zoom_range().max, 17);
/// # Ok::<(), tilestitch::provider::ProviderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    template: TileServerTemplate,
    cache_directory: PathBuf,
    timeout: Duration,
    user_agent: String,
    zoom_range: ZoomRange,
    max_tiles: u64,
}

impl ServiceConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Build a configuration from the user's config file.
    pub fn from_config_file(file: &ConfigFile) -> Result<Self, ServiceError> {
        let template = TileServerTemplate::new(file.provider.template.as_str())?;
        Ok(Self::builder()
            .template(template)
            .cache_directory(file.cache.directory.clone())
            .timeout(Duration::from_secs(file.provider.timeout))
            .user_agent(file.provider.user_agent.clone())
            .zoom_range(ZoomRange::new(file.zoom.min, file.zoom.max))
            .build())
    }

    pub fn template(&self) -> &TileServerTemplate {
        &self.template
    }

    pub fn cache_directory(&self) -> &PathBuf {
        &self.cache_directory
    }

    /// Per-tile request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Zoom levels the tile server provides.
    pub fn zoom_range(&self) -> ZoomRange {
        self.zoom_range
    }

    /// Largest number of tiles a single mosaic may request.
    pub fn max_tiles(&self) -> u64 {
        self.max_tiles
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for ServiceConfig.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    template: Option<TileServerTemplate>,
    cache_directory: Option<PathBuf>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    zoom_range: Option<ZoomRange>,
    max_tiles: Option<u64>,
}

impl ServiceConfigBuilder {
    /// Set the tile server template.
    pub fn template(mut self, template: TileServerTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Set the tile cache directory.
    pub fn cache_directory(mut self, path: PathBuf) -> Self {
        self.cache_directory = Some(path);
        self
    }

    /// Set the per-tile request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header sent with tile requests.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the zoom levels the tile server provides.
    pub fn zoom_range(mut self, range: ZoomRange) -> Self {
        self.zoom_range = Some(range);
        self
    }

    /// Set the largest number of tiles a single mosaic may request.
    pub fn max_tiles(mut self, max_tiles: u64) -> Self {
        self.max_tiles = Some(max_tiles);
        self
    }

    /// Build the configuration, filling unset fields with defaults.
    pub fn build(self) -> ServiceConfig {
        ServiceConfig {
            template: self.template.unwrap_or_default(),
            cache_directory: self.cache_directory.unwrap_or_else(default_cache_dir),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            zoom_range: self.zoom_range.unwrap_or_default(),
            max_tiles: self.max_tiles.unwrap_or(DEFAULT_MAX_TILES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();

        assert_eq!(config.template(), &TileServerTemplate::default());
        assert_eq!(config.cache_directory(), &default_cache_dir());
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.zoom_range(), ZoomRange::new(0, 19));
        assert_eq!(config.max_tiles(), DEFAULT_MAX_TILES);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ServiceConfig::builder()
            .cache_directory(PathBuf::from("/tmp/tiles"))
            .user_agent("agent")
            .max_tiles(16)
            .build();

        assert_eq!(config.cache_directory(), &PathBuf::from("/tmp/tiles"));
        assert_eq!(config.user_agent(), "agent");
        assert_eq!(config.max_tiles(), 16);
    }

    #[test]
    fn test_from_config_file() {
        let mut file = ConfigFile::default();
        file.provider.template = "https://t.example.com/{z}/{x}/{y}".to_string();
        file.provider.timeout = 4;
        file.zoom.min = 2;
        file.zoom.max = 15;

        let config = ServiceConfig::from_config_file(&file).unwrap();
        assert_eq!(config.template().as_str(), "https://t.example.com/{z}/{x}/{y}");
        assert_eq!(config.timeout(), Duration::from_secs(4));
        assert_eq!(config.zoom_range(), ZoomRange::new(2, 15));
    }

    #[test]
    fn test_from_config_file_rejects_bad_template() {
        let mut file = ConfigFile::default();
        file.provider.template = "https://t.example.com/tile.png".to_string();

        assert!(matches!(
            ServiceConfig::from_config_file(&file),
            Err(ServiceError::Provider(_))
        ));
    }
}
