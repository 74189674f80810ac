//! INI parsing: `Ini` → `ConfigFile`.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::provider::TileServerTemplate;

/// Highest zoom level accepted in `[zoom]`.
const MAX_SUPPORTED_ZOOM: u8 = 30;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [provider] section
    if let Some(section) = ini.section(Some("provider")) {
        if let Some(v) = section.get("template") {
            let v = v.trim();
            TileServerTemplate::new(v).map_err(|e| ConfigFileError::InvalidValue {
                section: "provider".to_string(),
                key: "template".to_string(),
                value: v.to_string(),
                reason: e.to_string(),
            })?;
            config.provider.template = v.to_string();
        }
        if let Some(v) = section.get("timeout") {
            config.provider.timeout = match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigFileError::InvalidValue {
                        section: "provider".to_string(),
                        key: "timeout".to_string(),
                        value: v.to_string(),
                        reason: "must be a positive integer (seconds)".to_string(),
                    })
                }
            };
        }
        if let Some(v) = section.get("user_agent") {
            let v = v.trim().trim_matches('"');
            if !v.is_empty() {
                config.provider.user_agent = v.to_string();
            }
        }
    }

    // [cache] section
    if let Some(section) = ini.section(Some("cache")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.cache.directory = expand_tilde(v);
            }
        }
    }

    // [zoom] section
    if let Some(section) = ini.section(Some("zoom")) {
        if let Some(v) = section.get("min") {
            config.zoom.min = parse_zoom("min", v)?;
        }
        if let Some(v) = section.get("max") {
            config.zoom.max = parse_zoom("max", v)?;
        }
        if config.zoom.min > config.zoom.max {
            return Err(ConfigFileError::InvalidValue {
                section: "zoom".to_string(),
                key: "min".to_string(),
                value: config.zoom.min.to_string(),
                reason: format!("must not exceed max ({})", config.zoom.max),
            });
        }
    }

    Ok(config)
}

fn parse_zoom(key: &str, value: &str) -> Result<u8, ConfigFileError> {
    match value.trim().parse::<u8>() {
        Ok(z) if z <= MAX_SUPPORTED_ZOOM => Ok(z),
        _ => Err(ConfigFileError::InvalidValue {
            section: "zoom".to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: format!("must be an integer between 0 and {}", MAX_SUPPORTED_ZOOM),
        }),
    }
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
