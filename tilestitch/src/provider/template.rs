//! Tile server URL templates.
//!
//! A template is a URL with `{x}`, `{y}` and `{z}` placeholders, for example
//! `https://tile.openstreetmap.org/{z}/{x}/{y}.png`. The template text itself
//! (not any URL rendered from it) identifies the tile source, and is what the
//! cache namespaces tiles by.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::types::ProviderError;
use crate::coord::TileIndex;

/// OpenStreetMap's standard tile layer.
pub const DEFAULT_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Placeholders every template must contain.
const REQUIRED_PLACEHOLDERS: [&str; 3] = ["x", "y", "z"];

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // {name} where name is a plain identifier
    PATTERN.get_or_init(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap())
}

/// A validated tile server URL template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileServerTemplate {
    raw: String,
}

impl TileServerTemplate {
    /// Parses and validates a template.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidTemplate` if one of `{x}`, `{y}`, `{z}`
    /// is missing or if the template uses any other placeholder.
    pub fn new(raw: impl Into<String>) -> Result<Self, ProviderError> {
        let raw = raw.into();

        let mut seen = Vec::new();
        for caps in placeholder_pattern().captures_iter(&raw) {
            let name = &caps[1];
            if !REQUIRED_PLACEHOLDERS.contains(&name) {
                return Err(ProviderError::InvalidTemplate(format!(
                    "unknown placeholder {{{}}} in '{}'",
                    name, raw
                )));
            }
            seen.push(name.to_string());
        }

        for name in REQUIRED_PLACEHOLDERS {
            if !seen.iter().any(|s| s == name) {
                return Err(ProviderError::InvalidTemplate(format!(
                    "missing {{{}}} in '{}'",
                    name, raw
                )));
            }
        }

        Ok(Self { raw })
    }

    /// The template text exactly as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Renders the request URL for one tile.
    pub fn url_for(&self, tile: &TileIndex) -> String {
        placeholder_pattern()
            .replace_all(&self.raw, |caps: &regex::Captures| match &caps[1] {
                "x" => tile.x.to_string(),
                "y" => tile.y.to_string(),
                _ => tile.zoom.to_string(),
            })
            .into_owned()
    }
}

impl Default for TileServerTemplate {
    fn default() -> Self {
        Self {
            raw: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl fmt::Display for TileServerTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for TileServerTemplate {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
