//! INI serialization: `ConfigFile` → commented INI text.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[provider]
; Tile server URL template. {{x}}, {{y}} and {{z}} are replaced per tile.
; The template text also names the cache namespace: changing it starts
; a fresh set of cached tiles.
template = {}
; Per-tile request timeout in seconds. Slow tiles are left blank.
timeout = {}
; User-Agent sent with every tile request (quoted, it may contain ';')
user_agent = "{}"

[cache]
; Directory holding cached tiles, one PNG file per tile.
; Tiles are kept indefinitely; delete the directory to reclaim space.
directory = {}

[zoom]
; Zoom levels the tile server provides. The selected zoom is clamped
; into this range.
min = {}
max = {}
"#,
        config.provider.template,
        config.provider.timeout,
        config.provider.user_agent,
        config.cache.directory.to_string_lossy(),
        config.zoom.min,
        config.zoom.max,
    )
}
