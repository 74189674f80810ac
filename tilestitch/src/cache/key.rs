//! Cache keys for stored tiles.
//!
//! A key combines a digest of the tile server template with the tile index,
//! so tiles from different servers never share an entry even when their
//! indices match.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::coord::TileIndex;
use crate::provider::TileServerTemplate;

/// Prefix shared by every cached tile file name.
pub const CACHE_FILE_PREFIX: &str = "tile_cache_";

/// Extension of cached tile files.
pub const CACHE_FILE_EXTENSION: &str = "png";

/// Identifies one stored tile: `(hash(template), x, y, zoom)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    template_hash: String,
    tile: TileIndex,
}

impl CacheKey {
    /// Builds the key for `tile` fetched through `template`.
    pub fn new(template: &TileServerTemplate, tile: &TileIndex) -> Self {
        Self {
            template_hash: template_hash(template),
            tile: *tile,
        }
    }

    /// Lowercase hex SHA-256 of the template text.
    pub fn template_hash(&self) -> &str {
        &self.template_hash
    }

    pub fn tile(&self) -> &TileIndex {
        &self.tile
    }

    /// Flat file name for this key, e.g.
    /// `tile_cache_<hash>_x31_y20_z6.png`.
    pub fn file_name(&self) -> String {
        format!(
            "{}{}_x{}_y{}_z{}.{}",
            CACHE_FILE_PREFIX,
            self.template_hash,
            self.tile.x,
            self.tile.y,
            self.tile.zoom,
            CACHE_FILE_EXTENSION
        )
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Hashes a template's text into the namespace part of a cache key.
pub fn template_hash(template: &TileServerTemplate) -> String {
    let mut hasher = Sha256::new();
    hasher.update(template.as_str().as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(raw: &str) -> TileServerTemplate {
        TileServerTemplate::new(raw).unwrap()
    }

    #[test]
    fn test_file_name_layout() {
        let key = CacheKey::new(
            &template("https://tile.openstreetmap.org/{z}/{x}/{y}.png"),
            &TileIndex::new(31, 20, 6),
        );
        let name = key.file_name();

        assert!(name.starts_with("tile_cache_"));
        assert!(name.ends_with("_x31_y20_z6.png"));
        assert_eq!(key.template_hash().len(), 64);
        assert!(name.contains(key.template_hash()));
    }

    #[test]
    fn test_key_is_deterministic() {
        let t = template("https://a.example/{z}/{x}/{y}.png");
        let tile = TileIndex::new(1, 2, 3);
        assert_eq!(CacheKey::new(&t, &tile), CacheKey::new(&t, &tile));
    }

    #[test]
    fn test_known_digest() {
        // sha256("{x}{y}{z}")
        let key = CacheKey::new(&template("{x}{y}{z}"), &TileIndex::new(0, 0, 0));
        let mut hasher = Sha256::new();
        hasher.update(b"{x}{y}{z}");
        assert_eq!(key.template_hash(), format!("{:x}", hasher.finalize()));
    }

    #[test]
    fn test_negative_indices_render() {
        let key = CacheKey::new(&template("http://t/{z}/{x}/{y}"), &TileIndex::new(-1, 4, 2));
        assert!(key.file_name().ends_with("_x-1_y4_z2.png"));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_distinct_templates_never_collide(
                a in "[a-z0-9./:-]{0,24}",
                b in "[a-z0-9./:-]{0,24}",
                x in 0i64..1024,
                y in 0i64..1024,
                zoom in 0u8..=18
            ) {
                let ta = template(&format!("https://{}/{{z}}/{{x}}/{{y}}", a));
                let tb = template(&format!("https://{}/{{z}}/{{x}}/{{y}}", b));
                prop_assume!(ta != tb);

                let tile = TileIndex::new(x, y, zoom);
                let ka = CacheKey::new(&ta, &tile);
                let kb = CacheKey::new(&tb, &tile);

                prop_assert_ne!(&ka, &kb);
                prop_assert_ne!(ka.file_name(), kb.file_name());
            }
        }
    }
}
