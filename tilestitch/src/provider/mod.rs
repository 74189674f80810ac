//! Tile server access
//!
//! This module provides the tile server template that names a remote tile
//! source, and the HTTP client abstraction used to fetch individual tiles.
//!
//! ```no_run
//! use tilestitch::coord::TileIndex;
//! use tilestitch::provider::{HttpClient, ReqwestClient, TileServerTemplate};
//!
//! let template = TileServerTemplate::new("https://tile.openstreetmap.org/{z}/{x}/{y}.png")?;
//! let client = ReqwestClient::new()?;
//! let bytes = client.get(&template.url_for(&TileIndex::new(0, 0, 0)))?;
//! # Ok::<(), tilestitch::provider::ProviderError>(())
//! ```

mod http;
mod template;
mod types;

pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use template::{TileServerTemplate, DEFAULT_TEMPLATE};
pub use types::ProviderError;

#[cfg(test)]
pub use http::tests::MockHttpClient;
