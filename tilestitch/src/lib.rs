//! tilestitch - Stitch slippy-map tiles into a single image
//!
//! Turns a geographic bounding box into one raster mosaic: pick the zoom
//! level that fills a target pixel size, enumerate the covering tiles, fetch
//! each one through a persistent cache, paste them onto one canvas, and
//! report the area the canvas actually covers.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```no_run
//! use tilestitch::coord::BoundingBox;
//! use tilestitch::service::{MosaicService, ServiceConfig};
//!
//! let service = MosaicService::new(ServiceConfig::default())?;
//! let mosaic = service.render(&BoundingBox::new(-10.0, 50.0, 0.0, 60.0), 800, 600)?;
//!
//! // (xmin, ymax, xmax, ymin)
//! let extent = mosaic.extent();
//! # Ok::<(), tilestitch::service::ServiceError>(())
//! ```
//!
//! The building blocks are usable on their own:
//!
//! - [`coord`]: Web Mercator and tile-pyramid math
//! - [`zoom`]: zoom selection for a target pixel size
//! - [`tile`]: tile rectangles covering a bounding box
//! - [`provider`]: tile server templates and the HTTP client
//! - [`cache`]: tile stores and the cache-backed fetch
//! - [`mosaic`]: stitching tiles into one image

pub mod cache;
pub mod config;
pub mod coord;
pub mod logging;
pub mod mosaic;
pub mod provider;
pub mod service;
pub mod tile;
pub mod zoom;

/// Version of the tilestitch library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
