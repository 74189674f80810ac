//! High-level service facade.
//!
//! Wraps the full pipeline behind one type:
//!
//! ```no_run
//! use tilestitch::coord::BoundingBox;
//! use tilestitch::service::{MosaicService, ServiceConfig};
//!
//! let service = MosaicService::new(ServiceConfig::default())?;
//! let mosaic = service.render(&BoundingBox::new(-10.0, 50.0, 0.0, 60.0), 800, 600)?;
//! mosaic.image.save("europe.png").ok();
//! println!("zoom {} covering {}", mosaic.zoom(), mosaic.bbox);
//! # Ok::<(), tilestitch::service::ServiceError>(())
//! ```

mod config;
mod error;
mod facade;

pub use config::{ServiceConfig, ServiceConfigBuilder, DEFAULT_MAX_TILES};
pub use error::ServiceError;
pub use facade::MosaicService;
