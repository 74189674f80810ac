//! `zoom` and `tiles` commands: show what a render would request.

use std::path::Path;

use clap::Args;
use tilestitch::coord::{validate_bbox, BoundingBox};
use tilestitch::provider::TileServerTemplate;
use tilestitch::service::{ServiceError, DEFAULT_MAX_TILES};
use tilestitch::tile::{tiles_for_bbox, TileRange};
use tilestitch::zoom::{zoom_for_bbox, ZoomRange};

use super::common::{load_config, BboxArg};
use crate::error::CliError;

/// Arguments for `tilestitch zoom`.
#[derive(Debug, Args)]
pub struct ZoomArgs {
    #[command(flatten)]
    pub bbox: BboxArg,

    /// Target width in pixels
    #[arg(long)]
    pub width: u32,

    /// Target height in pixels
    #[arg(long)]
    pub height: u32,
}

/// Arguments for `tilestitch tiles`.
#[derive(Debug, Args)]
pub struct TilesArgs {
    #[command(flatten)]
    pub bbox: BboxArg,

    /// Zoom level
    #[arg(long)]
    pub zoom: u8,

    /// Print request URLs instead of z/x/y indices
    #[arg(long)]
    pub urls: bool,

    /// Tile server URL template used with --urls
    #[arg(long)]
    pub template: Option<String>,

    /// Refuse to list more tiles than this
    #[arg(long, default_value_t = DEFAULT_MAX_TILES)]
    pub max_tiles: u64,
}

/// Print the zoom level a render would use.
pub fn run_zoom(args: ZoomArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let file = load_config(config_path)?;
    let bbox = args.bbox.to_bbox()?;

    let raw = zoom_for_bbox(&bbox, args.width, args.height);
    let range = ZoomRange::new(file.zoom.min, file.zoom.max);
    let zoom = range.clamp(raw);

    if i32::from(zoom) == raw {
        println!("{}", zoom);
    } else {
        println!("{} (selected {}, clamped to {}..={})", zoom, raw, range.min, range.max);
    }
    Ok(())
}

/// Print the tiles covering a bounding box.
pub fn run_tiles(args: TilesArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let bbox = args.bbox.to_bbox()?;
    let range = plan_tiles(&bbox, args.zoom, args.max_tiles)?;

    let template = if args.urls {
        let raw = match args.template {
            Some(t) => t,
            None => load_config(config_path)?.provider.template,
        };
        Some(TileServerTemplate::new(raw).map_err(|e| CliError::Config(e.to_string()))?)
    } else {
        None
    };

    for tile in range.tiles() {
        match &template {
            Some(template) => println!("{}", template.url_for(&tile)),
            None => println!("{}", tile),
        }
    }
    eprintln!("{} tiles ({})", range.len(), range);
    Ok(())
}

/// Tile rectangle for `bbox` at `zoom`, rejected if it holds more than
/// `max_tiles` tiles.
fn plan_tiles(bbox: &BoundingBox, zoom: u8, max_tiles: u64) -> Result<TileRange, CliError> {
    validate_bbox(bbox).map_err(|e| CliError::Plan(e.into()))?;

    let range = tiles_for_bbox(bbox, zoom);
    if range.len() > max_tiles {
        return Err(CliError::Plan(ServiceError::TooManyTiles {
            count: range.len(),
            limit: max_tiles,
        }));
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_tiles_within_limit() {
        let bbox = BoundingBox::new(-10.0, 50.0, 0.0, 60.0);
        let range = plan_tiles(&bbox, 6, DEFAULT_MAX_TILES).unwrap();
        assert_eq!(range, TileRange::new(30, 18, 31, 21, 6));
    }

    #[test]
    fn test_plan_tiles_rejects_whole_world_at_high_zoom() {
        let world = BoundingBox::new(-180.0, -85.0, 180.0, 85.0);
        let err = plan_tiles(&world, 30, DEFAULT_MAX_TILES).unwrap_err();
        assert!(matches!(
            err,
            CliError::Plan(ServiceError::TooManyTiles {
                limit: DEFAULT_MAX_TILES,
                ..
            })
        ));
    }

    #[test]
    fn test_plan_tiles_rejects_extreme_longitudes() {
        let bbox = BoundingBox::new(-1e300, 0.0, 1e300, 10.0);
        let err = plan_tiles(&bbox, 0, DEFAULT_MAX_TILES).unwrap_err();
        assert!(matches!(
            err,
            CliError::Plan(ServiceError::TooManyTiles { count: u64::MAX, .. })
        ));
    }

    #[test]
    fn test_plan_tiles_rejects_polar_box() {
        let bbox = BoundingBox::new(-10.0, 80.0, 10.0, 90.0);
        assert!(matches!(
            plan_tiles(&bbox, 3, DEFAULT_MAX_TILES),
            Err(CliError::Plan(ServiceError::InvalidCoordinates(_)))
        ));
    }
}
