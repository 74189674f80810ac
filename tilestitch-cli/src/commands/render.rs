//! `render` command: bbox → stitched image plus JSON sidecar.

use std::path::{Path, PathBuf};

use clap::Args;
use image::{DynamicImage, ImageFormat};
use tilestitch::logging::{default_log_dir, init_logging, LoggingGuard, DEFAULT_LOG_FILE};
use tilestitch::mosaic::Mosaic;
use tilestitch::service::MosaicService;
use tracing::info;

use super::common::{load_config, service_config, BboxArg};
use crate::error::CliError;

/// Arguments for `tilestitch render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub bbox: BboxArg,

    /// Target width in pixels, used to select the zoom level
    #[arg(long, default_value = "1024")]
    pub width: u32,

    /// Target height in pixels, used to select the zoom level
    #[arg(long, default_value = "1024")]
    pub height: u32,

    /// Use this zoom level instead of selecting one from the target size
    #[arg(long)]
    pub zoom: Option<u8>,

    /// Tile server URL template with {x}, {y} and {z} placeholders
    #[arg(long)]
    pub template: Option<String>,

    /// Tile cache directory
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Output image path (format from extension: .png, .jpg, .tif, ...)
    #[arg(long, short)]
    pub output: PathBuf,

    /// Do not write the JSON sidecar next to the image
    #[arg(long)]
    pub no_sidecar: bool,
}

/// Run the render command.
pub fn run(args: RenderArgs, config_path: Option<&Path>) -> Result<(), CliError> {
    let _guard = init_cli_logging()?;

    let file = load_config(config_path)?;
    let config = service_config(&file, args.template.as_deref(), args.cache_dir.clone())?;
    let bbox = args.bbox.to_bbox()?;

    info!(cache = %config.cache_directory().display(), template = %config.template(), "Starting render");

    let service = MosaicService::new(config).map_err(CliError::ServiceCreation)?;
    let mosaic = match args.zoom {
        Some(zoom) => service.render_at_zoom(&bbox, zoom)?,
        None => service.render(&bbox, args.width, args.height)?,
    };

    save_image(&mosaic, &args.output)?;
    if !args.no_sidecar {
        save_sidecar(&mosaic, &sidecar_path(&args.output))?;
    }

    let (xmin, ymax, xmax, ymin) = mosaic.extent();
    println!("Wrote {}", args.output.display());
    println!(
        "  Zoom:   {} ({} tiles, {} missing)",
        mosaic.zoom(),
        mosaic.range.len(),
        mosaic.tiles_missing
    );
    println!("  Size:   {}x{}", mosaic.image.width(), mosaic.image.height());
    println!("  Extent: {:.6} {:.6} {:.6} {:.6}", xmin, ymax, xmax, ymin);
    println!("  Cache:  {}", service.cache_stats());

    Ok(())
}

fn init_cli_logging() -> Result<LoggingGuard, CliError> {
    init_logging(&default_log_dir(), DEFAULT_LOG_FILE)
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}

/// `map.png` → `map.png.json`
pub fn sidecar_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".json");
    PathBuf::from(name)
}

fn save_image(mosaic: &Mosaic, path: &Path) -> Result<(), CliError> {
    let write_error = |e: image::ImageError| CliError::FileWrite {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    match ImageFormat::from_path(path) {
        // JPEG has no alpha channel
        Ok(ImageFormat::Jpeg) => DynamicImage::ImageRgba8(mosaic.image.clone())
            .to_rgb8()
            .save(path)
            .map_err(write_error),
        _ => mosaic.image.save(path).map_err(write_error),
    }
}

fn save_sidecar(mosaic: &Mosaic, path: &Path) -> Result<(), CliError> {
    let write_error = |error: String| CliError::FileWrite {
        path: path.to_path_buf(),
        error,
    };
    let json =
        serde_json::to_string_pretty(&mosaic.metadata()).map_err(|e| write_error(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| write_error(e.to_string()))
}
