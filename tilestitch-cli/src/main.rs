//! tilestitch CLI - Command-line interface
//!
//! Renders a bounding box of web map tiles into one image and inspects the
//! zoom, tile and cache decisions behind a render.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::cache::CacheAction;
use commands::config::ConfigCommands;
use commands::inspect::{TilesArgs, ZoomArgs};
use commands::render::RenderArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(version = tilestitch::VERSION)]
#[command(about = "Stitch web map tiles covering a bounding box into one image", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.tilestitch/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a bounding box into an image and a JSON sidecar
    Render(RenderArgs),

    /// Print the zoom level selected for a bounding box and target size
    Zoom(ZoomArgs),

    /// List the tiles covering a bounding box at a zoom level
    Tiles(TilesArgs),

    /// Inspect the tile cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Render(args) => commands::render::run(args, config),
        Commands::Zoom(args) => commands::inspect::run_zoom(args, config),
        Commands::Tiles(args) => commands::inspect::run_tiles(args, config),
        Commands::Cache { action } => commands::cache::run(action, config),
        Commands::Config { action } => commands::config::run(action, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_with_negative_bbox() {
        let cli = Cli::try_parse_from([
            "tilestitch", "render", "--bbox", "-10", "50", "0", "60", "--width", "800",
            "--height", "600", "-o", "europe.png",
        ])
        .unwrap();

        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.bbox.bbox, vec![-10.0, 50.0, 0.0, 60.0]);
                assert_eq!((args.width, args.height), (800, 600));
                assert_eq!(args.zoom, None);
                assert_eq!(args.output, PathBuf::from("europe.png"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_bbox_needs_four_values() {
        let result = Cli::try_parse_from([
            "tilestitch", "tiles", "--bbox", "-10", "50", "0", "--zoom", "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from([
            "tilestitch", "cache", "stats", "--config", "/etc/tilestitch.ini",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/tilestitch.ini")));
    }
}
