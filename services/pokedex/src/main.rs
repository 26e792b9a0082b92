//! Pokedex CLI
//!
//! Command-line interface for the pokedex host service.

use std::path::PathBuf;

use clap::Parser;
use pokedex::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Serves the pokedex document shell and client bundle")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the compiled site (overrides config file)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, site_root={:?}, log_level={:?}",
        args.config,
        args.port,
        args.site_root,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(site_root) = args.site_root {
        config.site.site_root = site_root;
    }

    tracing::info!("Starting pokedex service");
    pokedex::run(config).await?;

    Ok(())
}
