mod platform;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gallery_logging::gallery_warn;
use log::LevelFilter;

use platform::config::{GalleryConfig, DEFAULT_CONFIG_FILE};
use platform::{Location, DEFAULT_LOCATION};

/// Browse a remote content gallery from the terminal.
#[derive(Debug, Parser)]
#[command(name = "gallery", version)]
struct Cli {
    /// Configuration file (RON).
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Shared link whose query string seeds search and filters.
    #[arg(long, default_value = DEFAULT_LOCATION)]
    url: String,

    /// Override the content endpoint from the config file.
    #[arg(long)]
    endpoint: Option<String>,

    /// Override the page size from the config file.
    #[arg(long)]
    page_size: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, found) = GalleryConfig::load_or_default(&cli.config)?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    platform::logging::initialize(config.log, cli.log_level);
    if !found {
        gallery_warn!("No config at {:?}; using defaults", cli.config);
    }

    let location =
        Location::parse(&cli.url).with_context(|| format!("invalid --url {:?}", cli.url))?;
    platform::run_app(&config, location)
}
