//! Entry point, command line and window configuration

mod app;
mod config;
mod flags;
mod format;
mod logging;
mod model;
mod providers;
mod search;
mod styles;
mod system;
mod update;
mod view;

use std::path::PathBuf;

use clap::Parser;
use iced::Size;
use tracing::{error, info, warn};

use crate::app::Startup;
use crate::config::Config;
use crate::logging::LogLevel;
use crate::providers::Services;

/// Look up a country's facts, exchange rate and flag.
#[derive(Debug, Parser)]
#[command(name = "country-explorer", version, about)]
struct Cli {
    /// Log verbosity (RUST_LOG takes precedence)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Start without background music
    #[arg(long)]
    no_music: bool,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Ui(#[from] iced::Error),
}

fn main() -> Result<(), StartupError> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(config::default_path);
    let loaded = config::load(config_path.as_deref());

    // The log level may come from the config file, so logging starts after loading it.
    let file_level = loaded.as_ref().map(|c| c.log_level).unwrap_or_default();
    let _log_guard = logging::init(cli.log_level.unwrap_or(file_level));

    let config = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Using default configuration");
        Config::default()
    });
    info!(
        country_api = %config.country_api_url,
        rates_api = %config.rates_api_url,
        base = %config.base_currency,
        "Country Explorer starting"
    );

    let services = Services::new(&config).map_err(|e| {
        error!(error = %e, "HTTP client initialisation failed");
        e
    })?;

    let startup = Startup {
        config,
        services,
        play_music: !cli.no_music,
    };

    iced::application(move || app::new(&startup), app::update, app::view)
        .title(app::title)
        .window_size(Size::new(600.0, 700.0))
        .resizable(false)
        .run()?;

    Ok(())
}
