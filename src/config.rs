//! Optional JSON settings file.
//!
//! Lives at `<config_dir>/country-explorer/config.json`. Every key is
//! optional; a missing file means the built-in defaults, which are the
//! fixed endpoints and timeouts the explorer has always used.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::logging::LogLevel;

const APP_DIR: &str = "country-explorer";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub country_api_url: String,
    pub rates_api_url: String,
    pub base_currency: String,
    pub lookup_timeout_secs: u64,
    pub rates_timeout_secs: u64,
    pub flag_timeout_secs: u64,
    pub music_path: PathBuf,
    pub music_volume: f32,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            country_api_url: "https://restcountries.com".into(),
            rates_api_url: "https://api.exchangerate.host".into(),
            base_currency: "USD".into(),
            lookup_timeout_secs: 30,
            rates_timeout_secs: 10,
            flag_timeout_secs: 10,
            music_path: PathBuf::from("game-music.mp3"),
            music_volume: 0.5,
            log_level: LogLevel::default(),
        }
    }
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load settings from `path`. A missing file (or no path at all) yields defaults.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        debug!("No config directory on this platform, using defaults");
        return Ok(Config::default());
    };

    match fs::read_to_string(path) {
        Ok(content) => {
            let config = serde_json::from_str(&content)?;
            debug!(path = %path.display(), "Loaded config file");
            Ok(config)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}
