//! Configuration loading
//!
//! Reads `~/.config/calorie-search/config.toml`. A missing file means defaults; a file
//! that fails to parse is reported instead of silently ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

mod types;

pub use types::{
    Config, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS, ProviderConfig, ProviderKind, SearchConfig,
};

use crate::error::AppError;

const CONFIG_DIR: &str = "calorie-search";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from its default location
pub fn load_config() -> Result<Config, AppError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(AppError::Io(e)),
    }
}

pub fn parse_config(content: &str) -> Result<Config, AppError> {
    toml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
}
