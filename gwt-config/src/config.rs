//! Configuration loading

use crate::types::Config;
use crate::{parser, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "GWT_CONFIG";

/// Get the default gwt config file path
pub fn config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("gwt").join("config.toml"))
}

/// Load configuration from `path`, or return defaults if it does not exist
pub fn load_or_default_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    parser::load_from_file(path)
}

/// Load configuration from the default location, or return defaults if not found
pub fn load_or_default() -> Result<Config> {
    match config_file() {
        Some(path) => load_or_default_from(&path),
        None => Ok(Config::default()),
    }
}

impl Config {
    /// Load or return defaults
    pub fn load_or_default() -> Result<Self> {
        load_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nstatus_timeout_ms = 1\n").unwrap();
        assert!(load_or_default_from(&path).is_err());
    }
}
