//! gwt configuration
//!
//! TOML file at `$GWT_CONFIG` or `<config_dir>/gwt/config.toml`. Every key is
//! optional; a missing file means defaults.
//!
//! - [`types`] - configuration data structures and defaults
//! - [`parser`] - TOML parsing and validation
//! - [`config`] - file location and loading

pub mod config;
pub mod parser;
pub mod types;

pub use types::{Config, LogConfig, Options, UiConfig};

/// Errors that can occur during config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
