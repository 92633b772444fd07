//! TOML configuration parsing and validation

use crate::types::{Config, LOG_LEVELS};
use crate::{ConfigError, Result};
use std::path::Path;

/// Parse config from TOML string
pub fn parse_toml(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(ConfigError::TomlParse)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load config from a TOML file
pub fn load_from_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content)
}

/// Validate configuration for consistency
fn validate_config(config: &Config) -> Result<()> {
    if config.options.git.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "options.git must not be empty".to_string(),
        ));
    }

    if let Some(editor) = &config.options.editor {
        if editor.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "options.editor must not be empty when set".to_string(),
            ));
        }
    }

    if !(100..=60_000).contains(&config.ui.status_timeout_ms) {
        return Err(ConfigError::ValidationError(format!(
            "ui.status_timeout_ms must be between 100 and 60000, got {}",
            config.ui.status_timeout_ms
        )));
    }

    if let Some(level) = &config.log.level {
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                level
            )));
        }
    }

    Ok(())
}
