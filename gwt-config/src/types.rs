//! Configuration data structures

use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: Options,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Behavior options
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Options {
    /// Editor used when neither `VISUAL` nor `EDITOR` is set
    #[serde(default)]
    pub editor: Option<String>,

    /// git executable
    #[serde(default = "default_git")]
    pub git: String,
}

/// UI-specific configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Title of the worktree list
    #[serde(default = "default_title")]
    pub title: String,

    /// How long info notices stay in the status line
    #[serde(default = "default_status_timeout_ms")]
    pub status_timeout_ms: u64,

    /// Show the key help line under the list
    #[serde(default = "default_true")]
    pub show_help: bool,
}

/// Log output settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogConfig {
    /// Level used when `GWT_LOG` is unset
    #[serde(default)]
    pub level: Option<String>,

    /// Log file; defaults to `<cache_dir>/gwt/gwt.log`
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

fn default_true() -> bool {
    true
}

fn default_git() -> String {
    "git".to_string()
}

fn default_title() -> String {
    "Git Worktrees".to_string()
}

fn default_status_timeout_ms() -> u64 {
    3000
}

impl Default for Options {
    fn default() -> Self {
        Self {
            editor: None,
            git: default_git(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            status_timeout_ms: default_status_timeout_ms(),
            show_help: default_true(),
        }
    }
}

impl LogConfig {
    pub fn level_or_default(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Configured log file, or the default under the user cache directory.
    pub fn file_or_default(&self) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| dirs::cache_dir().map(|d| d.join("gwt").join("gwt.log")))
    }
}
