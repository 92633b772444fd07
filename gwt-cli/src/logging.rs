//! File logging
//!
//! The TUI owns the terminal, so log output goes to a file.

use gwt_config::LogConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, overriding `log.level`
pub const LOG_ENV: &str = "GWT_LOG";

fn default_filter(level: &str) -> String {
    ["gwt", "gwt_cli", "gwt_git", "gwt_config"]
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. Failing to open the log file disables logging.
pub fn init(config: &LogConfig) {
    let Some(path) = config.file_or_default() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config.level_or_default())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_all_crates() {
        assert_eq!(
            default_filter("debug"),
            "gwt=debug,gwt_cli=debug,gwt_git=debug,gwt_config=debug"
        );
    }
}
