//! Error types for gwt-cli

use thiserror::Error;

/// Errors that can occur in TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    #[error("terminal initialization failed: {0}")]
    TerminalInit(#[source] std::io::Error),

    #[error("terminal restore failed: {0}")]
    TerminalRestore(#[source] std::io::Error),

    #[error("render failed: {0}")]
    Render(#[source] std::io::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Errors resolving or launching the external editor
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("$VISUAL and $EDITOR are not set")]
    NotConfigured,

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] gwt_config::ConfigError),

    #[error(transparent)]
    Git(#[from] gwt_git::GitError),

    #[error(transparent)]
    Tui(#[from] TuiError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
