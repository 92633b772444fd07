//! Error types for gwt-git

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in git operations
#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {args} failed ({status}): {stderr}")]
    CommandFailed {
        args: String,
        status: String,
        stderr: String,
    },

    #[error("{0} required")]
    MissingArgument(&'static str),

    #[error("failed to create parent directory {path}: {source}")]
    CreateParent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
