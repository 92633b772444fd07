//! Git worktree data layer for gwt
//!
//! Wraps the `git` command line tool:
//! - [`worktree`] - `git worktree list --porcelain` parsing
//! - [`branch`] - local/remote branch listing with upstream tracking
//! - [`ops`] - worktree creation/removal and target directory naming
//!
//! This crate has no UI dependency. Every call is a complete, synchronous
//! subprocess round trip; callers that need responsiveness run it off-thread.

pub mod branch;
mod command;
pub mod error;
pub mod ops;
pub mod worktree;

pub use branch::{merge_branches, parse_local_branches, parse_remote_branches, Branch};
pub use error::GitError;
pub use ops::{default_worktree_dir, default_worktree_dir_in};
pub use worktree::{parse_worktree_list, Worktree};

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, GitError>;

/// Handle to the git executable, optionally pinned to a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    program: String,
    dir: Option<PathBuf>,
}

impl Default for Git {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            dir: None,
        }
    }
}

impl Git {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different git executable (e.g. an absolute path).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run every command inside `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}
