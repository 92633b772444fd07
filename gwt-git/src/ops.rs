//! Worktree creation and removal

use crate::error::GitError;
use crate::{Git, Result};
use std::path::{Path, PathBuf};
use tracing::info;

impl Git {
    /// Create a worktree at `target_dir` for `branch`.
    ///
    /// With `create_branch`, a new branch is created from the current HEAD;
    /// otherwise `branch` must already exist locally.
    pub fn create_worktree(&self, branch: &str, target_dir: &Path, create_branch: bool) -> Result<()> {
        if branch.is_empty() {
            return Err(GitError::MissingArgument("branch"));
        }
        let target = path_arg(target_dir)?;
        ensure_parent(target_dir)?;

        if create_branch {
            self.run(&["worktree", "add", "-b", branch, &target])?;
        } else {
            self.run(&["worktree", "add", &target, branch])?;
        }
        info!(branch, target = %target, create_branch, "created worktree");
        Ok(())
    }

    /// Create branch `branch` starting at `from_ref` and a worktree for it.
    pub fn create_worktree_from_ref(&self, branch: &str, target_dir: &Path, from_ref: &str) -> Result<()> {
        if branch.is_empty() {
            return Err(GitError::MissingArgument("branch"));
        }
        if from_ref.is_empty() {
            return Err(GitError::MissingArgument("source ref"));
        }
        let target = path_arg(target_dir)?;
        ensure_parent(target_dir)?;

        self.run(&["worktree", "add", "-b", branch, &target, from_ref])?;
        info!(branch, target = %target, from_ref, "created worktree from ref");
        Ok(())
    }

    /// Remove the worktree at `path`.
    ///
    /// `force` skips git's uncommitted-changes check. Callers must never pass
    /// the primary worktree.
    pub fn remove_worktree(&self, path: &str, force: bool) -> Result<()> {
        if path.is_empty() {
            return Err(GitError::MissingArgument("path"));
        }
        let mut args = vec!["worktree", "remove"];
        if force {
            args.push("--force");
        }
        args.push(path);

        self.run(&args)?;
        info!(path, force, "removed worktree");
        Ok(())
    }
}

fn path_arg(target_dir: &Path) -> Result<String> {
    let target = target_dir.to_string_lossy();
    if target.is_empty() {
        return Err(GitError::MissingArgument("target directory"));
    }
    Ok(target.into_owned())
}

fn ensure_parent(target_dir: &Path) -> Result<()> {
    match target_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| GitError::CreateParent {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Sibling directory for a new worktree: `<parent>/<repo-dir>-<branch>`.
pub fn default_worktree_dir(branch: &str) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => default_worktree_dir_in(&cwd, branch),
        Err(_) => Path::new(".worktrees").join(branch),
    }
}

/// [`default_worktree_dir`] computed from an explicit working directory.
pub fn default_worktree_dir_in(cwd: &Path, branch: &str) -> PathBuf {
    let base = cwd
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = format!("{}-{}", base, branch);
    match cwd.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dir_is_sibling() {
        let dir = default_worktree_dir_in(Path::new("/home/me/repo"), "feature-x");
        assert_eq!(dir, PathBuf::from("/home/me/repo-feature-x"));
    }

    #[test]
    fn test_default_dir_keeps_slashes() {
        let dir = default_worktree_dir_in(Path::new("/src/app"), "feat/login");
        assert_eq!(dir, PathBuf::from("/src/app-feat/login"));
    }

    #[test]
    fn test_default_dir_uses_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(default_worktree_dir("b1"), default_worktree_dir_in(&cwd, "b1"));
    }

    #[test]
    fn test_create_requires_branch() {
        let err = Git::new()
            .create_worktree("", Path::new("/tmp/x"), true)
            .unwrap_err();
        assert!(matches!(err, GitError::MissingArgument("branch")));
    }

    #[test]
    fn test_create_requires_target() {
        let err = Git::new()
            .create_worktree("b", Path::new(""), false)
            .unwrap_err();
        assert!(matches!(err, GitError::MissingArgument("target directory")));
    }

    #[test]
    fn test_create_from_ref_requires_ref() {
        let err = Git::new()
            .create_worktree_from_ref("b", Path::new("/tmp/x"), "")
            .unwrap_err();
        assert!(matches!(err, GitError::MissingArgument("source ref")));
    }

    #[test]
    fn test_remove_requires_path() {
        let err = Git::new().remove_worktree("", true).unwrap_err();
        assert!(matches!(err, GitError::MissingArgument("path")));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = Git::new()
            .with_program("gwt-definitely-not-a-real-binary")
            .list_worktrees()
            .unwrap_err();
        assert!(matches!(err, GitError::Spawn { .. }));
    }
}
