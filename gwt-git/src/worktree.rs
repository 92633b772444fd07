//! Worktree listing

use crate::{Git, Result};

/// A checked-out working directory of the repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worktree {
    /// Path as reported by git; unique across a listing
    pub path: String,
    /// Full branch ref (`refs/heads/...`), empty for a detached checkout
    pub branch: String,
    /// HEAD commit id
    pub head: String,
    /// The original checkout. Never removable.
    pub is_primary: bool,
}

impl Worktree {
    /// Branch name for display, falling back to the head commit when detached.
    pub fn branch_name(&self) -> &str {
        let branch = if self.branch.is_empty() {
            self.head.as_str()
        } else {
            self.branch.as_str()
        };
        branch
            .strip_prefix("refs/heads/")
            .or_else(|| branch.strip_prefix("heads/"))
            .or_else(|| branch.strip_prefix("refs/"))
            .unwrap_or(branch)
    }

    /// Last path component, used as the worktree's display name.
    pub fn dir_name(&self) -> &str {
        let trimmed = self.path.trim_end_matches(['/', '\\']);
        trimmed
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(trimmed)
    }
}

/// Parse `git worktree list --porcelain` output.
///
/// A `worktree <path>` line opens a block; `branch` and `HEAD` lines fill the
/// open block. Any other attribute is ignored. git lists the primary checkout
/// first, so the first block is primary and no other is.
pub fn parse_worktree_list(output: &str) -> Vec<Worktree> {
    let mut worktrees: Vec<Worktree> = Vec::new();

    for line in output.lines() {
        let (key, value) = match line.split_once(' ') {
            Some((k, v)) => (k, v.trim()),
            None => (line.trim(), ""),
        };

        match key {
            "worktree" => worktrees.push(Worktree {
                path: value.to_string(),
                is_primary: worktrees.is_empty(),
                ..Worktree::default()
            }),
            "branch" => {
                if let Some(wt) = worktrees.last_mut() {
                    wt.branch = value.to_string();
                }
            }
            "HEAD" => {
                if let Some(wt) = worktrees.last_mut() {
                    wt.head = value.to_string();
                }
            }
            _ => {}
        }
    }

    worktrees
}

impl Git {
    /// List all worktrees, primary first.
    pub fn list_worktrees(&self) -> Result<Vec<Worktree>> {
        let output = self.run(&["worktree", "list", "--porcelain"])?;
        Ok(parse_worktree_list(&output))
    }
}
