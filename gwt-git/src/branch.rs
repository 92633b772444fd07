//! Branch listing with upstream tracking

use crate::{Git, Result};
use std::collections::HashSet;

/// A local or remote-tracking branch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    /// Name without any remote prefix
    pub name: String,
    pub is_remote: bool,
    /// Remote name (e.g. `origin`), empty for local branches
    pub remote: String,
    /// Full remote ref (e.g. `origin/feature`), empty for local branches
    pub remote_ref: String,
    pub has_upstream: bool,
    /// Upstream short ref (e.g. `origin/main`), empty when untracked
    pub upstream: String,
}

const LOCAL_FORMAT: &str = "--format=%(refname:short)|%(upstream:short)";
const REMOTE_FORMAT: &str = "--format=%(refname:short)";

/// Parse `name|upstream` lines from the local branch query.
pub fn parse_local_branches(output: &str) -> Vec<Branch> {
    output
        .lines()
        .filter_map(|line| {
            let (name, upstream) = line.split_once('|').unwrap_or((line, ""));
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let upstream = upstream.trim();
            Some(Branch {
                name: name.to_string(),
                has_upstream: !upstream.is_empty(),
                upstream: upstream.to_string(),
                ..Branch::default()
            })
        })
        .collect()
}

/// Parse `<remote>/<name>` lines from the remote branch query.
///
/// Symbolic `<remote>/HEAD` pointers are dropped, as are bare remote names
/// (git abbreviates `refs/remotes/origin/HEAD` to `origin` in some versions).
pub fn parse_remote_branches(output: &str) -> Vec<Branch> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with("/HEAD"))
        .filter_map(|line| {
            let (remote, name) = line.split_once('/')?;
            if remote.is_empty() || name.is_empty() {
                return None;
            }
            Some(Branch {
                name: name.to_string(),
                is_remote: true,
                remote: remote.to_string(),
                remote_ref: line.to_string(),
                ..Branch::default()
            })
        })
        .collect()
}

/// Combine local and remote listings, local first.
///
/// A remote branch whose short name is already listed is suppressed, so each
/// short name is offered once and the local branch wins.
pub fn merge_branches(local: Vec<Branch>, remote: Vec<Branch>) -> Vec<Branch> {
    let mut seen: HashSet<String> = local.iter().map(|b| b.name.clone()).collect();
    let mut merged = local;
    merged.extend(remote.into_iter().filter(|b| seen.insert(b.name.clone())));
    merged
}

impl Git {
    /// List local then remote branches, each most recently committed first.
    ///
    /// Ordering comes from git's `--sort=-committerdate`; nothing is re-sorted here.
    pub fn list_branches_detailed(&self) -> Result<Vec<Branch>> {
        let local = self.run(&[
            "for-each-ref",
            "--sort=-committerdate",
            LOCAL_FORMAT,
            "refs/heads",
        ])?;
        let remote = self.run(&[
            "for-each-ref",
            "--sort=-committerdate",
            REMOTE_FORMAT,
            "refs/remotes",
        ])?;

        Ok(merge_branches(
            parse_local_branches(&local),
            parse_remote_branches(&remote),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(branches: &[Branch]) -> Vec<&str> {
        branches.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_parse_local_with_and_without_upstream() {
        let branches = parse_local_branches("main|origin/main\nwip|\n\nfeature/x|origin/feature/x\n");
        assert_eq!(names(&branches), vec!["main", "wip", "feature/x"]);
        assert!(branches[0].has_upstream);
        assert_eq!(branches[0].upstream, "origin/main");
        assert!(!branches[1].has_upstream);
        assert_eq!(branches[1].upstream, "");
        assert!(branches.iter().all(|b| !b.is_remote));
    }

    #[test]
    fn test_parse_local_without_separator() {
        let branches = parse_local_branches("solo\n");
        assert_eq!(branches.len(), 1);
        assert!(!branches[0].has_upstream);
    }

    #[test]
    fn test_parse_remote_strips_prefix() {
        let branches = parse_remote_branches("origin/feature/login\nupstream/dev\n");
        assert_eq!(names(&branches), vec!["feature/login", "dev"]);
        assert_eq!(branches[0].remote, "origin");
        assert_eq!(branches[0].remote_ref, "origin/feature/login");
        assert_eq!(branches[1].remote, "upstream");
        assert!(branches.iter().all(|b| b.is_remote));
    }

    #[test]
    fn test_parse_remote_drops_head_pointers() {
        let branches = parse_remote_branches("origin/HEAD\norigin\norigin/main\nfork/HEAD\n");
        assert_eq!(names(&branches), vec!["main"]);
    }

    #[test]
    fn test_merge_local_takes_precedence() {
        let local = parse_local_branches("main|origin/main\n");
        let remote = parse_remote_branches("origin/main\norigin/release\n");
        let merged = merge_branches(local, remote);

        assert_eq!(names(&merged), vec!["main", "release"]);
        assert!(!merged[0].is_remote);
        assert!(merged[1].is_remote);
        assert_eq!(merged[1].remote_ref, "origin/release");
    }

    #[test]
    fn test_merge_keeps_first_of_duplicate_remotes() {
        let remote = parse_remote_branches("fork/topic\norigin/topic\n");
        let merged = merge_branches(Vec::new(), remote);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].remote_ref, "fork/topic");
    }

    #[test]
    fn test_merge_preserves_recency_order() {
        let local = parse_local_branches("b|\na|\n");
        let remote = parse_remote_branches("origin/z\norigin/a\norigin/y\n");
        let merged = merge_branches(local, remote);
        assert_eq!(names(&merged), vec!["b", "a", "z", "y"]);
    }
}
