//! TUI state types and enums
//!
//! Entries, modes, notices, and the events/actions exchanged between the
//! state machine and the runtime. Nothing here performs I/O.

use super::widgets::TextInput;
use crossterm::event::KeyEvent;
use gwt_git::{Branch, GitError, Worktree};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const ADD_WORKTREE_TITLE: &str = "[+] Add new worktree";
pub const ADD_WORKTREE_DESCRIPTION: &str = "Create from existing or new branch";
pub const CREATE_BRANCH_TITLE: &str = "[+] Create new branch";
pub const CREATE_BRANCH_DESCRIPTION: &str = "Type a new branch name";
pub const CONFIRM_DELETE_DESCRIPTION: &str = "Yes: Enter    No: Esc";
pub const REMOVING_DESCRIPTION: &str = "Removing...";

/// Affordance rows that lead into another mode rather than naming domain data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticAction {
    AddWorktree,
    CreateBranch,
}

/// What a list row stands for
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Worktree(Worktree),
    Branch(Branch),
    Action(SyntheticAction),
}

/// A list row: its kind plus the two display lines
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub kind: EntryKind,
    pub title: String,
    pub description: String,
}

impl ListEntry {
    pub fn add_worktree() -> Self {
        Self {
            kind: EntryKind::Action(SyntheticAction::AddWorktree),
            title: ADD_WORKTREE_TITLE.to_string(),
            description: ADD_WORKTREE_DESCRIPTION.to_string(),
        }
    }

    pub fn create_branch() -> Self {
        Self {
            kind: EntryKind::Action(SyntheticAction::CreateBranch),
            title: CREATE_BRANCH_TITLE.to_string(),
            description: CREATE_BRANCH_DESCRIPTION.to_string(),
        }
    }

    pub fn worktree(worktree: Worktree) -> Self {
        let branch = worktree.branch_name();
        let description = if branch.is_empty() {
            format!("Path: {}", worktree.path)
        } else {
            format!("Branch: {}  Path: {}", branch, worktree.path)
        };
        Self {
            title: worktree.dir_name().to_string(),
            description,
            kind: EntryKind::Worktree(worktree),
        }
    }

    pub fn branch(branch: Branch) -> Self {
        let description = if branch.is_remote {
            format!("Remote: {}", branch.remote_ref)
        } else if branch.has_upstream {
            format!("Tracking: {}", branch.upstream)
        } else {
            "No remote".to_string()
        };
        Self {
            title: branch.name.clone(),
            description,
            kind: EntryKind::Branch(branch),
        }
    }

    /// This entry with its text replaced by the delete prompt
    pub fn confirmation_overlay(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            title: format!("Are you sure you want to delete: {}", self.title),
            description: CONFIRM_DELETE_DESCRIPTION.to_string(),
        }
    }

    pub fn as_worktree(&self) -> Option<&Worktree> {
        match &self.kind {
            EntryKind::Worktree(wt) => Some(wt),
            _ => None,
        }
    }
}

/// Active UI mode
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    #[default]
    Listing,
    /// Delete prompt overlaid on the worktree row at `index`
    ConfirmingDelete { index: usize, snapshot: ListEntry },
    PickingBranch,
    /// Typing a new branch name, mirrored into the synthetic branch row
    EditingNewBranchName { input: TextInput },
}

impl Mode {
    /// True while the branch list is on screen
    pub fn shows_branches(&self) -> bool {
        matches!(self, Mode::PickingBranch | Mode::EditingNewBranchName { .. })
    }
}

/// A create or remove that has been dispatched but not completed
#[derive(Debug, Clone, PartialEq)]
pub enum InFlight {
    Creating { name: String },
    Removing {
        index: usize,
        snapshot: ListEntry,
        path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Status line message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub at: Instant,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
            at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
            at: Instant::now(),
        }
    }

    /// Info notices expire after `timeout`; errors stay until replaced.
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        self.kind == NoticeKind::Info && now.saturating_duration_since(self.at) >= timeout
    }
}

/// Everything the state machine reacts to, in arrival order
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    WorktreesLoaded {
        generation: u64,
        result: Result<Vec<Worktree>, GitError>,
    },
    BranchesLoaded {
        generation: u64,
        result: Result<Vec<Branch>, GitError>,
    },
    WorktreeCreated {
        target: PathBuf,
        result: Result<(), GitError>,
    },
    WorktreeRemoved {
        path: String,
        result: Result<(), GitError>,
    },
    /// The editor could not be resolved or started
    EditorFailed(String),
    /// The editor ran; the error carries its failure status
    EditorExited(Result<(), String>),
}

/// Work the runtime performs on the state machine's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncAction {
    LoadWorktrees {
        generation: u64,
    },
    LoadBranches {
        generation: u64,
    },
    CreateWorktree {
        branch: String,
        target: PathBuf,
        create_branch: bool,
    },
    CreateWorktreeFromRef {
        branch: String,
        target: PathBuf,
        from_ref: String,
    },
    RemoveWorktree {
        path: String,
        force: bool,
    },
    OpenEditor {
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wt(path: &str, branch: &str) -> Worktree {
        Worktree {
            path: path.to_string(),
            branch: branch.to_string(),
            head: "abc123".to_string(),
            is_primary: false,
        }
    }

    #[test]
    fn test_worktree_entry_text() {
        let entry = ListEntry::worktree(wt("/src/repo-b1", "refs/heads/b1"));
        assert_eq!(entry.title, "repo-b1");
        assert_eq!(entry.description, "Branch: b1  Path: /src/repo-b1");
    }

    #[test]
    fn test_detached_worktree_shows_head() {
        let entry = ListEntry::worktree(wt("/src/repo-x", ""));
        assert_eq!(entry.description, "Branch: abc123  Path: /src/repo-x");
    }

    #[test]
    fn test_branch_entry_text() {
        let local = ListEntry::branch(Branch {
            name: "main".into(),
            has_upstream: true,
            upstream: "origin/main".into(),
            ..Branch::default()
        });
        assert_eq!(local.description, "Tracking: origin/main");

        let untracked = ListEntry::branch(Branch {
            name: "wip".into(),
            ..Branch::default()
        });
        assert_eq!(untracked.description, "No remote");

        let remote = ListEntry::branch(Branch {
            name: "release".into(),
            is_remote: true,
            remote: "origin".into(),
            remote_ref: "origin/release".into(),
            ..Branch::default()
        });
        assert_eq!(remote.title, "release");
        assert_eq!(remote.description, "Remote: origin/release");
    }

    #[test]
    fn test_confirmation_overlay_keeps_kind() {
        let entry = ListEntry::worktree(wt("/r-b1", "refs/heads/b1"));
        let overlay = entry.confirmation_overlay();
        assert_eq!(overlay.title, "Are you sure you want to delete: r-b1");
        assert_eq!(overlay.description, CONFIRM_DELETE_DESCRIPTION);
        assert_eq!(overlay.as_worktree(), entry.as_worktree());
    }

    #[test]
    fn test_notice_expiry() {
        let timeout = Duration::from_millis(100);
        let info = Notice::info("hi");
        let error = Notice::error("boom");
        let later = info.at + Duration::from_secs(1);
        assert!(!info.is_expired(info.at, timeout));
        assert!(info.is_expired(later, timeout));
        assert!(!error.is_expired(error.at + Duration::from_secs(60), timeout));
    }
}
