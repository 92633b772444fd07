//! Completion events: results of git invocations and editor launches

use super::App;
use crate::tui::state::{AsyncAction, InFlight, Mode};
use crate::tui::widgets::SelectList;
use gwt_git::{Branch, GitError, Worktree};
use std::path::PathBuf;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn on_worktrees_loaded(
        &mut self,
        generation: u64,
        result: Result<Vec<Worktree>, GitError>,
    ) -> Option<AsyncAction> {
        if generation != self.worktree_generation {
            debug!(generation, latest = self.worktree_generation, "dropping stale worktree listing");
            return None;
        }
        match result {
            Ok(worktrees) => {
                debug!(count = worktrees.len(), "worktrees loaded");
                // Row indices are about to change under any pending confirmation
                if matches!(self.mode, Mode::ConfirmingDelete { .. }) {
                    self.mode = Mode::Listing;
                }
                self.populate_worktrees(worktrees);
            }
            Err(e) => {
                warn!(error = %e, "worktree listing failed");
                self.set_error(format!("Error: {}", e));
            }
        }
        None
    }

    pub(super) fn on_branches_loaded(
        &mut self,
        generation: u64,
        result: Result<Vec<Branch>, GitError>,
    ) -> Option<AsyncAction> {
        if generation != self.branch_generation || !self.mode.shows_branches() {
            debug!(generation, "dropping branch listing");
            return None;
        }
        self.branches_loading = false;
        match result {
            Ok(branches) => {
                debug!(count = branches.len(), "branches loaded");
                self.populate_branches(branches);
            }
            Err(e) => {
                warn!(error = %e, "branch listing failed");
                self.set_error(format!("Error: {}", e));
            }
        }
        None
    }

    pub(super) fn on_worktree_created(
        &mut self,
        target: PathBuf,
        result: Result<(), GitError>,
    ) -> Option<AsyncAction> {
        let branch = match self.in_flight.take() {
            Some(InFlight::Creating { name }) => name,
            other => {
                warn!(target = %target.display(), "creation finished with none in flight");
                self.in_flight = other;
                String::new()
            }
        };
        match result {
            Ok(()) => {
                let name = target
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| target.display().to_string());
                info!(branch = %branch, target = %target.display(), "worktree created");
                self.mode = Mode::Listing;
                self.branches = SelectList::default();
                self.branches_loading = false;
                self.set_info(format!("Created worktree {}", name));
                Some(self.request_worktrees())
            }
            Err(e) => {
                warn!(branch = %branch, error = %e, "worktree creation failed");
                self.set_error(format!("Error: {}", e));
                None
            }
        }
    }

    pub(super) fn on_worktree_removed(
        &mut self,
        path: String,
        result: Result<(), GitError>,
    ) -> Option<AsyncAction> {
        let (index, snapshot) = match self.in_flight.take() {
            Some(InFlight::Removing {
                index,
                snapshot,
                path: pending,
            }) if pending == path => (index, snapshot),
            other => {
                warn!(path = %path, "removal finished with none in flight");
                self.in_flight = other;
                return None;
            }
        };
        let row_matches = self
            .worktrees
            .get(index)
            .and_then(|e| e.as_worktree())
            .is_some_and(|wt| wt.path == path);

        match result {
            Ok(()) => {
                info!(path = %path, "worktree removed");
                if row_matches {
                    self.worktrees.remove(index);
                }
                self.set_info(format!("Removed worktree {}", snapshot.title));
                Some(self.request_worktrees())
            }
            Err(e) => {
                warn!(path = %path, error = %e, "worktree removal failed");
                if row_matches {
                    if let Some(slot) = self.worktrees.get_mut(index) {
                        *slot = snapshot;
                    }
                }
                self.set_error(format!("Error: {}", e));
                None
            }
        }
    }

    pub(super) fn on_editor_failed(&mut self, reason: String) -> Option<AsyncAction> {
        warn!(reason = %reason, "editor unavailable");
        self.editor_active = false;
        self.set_error(format!("No editor: {}", reason));
        None
    }

    pub(super) fn on_editor_exited(&mut self, result: Result<(), String>) -> Option<AsyncAction> {
        match result {
            Ok(()) => info!("editor exited"),
            Err(status) => warn!(status = %status, "editor exited with failure"),
        }
        self.editor_active = false;
        self.should_quit = true;
        None
    }
}
