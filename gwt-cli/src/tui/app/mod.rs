//! TUI application state machine
//!
//! `App` is a plain value threaded through `App::update`: every event consumes
//! the current state and yields the next one plus at most one action for the
//! runtime to perform. No I/O happens here.
//!
//! - events.rs: completion events from git and the editor

mod events;

use super::input::handle_key;
use super::state::{
    AppEvent, AsyncAction, InFlight, ListEntry, Mode, Notice, CREATE_BRANCH_TITLE,
    REMOVING_DESCRIPTION,
};
use super::widgets::SelectList;
use gwt_config::UiConfig;
use gwt_git::{Branch, Worktree};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

/// Values fixed for the lifetime of an `App`
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub title: String,
    pub show_help: bool,
    pub status_timeout: Duration,
    /// Directory new worktrees are placed beside
    pub cwd: PathBuf,
}

impl AppSettings {
    pub fn from_config(ui: &UiConfig, cwd: PathBuf) -> Self {
        Self {
            title: ui.title.clone(),
            show_help: ui.show_help,
            status_timeout: Duration::from_millis(ui.status_timeout_ms),
            cwd,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_config(&UiConfig::default(), PathBuf::from("."))
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct App {
    pub mode: Mode,
    /// Synthetic "add" row followed by one row per worktree
    pub worktrees: SelectList<ListEntry>,
    /// Synthetic "create" row followed by one row per branch; empty outside the picker
    pub branches: SelectList<ListEntry>,
    pub branches_loading: bool,
    pub notice: Option<Notice>,
    pub in_flight: Option<InFlight>,
    pub should_quit: bool,
    /// An editor launch has been requested; input is ignored until it resolves
    pub editor_active: bool,
    pub settings: AppSettings,
    worktree_generation: u64,
    branch_generation: u64,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            mode: Mode::Listing,
            worktrees: SelectList::new(vec![ListEntry::add_worktree()]),
            branches: SelectList::default(),
            branches_loading: false,
            notice: None,
            in_flight: None,
            should_quit: false,
            editor_active: false,
            settings,
            worktree_generation: 0,
            branch_generation: 0,
        }
    }

    /// Apply one event, returning the next state and the work it requests.
    ///
    /// Generation 0 is the listing requested before the first update, so a
    /// `WorktreesLoaded { generation: 0, .. }` seeds a fresh `App`.
    pub fn update(mut self, event: AppEvent) -> (Self, Option<AsyncAction>) {
        let action = match event {
            AppEvent::Key(key) => handle_key(&mut self, key),
            AppEvent::WorktreesLoaded { generation, result } => {
                self.on_worktrees_loaded(generation, result)
            }
            AppEvent::BranchesLoaded { generation, result } => {
                self.on_branches_loaded(generation, result)
            }
            AppEvent::WorktreeCreated { target, result } => {
                self.on_worktree_created(target, result)
            }
            AppEvent::WorktreeRemoved { path, result } => self.on_worktree_removed(path, result),
            AppEvent::EditorFailed(reason) => self.on_editor_failed(reason),
            AppEvent::EditorExited(result) => self.on_editor_exited(result),
        };
        if let Some(action) = &action {
            debug!(?action, mode = ?self.mode, "dispatching");
        }
        (self, action)
    }

    /// The notice to show at `now`, if it has not expired
    pub fn visible_notice(&self, now: Instant) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|n| !n.is_expired(now, self.settings.status_timeout))
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some() || self.editor_active
    }

    pub(crate) fn set_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::info(text));
    }

    pub(crate) fn set_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::error(text));
    }

    /// Start a worktree listing that supersedes any outstanding one
    pub(crate) fn request_worktrees(&mut self) -> AsyncAction {
        self.worktree_generation += 1;
        AsyncAction::LoadWorktrees {
            generation: self.worktree_generation,
        }
    }

    /// Enter the branch picker with only the synthetic row, pending a listing
    pub(crate) fn open_branch_picker(&mut self) -> AsyncAction {
        self.mode = Mode::PickingBranch;
        self.branches = SelectList::new(vec![ListEntry::create_branch()]);
        self.branches_loading = true;
        self.branch_generation += 1;
        AsyncAction::LoadBranches {
            generation: self.branch_generation,
        }
    }

    pub(crate) fn close_branch_picker(&mut self) {
        self.mode = Mode::Listing;
        self.branches = SelectList::default();
        self.branches_loading = false;
    }

    /// Put the snapshot of a pending delete confirmation back and return to `Listing`.
    /// A no-op in any other mode.
    pub(crate) fn cancel_confirmation(&mut self) {
        if !matches!(self.mode, Mode::ConfirmingDelete { .. }) {
            return;
        }
        if let Mode::ConfirmingDelete { index, snapshot } = std::mem::take(&mut self.mode) {
            if let Some(slot) = self.worktrees.get_mut(index) {
                *slot = snapshot;
            }
        }
    }

    /// Mirror the new-branch buffer into the synthetic branch row
    pub(crate) fn mirror_branch_input(&mut self) {
        if let Mode::EditingNewBranchName { input } = &self.mode {
            if let Some(entry) = self.branches.get_mut(0) {
                entry.title = input.content().to_string();
            }
        }
    }

    pub(crate) fn restore_create_branch_label(&mut self) {
        if let Some(entry) = self.branches.get_mut(0) {
            entry.title = CREATE_BRANCH_TITLE.to_string();
        }
    }

    pub(crate) fn begin_create(&mut self, name: &str) {
        self.in_flight = Some(InFlight::Creating {
            name: name.to_string(),
        });
        self.set_info(format!("Creating worktree {}...", name));
    }

    fn populate_worktrees(&mut self, worktrees: Vec<Worktree>) {
        let items = std::iter::once(ListEntry::add_worktree())
            .chain(worktrees.into_iter().map(ListEntry::worktree))
            .collect();
        self.worktrees.set_items(items);

        // Keep a pending removal's row marked, wherever the fresh listing put it
        if let Some(InFlight::Removing { index, path, .. }) = &mut self.in_flight {
            let found = self
                .worktrees
                .items()
                .iter()
                .position(|e| e.as_worktree().is_some_and(|wt| wt.path == *path));
            if let Some(found) = found {
                *index = found;
                if let Some(entry) = self.worktrees.get_mut(found) {
                    entry.description = REMOVING_DESCRIPTION.to_string();
                }
            }
        }
    }

    fn populate_branches(&mut self, branches: Vec<Branch>) {
        let items = std::iter::once(ListEntry::create_branch())
            .chain(branches.into_iter().map(ListEntry::branch))
            .collect();
        self.branches.set_items(items);
        if matches!(self.mode, Mode::EditingNewBranchName { .. }) {
            self.branches.select(0);
            self.mirror_branch_input();
        }
    }
}
