//! Worktree list keys, including the inline delete confirmation

use super::is_chorded_char;
use crate::tui::app::App;
use crate::tui::state::{
    AsyncAction, EntryKind, InFlight, Mode, SyntheticAction, REMOVING_DESCRIPTION,
};
use crate::tui::widgets::VirtualList;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;

pub(super) fn handle_listing_key(app: &mut App, key: KeyEvent) -> Option<AsyncAction> {
    if is_chorded_char(&key) {
        return None;
    }
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }
        KeyCode::Esc => {
            app.cancel_confirmation();
            None
        }
        KeyCode::Char('r') => {
            app.cancel_confirmation();
            Some(app.request_worktrees())
        }
        KeyCode::Char('a') => {
            app.cancel_confirmation();
            Some(app.open_branch_picker())
        }
        KeyCode::Char('d') => {
            begin_delete(app);
            None
        }
        KeyCode::Enter => activate(app),
        _ => {
            app.worktrees.navigate(&key);
            None
        }
    }
}

/// Overlay the delete prompt on the selected worktree
fn begin_delete(app: &mut App) {
    let index = app.worktrees.cursor();
    if let Mode::ConfirmingDelete { index: pending, .. } = &app.mode {
        if *pending == index {
            return;
        }
    }
    app.cancel_confirmation();

    let snapshot = match app.worktrees.get(index) {
        Some(entry) if entry.as_worktree().is_some() => entry.clone(),
        _ => return,
    };
    if snapshot.as_worktree().is_some_and(|wt| wt.is_primary) {
        app.set_info("Cannot delete primary worktree");
        return;
    }

    if let Some(slot) = app.worktrees.get_mut(index) {
        *slot = snapshot.confirmation_overlay();
    }
    app.mode = Mode::ConfirmingDelete { index, snapshot };
}

fn activate(app: &mut App) -> Option<AsyncAction> {
    let cursor = app.worktrees.cursor();
    if matches!(app.mode, Mode::ConfirmingDelete { index, .. } if index == cursor) {
        return confirm_delete(app);
    }
    app.cancel_confirmation();

    let kind = app.worktrees.selected()?.kind.clone();
    match kind {
        EntryKind::Action(SyntheticAction::AddWorktree) => Some(app.open_branch_picker()),
        EntryKind::Worktree(wt) => {
            app.editor_active = true;
            Some(AsyncAction::OpenEditor {
                path: PathBuf::from(wt.path),
            })
        }
        _ => None,
    }
}

fn confirm_delete(app: &mut App) -> Option<AsyncAction> {
    let Mode::ConfirmingDelete { index, snapshot } = std::mem::take(&mut app.mode) else {
        return None;
    };
    let path = snapshot.as_worktree()?.path.clone();

    if let Some(slot) = app.worktrees.get_mut(index) {
        *slot = snapshot.clone();
        slot.description = REMOVING_DESCRIPTION.to_string();
    }
    app.set_info(format!("Removing worktree {}...", snapshot.title));
    app.in_flight = Some(InFlight::Removing {
        index,
        snapshot,
        path: path.clone(),
    });
    Some(AsyncAction::RemoveWorktree { path, force: true })
}
