//! Branch picker and new-branch name entry

use super::is_chorded_char;
use crate::tui::app::App;
use crate::tui::state::{AsyncAction, EntryKind, Mode, SyntheticAction};
use crate::tui::widgets::{handle_text_input, TextInput, TextInputResult, VirtualList};
use crossterm::event::{KeyCode, KeyEvent};
use gwt_git::default_worktree_dir_in;

pub(super) fn handle_picker_key(app: &mut App, key: KeyEvent) -> Option<AsyncAction> {
    if is_chorded_char(&key) {
        return None;
    }
    match key.code {
        KeyCode::Esc => {
            app.close_branch_picker();
            None
        }
        KeyCode::Char('n') => {
            start_editing(app);
            None
        }
        KeyCode::Enter => select_branch(app),
        _ => {
            app.branches.navigate(&key);
            None
        }
    }
}

pub(super) fn handle_editing_key(app: &mut App, key: KeyEvent) -> Option<AsyncAction> {
    let Mode::EditingNewBranchName { input } = &mut app.mode else {
        return None;
    };
    match handle_text_input(&key, input) {
        TextInputResult::Cancel => {
            app.mode = Mode::PickingBranch;
            app.restore_create_branch_label();
            None
        }
        TextInputResult::Submit => {
            let name = input.trim().to_string();
            if name.is_empty() {
                return None;
            }
            let target = default_worktree_dir_in(&app.settings.cwd, &name);
            app.begin_create(&name);
            Some(AsyncAction::CreateWorktree {
                branch: name,
                target,
                create_branch: true,
            })
        }
        TextInputResult::Handled => {
            app.mirror_branch_input();
            None
        }
        TextInputResult::Unhandled => None,
    }
}

fn start_editing(app: &mut App) {
    app.branches.select(0);
    app.mode = Mode::EditingNewBranchName {
        input: TextInput::new(),
    };
    app.mirror_branch_input();
}

fn select_branch(app: &mut App) -> Option<AsyncAction> {
    let kind = app.branches.selected()?.kind.clone();
    match kind {
        EntryKind::Action(SyntheticAction::CreateBranch) => {
            start_editing(app);
            None
        }
        EntryKind::Branch(branch) => {
            let target = default_worktree_dir_in(&app.settings.cwd, &branch.name);
            app.begin_create(&branch.name);
            if branch.is_remote {
                Some(AsyncAction::CreateWorktreeFromRef {
                    branch: branch.name,
                    target,
                    from_ref: branch.remote_ref,
                })
            } else {
                Some(AsyncAction::CreateWorktree {
                    branch: branch.name,
                    target,
                    create_branch: false,
                })
            }
        }
        _ => None,
    }
}
