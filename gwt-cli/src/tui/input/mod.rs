//! Keyboard input handling
//!
//! Handlers mutate the `App` in place and return at most one action for the
//! runtime; `App::update` wraps them.

mod branch_picker;
mod listing;

use super::app::App;
use super::state::{AsyncAction, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) -> Option<AsyncAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_interrupt(&key) {
        app.should_quit = true;
        return None;
    }

    // A mutation or editor launch is outstanding
    if app.is_busy() {
        return None;
    }

    match app.mode {
        Mode::Listing | Mode::ConfirmingDelete { .. } => listing::handle_listing_key(app, key),
        Mode::PickingBranch => branch_picker::handle_picker_key(app, key),
        Mode::EditingNewBranchName { .. } => branch_picker::handle_editing_key(app, key),
    }
}

/// A character key chorded with ctrl, alt or another non-shift modifier.
/// Letter bindings ignore these.
pub(super) fn is_chorded_char(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
