//! End-to-end scenarios driven through `App::update`, with the runtime's part
//! (running actions, feeding back completions) played by the test.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gwt_cli::tui::state::{AppEvent, AsyncAction, EntryKind, Mode};
use gwt_cli::tui::widgets::VirtualList;
use gwt_cli::tui::{App, AppSettings};
use gwt_git::{default_worktree_dir_in, Branch, Worktree};
use std::path::{Path, PathBuf};

fn press(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn typed(app: App, text: &str) -> App {
    text.chars()
        .fold(app, |app, c| app.update(press(KeyCode::Char(c))).0)
}

fn worktree(path: &str, branch: &str, is_primary: bool) -> Worktree {
    Worktree {
        path: path.to_string(),
        branch: if branch.is_empty() {
            String::new()
        } else {
            format!("refs/heads/{}", branch)
        },
        head: "5f3c2a1".to_string(),
        is_primary,
    }
}

fn settings() -> AppSettings {
    AppSettings {
        cwd: PathBuf::from("/r"),
        ..AppSettings::default()
    }
}

fn start(worktrees: Vec<Worktree>) -> App {
    App::new(settings())
        .update(AppEvent::WorktreesLoaded {
            generation: 0,
            result: Ok(worktrees),
        })
        .0
}

/// Move the cursor onto the worktree at `path`
fn select_path(mut app: App, path: &str) -> App {
    let index = app
        .worktrees
        .items()
        .iter()
        .position(|e| e.as_worktree().is_some_and(|wt| wt.path == path))
        .unwrap();
    app.worktrees.select(index);
    app
}

fn paths(app: &App) -> Vec<String> {
    app.worktrees
        .items()
        .iter()
        .filter_map(|e| e.as_worktree().map(|wt| wt.path.clone()))
        .collect()
}

#[test]
fn delete_linked_worktree_then_refresh() {
    let app = start(vec![worktree("/r", "main", true), worktree("/r-b1", "b1", false)]);
    let app = select_path(app, "/r-b1");

    let (app, action) = app.update(press(KeyCode::Char('d')));
    assert!(action.is_none());
    assert!(matches!(app.mode, Mode::ConfirmingDelete { .. }));

    let (app, action) = app.update(press(KeyCode::Enter));
    assert_eq!(
        action,
        Some(AsyncAction::RemoveWorktree {
            path: "/r-b1".to_string(),
            force: true,
        })
    );

    let (app, action) = app.update(AppEvent::WorktreeRemoved {
        path: "/r-b1".to_string(),
        result: Ok(()),
    });
    let Some(AsyncAction::LoadWorktrees { generation }) = action else {
        panic!("expected a refresh, got {:?}", action);
    };

    let (app, _) = app.update(AppEvent::WorktreesLoaded {
        generation,
        result: Ok(vec![worktree("/r", "main", true)]),
    });
    assert_eq!(paths(&app), vec!["/r"]);
    assert_eq!(app.mode, Mode::Listing);
}

#[test]
fn primary_is_never_removed() {
    let app = select_path(start(vec![worktree("/r", "main", true)]), "/r");
    let (app, action) = app.update(press(KeyCode::Char('d')));
    assert!(action.is_none());
    let (app, action) = app.update(press(KeyCode::Enter));
    // Enter on the primary opens it, it does not delete it
    assert!(matches!(action, Some(AsyncAction::OpenEditor { .. })));
    assert!(app.editor_active);
}

#[test]
fn cancelled_confirmation_leaves_list_unchanged() {
    let app = start(vec![
        worktree("/r", "main", true),
        worktree("/r-b1", "b1", false),
        worktree("/r-b2", "b2", false),
    ]);
    let before = app.worktrees.items().to_vec();

    let app = select_path(app, "/r-b2");
    let (app, _) = app.update(press(KeyCode::Char('d')));
    let (app, _) = app.update(press(KeyCode::Up));
    let (app, _) = app.update(press(KeyCode::Char('d')));
    let (app, _) = app.update(press(KeyCode::Esc));

    assert_eq!(app.mode, Mode::Listing);
    assert_eq!(app.worktrees.items(), before.as_slice());
}

#[test]
fn new_branch_worktree_flow() {
    let app = start(vec![worktree("/r", "main", true)]);

    let (app, action) = app.update(press(KeyCode::Char('a')));
    let Some(AsyncAction::LoadBranches { generation }) = action else {
        panic!("expected a branch listing, got {:?}", action);
    };
    let (app, _) = app.update(AppEvent::BranchesLoaded {
        generation,
        result: Ok(vec![Branch {
            name: "main".to_string(),
            ..Branch::default()
        }]),
    });

    let (app, _) = app.update(press(KeyCode::Char('n')));
    let (app, action) = app.update(press(KeyCode::Enter));
    assert!(action.is_none(), "empty name must not create anything");
    assert!(matches!(app.mode, Mode::EditingNewBranchName { .. }));

    let app = typed(app, "feature-x");
    assert_eq!(app.branches.items()[0].title, "feature-x");

    let (app, action) = app.update(press(KeyCode::Enter));
    let target = default_worktree_dir_in(Path::new("/r"), "feature-x");
    assert_eq!(target, PathBuf::from("/r-feature-x"));
    assert_eq!(
        action,
        Some(AsyncAction::CreateWorktree {
            branch: "feature-x".to_string(),
            target: target.clone(),
            create_branch: true,
        })
    );

    let (app, action) = app.update(AppEvent::WorktreeCreated {
        target,
        result: Ok(()),
    });
    assert_eq!(app.mode, Mode::Listing);
    let Some(AsyncAction::LoadWorktrees { generation }) = action else {
        panic!("expected a refresh, got {:?}", action);
    };
    let (app, _) = app.update(AppEvent::WorktreesLoaded {
        generation,
        result: Ok(vec![
            worktree("/r", "main", true),
            worktree("/r-feature-x", "feature-x", false),
        ]),
    });
    assert_eq!(paths(&app), vec!["/r", "/r-feature-x"]);
    assert_eq!(
        app.notice.as_ref().map(|n| n.text.as_str()),
        Some("Created worktree r-feature-x")
    );
}

#[test]
fn remote_branch_becomes_tracking_worktree() {
    let app = start(vec![worktree("/r", "main", true)]);
    let (app, _) = app.update(press(KeyCode::Enter));
    assert_eq!(app.mode, Mode::PickingBranch);

    let (app, _) = app.update(AppEvent::BranchesLoaded {
        generation: 1,
        result: Ok(vec![Branch {
            name: "release".to_string(),
            is_remote: true,
            remote: "origin".to_string(),
            remote_ref: "origin/release".to_string(),
            ..Branch::default()
        }]),
    });
    let (app, _) = app.update(press(KeyCode::Down));
    assert!(matches!(
        app.branches.selected().map(|e| &e.kind),
        Some(EntryKind::Branch(b)) if b.is_remote
    ));

    let (_, action) = app.update(press(KeyCode::Enter));
    assert_eq!(
        action,
        Some(AsyncAction::CreateWorktreeFromRef {
            branch: "release".to_string(),
            target: PathBuf::from("/r-release"),
            from_ref: "origin/release".to_string(),
        })
    );
}

#[test]
fn picker_escape_then_late_results() {
    let app = start(vec![worktree("/r", "main", true)]);
    let (app, _) = app.update(press(KeyCode::Char('a')));
    let (app, _) = app.update(press(KeyCode::Esc));
    assert_eq!(app.mode, Mode::Listing);

    let (app, action) = app.update(AppEvent::BranchesLoaded {
        generation: 1,
        result: Ok(vec![Branch {
            name: "late".to_string(),
            ..Branch::default()
        }]),
    });
    assert!(action.is_none());
    assert_eq!(app.mode, Mode::Listing);
    assert!(app.branches.is_empty());
}

#[test]
fn editor_session_ends_program() {
    let app = select_path(
        start(vec![worktree("/r", "main", true), worktree("/r-b1", "b1", false)]),
        "/r-b1",
    );
    let (app, action) = app.update(press(KeyCode::Enter));
    assert_eq!(
        action,
        Some(AsyncAction::OpenEditor {
            path: PathBuf::from("/r-b1")
        })
    );

    // Keys typed while the editor launches are ignored
    let (app, action) = app.update(press(KeyCode::Char('d')));
    assert!(action.is_none());
    assert_eq!(app.mode, Mode::Listing);

    let (app, _) = app.update(AppEvent::EditorExited(Err("exit status: 1".to_string())));
    assert!(app.should_quit);
}

#[test]
fn navigation_wraps_around_worktree_list() {
    let app = start(vec![worktree("/r", "main", true), worktree("/r-b1", "b1", false)]);
    assert_eq!(app.worktrees.cursor(), 0);
    let (app, _) = app.update(press(KeyCode::Up));
    assert_eq!(app.worktrees.cursor(), 2);
    let (app, _) = app.update(press(KeyCode::Char('j')));
    assert_eq!(app.worktrees.cursor(), 0);
    let (app, _) = app.update(press(KeyCode::End));
    assert_eq!(app.worktrees.cursor(), 2);
}
